use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// Account role. Governs whether a doctor profile is expected for the
/// account; the store itself only enforces the one-to-one constraint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum Role {
    #[default]
    Patient,
    Doctor,
}

/// Account record in the database. Email is the login key; there is no
/// separate username.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // argon2 PHC string, not exposed in JSON
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub avatar: Option<String>, // storage key, not image bytes
    pub date_of_birth: Option<Date>,
    pub email_verified: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub role: Role,
    pub created_at: OffsetDateTime,
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.first_name, self.last_name, self.email)
    }
}

/// Input for account creation. `None` on a flag means "use the store's
/// default" — false for plain creation, true when created through
/// [`crate::accounts::create_privileged_account`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub role: Role,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub date_of_birth: Option<Date>,
    pub email_verified: Option<bool>,
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
}

impl NewAccount {
    /// Force staff and superuser on, unless the caller set them explicitly.
    pub(crate) fn privileged(mut self) -> Self {
        self.is_staff.get_or_insert(true);
        self.is_superuser.get_or_insert(true);
        self
    }
}
