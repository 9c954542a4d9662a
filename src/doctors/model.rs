use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Doctor profile row: role-specific extension data, exactly one per
/// account. Deleting the account deletes the profile; deleting the
/// referenced specialty only clears `specialty_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DoctorProfile {
    pub id: Uuid,
    pub account_id: Uuid,
    pub description: String,
    pub education: String,
    pub experience: Option<i32>, // years
    pub specialty_id: Option<Uuid>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewDoctorProfile {
    pub account_id: Uuid,
    pub description: String,
    pub education: String,
    pub experience: Option<i32>,
    pub specialty_id: Option<Uuid>,
}
