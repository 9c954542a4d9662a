use thiserror::Error;
use uuid::Uuid;

/// Rejections surfaced by the account and doctor-profile stores.
///
/// Every variant is returned synchronously from the operation that caused it;
/// nothing is retried and no partial write stays visible.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("invalid email: {0}")]
    InvalidEmail(String),

    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    #[error("doctor profile already exists for account {0}")]
    DuplicateProfile(Uuid),

    #[error("{entity} {id} does not exist")]
    DanglingReference { entity: &'static str, id: Uuid },

    #[error("password hashing failed: {0}")]
    Credential(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

const UNIQUE_EMAIL: &str = "accounts_email_key";
const UNIQUE_PROFILE: &str = "doctor_profiles_account_id_key";
const FK_PROFILE_ACCOUNT: &str = "doctor_profiles_account_id_fkey";
const FK_PROFILE_SPECIALTY: &str = "doctor_profiles_specialty_id_fkey";

impl StoreError {
    /// Map a failed insert onto a domain rejection by constraint name.
    ///
    /// The unique and foreign-key constraints are what keep the stores
    /// correct under concurrent requests, so violations coming back from
    /// Postgres are expected outcomes, not internal errors. `email` and
    /// `account_id` identify the row the caller attempted to write.
    pub(crate) fn from_account_insert(err: sqlx::Error, email: &str) -> Self {
        match constraint(&err) {
            Some(UNIQUE_EMAIL) => StoreError::DuplicateEmail(email.to_string()),
            _ => StoreError::Database(err),
        }
    }

    pub(crate) fn from_profile_insert(
        err: sqlx::Error,
        account_id: Uuid,
        specialty_id: Option<Uuid>,
    ) -> Self {
        match constraint(&err) {
            Some(UNIQUE_PROFILE) => StoreError::DuplicateProfile(account_id),
            Some(FK_PROFILE_ACCOUNT) => StoreError::DanglingReference {
                entity: "account",
                id: account_id,
            },
            Some(FK_PROFILE_SPECIALTY) => StoreError::DanglingReference {
                entity: "specialty",
                id: specialty_id.unwrap_or_default(),
            },
            _ => StoreError::Database(err),
        }
    }
}

fn constraint(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db) => db.constraint(),
        _ => None,
    }
}
