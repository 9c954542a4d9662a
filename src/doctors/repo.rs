use sqlx::PgPool;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::accounts::Account;
use crate::doctors::model::{DoctorProfile, NewDoctorProfile};
use crate::error::StoreError;

const PROFILE_COLUMNS: &str =
    "id, account_id, description, education, experience, specialty_id, created_at";

impl DoctorProfile {
    pub async fn find_by_account(
        db: &PgPool,
        account_id: Uuid,
    ) -> Result<Option<DoctorProfile>, StoreError> {
        let profile = sqlx::query_as::<_, DoctorProfile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM doctor_profiles WHERE account_id = $1"
        ))
        .bind(account_id)
        .fetch_optional(db)
        .await?;
        Ok(profile)
    }
}

/// Attach a doctor profile to an existing account.
///
/// Referential integrity is what this operation is about: the account must
/// exist, at most one profile may exist per account, and a given specialty
/// must resolve. All three are enforced by constraints, so the checks hold
/// under concurrent requests; the account pre-check only improves the
/// error for the common case. Whether the account's role makes a profile
/// sensible is the caller's business rule, not enforced here.
#[instrument(skip(db, new), fields(account_id = %new.account_id))]
pub async fn attach_doctor_profile(
    db: &PgPool,
    new: NewDoctorProfile,
) -> Result<DoctorProfile, StoreError> {
    if Account::find_by_id(db, new.account_id).await?.is_none() {
        warn!(account_id = %new.account_id, "profile attach to unknown account");
        return Err(StoreError::DanglingReference {
            entity: "account",
            id: new.account_id,
        });
    }

    let profile = sqlx::query_as::<_, DoctorProfile>(&format!(
        "INSERT INTO doctor_profiles \
             (account_id, description, education, experience, specialty_id) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING {PROFILE_COLUMNS}"
    ))
    .bind(new.account_id)
    .bind(&new.description)
    .bind(&new.education)
    .bind(new.experience)
    .bind(new.specialty_id)
    .fetch_one(db)
    .await
    .map_err(|e| StoreError::from_profile_insert(e, new.account_id, new.specialty_id))?;

    info!(profile_id = %profile.id, account_id = %profile.account_id, "doctor profile attached");
    Ok(profile)
}
