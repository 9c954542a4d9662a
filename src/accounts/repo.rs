use sqlx::PgPool;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::accounts::email::{is_valid_email, normalize_email};
use crate::accounts::model::{Account, NewAccount};
use crate::accounts::password::hash_password;
use crate::error::StoreError;

const ACCOUNT_COLUMNS: &str = "id, email, password_hash, first_name, last_name, \
     phone, avatar, date_of_birth, email_verified, is_staff, is_superuser, \
     role, created_at";

impl Account {
    /// Find an account by its (normalized) email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<Account>, StoreError> {
        let account = sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(account)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<Account>, StoreError> {
        let account = sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(account)
    }

    /// Hard-delete an account. The doctor profile, if any, goes with it
    /// (ON DELETE CASCADE). Returns whether a row was removed.
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Create an account with a hashed credential and default state flags.
///
/// The email is normalized before anything else; uniqueness is checked here
/// and backstopped by the unique index, so a concurrent duplicate still
/// comes back as [`StoreError::DuplicateEmail`]. One durable write,
/// all-or-nothing.
#[instrument(skip(db, new))]
pub async fn create_account(db: &PgPool, new: NewAccount) -> Result<Account, StoreError> {
    let email = normalize_email(&new.email);
    if email.is_empty() {
        return Err(StoreError::MissingRequiredField("email"));
    }
    if !is_valid_email(&email) {
        warn!(email = %email, "invalid email");
        return Err(StoreError::InvalidEmail(email));
    }

    if Account::find_by_email(db, &email).await?.is_some() {
        warn!(email = %email, "email already registered");
        return Err(StoreError::DuplicateEmail(email));
    }

    let hash = hash_password(&new.password)?;

    let account = sqlx::query_as::<_, Account>(&format!(
        "INSERT INTO accounts \
             (email, password_hash, first_name, last_name, phone, avatar, \
              date_of_birth, email_verified, is_staff, is_superuser, role) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
         RETURNING {ACCOUNT_COLUMNS}"
    ))
    .bind(&email)
    .bind(&hash)
    .bind(&new.first_name)
    .bind(&new.last_name)
    .bind(&new.phone)
    .bind(&new.avatar)
    .bind(new.date_of_birth)
    .bind(new.email_verified.unwrap_or(false))
    .bind(new.is_staff.unwrap_or(false))
    .bind(new.is_superuser.unwrap_or(false))
    .bind(new.role)
    .fetch_one(db)
    .await
    .map_err(|e| StoreError::from_account_insert(e, &email))?;

    info!(account_id = %account.id, email = %account.email, role = ?account.role, "account created");
    Ok(account)
}

/// Administrative bootstrap: same as [`create_account`] but staff and
/// superuser default to true instead of false.
#[instrument(skip(db, new))]
pub async fn create_privileged_account(
    db: &PgPool,
    new: NewAccount,
) -> Result<Account, StoreError> {
    create_account(db, new.privileged()).await
}
