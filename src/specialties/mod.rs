//! Specialty reference table. Doctor profiles point at these rows weakly;
//! the rows themselves belong to another part of the application, so the
//! surface here is the minimum the profile store needs.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::StoreError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Specialty {
    pub id: Uuid,
    pub name: String,
}

impl Specialty {
    pub async fn create(db: &PgPool, name: &str) -> Result<Specialty, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::MissingRequiredField("name"));
        }
        let specialty = sqlx::query_as::<_, Specialty>(
            "INSERT INTO specialties (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name.trim())
        .fetch_one(db)
        .await?;
        Ok(specialty)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<Specialty>, StoreError> {
        let specialty =
            sqlx::query_as::<_, Specialty>("SELECT id, name FROM specialties WHERE id = $1")
                .bind(id)
                .fetch_optional(db)
                .await?;
        Ok(specialty)
    }

    /// Remove a specialty. Profiles pointing at it keep their row and lose
    /// only the reference (ON DELETE SET NULL).
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM specialties WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
