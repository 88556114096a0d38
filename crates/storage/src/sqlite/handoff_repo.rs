use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::repository::{HANDOFF_SLOT, HandoffRepository, StorageError};

use super::SqliteRepository;

#[async_trait]
impl HandoffRepository for SqliteRepository {
    async fn put_pending(&self, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO handoff_slots (name, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(name) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(HANDOFF_SLOT)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    async fn take_pending(&self) -> Result<Option<String>, StorageError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let row = sqlx::query("SELECT value FROM handoff_slots WHERE name = ?1")
            .bind(HANDOFF_SLOT)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let value: String = row
            .try_get("value")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        sqlx::query("DELETE FROM handoff_slots WHERE name = ?1")
            .bind(HANDOFF_SLOT)
            .execute(&mut *tx)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        tx.commit()
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(Some(value))
    }
}
