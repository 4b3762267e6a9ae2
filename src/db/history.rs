use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::{HistoryRecord, NewHistoryRecord};

const SELECT_COLUMNS: &str = "SELECT id, user_id, cipher_type, plaintext, encrypted_text, \
     operation, key_a, key_b, created_at FROM encryption_history";

/// Gateway over the `encryption_history` table
///
/// Every method is a single statement; there are no explicit transactions.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    pool: SqlitePool,
}

impl HistoryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Append a record and return its database-assigned id
    pub async fn insert(&self, record: &NewHistoryRecord) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO encryption_history
                (user_id, cipher_type, plaintext, encrypted_text, operation, key_a, key_b)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(record.user_id)
        .bind(&record.cipher_type)
        .bind(&record.plaintext)
        .bind(&record.encrypted_text)
        .bind(record.operation.as_str())
        .bind(record.key_a)
        .bind(record.key_b)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        tracing::info!(
            "Stored {} {} record {} for user {}",
            record.cipher_type,
            record.operation,
            id,
            record.user_id
        );

        Ok(id)
    }

    /// Every record of every user, newest first
    pub async fn list_all(&self) -> Result<Vec<HistoryRecord>> {
        let sql = format!("{} ORDER BY created_at DESC, id DESC", SELECT_COLUMNS);
        let rows = sqlx::query_as::<_, HistoryRecord>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Records owned by `user_id`, newest first
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<HistoryRecord>> {
        let sql = format!(
            "{} WHERE user_id = ? ORDER BY created_at DESC, id DESC",
            SELECT_COLUMNS
        );
        let rows = sqlx::query_as::<_, HistoryRecord>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Remove one record; returns the number of rows removed (0 or 1)
    pub async fn delete_one(&self, id: i64) -> Result<u64> {
        let removed = sqlx::query("DELETE FROM encryption_history WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if removed > 0 {
            tracing::info!("Deleted history record {}", id);
        }

        Ok(removed)
    }

    /// Remove every record owned by `user_id`; returns the number of rows removed
    pub async fn delete_by_user(&self, user_id: i64) -> Result<u64> {
        let removed = sqlx::query("DELETE FROM encryption_history WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!("Deleted {} history records for user {}", removed, user_id);

        Ok(removed)
    }

    /// Total number of stored records
    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM encryption_history")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Cheap connectivity probe
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
