use roster_core::{AuditEntry, AuditLog, AuditLogError};
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresAuditLog {
    pool: PgPool,
}

impl PostgresAuditLog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl AuditLog for PostgresAuditLog {
    #[tracing::instrument(
        name = "Recording audit entry in PostgreSQL",
        skip_all,
        fields(action = %entry.action, account_id = %entry.account_id)
    )]
    async fn record(&self, entry: AuditEntry) -> Result<(), AuditLogError> {
        sqlx::query(
            r#"
                INSERT INTO audit_logs (action, remarks, user_id)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(entry.action.as_str())
        .bind(&entry.remarks)
        .bind(entry.account_id.get())
        .execute(&self.pool)
        .await
        .map_err(|e| AuditLogError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
