use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::Result;

/// One append-only audit row, written inside the caller's transaction so
/// the audited change and its trail commit or roll back together.
pub struct AuditRecord<'a> {
    pub user_id: Option<Uuid>,
    pub entity_type: &'a str,
    pub entity_id: Uuid,
    pub action: String,
    pub diff: serde_json::Value,
}

pub async fn record(conn: &mut PgConnection, rec: AuditRecord<'_>) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO audit_log (user_id, entity_type, entity_id, action, diff)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(rec.user_id)
    .bind(rec.entity_type)
    .bind(rec.entity_id)
    .bind(&rec.action)
    .bind(sqlx::types::Json(rec.diff))
    .execute(conn)
    .await?;

    Ok(())
}
