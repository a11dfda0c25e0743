use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Root scope for divisions, weight classes, teams and entries.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub registration_opens_at: NaiveDate,
    pub registration_closes_at: NaiveDate,
    /// Snapshot of the division/weight-class configuration as published
    /// to the dashboard.
    #[schema(value_type = Object)]
    pub config: sqlx::types::Json<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}
