use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::Gender;

/// An athlete belongs to exactly one club for its lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Athlete {
    pub athlete_id: Uuid,
    pub club_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub gender: Gender,
    pub weight_kg: Option<Decimal>,
    pub belt_rank: Option<String>,
    pub emergency_contact: Option<String>,
    pub created_at: DateTime<Utc>,
}
