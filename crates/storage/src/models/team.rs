use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::TeamType;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub team_id: Uuid,
    pub event_id: Uuid,
    pub club_id: Uuid,
    pub division_id: Uuid,
    pub team_type: TeamType,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Unique per (team, athlete); reserves sit out unless called up.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub team_id: Uuid,
    pub athlete_id: Uuid,
    pub is_reserve: bool,
}
