use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{EntryStatus, EntryType};

/// A draft or submitted registration of an athlete or team into a division.
/// Exactly one of athlete_id/team_id is set, depending on entry_type;
/// weight_class_id only for individual kumite.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub entry_id: Uuid,
    pub event_id: Uuid,
    pub club_id: Uuid,
    pub entry_type: EntryType,
    pub division_id: Uuid,
    pub athlete_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub weight_class_id: Option<Uuid>,
    pub status: EntryStatus,
    pub fee_cents: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
