use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::EntryStatus;

/// Admin batch decision over SUBMITTED entries of one event.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkReviewRequest {
    pub event_id: Uuid,
    #[validate(length(min = 1, message = "At least one entry id is required"))]
    pub entry_ids: Vec<Uuid>,
    /// APPROVED or RETURNED.
    pub status: EntryStatus,
    #[validate(length(max = 1000))]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkReviewResponse {
    /// Rows actually moved; entries not in SUBMITTED state are skipped.
    pub updated_count: u64,
}

/// Query parameters for the review queue.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewQueueQuery {
    pub event_id: Uuid,
}
