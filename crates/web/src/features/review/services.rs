use sqlx::PgPool;
use storage::{
    dto::review::BulkReviewRequest,
    models::Entry,
    repository::entry::EntryRepository,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::identity::Identity;

/// Entries awaiting review for one event (admin only)
pub async fn review_queue(
    pool: &PgPool,
    identity: &Identity,
    event_id: Uuid,
) -> WebResult<Vec<Entry>> {
    identity.require_admin()?;

    let repo = EntryRepository::new(pool);
    Ok(repo.list_submitted(event_id).await?)
}

/// Bulk approve/return over SUBMITTED entries of one event. Rows in any
/// other state are skipped, not errored; the count of rows actually moved
/// is returned and one audit row covers the batch.
pub async fn bulk_review(
    pool: &PgPool,
    identity: &Identity,
    req: &BulkReviewRequest,
) -> WebResult<u64> {
    identity.require_admin()?;

    if !req.status.is_review_outcome() {
        return Err(WebError::BadRequest(
            "Bulk review status must be APPROVED or RETURNED".to_string(),
        ));
    }

    let repo = EntryRepository::new(pool);
    Ok(repo
        .bulk_update_status(
            req.event_id,
            &req.entry_ids,
            req.status,
            identity.user_id,
            req.reason.as_deref(),
        )
        .await?)
}
