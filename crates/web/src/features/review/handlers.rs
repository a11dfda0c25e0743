use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::entry::EntryResponse,
    dto::review::{BulkReviewRequest, BulkReviewResponse, ReviewQueueQuery},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::identity::Identity;

use super::services;

#[utoipa::path(
    get,
    path = "/api/review",
    params(
        ("eventId" = Uuid, Query, description = "Event to review")
    ),
    responses(
        (status = 200, description = "SUBMITTED entries of the event", body = Vec<EntryResponse>),
        (status = 403, description = "Admin only")
    ),
    tag = "review"
)]
pub async fn review_queue(
    State(db): State<Database>,
    identity: Identity,
    Query(query): Query<ReviewQueueQuery>,
) -> Result<Response, WebError> {
    let entries = services::review_queue(db.pool(), &identity, query.event_id).await?;

    let response: Vec<EntryResponse> = entries.into_iter().map(EntryResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/review/bulk",
    request_body = BulkReviewRequest,
    responses(
        (status = 200, description = "Batch decision applied", body = BulkReviewResponse),
        (status = 400, description = "Status is not a review outcome"),
        (status = 403, description = "Admin only")
    ),
    tag = "review"
)]
pub async fn bulk_review(
    State(db): State<Database>,
    identity: Identity,
    Json(req): Json<BulkReviewRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let updated_count = services::bulk_review(db.pool(), &identity, &req).await?;

    Ok(Json(BulkReviewResponse { updated_count }).into_response())
}
