use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::entry::{
        CreateEntryRequest, EntryResponse, ListEntriesQuery, UpdateEntryStatusRequest,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::identity::Identity;

use super::services;

#[utoipa::path(
    get,
    path = "/api/entries",
    params(
        ("eventId" = Option<Uuid>, Query, description = "Filter by event"),
        ("clubId" = Option<Uuid>, Query, description = "Filter by club; implied for club-scoped callers")
    ),
    responses(
        (status = 200, description = "Entries visible to the caller", body = Vec<EntryResponse>),
        (status = 403, description = "Club mismatch")
    ),
    tag = "entries"
)]
pub async fn list_entries(
    State(db): State<Database>,
    identity: Identity,
    Query(query): Query<ListEntriesQuery>,
) -> Result<Response, WebError> {
    let entries =
        services::list_entries(db.pool(), &identity, query.event_id, query.club_id).await?;

    let response: Vec<EntryResponse> = entries.into_iter().map(EntryResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/entries",
    request_body = CreateEntryRequest,
    responses(
        (status = 201, description = "Entry created", body = EntryResponse),
        (status = 400, description = "Shape or eligibility violation"),
        (status = 403, description = "Club mismatch"),
        (status = 404, description = "Event, athlete or team not found"),
        (status = 409, description = "Duplicate entry for this division")
    ),
    tag = "entries"
)]
pub async fn create_entry(
    State(db): State<Database>,
    identity: Identity,
    Json(req): Json<CreateEntryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let entry = services::create_entry(db.pool(), &identity, &req).await?;

    Ok((StatusCode::CREATED, Json(EntryResponse::from(entry))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/entries/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Entry ID")
    ),
    request_body = UpdateEntryStatusRequest,
    responses(
        (status = 200, description = "Entry status updated", body = EntryResponse),
        (status = 403, description = "Transition not allowed for this role"),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn update_entry_status(
    State(db): State<Database>,
    identity: Identity,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEntryStatusRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let entry = services::update_entry_status(db.pool(), &identity, id, &req).await?;

    Ok(Json(EntryResponse::from(entry)).into_response())
}
