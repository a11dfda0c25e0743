use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::event::UpdateEventConfigRequest,
    models::{Division, Event, WeightClass},
};
use uuid::Uuid;

use crate::error::WebError;
use crate::identity::Identity;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "All events", body = Vec<Event>)
    ),
    tag = "events"
)]
pub async fn list_events(
    State(db): State<Database>,
    _identity: Identity,
) -> Result<Response, WebError> {
    let events = services::list_events(db.pool()).await?;

    Ok(Json(events).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/divisions",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Divisions of the event", body = Vec<Division>),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn list_divisions(
    State(db): State<Database>,
    _identity: Identity,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let divisions = services::list_divisions(db.pool(), id).await?;

    Ok(Json(divisions).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/weights",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Weight classes of the event", body = Vec<WeightClass>),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn list_weight_classes(
    State(db): State<Database>,
    _identity: Identity,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let classes = services::list_weight_classes(db.pool(), id).await?;

    Ok(Json(classes).into_response())
}

#[utoipa::path(
    put,
    path = "/api/events/{id}/config",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    request_body = UpdateEventConfigRequest,
    responses(
        (status = 200, description = "Config overwritten", body = Event),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn update_event_config(
    State(db): State<Database>,
    identity: Identity,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEventConfigRequest>,
) -> Result<Response, WebError> {
    let event = services::update_event_config(db.pool(), &identity, id, req.config).await?;

    Ok(Json(event).into_response())
}
