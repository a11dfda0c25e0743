use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::athlete::{
        AthleteResponse, CreateAthleteRequest, ListAthletesQuery, UpdateAthleteRequest,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::identity::Identity;

use super::services;

#[utoipa::path(
    get,
    path = "/api/athletes",
    params(
        ("clubId" = Option<Uuid>, Query, description = "Club to list; implied for club-scoped callers")
    ),
    responses(
        (status = 200, description = "Athletes of the requested club", body = Vec<AthleteResponse>),
        (status = 403, description = "Club mismatch")
    ),
    tag = "athletes"
)]
pub async fn list_athletes(
    State(db): State<Database>,
    identity: Identity,
    Query(query): Query<ListAthletesQuery>,
) -> Result<Response, WebError> {
    let athletes = services::list_athletes(db.pool(), &identity, query.club_id).await?;

    let response: Vec<AthleteResponse> = athletes.into_iter().map(AthleteResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/all",
    responses(
        (status = 200, description = "All athletes", body = Vec<AthleteResponse>),
        (status = 403, description = "Superadmin only")
    ),
    tag = "athletes"
)]
pub async fn list_all_athletes(
    State(db): State<Database>,
    identity: Identity,
) -> Result<Response, WebError> {
    let athletes = services::list_all_athletes(db.pool(), &identity).await?;

    let response: Vec<AthleteResponse> = athletes.into_iter().map(AthleteResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/athletes",
    request_body = CreateAthleteRequest,
    responses(
        (status = 201, description = "Athlete created", body = AthleteResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Club mismatch")
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(db): State<Database>,
    identity: Identity,
    Json(req): Json<CreateAthleteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let athlete = services::create_athlete(db.pool(), &identity, &req).await?;

    Ok((StatusCode::CREATED, Json(AthleteResponse::from(athlete))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete ID")
    ),
    request_body = UpdateAthleteRequest,
    responses(
        (status = 200, description = "Athlete updated", body = AthleteResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Club mismatch"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn update_athlete(
    State(db): State<Database>,
    identity: Identity,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAthleteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let updated = services::update_athlete(db.pool(), &identity, id, &req).await?;

    Ok(Json(AthleteResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete ID")
    ),
    responses(
        (status = 204, description = "Athlete and dependent rows deleted"),
        (status = 403, description = "Club mismatch"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn delete_athlete(
    State(db): State<Database>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_athlete(db.pool(), &identity, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
