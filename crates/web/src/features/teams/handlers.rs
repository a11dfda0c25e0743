use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::team::{AddTeamMembersRequest, CreateTeamRequest, ListTeamsQuery, TeamResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::identity::Identity;

use super::services;

#[utoipa::path(
    get,
    path = "/api/teams",
    params(
        ("eventId" = Option<Uuid>, Query, description = "Filter by event"),
        ("clubId" = Option<Uuid>, Query, description = "Filter by club; implied for club-scoped callers")
    ),
    responses(
        (status = 200, description = "Teams visible to the caller"),
        (status = 403, description = "Club mismatch")
    ),
    tag = "teams"
)]
pub async fn list_teams(
    State(db): State<Database>,
    identity: Identity,
    Query(query): Query<ListTeamsQuery>,
) -> Result<Response, WebError> {
    let teams = services::list_teams(db.pool(), &identity, query.event_id, query.club_id).await?;

    Ok(Json(teams).into_response())
}

#[utoipa::path(
    post,
    path = "/api/teams",
    request_body = CreateTeamRequest,
    responses(
        (status = 201, description = "Team created", body = TeamResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Club mismatch")
    ),
    tag = "teams"
)]
pub async fn create_team(
    State(db): State<Database>,
    identity: Identity,
    Json(req): Json<CreateTeamRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let team = services::create_team(db.pool(), &identity, &req).await?;

    Ok((StatusCode::CREATED, Json(team)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/teams/members",
    request_body = AddTeamMembersRequest,
    responses(
        (status = 200, description = "Members added", body = TeamResponse),
        (status = 403, description = "Club mismatch"),
        (status = 404, description = "Team not found"),
        (status = 409, description = "Athlete already in the team")
    ),
    tag = "teams"
)]
pub async fn add_team_members(
    State(db): State<Database>,
    identity: Identity,
    Json(req): Json<AddTeamMembersRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let team = services::add_team_members(db.pool(), &identity, &req).await?;

    Ok(Json(team).into_response())
}
