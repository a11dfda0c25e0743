use sqlx::PgPool;
use storage::{
    dto::team::{AddTeamMembersRequest, CreateTeamRequest, TeamResponse},
    models::Team,
    repository::team::TeamRepository,
};
use uuid::Uuid;

use crate::error::WebResult;
use crate::identity::Identity;

/// List teams visible to the caller
pub async fn list_teams(
    pool: &PgPool,
    identity: &Identity,
    event_id: Option<Uuid>,
    club_id: Option<Uuid>,
) -> WebResult<Vec<Team>> {
    let club_id = identity.resolve_club(club_id)?;

    let repo = TeamRepository::new(pool);
    Ok(repo.list(event_id, club_id).await?)
}

/// Create a team for the caller's club
pub async fn create_team(
    pool: &PgPool,
    identity: &Identity,
    req: &CreateTeamRequest,
) -> WebResult<TeamResponse> {
    identity.authorize_club(req.club_id)?;

    let repo = TeamRepository::new(pool);
    let team = repo.create(req).await?;

    Ok(TeamResponse::from_parts(team, Vec::new()))
}

/// Add members to a team; duplicates within the same team are rejected by
/// the (team, athlete) key. Returns the team with its refreshed member list.
pub async fn add_team_members(
    pool: &PgPool,
    identity: &Identity,
    req: &AddTeamMembersRequest,
) -> WebResult<TeamResponse> {
    let repo = TeamRepository::new(pool);

    let team = repo.find_by_id(req.team_id).await?;
    identity.authorize_club(team.club_id)?;

    let members = repo.add_members(req.team_id, &req.members).await?;

    Ok(TeamResponse::from_parts(team, members))
}
