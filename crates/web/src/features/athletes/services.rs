use sqlx::PgPool;
use storage::{
    dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest},
    models::Athlete,
    repository::athlete::AthleteRepository,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::identity::Identity;

/// List the athletes of one club. Club-scoped callers are pinned to their
/// own club; admins must say which club they want.
pub async fn list_athletes(
    pool: &PgPool,
    identity: &Identity,
    club_id: Option<Uuid>,
) -> WebResult<Vec<Athlete>> {
    let club_id = identity
        .resolve_club(club_id)?
        .ok_or_else(|| WebError::BadRequest("clubId query parameter is required".to_string()))?;

    let repo = AthleteRepository::new(pool);
    Ok(repo.list_by_club(club_id).await?)
}

/// List every athlete across clubs (superadmin only)
pub async fn list_all_athletes(pool: &PgPool, identity: &Identity) -> WebResult<Vec<Athlete>> {
    identity.require_superadmin()?;

    let repo = AthleteRepository::new(pool);
    Ok(repo.list_all().await?)
}

/// Register a new athlete under the caller's club
pub async fn create_athlete(
    pool: &PgPool,
    identity: &Identity,
    request: &CreateAthleteRequest,
) -> WebResult<Athlete> {
    identity.authorize_club(request.club_id)?;

    let repo = AthleteRepository::new(pool);
    Ok(repo.create(request).await?)
}

/// Update an athlete owned by the caller's club
pub async fn update_athlete(
    pool: &PgPool,
    identity: &Identity,
    id: Uuid,
    request: &UpdateAthleteRequest,
) -> WebResult<Athlete> {
    let repo = AthleteRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    identity.authorize_club(existing.club_id)?;

    Ok(repo.update(id, &existing, request).await?)
}

/// Delete an athlete together with its entries and team memberships
pub async fn delete_athlete(pool: &PgPool, identity: &Identity, id: Uuid) -> WebResult<()> {
    let repo = AthleteRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    identity.authorize_club(existing.club_id)?;

    Ok(repo.delete_with_dependents(id).await?)
}
