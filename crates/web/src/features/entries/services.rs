use sqlx::PgPool;
use storage::{
    dto::entry::{CreateEntryRequest, UpdateEntryStatusRequest},
    models::{Entry, EntryStatus},
    repository::{
        athlete::AthleteRepository,
        entry::{EntryRepository, NewEntry},
        event::EventRepository,
        team::TeamRepository,
    },
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::identity::Identity;

/// List entries visible to the caller
pub async fn list_entries(
    pool: &PgPool,
    identity: &Identity,
    event_id: Option<Uuid>,
    club_id: Option<Uuid>,
) -> WebResult<Vec<Entry>> {
    let club_id = identity.resolve_club(club_id)?;

    let repo = EntryRepository::new(pool);
    Ok(repo.list(event_id, club_id).await?)
}

/// Create an entry after the full eligibility chain: request shape, club
/// ownership of the referenced athlete/team, weight-class match for kumite,
/// and the duplicate pre-check. The unique index on entries backs the
/// pre-check up under concurrent submissions.
pub async fn create_entry(
    pool: &PgPool,
    identity: &Identity,
    req: &CreateEntryRequest,
) -> WebResult<Entry> {
    identity.authorize_club(req.club_id)?;
    req.validate_shape()
        .map_err(|msg| WebError::BadRequest(msg.to_string()))?;

    let events = EventRepository::new(pool);
    events.find_by_id(req.event_id).await?;

    if let Some(athlete_id) = req.athlete_id {
        let athlete = AthleteRepository::new(pool).find_by_id(athlete_id).await?;
        if athlete.club_id != req.club_id {
            return Err(WebError::BadRequest(
                "Athlete does not belong to the entry's club".to_string(),
            ));
        }

        if let Some(weight_class_id) = req.weight_class_id {
            events
                .validate_weight_class(
                    weight_class_id,
                    req.event_id,
                    req.division_id,
                    athlete.gender,
                )
                .await?;
        }
    }

    if let Some(team_id) = req.team_id {
        let team = TeamRepository::new(pool).find_by_id(team_id).await?;
        if team.club_id != req.club_id {
            return Err(WebError::BadRequest(
                "Team does not belong to the entry's club".to_string(),
            ));
        }
    }

    let repo = EntryRepository::new(pool);
    repo.assert_no_duplicate(
        req.event_id,
        req.entry_type,
        req.division_id,
        req.athlete_id,
        req.team_id,
    )
    .await?;

    let entry = repo
        .create(&NewEntry {
            event_id: req.event_id,
            club_id: req.club_id,
            entry_type: req.entry_type,
            division_id: req.division_id,
            athlete_id: req.athlete_id,
            team_id: req.team_id,
            weight_class_id: req.weight_class_id,
            status: req.status.unwrap_or(EntryStatus::Draft),
            fee_cents: req.fee_cents.unwrap_or(0),
        })
        .await?;

    Ok(entry)
}

/// Single-entry status transition. Club-scoped callers may only move their
/// own club's entries to SUBMITTED; admins may set any status. The change
/// and its audit row commit together.
pub async fn update_entry_status(
    pool: &PgPool,
    identity: &Identity,
    entry_id: Uuid,
    req: &UpdateEntryStatusRequest,
) -> WebResult<Entry> {
    let repo = EntryRepository::new(pool);
    let entry = repo.find_by_id(entry_id).await?;

    if !identity.is_admin() {
        identity.authorize_club(entry.club_id)?;
        if !req.status.settable_by_club() {
            return Err(WebError::Forbidden(
                "Club accounts may only submit entries".to_string(),
            ));
        }
    }

    Ok(repo
        .update_status(entry_id, req.status, identity.user_id, req.reason.as_deref())
        .await?)
}
