use sqlx::PgPool;
use storage::{
    models::{Division, Event, WeightClass},
    repository::event::EventRepository,
};
use uuid::Uuid;

use crate::error::WebResult;
use crate::identity::Identity;

/// List all events (any authenticated caller)
pub async fn list_events(pool: &PgPool) -> WebResult<Vec<Event>> {
    let repo = EventRepository::new(pool);
    Ok(repo.list().await?)
}

/// List an event's divisions
pub async fn list_divisions(pool: &PgPool, event_id: Uuid) -> WebResult<Vec<Division>> {
    let repo = EventRepository::new(pool);
    repo.find_by_id(event_id).await?;
    Ok(repo.divisions(event_id).await?)
}

/// List an event's weight classes
pub async fn list_weight_classes(pool: &PgPool, event_id: Uuid) -> WebResult<Vec<WeightClass>> {
    let repo = EventRepository::new(pool);
    repo.find_by_id(event_id).await?;
    Ok(repo.weight_classes(event_id).await?)
}

/// Overwrite the event's config snapshot (admin only)
pub async fn update_event_config(
    pool: &PgPool,
    identity: &Identity,
    event_id: Uuid,
    config: serde_json::Value,
) -> WebResult<Event> {
    identity.require_admin()?;

    let repo = EventRepository::new(pool);
    Ok(repo.update_config(event_id, config).await?)
}
