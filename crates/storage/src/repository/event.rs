use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Division, Event, Gender, WeightClass};
use crate::services::eligibility;

pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all events, most recent first
    pub async fn list(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, name, start_date, registration_opens_at,
                   registration_closes_at, config, created_at
            FROM events
            ORDER BY start_date DESC, created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// Get an event by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, name, start_date, registration_opens_at,
                   registration_closes_at, config, created_at
            FROM events
            WHERE event_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// List the divisions configured for an event
    pub async fn divisions(&self, event_id: Uuid) -> Result<Vec<Division>> {
        let divisions = sqlx::query_as::<_, Division>(
            r#"
            SELECT division_id, event_id, key, name, min_age, max_age, gender
            FROM divisions
            WHERE event_id = $1
            ORDER BY gender, min_age
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(divisions)
    }

    /// List the weight classes configured for an event
    pub async fn weight_classes(&self, event_id: Uuid) -> Result<Vec<WeightClass>> {
        let classes = sqlx::query_as::<_, WeightClass>(
            r#"
            SELECT weight_class_id, event_id, division_id, gender, name, min_kg, max_kg
            FROM weight_classes
            WHERE event_id = $1
            ORDER BY division_id, min_kg NULLS FIRST
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(classes)
    }

    /// Overwrite the event's config snapshot
    pub async fn update_config(&self, id: Uuid, config: serde_json::Value) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET config = $2
            WHERE event_id = $1
            RETURNING event_id, name, start_date, registration_opens_at,
                      registration_closes_at, config, created_at
            "#,
        )
        .bind(id)
        .bind(sqlx::types::Json(config))
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// Resolve the division an athlete falls into for this event, by age on
    /// the event start date. NotFound when the event itself is absent; Ok(None)
    /// when no division's age band matches. No OPEN-gender fallback here.
    pub async fn find_division_for_athlete(
        &self,
        event_id: Uuid,
        gender: Gender,
        dob: NaiveDate,
    ) -> Result<Option<Division>> {
        let event = self.find_by_id(event_id).await?;
        let divisions = self.divisions(event_id).await?;

        let age = eligibility::age_on(event.start_date, dob);
        Ok(eligibility::match_division(&divisions, gender, age).cloned())
    }

    /// A KUMITE entry's weight class must belong to the same event, division
    /// and gender as the athlete; anything else is rejected as bad input.
    pub async fn validate_weight_class(
        &self,
        weight_class_id: Uuid,
        event_id: Uuid,
        division_id: Uuid,
        gender: Gender,
    ) -> Result<WeightClass> {
        let class = sqlx::query_as::<_, WeightClass>(
            r#"
            SELECT weight_class_id, event_id, division_id, gender, name, min_kg, max_kg
            FROM weight_classes
            WHERE weight_class_id = $1
            "#,
        )
        .bind(weight_class_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StorageError::InvalidInput("Unknown weight class".to_string()))?;

        if class.event_id != event_id {
            return Err(StorageError::InvalidInput(
                "Weight class belongs to a different event".to_string(),
            ));
        }
        if class.division_id != division_id {
            return Err(StorageError::InvalidInput(
                "Weight class belongs to a different division".to_string(),
            ));
        }
        if class.gender != gender {
            return Err(StorageError::InvalidInput(
                "Weight class gender does not match the athlete".to_string(),
            ));
        }

        Ok(class)
    }
}
