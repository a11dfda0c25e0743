use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::entry::EntryReportRow;
use crate::error::{Result, StorageError};
use crate::models::{Entry, EntryStatus, EntryType};
use crate::repository::audit::{self, AuditRecord};

const ENTRY_COLUMNS: &str = "entry_id, event_id, club_id, entry_type, division_id, athlete_id, \
                             team_id, weight_class_id, status, fee_cents, created_at, updated_at";

pub struct NewEntry {
    pub event_id: Uuid,
    pub club_id: Uuid,
    pub entry_type: EntryType,
    pub division_id: Uuid,
    pub athlete_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub weight_class_id: Option<Uuid>,
    pub status: EntryStatus,
    pub fee_cents: i32,
}

pub struct EntryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EntryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List entries, optionally narrowed to an event and/or club
    pub async fn list(
        &self,
        event_id: Option<Uuid>,
        club_id: Option<Uuid>,
    ) -> Result<Vec<Entry>> {
        let entries = sqlx::query_as::<_, Entry>(&format!(
            r#"
            SELECT {ENTRY_COLUMNS}
            FROM entries
            WHERE ($1::uuid IS NULL OR event_id = $1)
              AND ($2::uuid IS NULL OR club_id = $2)
            ORDER BY created_at DESC
            "#
        ))
        .bind(event_id)
        .bind(club_id)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Find entry by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Entry> {
        let entry = sqlx::query_as::<_, Entry>(&format!(
            r#"
            SELECT {ENTRY_COLUMNS}
            FROM entries
            WHERE entry_id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(entry)
    }

    /// Friendly pre-check for duplicate submissions. The partial unique
    /// indexes on entries remain the authoritative guard; a race between two
    /// identical submissions is caught there and surfaces as the same
    /// Conflict error.
    pub async fn assert_no_duplicate(
        &self,
        event_id: Uuid,
        entry_type: EntryType,
        division_id: Uuid,
        athlete_id: Option<Uuid>,
        team_id: Option<Uuid>,
    ) -> Result<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM entries
                WHERE event_id = $1
                  AND entry_type = $2
                  AND division_id = $3
                  AND ($4::uuid IS NULL OR athlete_id = $4)
                  AND ($5::uuid IS NULL OR team_id = $5)
            )
            "#,
        )
        .bind(event_id)
        .bind(entry_type)
        .bind(division_id)
        .bind(athlete_id)
        .bind(team_id)
        .fetch_one(self.pool)
        .await?;

        if exists {
            return Err(StorageError::ConstraintViolation(
                "An entry for this competitor already exists in this division".to_string(),
            ));
        }

        Ok(())
    }

    /// Create a new entry
    pub async fn create(&self, new: &NewEntry) -> Result<Entry> {
        let entry = sqlx::query_as::<_, Entry>(&format!(
            r#"
            INSERT INTO entries (event_id, club_id, entry_type, division_id,
                                 athlete_id, team_id, weight_class_id, status, fee_cents)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {ENTRY_COLUMNS}
            "#
        ))
        .bind(new.event_id)
        .bind(new.club_id)
        .bind(new.entry_type)
        .bind(new.division_id)
        .bind(new.athlete_id)
        .bind(new.team_id)
        .bind(new.weight_class_id)
        .bind(new.status)
        .bind(new.fee_cents)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::map_unique_violation(
                e,
                "An entry for this competitor already exists in this division",
            )
        })?;

        Ok(entry)
    }

    /// Entries awaiting review for one event
    pub async fn list_submitted(&self, event_id: Uuid) -> Result<Vec<Entry>> {
        let entries = sqlx::query_as::<_, Entry>(&format!(
            r#"
            SELECT {ENTRY_COLUMNS}
            FROM entries
            WHERE event_id = $1 AND status = 'SUBMITTED'
            ORDER BY created_at
            "#
        ))
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Move one entry to a new status and write its audit row in the same
    /// transaction, so the trail never disagrees with the entry state.
    pub async fn update_status(
        &self,
        id: Uuid,
        new_status: EntryStatus,
        actor_user_id: Option<Uuid>,
        reason: Option<&str>,
    ) -> Result<Entry> {
        let mut tx = self.pool.begin().await?;

        let previous = sqlx::query_scalar::<_, EntryStatus>(
            "SELECT status FROM entries WHERE entry_id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        let entry = sqlx::query_as::<_, Entry>(&format!(
            r#"
            UPDATE entries
            SET status = $2, updated_at = now()
            WHERE entry_id = $1
            RETURNING {ENTRY_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(new_status)
        .fetch_one(&mut *tx)
        .await?;

        audit::record(
            &mut *tx,
            AuditRecord {
                user_id: actor_user_id,
                entity_type: "ENTRY",
                entity_id: id,
                action: format!("ENTRY_STATUS_{new_status}"),
                diff: json!({
                    "from": previous,
                    "to": new_status,
                    "reason": reason,
                }),
            },
        )
        .await?;

        tx.commit().await?;
        Ok(entry)
    }

    /// Bulk review decision: moves every listed entry of the event that is
    /// still SUBMITTED to `new_status`, skipping the rest silently, and
    /// writes one audit row for the whole batch. Returns the number of rows
    /// actually changed.
    pub async fn bulk_update_status(
        &self,
        event_id: Uuid,
        entry_ids: &[Uuid],
        new_status: EntryStatus,
        actor_user_id: Option<Uuid>,
        reason: Option<&str>,
    ) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        let updated: Vec<Uuid> = sqlx::query_scalar(
            r#"
            UPDATE entries
            SET status = $3, updated_at = now()
            WHERE event_id = $1
              AND entry_id = ANY($2)
              AND status = 'SUBMITTED'
            RETURNING entry_id
            "#,
        )
        .bind(event_id)
        .bind(entry_ids)
        .bind(new_status)
        .fetch_all(&mut *tx)
        .await?;

        audit::record(
            &mut *tx,
            AuditRecord {
                user_id: actor_user_id,
                entity_type: "ENTRY_BATCH",
                entity_id: event_id,
                action: format!("ENTRY_BULK_{new_status}"),
                diff: json!({
                    "to": new_status,
                    "requested": entry_ids,
                    "updated": updated,
                    "reason": reason,
                }),
            },
        )
        .await?;

        tx.commit().await?;
        Ok(updated.len() as u64)
    }

    /// Flattened rows for the CSV report, names resolved via joins
    pub async fn report_rows(
        &self,
        event_id: Uuid,
        club_id: Option<Uuid>,
    ) -> Result<Vec<EntryReportRow>> {
        let rows = sqlx::query_as::<_, EntryReportRow>(
            r#"
            SELECT e.entry_id,
                   e.entry_type,
                   e.status,
                   d.name AS division_name,
                   c.name AS club_name,
                   COALESCE(a.first_name || ' ' || a.last_name, t.name, '') AS competitor,
                   w.name AS weight_class,
                   e.fee_cents
            FROM entries e
            JOIN divisions d ON d.division_id = e.division_id
            JOIN clubs c ON c.club_id = e.club_id
            LEFT JOIN athletes a ON a.athlete_id = e.athlete_id
            LEFT JOIN teams t ON t.team_id = e.team_id
            LEFT JOIN weight_classes w ON w.weight_class_id = e.weight_class_id
            WHERE e.event_id = $1
              AND ($2::uuid IS NULL OR e.club_id = $2)
            ORDER BY c.name, d.name, competitor
            "#,
        )
        .bind(event_id)
        .bind(club_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
