use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest};
use crate::error::{Result, StorageError};
use crate::models::Athlete;

const ATHLETE_COLUMNS: &str = "athlete_id, club_id, first_name, last_name, dob, gender, \
                               weight_kg, belt_rank, emergency_contact, created_at";

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the athletes of one club
    pub async fn list_by_club(&self, club_id: Uuid) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(&format!(
            r#"
            SELECT {ATHLETE_COLUMNS}
            FROM athletes
            WHERE club_id = $1
            ORDER BY last_name, first_name
            "#
        ))
        .bind(club_id)
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// List all athletes across clubs
    pub async fn list_all(&self) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(&format!(
            r#"
            SELECT {ATHLETE_COLUMNS}
            FROM athletes
            ORDER BY last_name, first_name
            "#
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// Find athlete by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            r#"
            SELECT {ATHLETE_COLUMNS}
            FROM athletes
            WHERE athlete_id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Create a new athlete
    pub async fn create(&self, req: &CreateAthleteRequest) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            r#"
            INSERT INTO athletes (club_id, first_name, last_name, dob, gender,
                                  weight_kg, belt_rank, emergency_contact)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {ATHLETE_COLUMNS}
            "#
        ))
        .bind(req.club_id)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(req.dob)
        .bind(req.gender)
        .bind(req.weight_kg)
        .bind(&req.belt_rank)
        .bind(&req.emergency_contact)
        .fetch_one(self.pool)
        .await?;

        Ok(athlete)
    }

    /// Update an existing athlete. The owning club never changes.
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Athlete,
        req: &UpdateAthleteRequest,
    ) -> Result<Athlete> {
        let first_name = req.first_name.as_ref().unwrap_or(&existing.first_name);
        let last_name = req.last_name.as_ref().unwrap_or(&existing.last_name);
        let dob = req.dob.unwrap_or(existing.dob);
        let gender = req.gender.unwrap_or(existing.gender);
        let weight_kg = req.weight_kg.or(existing.weight_kg);
        let belt_rank = req.belt_rank.as_ref().or(existing.belt_rank.as_ref());
        let emergency_contact = req
            .emergency_contact
            .as_ref()
            .or(existing.emergency_contact.as_ref());

        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            r#"
            UPDATE athletes
            SET first_name = $2,
                last_name = $3,
                dob = $4,
                gender = $5,
                weight_kg = $6,
                belt_rank = $7,
                emergency_contact = $8
            WHERE athlete_id = $1
            RETURNING {ATHLETE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(dob)
        .bind(gender)
        .bind(weight_kg)
        .bind(belt_rank)
        .bind(emergency_contact)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Delete an athlete together with its team memberships and entries.
    /// All three deletes run in one transaction so referential integrity
    /// never depends on database cascade configuration.
    pub async fn delete_with_dependents(&self, id: Uuid) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM team_members WHERE athlete_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM entries WHERE athlete_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM athletes WHERE athlete_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        tx.commit().await?;
        Ok(())
    }
}
