use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::team::{CreateTeamRequest, TeamMemberInput};
use crate::error::{Result, StorageError};
use crate::models::{Team, TeamMember};

const TEAM_COLUMNS: &str = "team_id, event_id, club_id, division_id, team_type, name, created_at";

pub struct TeamRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TeamRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List teams, optionally narrowed to an event and/or club
    pub async fn list(&self, event_id: Option<Uuid>, club_id: Option<Uuid>) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(&format!(
            r#"
            SELECT {TEAM_COLUMNS}
            FROM teams
            WHERE ($1::uuid IS NULL OR event_id = $1)
              AND ($2::uuid IS NULL OR club_id = $2)
            ORDER BY name
            "#
        ))
        .bind(event_id)
        .bind(club_id)
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    /// Find team by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(&format!(
            r#"
            SELECT {TEAM_COLUMNS}
            FROM teams
            WHERE team_id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(team)
    }

    /// Create a new team
    pub async fn create(&self, req: &CreateTeamRequest) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(&format!(
            r#"
            INSERT INTO teams (event_id, club_id, division_id, team_type, name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {TEAM_COLUMNS}
            "#
        ))
        .bind(req.event_id)
        .bind(req.club_id)
        .bind(req.division_id)
        .bind(req.team_type)
        .bind(&req.name)
        .fetch_one(self.pool)
        .await?;

        Ok(team)
    }

    /// Current member list of a team
    pub async fn members(&self, team_id: Uuid) -> Result<Vec<TeamMember>> {
        let members = sqlx::query_as::<_, TeamMember>(
            r#"
            SELECT team_id, athlete_id, is_reserve
            FROM team_members
            WHERE team_id = $1
            ORDER BY is_reserve, athlete_id
            "#,
        )
        .bind(team_id)
        .fetch_all(self.pool)
        .await?;

        Ok(members)
    }

    /// Add members to a team in one transaction. The (team, athlete) primary
    /// key rejects an athlete added twice; that surfaces as a Conflict.
    /// Returns the refreshed member list.
    pub async fn add_members(
        &self,
        team_id: Uuid,
        members: &[TeamMemberInput],
    ) -> Result<Vec<TeamMember>> {
        let mut tx = self.pool.begin().await?;

        for member in members {
            sqlx::query(
                r#"
                INSERT INTO team_members (team_id, athlete_id, is_reserve)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(team_id)
            .bind(member.athlete_id)
            .bind(member.is_reserve)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                StorageError::map_unique_violation(e, "Athlete is already a member of this team")
            })?;
        }

        tx.commit().await?;

        self.members(team_id).await
    }
}
