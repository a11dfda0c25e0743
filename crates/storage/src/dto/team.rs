use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Team, TeamMember, TeamType};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberResponse {
    pub athlete_id: Uuid,
    pub is_reserve: bool,
}

/// Team with its refreshed member list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub team_id: Uuid,
    pub event_id: Uuid,
    pub club_id: Uuid,
    pub division_id: Uuid,
    pub team_type: TeamType,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub members: Vec<TeamMemberResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    pub event_id: Uuid,
    pub club_id: Uuid,
    pub division_id: Uuid,
    pub team_type: TeamType,
    #[validate(length(min = 1, max = 255, message = "Team name is required"))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberInput {
    pub athlete_id: Uuid,
    #[serde(default)]
    pub is_reserve: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddTeamMembersRequest {
    pub team_id: Uuid,
    #[validate(length(min = 1, message = "At least one member is required"))]
    pub members: Vec<TeamMemberInput>,
}

/// Query parameters for team listing.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTeamsQuery {
    pub event_id: Option<Uuid>,
    pub club_id: Option<Uuid>,
}

impl TeamResponse {
    pub fn from_parts(team: Team, members: Vec<TeamMember>) -> Self {
        Self {
            team_id: team.team_id,
            event_id: team.event_id,
            club_id: team.club_id,
            division_id: team.division_id,
            team_type: team.team_type,
            name: team.name,
            created_at: team.created_at,
            members: members
                .into_iter()
                .map(|m| TeamMemberResponse {
                    athlete_id: m.athlete_id,
                    is_reserve: m.is_reserve,
                })
                .collect(),
        }
    }
}
