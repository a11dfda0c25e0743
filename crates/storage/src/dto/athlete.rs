use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Athlete, Gender};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AthleteResponse {
    pub athlete_id: Uuid,
    pub club_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub gender: Gender,
    pub weight_kg: Option<Decimal>,
    pub belt_rank: Option<String>,
    pub emergency_contact: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request payload for registering a new athlete under a club
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAthleteRequest {
    pub club_id: Uuid,

    #[validate(length(
        min = 1,
        max = 255,
        message = "First name must be between 1 and 255 characters"
    ))]
    pub first_name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Last name must be between 1 and 255 characters"
    ))]
    pub last_name: String,

    pub dob: NaiveDate,

    pub gender: Gender,

    pub weight_kg: Option<Decimal>,

    #[validate(length(max = 32))]
    pub belt_rank: Option<String>,

    #[validate(length(max = 255))]
    pub emergency_contact: Option<String>,
}

/// Request payload for updating an existing athlete. The owning club is
/// fixed for the athlete's lifetime and cannot be changed here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 255))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub last_name: Option<String>,

    pub dob: Option<NaiveDate>,

    pub gender: Option<Gender>,

    pub weight_kg: Option<Decimal>,

    #[validate(length(max = 32))]
    pub belt_rank: Option<String>,

    #[validate(length(max = 255))]
    pub emergency_contact: Option<String>,
}

/// Query parameters for athlete listing.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListAthletesQuery {
    pub club_id: Option<Uuid>,
}

impl From<Athlete> for AthleteResponse {
    fn from(athlete: Athlete) -> Self {
        Self {
            athlete_id: athlete.athlete_id,
            club_id: athlete.club_id,
            first_name: athlete.first_name,
            last_name: athlete.last_name,
            dob: athlete.dob,
            gender: athlete.gender,
            weight_kg: athlete.weight_kg,
            belt_rank: athlete.belt_rank,
            emergency_contact: athlete.emergency_contact,
            created_at: athlete.created_at,
        }
    }
}
