use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Entry, EntryStatus, EntryType};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    pub entry_id: Uuid,
    pub event_id: Uuid,
    pub club_id: Uuid,
    pub entry_type: EntryType,
    pub division_id: Uuid,
    pub athlete_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub weight_class_id: Option<Uuid>,
    pub status: EntryStatus,
    pub fee_cents: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating an entry. Which reference fields are
/// required depends on the entry type; see [`CreateEntryRequest::validate_shape`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryRequest {
    pub event_id: Uuid,
    pub club_id: Uuid,
    pub entry_type: EntryType,
    pub division_id: Uuid,
    pub athlete_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub weight_class_id: Option<Uuid>,
    /// DRAFT when omitted.
    pub status: Option<EntryStatus>,
    #[validate(range(min = 0))]
    pub fee_cents: Option<i32>,
}

impl CreateEntryRequest {
    /// Entry-type-specific shape rules: individual types carry an athlete,
    /// team types a team, and only KUMITE carries a weight class.
    pub fn validate_shape(&self) -> Result<(), &'static str> {
        if self.entry_type.is_individual() {
            if self.athlete_id.is_none() {
                return Err("athleteId is required for individual entries");
            }
            if self.team_id.is_some() {
                return Err("teamId is not allowed for individual entries");
            }
        } else {
            if self.team_id.is_none() {
                return Err("teamId is required for team entries");
            }
            if self.athlete_id.is_some() {
                return Err("athleteId is not allowed for team entries");
            }
        }

        if self.entry_type.requires_weight_class() {
            if self.weight_class_id.is_none() {
                return Err("weightClassId is required for kumite entries");
            }
        } else if self.weight_class_id.is_some() {
            return Err("weightClassId is only allowed for kumite entries");
        }

        if let Some(status) = self.status {
            if !status.valid_at_creation() {
                return Err("entries can only be created as DRAFT or SUBMITTED");
            }
        }

        Ok(())
    }
}

/// Request payload for a single-entry status transition.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntryStatusRequest {
    pub status: EntryStatus,
    #[validate(length(max = 1000))]
    pub reason: Option<String>,
}

/// Query parameters for entry listing.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListEntriesQuery {
    pub event_id: Option<Uuid>,
    pub club_id: Option<Uuid>,
}

/// Query parameters for the CSV report.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntriesReportQuery {
    pub event_id: Uuid,
    pub club_id: Option<Uuid>,
}

/// Flattened entry row with names resolved for the CSV report.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryReportRow {
    pub entry_id: Uuid,
    pub entry_type: EntryType,
    pub status: EntryStatus,
    pub division_name: String,
    pub club_name: String,
    pub competitor: String,
    pub weight_class: Option<String>,
    pub fee_cents: i32,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        Self {
            entry_id: entry.entry_id,
            event_id: entry.event_id,
            club_id: entry.club_id,
            entry_type: entry.entry_type,
            division_id: entry.division_id,
            athlete_id: entry.athlete_id,
            team_id: entry.team_id,
            weight_class_id: entry.weight_class_id,
            status: entry.status,
            fee_cents: entry.fee_cents,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(entry_type: EntryType) -> CreateEntryRequest {
        CreateEntryRequest {
            event_id: Uuid::new_v4(),
            club_id: Uuid::new_v4(),
            entry_type,
            division_id: Uuid::new_v4(),
            athlete_id: None,
            team_id: None,
            weight_class_id: None,
            status: None,
            fee_cents: None,
        }
    }

    #[test]
    fn test_kata_requires_athlete() {
        let mut req = request(EntryType::Kata);
        assert!(req.validate_shape().is_err());
        req.athlete_id = Some(Uuid::new_v4());
        assert!(req.validate_shape().is_ok());
    }

    #[test]
    fn test_kumite_requires_weight_class() {
        let mut req = request(EntryType::Kumite);
        req.athlete_id = Some(Uuid::new_v4());
        assert!(req.validate_shape().is_err());
        req.weight_class_id = Some(Uuid::new_v4());
        assert!(req.validate_shape().is_ok());
    }

    #[test]
    fn test_kata_rejects_weight_class() {
        let mut req = request(EntryType::Kata);
        req.athlete_id = Some(Uuid::new_v4());
        req.weight_class_id = Some(Uuid::new_v4());
        assert!(req.validate_shape().is_err());
    }

    #[test]
    fn test_team_kata_requires_team_and_rejects_athlete() {
        let mut req = request(EntryType::TeamKata);
        assert!(req.validate_shape().is_err());
        req.team_id = Some(Uuid::new_v4());
        assert!(req.validate_shape().is_ok());
        req.athlete_id = Some(Uuid::new_v4());
        assert!(req.validate_shape().is_err());
    }

    #[test]
    fn test_team_kumite_has_no_weight_class() {
        let mut req = request(EntryType::TeamKumite);
        req.team_id = Some(Uuid::new_v4());
        req.weight_class_id = Some(Uuid::new_v4());
        assert!(req.validate_shape().is_err());
    }

    #[test]
    fn test_creation_status_restricted() {
        let mut req = request(EntryType::Kata);
        req.athlete_id = Some(Uuid::new_v4());
        req.status = Some(EntryStatus::Approved);
        assert!(req.validate_shape().is_err());
        req.status = Some(EntryStatus::Submitted);
        assert!(req.validate_shape().is_ok());
    }
}
