use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Competition gender band. OPEN divisions accept any athlete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "gender", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "entry_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    Kata,
    Kumite,
    TeamKata,
    TeamKumite,
}

impl EntryType {
    pub fn is_individual(self) -> bool {
        matches!(self, EntryType::Kata | EntryType::Kumite)
    }

    pub fn is_team(self) -> bool {
        !self.is_individual()
    }

    /// Weight classes only apply to individual kumite.
    pub fn requires_weight_class(self) -> bool {
        matches!(self, EntryType::Kumite)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryType::Kata => "KATA",
            EntryType::Kumite => "KUMITE",
            EntryType::TeamKata => "TEAM_KATA",
            EntryType::TeamKumite => "TEAM_KUMITE",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "entry_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryStatus {
    Draft,
    Submitted,
    Approved,
    Returned,
}

impl EntryStatus {
    /// Club-scoped callers may only push entries forward to SUBMITTED;
    /// review outcomes are reserved for admins.
    pub fn settable_by_club(self) -> bool {
        matches!(self, EntryStatus::Submitted)
    }

    /// States an entry may be created in.
    pub fn valid_at_creation(self) -> bool {
        matches!(self, EntryStatus::Draft | EntryStatus::Submitted)
    }

    /// Review outcomes applicable through the bulk endpoint.
    pub fn is_review_outcome(self) -> bool {
        matches!(self, EntryStatus::Approved | EntryStatus::Returned)
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryStatus::Draft => "DRAFT",
            EntryStatus::Submitted => "SUBMITTED",
            EntryStatus::Approved => "APPROVED",
            EntryStatus::Returned => "RETURNED",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "team_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamType {
    Kata,
    Kumite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Superadmin,
    Admin,
    ClubManager,
    Coach,
    Athlete,
}

impl UserRole {
    pub fn is_admin(self) -> bool {
        matches!(self, UserRole::Superadmin | UserRole::Admin)
    }

    pub fn is_club_scoped(self) -> bool {
        matches!(self, UserRole::ClubManager | UserRole::Coach | UserRole::Athlete)
    }
}

impl FromStr for UserRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUPERADMIN" => Ok(UserRole::Superadmin),
            "ADMIN" => Ok(UserRole::Admin),
            "CLUB_MANAGER" => Ok(UserRole::ClubManager),
            "COACH" => Ok(UserRole::Coach),
            "ATHLETE" => Ok(UserRole::Athlete),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("CLUB_MANAGER".parse::<UserRole>(), Ok(UserRole::ClubManager));
        assert_eq!("SUPERADMIN".parse::<UserRole>(), Ok(UserRole::Superadmin));
        assert!("club_manager".parse::<UserRole>().is_err());
        assert!("".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_club_settable_statuses() {
        assert!(EntryStatus::Submitted.settable_by_club());
        assert!(!EntryStatus::Approved.settable_by_club());
        assert!(!EntryStatus::Returned.settable_by_club());
        assert!(!EntryStatus::Draft.settable_by_club());
    }

    #[test]
    fn test_creation_statuses() {
        assert!(EntryStatus::Draft.valid_at_creation());
        assert!(EntryStatus::Submitted.valid_at_creation());
        assert!(!EntryStatus::Approved.valid_at_creation());
    }

    #[test]
    fn test_weight_class_requirement() {
        assert!(EntryType::Kumite.requires_weight_class());
        assert!(!EntryType::Kata.requires_weight_class());
        assert!(!EntryType::TeamKumite.requires_weight_class());
    }

    #[test]
    fn test_entry_type_arity() {
        assert!(EntryType::Kata.is_individual());
        assert!(EntryType::TeamKata.is_team());
        assert!(EntryType::TeamKumite.is_team());
    }
}
