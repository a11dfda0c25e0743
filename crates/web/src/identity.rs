//! Per-request identity context and the policy checks built on it.
//!
//! Identity is taken verbatim from the `x-role` / `x-club-id` / `x-user-id`
//! headers. This is a development stub standing in for a real session
//! mechanism; nothing here is a security boundary. It is an explicit
//! extractor rather than ambient request state so every service call
//! receives the acting identity as an argument.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use storage::models::UserRole;
use uuid::Uuid;

use crate::error::WebError;

pub const ROLE_HEADER: &str = "x-role";
pub const CLUB_HEADER: &str = "x-club-id";
pub const USER_HEADER: &str = "x-user-id";

#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Option<Uuid>,
    pub role: UserRole,
    pub club_id: Option<Uuid>,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn require_admin(&self) -> Result<(), WebError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(WebError::Forbidden("Admin role required".to_string()))
        }
    }

    pub fn require_superadmin(&self) -> Result<(), WebError> {
        if self.role == UserRole::Superadmin {
            Ok(())
        } else {
            Err(WebError::Forbidden("Superadmin role required".to_string()))
        }
    }

    /// Write access to a club-owned resource: admins pass, club-scoped roles
    /// must act on their own club.
    pub fn authorize_club(&self, club_id: Uuid) -> Result<(), WebError> {
        if self.is_admin() {
            return Ok(());
        }
        match self.club_id {
            Some(own) if own == club_id => Ok(()),
            _ => Err(WebError::Forbidden(
                "Access restricted to your own club".to_string(),
            )),
        }
    }

    /// Effective club filter for list endpoints. Admins may request any club
    /// (or none, meaning all); club-scoped callers always get their own club
    /// and may not request another.
    pub fn resolve_club(&self, requested: Option<Uuid>) -> Result<Option<Uuid>, WebError> {
        if self.is_admin() {
            return Ok(requested);
        }
        let own = self.club_id.ok_or_else(|| {
            WebError::Forbidden("No club associated with this account".to_string())
        })?;
        match requested {
            Some(club) if club != own => Err(WebError::Forbidden(
                "Access restricted to your own club".to_string(),
            )),
            _ => Ok(Some(own)),
        }
    }
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> Result<Option<&'a str>, WebError> {
    match parts.headers.get(name) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .map(Some)
            .map_err(|_| WebError::BadRequest(format!("Invalid {name} header"))),
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Identity {
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let role = header_str(parts, ROLE_HEADER)?
            .ok_or_else(|| WebError::Forbidden(format!("Missing {ROLE_HEADER} header")))?
            .parse::<UserRole>()
            .map_err(|_| WebError::Forbidden("Unknown role".to_string()))?;

        let club_id = header_str(parts, CLUB_HEADER)?
            .map(|v| {
                v.parse::<Uuid>()
                    .map_err(|_| WebError::BadRequest(format!("Invalid {CLUB_HEADER} header")))
            })
            .transpose()?;

        let user_id = header_str(parts, USER_HEADER)?
            .map(|v| {
                v.parse::<Uuid>()
                    .map_err(|_| WebError::BadRequest(format!("Invalid {USER_HEADER} header")))
            })
            .transpose()?;

        Ok(Identity {
            user_id,
            role,
            club_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: UserRole, club_id: Option<Uuid>) -> Identity {
        Identity {
            user_id: None,
            role,
            club_id,
        }
    }

    #[test]
    fn test_admin_passes_any_club() {
        let admin = identity(UserRole::Admin, None);
        assert!(admin.authorize_club(Uuid::new_v4()).is_ok());
        assert!(admin.require_admin().is_ok());
    }

    #[test]
    fn test_club_manager_limited_to_own_club() {
        let club = Uuid::new_v4();
        let manager = identity(UserRole::ClubManager, Some(club));
        assert!(manager.authorize_club(club).is_ok());
        assert!(manager.authorize_club(Uuid::new_v4()).is_err());
        assert!(manager.require_admin().is_err());
    }

    #[test]
    fn test_superadmin_gate() {
        assert!(identity(UserRole::Superadmin, None).require_superadmin().is_ok());
        assert!(identity(UserRole::Admin, None).require_superadmin().is_err());
    }

    #[test]
    fn test_resolve_club_for_admin() {
        let admin = identity(UserRole::Admin, None);
        let club = Uuid::new_v4();
        assert_eq!(admin.resolve_club(None).unwrap(), None);
        assert_eq!(admin.resolve_club(Some(club)).unwrap(), Some(club));
    }

    #[test]
    fn test_resolve_club_for_coach() {
        let club = Uuid::new_v4();
        let coach = identity(UserRole::Coach, Some(club));
        assert_eq!(coach.resolve_club(None).unwrap(), Some(club));
        assert_eq!(coach.resolve_club(Some(club)).unwrap(), Some(club));
        assert!(coach.resolve_club(Some(Uuid::new_v4())).is_err());
    }

    #[test]
    fn test_clubless_scoped_caller_rejected() {
        let coach = identity(UserRole::Coach, None);
        assert!(coach.resolve_club(None).is_err());
        assert!(coach.authorize_club(Uuid::new_v4()).is_err());
    }
}
