use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::Gender;

/// Age- and gender-banded competition category within an event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    pub division_id: Uuid,
    pub event_id: Uuid,
    pub key: String,
    pub name: String,
    pub min_age: i32,
    pub max_age: i32,
    pub gender: Gender,
}

impl Division {
    /// Inclusive on both bounds.
    pub fn contains_age(&self, age: i32) -> bool {
        age >= self.min_age && age <= self.max_age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn division(min_age: i32, max_age: i32) -> Division {
        Division {
            division_id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            key: "cadet-m".to_string(),
            name: "Cadet Male".to_string(),
            min_age,
            max_age,
            gender: Gender::Male,
        }
    }

    #[test]
    fn test_age_range_is_inclusive() {
        let d = division(14, 15);
        assert!(!d.contains_age(13));
        assert!(d.contains_age(14));
        assert!(d.contains_age(15));
        assert!(!d.contains_age(16));
    }
}
