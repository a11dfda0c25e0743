use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::Gender;

/// Kumite sub-category keyed by body weight. Open-ended bounds are NULL
/// (e.g. "+84kg" has no max).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeightClass {
    pub weight_class_id: Uuid,
    pub event_id: Uuid,
    pub division_id: Uuid,
    pub gender: Gender,
    pub name: String,
    pub min_kg: Option<Decimal>,
    pub max_kg: Option<Decimal>,
}
