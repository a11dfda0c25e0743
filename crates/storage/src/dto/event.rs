use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Overwrites the event's published division/weight-class snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventConfigRequest {
    #[schema(value_type = Object)]
    pub config: serde_json::Value,
}
