use axum::{
    Router,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{list_divisions, list_events, list_weight_classes, update_event_config};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_events))
        .route("/:id/divisions", get(list_divisions))
        .route("/:id/weights", get(list_weight_classes))
        .route("/:id/config", put(update_event_config))
}
