use axum::{
    Router,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{create_entry, list_entries, update_entry_status};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_entries).post(create_entry))
        .route("/:id/status", put(update_entry_status))
}
