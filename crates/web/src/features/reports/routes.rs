use axum::{Router, routing::get};
use storage::Database;

use super::handlers::entries_csv;

pub fn routes() -> Router<Database> {
    Router::new().route("/entries.csv", get(entries_csv))
}
