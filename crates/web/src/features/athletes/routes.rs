use axum::{
    Router,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{
    create_athlete, delete_athlete, list_all_athletes, list_athletes, update_athlete,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_athletes).post(create_athlete))
        .route("/all", get(list_all_athletes))
        .route("/:id", put(update_athlete).delete(delete_athlete))
}
