use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{add_team_members, create_team, list_teams};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_teams).post(create_team))
        .route("/members", post(add_team_members))
}
