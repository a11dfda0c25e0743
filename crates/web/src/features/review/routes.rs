use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{bulk_review, review_queue};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(review_queue))
        .route("/bulk", post(bulk_review))
}
