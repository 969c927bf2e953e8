use axum::{routing::get, Router};
use std::sync::Arc;
use crate::api::handlers::{leaderboard::{get_leaderboard, reset_leaderboard, submit_result}, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/leaderboard",
            get(get_leaderboard).post(submit_result).delete(reset_leaderboard),
        )
        .with_state(state)
}
