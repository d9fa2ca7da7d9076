use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/forecast", get(handlers::get_forecast))
        .route("/api/summary", get(handlers::get_summary))
        .route("/day/:activity/:day_id", get(handlers::day_detail))
        .with_state(state)
}
