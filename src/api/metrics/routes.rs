use crate::api::metrics::handlers::metrics_handler;
use crate::api::models::AppState;
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/metrics", get(metrics_handler))
}
