use crate::api::models::AppState;
use crate::api::trends::handlers::trends_handler;
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/trends/{period}", get(trends_handler))
}
