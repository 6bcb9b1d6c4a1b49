use crate::api::locations::handlers::{attention_locations_handler, top_locations_handler};
use crate::api::models::AppState;
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/locations/top", get(top_locations_handler))
        .route("/api/locations/attention", get(attention_locations_handler))
}
