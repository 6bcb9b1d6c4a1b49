use crate::api::models::AppState;
use crate::api::reports::handlers::{
    export_excel_handler, rating_distribution_handler, recent_alerts_handler,
};
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/rating-distribution", get(rating_distribution_handler))
        .route("/api/alerts/recent", get(recent_alerts_handler))
        .route("/api/export/excel", get(export_excel_handler))
}
