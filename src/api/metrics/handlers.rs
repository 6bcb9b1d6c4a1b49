use crate::demo::{self, MetricsSnapshot};
use axum::Json;
use tracing::debug;

pub async fn metrics_handler() -> Json<MetricsSnapshot> {
    let snapshot = demo::metrics_snapshot(&mut rand::rng());

    debug!(
        total_reviews = snapshot.total_reviews,
        average_rating = snapshot.average_rating,
        "Generated metrics snapshot"
    );

    Json(snapshot)
}
