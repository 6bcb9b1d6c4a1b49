use crate::demo::{self, AttentionLocation, LocationSummary};
use axum::Json;
use tracing::debug;

pub async fn top_locations_handler() -> Json<Vec<LocationSummary>> {
    let locations = demo::top_locations(&mut rand::rng());
    debug!(count = locations.len(), "Top locations");
    Json(locations)
}

pub async fn attention_locations_handler() -> Json<Vec<AttentionLocation>> {
    let locations = demo::attention_locations();
    debug!(count = locations.len(), "Locations needing attention");
    Json(locations)
}
