use crate::api::models::AppState;
use crate::demo::{self, Alert, ExportReceipt, RatingDistribution};
use axum::{Json, extract::State};
use chrono::Local;
use tracing::{debug, info};

pub async fn rating_distribution_handler() -> Json<RatingDistribution> {
    let distribution = demo::rating_distribution();
    debug!(bucketed = distribution.total(), "Rating distribution");
    Json(distribution)
}

pub async fn recent_alerts_handler(State(state): State<AppState>) -> Json<Vec<Alert>> {
    let alerts = demo::recent_alerts(
        &mut rand::rng(),
        state.demo.alert_probability,
        Local::now().naive_local(),
    );

    debug!(count = alerts.len(), "Recent alerts");

    Json(alerts)
}

/// Pretends to kick off the Excel report; nothing is written.
pub async fn export_excel_handler() -> Json<ExportReceipt> {
    let receipt = demo::export_receipt(Local::now().date_naive());
    info!(filename = %receipt.filename, "Simulated report export");
    Json(receipt)
}
