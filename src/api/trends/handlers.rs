use crate::demo::{self, TrendPeriod, TrendPoint};
use axum::{Json, extract::Path};
use chrono::Local;
use tracing::debug;

/// Unrecognised periods are served as a 7-day window.
pub async fn trends_handler(Path(period): Path<String>) -> Json<Vec<TrendPoint>> {
    let resolved = TrendPeriod::from_label(&period);
    let today = Local::now().date_naive();

    debug!(period = %period, days = resolved.days(), "Generating trend series");

    Json(demo::trend_series(&mut rand::rng(), resolved, today))
}
