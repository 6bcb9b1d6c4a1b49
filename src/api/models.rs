use crate::config::DemoConfig;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub demo: Arc<DemoConfig>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(demo: DemoConfig) -> Self {
        Self {
            demo: Arc::new(demo),
            started_at: Instant::now(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}
