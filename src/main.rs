mod api;
mod config;
mod demo;
mod error;

use crate::api::AppState;
use crate::config::AppConfig;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("🚀 Starting Review Dashboard API");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Server: {}:{}", config.server.host, config.server.port);
    info!("   - Alert probability: {}", config.demo.alert_probability);

    let state = AppState::new(config.demo.clone());

    let app = api::router(state)
        .layer(api::cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET  /                          - Landing page");
    info!("   GET  /health                    - Health check");
    info!("   GET  /api/metrics               - Current metrics");
    info!("   GET  /api/trends/{{period}}       - Trends (24h, 7d, 30d, 90d)");
    info!("   GET  /api/locations/top         - Top locations");
    info!("   GET  /api/locations/attention   - Locations needing attention");
    info!("   GET  /api/rating-distribution   - Rating distribution");
    info!("   GET  /api/alerts/recent         - Recent alerts");
    info!("   GET  /api/export/excel          - Excel export (simulated)");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
