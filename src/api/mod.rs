pub mod locations;
pub mod metrics;
pub mod models;
pub mod reports;
pub mod trends;

// Re-exports
pub use models::*;

use crate::config::CorsConfig;
use axum::{
    Json, Router,
    extract::State,
    http::Method,
    response::{Html, IntoResponse},
    routing::get,
};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

const LANDING_PAGE: &str = r#"
<h1>Law Firm Review Tracking API</h1>
<p>Dashboard API is running!</p>
<p>Connect your dashboard to this server's base URL.</p>
<br>
<h3>Available Endpoints:</h3>
<ul>
    <li><a href="/api/metrics">/api/metrics</a> - Current metrics</li>
    <li><a href="/api/trends/7d">/api/trends/7d</a> - 7-day trends (also 24h, 30d, 90d)</li>
    <li><a href="/api/locations/top">/api/locations/top</a> - Top locations</li>
    <li><a href="/api/locations/attention">/api/locations/attention</a> - Locations needing attention</li>
    <li><a href="/api/rating-distribution">/api/rating-distribution</a> - Rating distribution</li>
    <li><a href="/api/alerts/recent">/api/alerts/recent</a> - Recent alerts</li>
    <li><a href="/api/export/excel">/api/export/excel</a> - Excel report export</li>
</ul>
"#;

/// All dashboard routes with state applied. Layers are added by the caller.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .merge(metrics::routes())
        .merge(trends::routes())
        .merge(locations::routes())
        .merge(reports::routes())
        .with_state(state)
}

/// Dashboards are served from other origins, so any origin may read.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(config.max_age_secs))
}

pub async fn home_handler() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(models::HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn app_with_probability(alert_probability: f64) -> Router {
        router(AppState::new(DemoConfig { alert_probability }))
    }

    async fn get_json(app: Router, uri: &str) -> Value {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn landing_page_lists_endpoints() {
        let response = app_with_probability(0.3)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("/api/metrics"));
        assert!(html.contains("/api/rating-distribution"));
    }

    #[tokio::test]
    async fn health_reports_version() {
        let body = get_json(app_with_probability(0.3), "/health").await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn metrics_has_all_fields() {
        let body = get_json(app_with_probability(0.3), "/api/metrics").await;
        assert_eq!(body["total_locations"], 120);
        for field in [
            "total_reviews",
            "average_rating",
            "reviews_removed_today",
            "reviews_added_24h",
            "change_7d_reviews",
            "change_7d_rating",
        ] {
            assert!(body.get(field).is_some(), "missing {field}");
        }
    }

    #[tokio::test]
    async fn trend_lengths_by_period() {
        let cases = [("24h", 1), ("7d", 7), ("30d", 30), ("90d", 90), ("bogus", 7)];
        for (period, expected) in cases {
            let uri = format!("/api/trends/{period}");
            let body = get_json(app_with_probability(0.3), &uri).await;
            assert_eq!(body.as_array().unwrap().len(), expected, "period {period}");
        }
    }

    #[tokio::test]
    async fn top_locations_status_matches_rating() {
        let body = get_json(app_with_probability(0.3), "/api/locations/top").await;
        let locations = body.as_array().unwrap();
        assert!(locations.len() <= 10);

        for loc in locations {
            let rating = loc["rating"].as_f64().unwrap();
            let expected = if rating >= 4.5 {
                "Excellent"
            } else if rating >= 4.0 {
                "Good"
            } else {
                "Monitor"
            };
            assert_eq!(loc["status"], expected);
        }
    }

    #[tokio::test]
    async fn attention_locations_carry_priority() {
        let body = get_json(app_with_probability(0.3), "/api/locations/attention").await;
        let locations = body.as_array().unwrap();
        assert_eq!(locations.len(), 5);
        assert_eq!(locations[0]["priority"], "Urgent");
        assert_eq!(locations[0]["reviews_removed"], 8);
    }

    #[tokio::test]
    async fn rating_distribution_sums_within_total() {
        let body = get_json(app_with_probability(0.3), "/api/rating-distribution").await;
        let sum: u64 = ["5_star", "4_star", "3_star", "2_star", "1_star"]
            .iter()
            .map(|key| body[*key].as_u64().unwrap())
            .sum();
        assert!(sum <= 48_532);
        assert_eq!(body["5_star"], 21_839);
    }

    #[tokio::test]
    async fn alerts_follow_configured_probability() {
        let never = get_json(app_with_probability(0.0), "/api/alerts/recent").await;
        assert!(never.as_array().unwrap().is_empty());

        let always = get_json(app_with_probability(1.0), "/api/alerts/recent").await;
        let alerts = always.as_array().unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0]["type"], "reviews_removed");
    }

    #[tokio::test]
    async fn export_is_simulated() {
        let body = get_json(app_with_probability(0.3), "/api/export/excel").await;
        assert_eq!(body["success"], true);
        let filename = body["filename"].as_str().unwrap();
        assert!(filename.starts_with("review_report_"));
        assert!(filename.ends_with(".xlsx"));
    }

    fn app_with_cors(max_age_secs: u64) -> Router {
        app_with_probability(0.3).layer(cors_layer(&CorsConfig { max_age_secs }))
    }

    #[tokio::test]
    async fn cross_origin_get_is_allowed() {
        let response = app_with_cors(3600)
            .oneshot(
                Request::builder()
                    .uri("/api/metrics")
                    .header(header::ORIGIN, "http://dashboard.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn preflight_advertises_methods_and_max_age() {
        let response = app_with_cors(600)
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/trends/7d")
                    .header(header::ORIGIN, "http://dashboard.example")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "600");

        let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
        assert!(methods.contains("GET"), "{methods}");
        assert!(methods.contains("OPTIONS"), "{methods}");
    }
}
