use analytics::feeds::{PerformanceSnapshot, SummarySnapshot};
use analytics::SharedSource;
use axum::{
    routing::get,
    Router,
};
use core_types::ActivityEntry;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access: one live
/// source per dashboard feed. Every source starts empty, so a fresh server
/// serves the baseline datasets until something publishes a snapshot.
#[derive(Clone, Default)]
pub struct AppState {
    pub activity: SharedSource<Vec<ActivityEntry>>,
    pub summary: SharedSource<SummarySnapshot>,
    pub performance: SharedSource<PerformanceSnapshot>,
}

/// Builds the application router. Split out from `run_server` so tests can
/// drive it in-process without binding a socket.
pub fn router(state: Arc<AppState>) -> Router {
    // The dashboard frontend is served from a separate origin.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route(
            "/api/activity-feed",
            get(handlers::get_activity_feed)
                .post(handlers::ingest_activity_feed)
                .delete(handlers::clear_activity_feed),
        )
        .route(
            "/api/summary",
            get(handlers::get_summary)
                .post(handlers::ingest_summary)
                .delete(handlers::clear_summary),
        )
        .route(
            "/api/performance",
            get(handlers::get_performance)
                .post(handlers::ingest_performance)
                .delete(handlers::clear_performance),
        )
        .with_state(state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr) -> anyhow::Result<()> {
    // Note: Tracing is initialized by the binary, so we don't initialize it
    // again here. This prevents conflicts between subscribers.
    let app_state = Arc::new(AppState::default());
    let app = router(app_state);

    tracing::info!("Dashboard API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::AnalyticsPayload;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use core_types::{Kpi, KpiFormat};
    use http_body_util::BodyExt;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use tower::ServiceExt;

    fn app() -> Router {
        router(Arc::new(AppState::default()))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, value: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_check_responds_ok() {
        let response = app().oneshot(get("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn fresh_server_serves_baseline_summary() {
        let response = app().oneshot(get("/api/summary")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["is_baseline"], true);
        assert_eq!(
            body["kpis"].as_array().unwrap().len(),
            baseline::kpis().len()
        );
    }

    #[tokio::test]
    async fn publishing_a_performance_snapshot_flips_to_live() {
        let app = app();

        let snapshot = json!({
            "kpis": [{
                "id": "k1",
                "label": "Revenue",
                "value": "100",
                "format": "currency"
            }]
        });
        let response = app
            .clone()
            .oneshot(post_json("/api/performance", snapshot))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.oneshot(get("/api/performance")).await.unwrap();
        let payload: AnalyticsPayload<analytics::feeds::PerformanceSnapshot> =
            serde_json::from_value(body_json(response).await).unwrap();

        assert!(!payload.is_baseline);
        assert_eq!(
            payload.kpis,
            vec![Kpi::new("k1", "Revenue", dec!(100), KpiFormat::Currency)]
        );
        // Only the KPI cards are live; the other panels stay on the baseline
        // datasets until product wires live sources for them.
        assert_eq!(payload.trends, baseline::trends().to_vec());
        assert_eq!(payload.alerts, baseline::alerts().to_vec());
    }

    #[tokio::test]
    async fn clearing_a_source_falls_back_to_baseline() {
        let app = app();

        let snapshot = json!({ "kpis": [], "headline": "All quiet." });
        app.clone()
            .oneshot(post_json("/api/summary", snapshot))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/summary")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let body = body_json(app.oneshot(get("/api/summary")).await.unwrap()).await;
        assert_eq!(body["is_baseline"], true);
    }

    #[tokio::test]
    async fn blank_kpi_id_is_rejected_with_422() {
        let snapshot = json!({
            "kpis": [{
                "id": "  ",
                "label": "Revenue",
                "value": "100",
                "format": "currency"
            }]
        });
        let response = app()
            .oneshot(post_json("/api/performance", snapshot))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("Kpi.id"));
    }

    #[tokio::test]
    async fn activity_feed_round_trip() {
        let app = app();

        let body = body_json(app.clone().oneshot(get("/api/activity-feed")).await.unwrap()).await;
        assert_eq!(body["is_baseline"], true);
        assert!(body["kpis"].as_array().unwrap().is_empty());

        let entries = json!([{
            "id": "act-100",
            "timestamp": "2026-08-14T09:00:00Z",
            "actor": "ops-import",
            "action": "Imported August actuals"
        }]);
        let response = app
            .clone()
            .oneshot(post_json("/api/activity-feed", entries))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let body = body_json(app.oneshot(get("/api/activity-feed")).await.unwrap()).await;
        assert_eq!(body["is_baseline"], false);
        assert_eq!(body["data"][0]["id"], "act-100");
    }
}
