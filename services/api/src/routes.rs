use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use scamproof::screening::{screening_router, RiskEngine};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_operational_routes(engine: Arc<RiskEngine>) -> axum::Router {
    screening_router(engine)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::extract::DefaultBodyLimit;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn build_app(ready: bool, body_limit: usize) -> axum::Router {
        let recorder = PrometheusBuilder::new().build_recorder();
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
        };

        with_operational_routes(Arc::new(RiskEngine::standard()))
            .layer(DefaultBodyLimit::max(body_limit))
            .layer(Extension(state))
    }

    async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.expect("router dispatch");
        let status = response.status();
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        (status, payload)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, payload) = send(build_app(true, 1024), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn readiness_tracks_flag() {
        let (status, payload) = send(build_app(false, 1024), get("/ready")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload, json!({ "status": "initializing" }));

        let (status, payload) = send(build_app(true, 1024), get("/ready")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload, json!({ "status": "ready" }));
    }

    #[tokio::test]
    async fn analyze_is_mounted_with_operational_routes() {
        let request = Request::builder()
            .method("POST")
            .uri("/analyze")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"text":"Act now and cash this cheque"}"#))
            .expect("request");

        let (status, payload) = send(build_app(true, 1024), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["score"], 65);
        assert_eq!(
            payload["next_steps"],
            "Do not send money or personal info. Verify independently."
        );
    }

    #[tokio::test]
    async fn oversized_bodies_are_rejected() {
        let text = "a".repeat(4096);
        let request = Request::builder()
            .method("POST")
            .uri("/analyze")
            .body(Body::from(format!(r#"{{"text":"{text}"}}"#)))
            .expect("request");

        let (status, _) = send(build_app(true, 1024), request).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }
}
