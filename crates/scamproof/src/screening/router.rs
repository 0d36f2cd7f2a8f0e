use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tracing::debug;

use super::{RiskEngine, RiskVerdict, RuleBook};

/// Router builder exposing offer analysis and the active rule catalogue.
pub fn screening_router(engine: Arc<RiskEngine>) -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/api/v1/rules", get(rules_handler))
        .with_state(engine)
}

/// Pulls `text` out of a request body, treating anything unusable as empty.
pub(crate) fn offer_text(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|payload| {
            payload
                .get("text")
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_default()
}

pub(crate) async fn analyze_handler(
    State(engine): State<Arc<RiskEngine>>,
    body: Bytes,
) -> Json<RiskVerdict> {
    let text = offer_text(&body);
    let verdict = engine.evaluate(&text);

    debug!(
        score = verdict.score,
        flags = verdict.flags.len(),
        chars = text.chars().count(),
        "offer screened"
    );

    Json(verdict)
}

pub(crate) async fn rules_handler(State(engine): State<Arc<RiskEngine>>) -> Json<RuleBook> {
    Json(engine.rules().clone())
}
