use axum::{extract::State, Json};
use serde_json::json;

use crate::error::ApiError;
use crate::SharedState;

pub async fn livez() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn readyz(State(state): State<SharedState>) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.readiness.load(std::sync::atomic::Ordering::SeqCst) {
        return Err(ApiError::ServiceUnavailable("shutting_down".into()));
    }

    // Exercise the storage collaborator with a cheap point lookup.
    state
        .store
        .get_by_id("readyz-probe")
        .await
        .map_err(|err| ApiError::ServiceUnavailable(format!("store check failed: {err}")))?;

    Ok(Json(json!({
        "status": "ok",
        "store": "ok",
        "application": env!("CARGO_PKG_NAME"),
    })))
}
