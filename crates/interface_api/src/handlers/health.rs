//! Liveness and readiness probes

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct ProbeResponse {
    status: &'static str,
    version: &'static str,
}

impl ProbeResponse {
    fn with_status(status: &'static str) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Liveness probe. Succeeds whenever the process is serving requests.
pub async fn health_check() -> Json<ProbeResponse> {
    Json(ProbeResponse::with_status("healthy"))
}

/// Readiness probe. Additionally verifies a round-trip to the store.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<ProbeResponse>, StatusCode> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.pool)
        .await
        .map_err(|_| StatusCode::SERVICE_UNAVAILABLE)?;

    Ok(Json(ProbeResponse::with_status("ready")))
}
