//! Health check handler.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crudhub_core::error::AppError;
use crudhub_core::result::AppResult;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the endpoint answers 200.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Active repository provider.
    pub provider: String,
    /// Seconds since the server started.
    pub uptime_seconds: u64,
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let reachable = match state.repositories.health_check().await {
        Ok(reachable) => reachable,
        Err(e) => {
            warn!(error = %e, "Repository health check failed");
            false
        }
    };
    if !reachable {
        return Err(AppError::service_unavailable("Database is unreachable"));
    }

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider: state.repositories.provider().to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    }))
}
