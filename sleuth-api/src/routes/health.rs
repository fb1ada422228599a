//! Health probes.
//!
//! `/health/ping` and `/health/live` answer as long as the process runs.
//! `/health/ready` exercises the durable state store: a deployment that
//! cannot reach its state directory still serves the catalogue but loses
//! favorites and history, so it is reported not-ready. No authentication.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use sleuth_session::RECENT_KEY;

use crate::state::AppState;

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Ok,
    Failing,
}

/// Body of the liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[derive(utoipa::ToSchema)]
pub struct ProbeReport {
    pub status: ProbeStatus,
    pub version: String,
    pub uptime_seconds: u64,
    /// Number of catalogue entries loaded at startup.
    pub catalog_entries: usize,
    /// Durable-store check; only the readiness probe fills this in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageProbe>,
}

/// Outcome of reading a known key from the durable store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[derive(utoipa::ToSchema)]
pub struct StorageProbe {
    pub status: ProbeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================================
// HANDLERS
// ============================================================================

/// GET /health/ping - Simple pong response
#[utoipa::path(
    get,
    path = "/health/ping",
    tag = "Health",
    responses(
        (status = 200, description = "Service is responding", body = String),
    ),
)]
pub async fn ping() -> impl IntoResponse {
    (StatusCode::OK, "pong")
}

/// GET /health/live - Process liveness check
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "Health",
    responses(
        (status = 200, description = "Process is alive", body = ProbeReport),
    ),
)]
pub async fn liveness(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(report(&state, None)))
}

/// GET /health/ready - Readiness check (durable store reachability)
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Service is ready", body = ProbeReport),
        (status = 503, description = "Service is not ready", body = ProbeReport),
    ),
)]
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let storage = probe_storage(&state);
    let code = match storage.status {
        ProbeStatus::Ok => StatusCode::OK,
        ProbeStatus::Failing => StatusCode::SERVICE_UNAVAILABLE,
    };
    (code, Json(report(&state, Some(storage))))
}

fn report(state: &AppState, storage: Option<StorageProbe>) -> ProbeReport {
    let status = match &storage {
        Some(probe) => probe.status,
        None => ProbeStatus::Ok,
    };
    ProbeReport {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        catalog_entries: state.catalog.len(),
        storage,
    }
}

/// Read a known key. A missing key is healthy; only an unreachable store
/// fails the probe.
fn probe_storage(state: &AppState) -> StorageProbe {
    let started = std::time::Instant::now();
    match state.store.read(RECENT_KEY) {
        Ok(_) => StorageProbe {
            status: ProbeStatus::Ok,
            latency_ms: Some(started.elapsed().as_millis() as u64),
            error: None,
        },
        Err(e) => StorageProbe {
            status: ProbeStatus::Failing,
            latency_ms: None,
            error: Some(e.to_string()),
        },
    }
}

// ============================================================================
// ROUTER
// ============================================================================

/// Create health check router (no auth required)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health/ping", get(ping))
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
}
