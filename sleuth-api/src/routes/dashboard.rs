//! Dashboard catalogue and resolution routes.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sleuth_core::{DashboardConfig, RenderPlan, UserProfile};
use sleuth_session::DEFAULT_RECENT_LIMIT;

use crate::error::{ApiError, ApiResult};
use crate::middleware::CurrentUser;
use crate::state::AppState;

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    /// Free-text search term; blank returns the full catalogue.
    pub q: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[derive(utoipa::ToSchema)]
pub struct DashboardList {
    pub dashboards: Vec<DashboardConfig>,
    pub total: usize,
}

/// A resolved dashboard: the catalogue entry plus its render plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[derive(utoipa::ToSchema)]
pub struct ResolveResponse {
    pub dashboard: DashboardConfig,
    pub plan: RenderPlan,
}

// ============================================================================
// HANDLERS
// ============================================================================

/// GET /api/dashboards - List the catalogue, optionally filtered.
#[utoipa::path(
    get,
    path = "/api/dashboards",
    tag = "Dashboards",
    security(("bearer" = [])),
    params(("q" = Option<String>, Query, description = "Free-text filter")),
    responses(
        (status = 200, description = "Catalogue entries", body = DashboardList),
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    _current: CurrentUser,
    Query(query): Query<ListQuery>,
) -> Json<DashboardList> {
    let term = query.q.unwrap_or_default();
    let dashboards: Vec<DashboardConfig> = sleuth_registry::filter(state.catalog.all(), &term)
        .into_iter()
        .cloned()
        .collect();
    let total = dashboards.len();
    Json(DashboardList { dashboards, total })
}

/// GET /api/dashboards/recent - Recently viewed, resolved through the
/// catalogue. Unresolvable ids are dropped, never errors.
#[utoipa::path(
    get,
    path = "/api/dashboards/recent",
    tag = "Dashboards",
    security(("bearer" = [])),
    params(("limit" = Option<usize>, Query, description = "Maximum entries (default 3)")),
    responses(
        (status = 200, description = "Recently viewed entries", body = DashboardList),
    ),
)]
pub async fn recent(
    State(state): State<AppState>,
    _current: CurrentUser,
    Query(query): Query<RecentQuery>,
) -> Json<DashboardList> {
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    let dashboards = state.history.recent(&state.catalog, limit);
    let total = dashboards.len();
    Json(DashboardList { dashboards, total })
}

/// GET /api/dashboards/{id} - Resolve a dashboard to its render plan.
///
/// Recording the view is fire-and-forget: a failed history write is
/// logged and never blocks rendering.
#[utoipa::path(
    get,
    path = "/api/dashboards/{id}",
    tag = "Dashboards",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Dashboard id")),
    responses(
        (status = 200, description = "Resolved dashboard", body = ResolveResponse),
        (status = 404, description = "Unknown dashboard", body = crate::error::ErrorBody),
    ),
)]
pub async fn resolve(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ResolveResponse>> {
    let plan = sleuth_registry::resolve(&state.catalog, &id)?;

    if let Err(e) = state.history.record_view(&id) {
        tracing::warn!(dashboard = %id, error = %e, "failed to record view");
    }

    let dashboard = state
        .catalog
        .lookup(&id)
        .cloned()
        .ok_or_else(|| ApiError::dashboard_not_found(&id))?;

    Ok(Json(ResolveResponse { dashboard, plan }))
}

/// POST /api/dashboards/{id}/favorite - Toggle a favorite.
#[utoipa::path(
    post,
    path = "/api/dashboards/{id}/favorite",
    tag = "Dashboards",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Dashboard id")),
    responses(
        (status = 200, description = "Updated profile", body = UserProfile),
        (status = 401, description = "Not logged in", body = crate::error::ErrorBody),
        (status = 404, description = "Unknown dashboard", body = crate::error::ErrorBody),
    ),
)]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<UserProfile>> {
    if state.catalog.lookup(&id).is_none() {
        return Err(ApiError::dashboard_not_found(&id));
    }

    state
        .users
        .toggle_favorite(&id)?
        .map(Json)
        .ok_or_else(ApiError::unauthorized)
}

// ============================================================================
// ROUTER
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/dashboards", get(list))
        .route("/api/dashboards/recent", get(recent))
        .route("/api/dashboards/:id", get(resolve))
        .route("/api/dashboards/:id/favorite", post(toggle_favorite))
}
