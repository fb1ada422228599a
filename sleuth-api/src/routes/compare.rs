//! Comparison view resolution.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sleuth_core::ComparisonPane;

use crate::middleware::CurrentUser;
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct CompareQuery {
    /// Comma-separated dashboard ids, as produced by the comparison
    /// selector's commit.
    pub dashboards: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[derive(utoipa::ToSchema)]
pub struct CompareResponse {
    pub panes: Vec<ComparisonPane>,
}

/// GET /api/compare?dashboards=id1,id2 - Resolve a comparison route.
///
/// Each id resolves independently; unknown ids and entries without an
/// embeddable payload come back as explicit empty-state panes. A missing
/// or blank parameter yields an empty pane list for the client's
/// "no dashboards selected" state.
#[utoipa::path(
    get,
    path = "/api/compare",
    tag = "Compare",
    security(("bearer" = [])),
    params(("dashboards" = Option<String>, Query, description = "Comma-separated dashboard ids")),
    responses(
        (status = 200, description = "Comparison panes", body = CompareResponse),
    ),
)]
pub async fn compare(
    State(state): State<AppState>,
    _current: CurrentUser,
    Query(query): Query<CompareQuery>,
) -> Json<CompareResponse> {
    let param = query.dashboards.unwrap_or_default();
    let panes = sleuth_registry::resolve_comparison(&state.catalog, &param);
    Json(CompareResponse { panes })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/compare", get(compare))
}
