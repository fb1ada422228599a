//! Content-generator proxy route.
//!
//! A stateless pass-through to the hosted completion service. The caller
//! owns pending/retry UX; a failed call is reported once, never retried
//! here.

use axum::{extract::State, routing::post, Json, Router};
use sleuth_core::{DraftError, DraftRequest, DraftResponse};

use crate::error::{ApiError, ApiResult};
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// POST /api/content-generator - Draft post text.
///
/// All body fields are optional; documented defaults are filled in before
/// dispatch. Missing service credentials and upstream failures both
/// surface as 500 with the `{ error, message }` body.
#[utoipa::path(
    post,
    path = "/api/content-generator",
    tag = "Drafts",
    security(("bearer" = [])),
    request_body = DraftRequest,
    responses(
        (status = 200, description = "Generated draft", body = DraftResponse),
        (status = 500, description = "Upstream failure or missing credentials", body = crate::error::ErrorBody),
    ),
)]
pub async fn generate(
    State(state): State<AppState>,
    _current: CurrentUser,
    Json(request): Json<DraftRequest>,
) -> ApiResult<Json<DraftResponse>> {
    let provider = state
        .drafts
        .as_ref()
        .ok_or_else(|| ApiError::from(DraftError::ProviderNotConfigured))?;

    let prompt = request.resolve();
    tracing::debug!(topic = %prompt.topic, words = prompt.word_count, "dispatching draft request");

    let content = provider.draft(&prompt).await.map_err(|e| {
        tracing::warn!(error = %e, "draft generation failed");
        ApiError::from(e)
    })?;

    Ok(Json(DraftResponse { content }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/content-generator", post(generate))
}
