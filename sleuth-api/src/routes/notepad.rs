//! The assistant page's saved notepad.
//!
//! One durable key of free text. Corrupt durable content degrades to an
//! empty notepad and the corrupt copy is discarded.

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use sleuth_core::StorageError;
use sleuth_session::{read_json, write_json, NOTEPAD_KEY};

use crate::error::ApiResult;
use crate::middleware::CurrentUser;
use crate::state::AppState;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[derive(utoipa::ToSchema)]
pub struct Notepad {
    pub content: String,
}

/// GET /api/notepad - Load the saved notepad.
#[utoipa::path(
    get,
    path = "/api/notepad",
    tag = "Drafts",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Saved notepad (empty if never saved)", body = Notepad),
    ),
)]
pub async fn load(
    State(state): State<AppState>,
    _current: CurrentUser,
) -> ApiResult<Json<Notepad>> {
    match read_json::<Notepad>(state.store.as_ref(), NOTEPAD_KEY) {
        Ok(Some(notepad)) => Ok(Json(notepad)),
        Ok(None) => Ok(Json(Notepad::default())),
        Err(StorageError::Corrupt { reason, .. }) => {
            tracing::warn!(%reason, "discarding corrupt notepad state");
            let _ = state.store.remove(NOTEPAD_KEY);
            Ok(Json(Notepad::default()))
        }
        Err(e) => Err(e.into()),
    }
}

/// PUT /api/notepad - Persist the notepad.
#[utoipa::path(
    put,
    path = "/api/notepad",
    tag = "Drafts",
    security(("bearer" = [])),
    request_body = Notepad,
    responses(
        (status = 200, description = "Saved", body = Notepad),
    ),
)]
pub async fn save(
    State(state): State<AppState>,
    _current: CurrentUser,
    Json(notepad): Json<Notepad>,
) -> ApiResult<Json<Notepad>> {
    write_json(state.store.as_ref(), NOTEPAD_KEY, &notepad)?;
    Ok(Json(notepad))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/notepad", get(load).put(save))
}
