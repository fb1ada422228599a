//! Axum middleware for the authentication gate.
//!
//! Every route outside `/auth/login` and `/health` requires a session
//! token. Unauthenticated API calls get a structured 401; unauthenticated
//! browser routes are redirected to the login view.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated caller, injected into request extensions by
/// [`auth_middleware`] and extracted by handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub token: String,
    pub user_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(ApiError::unauthorized)
    }
}

/// Authentication middleware.
///
/// 1. Extracts `Authorization: Bearer <token>`
/// 2. Validates the token against the session registry
/// 3. Injects [`CurrentUser`] into request extensions on success
/// 4. On failure: 401 for `/api/*`, `303 See Other -> /login` otherwise
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = bearer_token(&request);

    let session = token
        .as_deref()
        .and_then(|token| state.sessions.validate(token));

    match (token, session) {
        (Some(token), Some(session)) => {
            request.extensions_mut().insert(CurrentUser {
                token,
                user_id: session.user_id,
            });
            next.run(request).await
        }
        (Some(_), None) => reject(&request, ApiError::invalid_token("Session expired or revoked")),
        (None, _) => reject(&request, ApiError::unauthorized()),
    }
}

fn bearer_token(request: &Request) -> Option<String> {
    request
        .headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn reject(request: &Request, error: ApiError) -> Response {
    if request.uri().path().starts_with("/api/") || request.uri().path().starts_with("/auth/") {
        error.into_response()
    } else {
        Redirect::to("/login").into_response()
    }
}
