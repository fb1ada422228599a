//! Login, logout, and profile routes.
//!
//! Login overwrites and persists the profile, then issues a session
//! token. Logout revokes the caller's sessions and clears both in-memory
//! and durable state; the response tells the client where to navigate.

use axum::{extract::State, routing::get, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use sleuth_core::UserProfile;

use crate::error::{ApiError, ApiResult};
use crate::middleware::CurrentUser;
use crate::state::AppState;

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[derive(utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[derive(utoipa::ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[derive(utoipa::ToSchema)]
pub struct LogoutResponse {
    /// Where the client should navigate after a completed logout.
    pub redirect_to: String,
}

// ============================================================================
// HANDLERS
// ============================================================================

/// POST /auth/login - Demo login.
///
/// Any non-empty email/password pair authenticates as the demo identity;
/// the external identity provider owns real credential checks and is out
/// of scope here.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 400, description = "Missing credentials", body = crate::error::ErrorBody),
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    if request.email.trim().is_empty() || request.password.trim().is_empty() {
        return Err(ApiError::validation_failed(
            "Email and password are required",
        ));
    }

    let profile = state
        .users
        .login(UserProfile::demo(request.email.trim()))?;
    let token = state.sessions.issue(&profile.id);

    tracing::info!(user = %profile.email, "user logged in");
    Ok(Json(LoginResponse {
        token,
        user: profile,
    }))
}

/// POST /auth/logout - Revoke the caller's sessions and clear state.
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "Auth",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Logged out", body = LogoutResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorBody),
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    current: CurrentUser,
) -> ApiResult<Json<LogoutResponse>> {
    state.sessions.revoke_user(&current.user_id);
    state.users.logout()?;

    tracing::info!(user_id = %current.user_id, "user logged out");
    Ok(Json(LogoutResponse {
        redirect_to: "/login".to_string(),
    }))
}

/// GET /auth/profile - The current profile.
#[utoipa::path(
    get,
    path = "/auth/profile",
    tag = "Auth",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current profile", body = UserProfile),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorBody),
    ),
)]
pub async fn profile(
    State(state): State<AppState>,
    _current: CurrentUser,
) -> ApiResult<Json<UserProfile>> {
    state
        .users
        .current()
        .map(Json)
        .ok_or_else(ApiError::unauthorized)
}

// ============================================================================
// ROUTERS
// ============================================================================

/// Routes reachable without a session.
pub fn public_router() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

/// Routes behind the authentication gate.
pub fn protected_router() -> Router<AppState> {
    Router::new()
        .route("/auth/logout", post(logout))
        .route("/auth/profile", get(profile))
}
