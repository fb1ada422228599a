//! REST API Routes Module
//!
//! Route handlers organized by surface area, plus the composed router:
//! - Auth (demo login, logout, profile)
//! - Dashboards (catalogue listing/search, recent, resolution, favorites)
//! - Compare (side-by-side resolution)
//! - Drafts (content-generator proxy, notepad)
//! - Health (no auth)
//!
//! Everything except `/auth/login` and `/health/*` sits behind the
//! session middleware.

pub mod auth;
pub mod compare;
pub mod dashboard;
pub mod draft;
pub mod health;
pub mod notepad;

use axum::{
    http::{HeaderValue, Method},
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::middleware::auth_middleware;
use crate::openapi::ApiDoc;
use crate::state::AppState;

// ============================================================================
// OPENAPI ENDPOINT
// ============================================================================

/// Handler for /openapi.json endpoint.
async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

// ============================================================================
// FALLBACK + LOGIN TARGET
// ============================================================================

/// Catch-all: a structured 404 so an unknown route never renders as a
/// blank failure. Registered behind the auth gate, so unauthenticated
/// navigation to any unknown route redirects to the login view instead.
async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::route_not_found(uri.path())
}

/// GET /login - the redirect target for unauthenticated navigation.
///
/// The login view itself is client-rendered; this endpoint exists so the
/// redirect resolves and tells API consumers where to authenticate.
async fn login_view() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Authentication required",
        "login_endpoint": "/auth/login"
    }))
}

// ============================================================================
// ROUTER ASSEMBLY
// ============================================================================

/// Build the CORS layer from configuration. An empty origin list is dev
/// mode: allow everything.
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers(Any);

    if config.cors_origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();
        layer.allow_origin(origins)
    }
}

/// Create the full API router.
pub fn create_api_router(state: AppState, config: &ApiConfig) -> Router {
    let protected = Router::new()
        .merge(auth::protected_router())
        .merge(dashboard::router())
        .merge(compare::router())
        .merge(draft::router())
        .merge(notepad::router())
        .fallback(not_found)
        .layer(from_fn_with_state(state.clone(), auth_middleware));

    let router = Router::new()
        .merge(health::router())
        .merge(auth::public_router())
        .route("/login", get(login_view))
        .route("/openapi.json", get(openapi_json))
        .merge(protected);

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        // A distinct document path: /openapi.json is already a plain route.
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
