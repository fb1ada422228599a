//! Sleuth API - HTTP Surface
//!
//! The composed route surface over the catalogue, user state, comparison
//! resolution, and the content-generator proxy. Everything except login
//! and health checks sits behind the session middleware; unauthenticated
//! browser navigation is redirected to the login view.

pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use auth::SessionManager;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ErrorBody, ErrorCode};
pub use middleware::CurrentUser;
pub use routes::create_api_router;
pub use state::AppState;
