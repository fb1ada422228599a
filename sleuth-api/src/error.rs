//! Error Types for the Sleuth API
//!
//! This module defines error handling for the API layer:
//! - ErrorCode enum for categorizing errors
//! - ApiError struct carrying code + detail message
//! - IntoResponse implementation for Axum HTTP responses
//!
//! Every error is serialized as `{ "error": ..., "message": ... }` with the
//! HTTP status the code maps to, matching the contract the client and the
//! content-generator consumers rely on.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use sleuth_core::{CatalogError, DraftError, SleuthError, StorageError};
use std::fmt;

// ============================================================================
// ERROR CODE ENUM
// ============================================================================

/// Error codes for API responses.
///
/// Each code maps to one HTTP status and a default user-facing summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================================================
    // Authentication Errors (401)
    // ========================================================================
    /// Request lacks valid authentication credentials
    Unauthorized,

    /// Session token is invalid or has been revoked
    InvalidToken,

    // ========================================================================
    // Validation Errors (400)
    // ========================================================================
    /// Request validation failed
    ValidationFailed,

    /// Request contains invalid input data
    InvalidInput,

    // ========================================================================
    // Not Found Errors (404)
    // ========================================================================
    /// Requested dashboard does not exist in the catalogue
    DashboardNotFound,

    /// Requested route does not exist
    RouteNotFound,

    // ========================================================================
    // Server Errors (500, 503)
    // ========================================================================
    /// Catalogue entry or service credentials are misconfigured
    ConfigurationError,

    /// The upstream content-draft call failed
    UpstreamFailure,

    /// Durable state store is unavailable
    StorageUnavailable,

    /// Internal server error
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::Unauthorized | ErrorCode::InvalidToken => StatusCode::UNAUTHORIZED,

            ErrorCode::ValidationFailed | ErrorCode::InvalidInput => StatusCode::BAD_REQUEST,

            ErrorCode::DashboardNotFound | ErrorCode::RouteNotFound => StatusCode::NOT_FOUND,

            ErrorCode::ConfigurationError
            | ErrorCode::UpstreamFailure
            | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,

            ErrorCode::StorageUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get the default summary for this error code.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::Unauthorized => "Authentication required",
            ErrorCode::InvalidToken => "Invalid session token",
            ErrorCode::ValidationFailed => "Request validation failed",
            ErrorCode::InvalidInput => "Invalid input data",
            ErrorCode::DashboardNotFound => "Dashboard not found",
            ErrorCode::RouteNotFound => "Route not found",
            ErrorCode::ConfigurationError => "Service configuration error",
            ErrorCode::UpstreamFailure => "Failed to generate content",
            ErrorCode::StorageUnavailable => "State store unavailable",
            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ============================================================================
// API ERROR STRUCT
// ============================================================================

/// Structured error for API operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

/// Wire shape of an error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[derive(utoipa::ToSchema)]
pub struct ErrorBody {
    /// Short summary of the failure class.
    pub error: String,
    /// Detail text, safe to display inline.
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self::new(ErrorCode::Unauthorized, "Authentication required")
    }

    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidToken, message)
    }

    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    pub fn dashboard_not_found(id: &str) -> Self {
        Self::new(
            ErrorCode::DashboardNotFound,
            format!("The dashboard '{id}' doesn't exist or has been moved."),
        )
    }

    pub fn route_not_found(path: &str) -> Self {
        Self::new(ErrorCode::RouteNotFound, format!("No such route: {path}"))
    }

    pub fn configuration_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigurationError, message)
    }

    pub fn upstream_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamFailure, message)
    }

    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageUnavailable, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }

    /// The serialized response body.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.code.default_message().to_string(),
            message: self.message.clone(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

// ============================================================================
// DOMAIN ERROR MAPPINGS
// ============================================================================

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { id } => ApiError::dashboard_not_found(&id),
            // Everything else is a malformed catalogue: a configuration
            // error, surfaced but never fatal to the process.
            other => ApiError::configuration_error(other.to_string()),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            // Corruption is recovered at the store layer; reaching here
            // means a caller skipped that recovery.
            StorageError::Corrupt { .. } => ApiError::internal_error(err.to_string()),
            other => ApiError::storage_unavailable(other.to_string()),
        }
    }
}

impl From<DraftError> for ApiError {
    fn from(err: DraftError) -> Self {
        match err {
            DraftError::ProviderNotConfigured => ApiError::configuration_error(
                "Content generation is not configured: missing service credentials",
            ),
            other => ApiError::upstream_failure(other.to_string()),
        }
    }
}

impl From<SleuthError> for ApiError {
    fn from(err: SleuthError) -> Self {
        match err {
            SleuthError::Catalog(e) => e.into(),
            SleuthError::Storage(e) => e.into(),
            SleuthError::Draft(e) => e.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
