//! Draft provider implementations
//!
//! Concrete implementations of the [`DraftProvider`](crate::DraftProvider)
//! trait for hosted completion services.

pub mod openai;

pub use openai::OpenAiDraftProvider;

use sleuth_core::{DraftError, SleuthError};

pub(crate) fn request_failed(
    provider: &str,
    status: i32,
    message: impl Into<String>,
) -> SleuthError {
    SleuthError::Draft(DraftError::RequestFailed {
        provider: provider.to_string(),
        status,
        message: message.into(),
    })
}

pub(crate) fn rate_limited(provider: &str, retry_after_ms: i64) -> SleuthError {
    SleuthError::Draft(DraftError::RateLimited {
        provider: provider.to_string(),
        retry_after_ms,
    })
}

pub(crate) fn invalid_response(provider: &str, reason: impl Into<String>) -> SleuthError {
    SleuthError::Draft(DraftError::InvalidResponse {
        provider: provider.to_string(),
        reason: reason.into(),
    })
}
