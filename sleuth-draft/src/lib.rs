//! Sleuth Draft - Content-Draft Provider Abstraction
//!
//! Provider-agnostic trait for turning a resolved draft prompt into post
//! text, plus the OpenAI-backed implementation and a deterministic mock
//! for tests. The provider holds no state beyond the current request; the
//! caller owns pending/retry UX and discards a result that arrives after
//! the user has navigated away.

use async_trait::async_trait;
use sleuth_core::{DraftError, DraftPrompt, SleuthError, SleuthResult};

pub mod providers;

pub use providers::openai::OpenAiDraftProvider;

// ============================================================================
// DRAFT PROVIDER TRAIT
// ============================================================================

/// Trait for content-draft providers.
/// Implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait DraftProvider: Send + Sync {
    /// Generate draft post text for a resolved prompt.
    ///
    /// # Returns
    /// * `Ok(String)` - The generated draft
    /// * `Err(SleuthError::Draft)` - If the upstream call fails
    async fn draft(&self, prompt: &DraftPrompt) -> SleuthResult<String>;

    /// Identifier of the backing service, for logs and error messages.
    fn provider_id(&self) -> &str;
}

// ============================================================================
// MOCK PROVIDER FOR TESTING
// ============================================================================

/// Deterministic mock provider.
///
/// Echoes the rendered context prompt so tests can assert that defaults
/// were filled in before dispatch. Can be configured to fail.
#[derive(Debug, Clone, Default)]
pub struct MockDraftProvider {
    failure: Option<DraftError>,
}

impl MockDraftProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock that fails every call with the given error.
    pub fn failing(error: DraftError) -> Self {
        Self {
            failure: Some(error),
        }
    }
}

#[async_trait]
impl DraftProvider for MockDraftProvider {
    async fn draft(&self, prompt: &DraftPrompt) -> SleuthResult<String> {
        if let Some(error) = &self.failure {
            return Err(SleuthError::Draft(error.clone()));
        }
        Ok(format!("[mock draft] {}", prompt.context_prompt()))
    }

    fn provider_id(&self) -> &str {
        "mock"
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sleuth_core::DraftRequest;

    #[tokio::test]
    async fn test_mock_echoes_resolved_prompt() {
        let provider = MockDraftProvider::new();
        let prompt = DraftRequest {
            prompt: Some("grid reliability".to_string()),
            word_count: Some(120),
            ..Default::default()
        }
        .resolve();

        let draft = provider.draft(&prompt).await.unwrap();
        // Defaults must be filled in before dispatch.
        assert!(draft.contains("professional"));
        assert!(draft.contains("industry insight"));
        assert!(draft.contains("grid reliability"));
        assert!(draft.contains("120"));
    }

    #[tokio::test]
    async fn test_mock_is_deterministic() {
        let provider = MockDraftProvider::new();
        let prompt = DraftRequest::default().resolve();
        let a = provider.draft(&prompt).await.unwrap();
        let b = provider.draft(&prompt).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_failing_mock_surfaces_configured_error() {
        let provider = MockDraftProvider::failing(DraftError::RequestFailed {
            provider: "mock".to_string(),
            status: 500,
            message: "boom".to_string(),
        });
        let prompt = DraftRequest::default().resolve();

        let err = provider.draft(&prompt).await.unwrap_err();
        assert!(matches!(
            err,
            SleuthError::Draft(DraftError::RequestFailed { status: 500, .. })
        ));
    }
}
