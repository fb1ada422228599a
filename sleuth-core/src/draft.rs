//! Content-draft request types.
//!
//! The draft endpoint accepts a fully-optional request body; defaults are
//! filled in before dispatch so the upstream completion call always sees a
//! complete prompt.

use serde::{Deserialize, Serialize};

/// Default content category when the request omits one.
pub const DEFAULT_CONTENT_TYPE: &str = "industry_insight";
/// Default writing tone when the request omits one.
pub const DEFAULT_TONE: &str = "professional";
/// Default approximate word count when the request omits one.
pub const DEFAULT_WORD_COUNT: u32 = 300;
/// Default topic when the request omits a prompt.
pub const DEFAULT_TOPIC: &str = "power analytics";

// ============================================================================
// REQUEST / RESPONSE
// ============================================================================

/// Wire-level draft request. All fields optional; see [`DraftRequest::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DraftRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u32>,
}

/// Successful draft response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DraftResponse {
    pub content: String,
}

// ============================================================================
// RESOLVED PROMPT
// ============================================================================

/// A draft request with every field resolved to a concrete value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftPrompt {
    pub topic: String,
    pub content_type: String,
    pub tone: String,
    pub word_count: u32,
}

impl DraftRequest {
    /// Fill in documented defaults. Blank strings and a zero word count
    /// count as absent.
    pub fn resolve(&self) -> DraftPrompt {
        DraftPrompt {
            topic: non_blank(self.prompt.as_deref()).unwrap_or(DEFAULT_TOPIC).to_string(),
            content_type: non_blank(self.content_type.as_deref())
                .unwrap_or(DEFAULT_CONTENT_TYPE)
                .to_string(),
            tone: non_blank(self.tone.as_deref()).unwrap_or(DEFAULT_TONE).to_string(),
            word_count: self.word_count.filter(|w| *w > 0).unwrap_or(DEFAULT_WORD_COUNT),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl DraftPrompt {
    /// Render the single user-message prompt sent to the completion API.
    pub fn context_prompt(&self) -> String {
        format!(
            "Create a {} {} LinkedIn post about: {} that is approximately {} words long.",
            self.tone,
            self.content_type.replace('_', " "),
            self.topic,
            self.word_count
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_resolves_to_documented_defaults() {
        let prompt = DraftRequest::default().resolve();
        assert_eq!(prompt.topic, DEFAULT_TOPIC);
        assert_eq!(prompt.content_type, "industry_insight");
        assert_eq!(prompt.tone, "professional");
        assert_eq!(prompt.word_count, 300);
    }

    #[test]
    fn test_partial_request_keeps_given_fields() {
        let request = DraftRequest {
            prompt: Some("grid reliability".to_string()),
            word_count: Some(120),
            ..Default::default()
        };
        let prompt = request.resolve();
        assert_eq!(prompt.topic, "grid reliability");
        assert_eq!(prompt.word_count, 120);
        assert_eq!(prompt.content_type, "industry_insight");
        assert_eq!(prompt.tone, "professional");
    }

    #[test]
    fn test_blank_and_zero_fields_fall_back() {
        let request = DraftRequest {
            prompt: Some("   ".to_string()),
            tone: Some(String::new()),
            word_count: Some(0),
            ..Default::default()
        };
        let prompt = request.resolve();
        assert_eq!(prompt.topic, DEFAULT_TOPIC);
        assert_eq!(prompt.tone, DEFAULT_TONE);
        assert_eq!(prompt.word_count, DEFAULT_WORD_COUNT);
    }

    #[test]
    fn test_context_prompt_spells_out_content_type() {
        let prompt = DraftRequest {
            prompt: Some("storm hardening".to_string()),
            ..Default::default()
        }
        .resolve();
        assert_eq!(
            prompt.context_prompt(),
            "Create a professional industry insight LinkedIn post about: \
             storm hardening that is approximately 300 words long."
        );
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let request: DraftRequest =
            serde_json::from_str(r#"{"prompt":"p","contentType":"news","wordCount":50}"#).unwrap();
        assert_eq!(request.content_type.as_deref(), Some("news"));
        assert_eq!(request.word_count, Some(50));
    }
}
