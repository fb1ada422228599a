//! Resolved presentation types.
//!
//! A `RenderPlan` is what the resolution algorithm hands the view layer:
//! the kind-specific, fully-populated description of what to display for a
//! dashboard id. Plans are plain data; the view layer owns iframe/PDF
//! mechanics.

use serde::{Deserialize, Serialize};

use crate::dashboard::PresentationKind;

// ============================================================================
// RENDER PLAN
// ============================================================================

/// Resolved, kind-specific description of what to display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RenderPlan {
    /// Single iframe at a fixed URL.
    EmbeddedFrame { embed_url: String },

    /// Locally-hosted static document (PDF viewer).
    StaticDocument { document_path: String },

    /// Live embed with a static document to fall back to if the frame
    /// reports a load failure.
    FrameWithFallback {
        embed_url: String,
        fallback_document_path: String,
    },

    /// Tabbed multi-report view. `selected` is the initial tab index and
    /// is always 0 at resolution time; switching tabs is client-local
    /// state and never persisted.
    TabbedReports {
        tabs: Vec<ReportTab>,
        selected: usize,
    },

    /// The dedicated interactive assistant page.
    AssistantPage,
}

/// One resolved tab of a [`RenderPlan::TabbedReports`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReportTab {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[cfg_attr(feature = "openapi", schema(no_recursion))]
    pub plan: RenderPlan,
}

impl RenderPlan {
    /// The presentation kind this plan realizes. Used to assert that
    /// resolution preserves the catalogue entry's declared kind.
    pub fn kind(&self) -> PresentationKind {
        match self {
            RenderPlan::EmbeddedFrame { .. } => PresentationKind::EmbeddedReport,
            RenderPlan::StaticDocument { .. } | RenderPlan::FrameWithFallback { .. } => {
                PresentationKind::GeneratedAnalytics
            }
            RenderPlan::TabbedReports { .. } => PresentationKind::MultiReport,
            RenderPlan::AssistantPage => PresentationKind::AiAssistant,
        }
    }

    /// Whether this plan carries content a comparison pane can embed.
    ///
    /// Tabbed and assistant plans have no single embeddable payload and
    /// degrade to an explicit empty state in comparison views.
    pub fn is_embeddable(&self) -> bool {
        matches!(
            self,
            RenderPlan::EmbeddedFrame { .. }
                | RenderPlan::StaticDocument { .. }
                | RenderPlan::FrameWithFallback { .. }
        )
    }
}

// ============================================================================
// COMPARISON PANES
// ============================================================================

/// Content of one side of a comparison view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum PaneContent {
    Resolved { plan: RenderPlan },
    /// Lookup failed or the entry has no embeddable payload. The message
    /// is the user-facing empty-state text.
    Unavailable { message: String },
}

/// Per-id outcome of resolving a comparison route.
///
/// Each requested id resolves independently; one unresolvable id never
/// poisons the other pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ComparisonPane {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub content: PaneContent,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_kind_mapping() {
        let frame = RenderPlan::EmbeddedFrame {
            embed_url: "https://example.com/e".to_string(),
        };
        assert_eq!(frame.kind(), PresentationKind::EmbeddedReport);

        let doc = RenderPlan::StaticDocument {
            document_path: "/ga.pdf".to_string(),
        };
        assert_eq!(doc.kind(), PresentationKind::GeneratedAnalytics);

        let tabs = RenderPlan::TabbedReports {
            tabs: vec![],
            selected: 0,
        };
        assert_eq!(tabs.kind(), PresentationKind::MultiReport);

        assert_eq!(RenderPlan::AssistantPage.kind(), PresentationKind::AiAssistant);
    }

    #[test]
    fn test_embeddable_plans() {
        assert!(RenderPlan::StaticDocument {
            document_path: "/a.pdf".to_string()
        }
        .is_embeddable());
        assert!(!RenderPlan::AssistantPage.is_embeddable());
        assert!(!RenderPlan::TabbedReports {
            tabs: vec![],
            selected: 0
        }
        .is_embeddable());
    }

    #[test]
    fn test_pane_serialization_carries_status_tag() {
        let pane = ComparisonPane {
            id: "odoo".to_string(),
            title: Some("Business Analytics".to_string()),
            content: PaneContent::Unavailable {
                message: "No embedded analytics available for this dashboard.".to_string(),
            },
        };
        let json = serde_json::to_string(&pane).unwrap();
        assert!(json.contains("\"status\":\"unavailable\""));
        assert!(json.contains("\"id\":\"odoo\""));
    }

    #[test]
    fn test_tabbed_plan_round_trip() {
        let plan = RenderPlan::TabbedReports {
            tabs: vec![ReportTab {
                id: "powerbi-report".to_string(),
                title: "PowerBI Dashboard".to_string(),
                description: None,
                plan: RenderPlan::EmbeddedFrame {
                    embed_url: "https://example.com/e".to_string(),
                },
            }],
            selected: 0,
        };
        let json = serde_json::to_string(&plan).unwrap();
        let back: RenderPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
