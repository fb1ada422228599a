//! Dashboard catalogue entry types.
//!
//! A catalogue entry is a discriminated union: the `kind` tag selects the
//! presentation strategy and each variant carries exactly the payload that
//! strategy needs. Payload requirements are enforced by the type system at
//! deserialization time and re-checked at catalogue load (empty strings,
//! duplicate ids), so render sites never probe optional fields.

use serde::{Deserialize, Serialize};

// ============================================================================
// ICONS
// ============================================================================

/// Closed set of tile icons.
///
/// The icon is resolved against the client icon set by name; keeping the set
/// closed turns an unknown icon name in a catalogue file into a load-time
/// deserialization error instead of a runtime lookup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum IconName {
    Linkedin,
    BarChart,
    FileBarChart,
    PieChart,
    Building,
    Brain,
}

// ============================================================================
// PRESENTATION UNION
// ============================================================================

/// Discriminator for the presentation union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum PresentationKind {
    EmbeddedReport,
    GeneratedAnalytics,
    MultiReport,
    AiAssistant,
}

/// Kind-specific payload of a catalogue entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Presentation {
    /// Third-party report rendered in an iframe at a fixed, trusted URL.
    EmbeddedReport { embed_url: String },

    /// Analytics view with a live embed and a locally-hosted static
    /// document. The live embed historically surfaces third-party login
    /// dialogs it cannot escape, so `prefer_fallback` defaults to true and
    /// the static document wins unless a deployment opts out.
    GeneratedAnalytics {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        embed_url: Option<String>,
        fallback_document_path: String,
        #[serde(default = "default_prefer_fallback")]
        prefer_fallback: bool,
    },

    /// Ordered collection of child reports rendered as tabs.
    MultiReport { reports: Vec<ChildReport> },

    /// The interactive assistant page; no remote payload.
    AiAssistant,
}

fn default_prefer_fallback() -> bool {
    true
}

impl Presentation {
    /// The declared kind of this payload.
    pub fn kind(&self) -> PresentationKind {
        match self {
            Presentation::EmbeddedReport { .. } => PresentationKind::EmbeddedReport,
            Presentation::GeneratedAnalytics { .. } => PresentationKind::GeneratedAnalytics,
            Presentation::MultiReport { .. } => PresentationKind::MultiReport,
            Presentation::AiAssistant => PresentationKind::AiAssistant,
        }
    }
}

// ============================================================================
// CHILD REPORTS
// ============================================================================

/// Content source of a child report inside a multi-report entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ChildSource {
    EmbeddedReport { embed_url: String },
    Document { document_path: String },
}

/// One tab of a multi-report entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ChildReport {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub source: ChildSource,
}

// ============================================================================
// CATALOGUE ENTRY
// ============================================================================

/// A catalogue entry describing one navigable dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DashboardConfig {
    /// Unique, stable identifier (route parameter, storage key member,
    /// comparison query member).
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: IconName,
    #[serde(flatten)]
    pub presentation: Presentation,
}

impl DashboardConfig {
    /// The declared presentation kind of this entry.
    pub fn kind(&self) -> PresentationKind {
        self.presentation.kind()
    }
}

// =============================================================================
// TESTS
// =============================================================================
