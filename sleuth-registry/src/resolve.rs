//! Presentation resolution.
//!
//! Turns a dashboard id into the kind-specific [`RenderPlan`] the view
//! layer renders. Resolution never panics: an unknown id is a typed
//! not-found error the caller turns into a redirect, and comparison
//! resolution degrades per id.

use sleuth_core::{
    CatalogError, ChildReport, ChildSource, ComparisonPane, DashboardConfig, PaneContent,
    Presentation, RenderPlan, ReportTab,
};

use crate::catalog::Catalog;

/// Empty-state message for a comparison pane whose id failed lookup.
const PANE_NOT_FOUND: &str = "Dashboard not found.";
/// Empty-state message for a pane whose entry has no embeddable payload.
const PANE_NOT_EMBEDDABLE: &str = "No embedded analytics available for this dashboard.";

/// Resolve a dashboard id to its render plan.
///
/// The resulting plan's kind always matches the catalogue entry's declared
/// presentation kind.
pub fn resolve(catalog: &Catalog, id: &str) -> Result<RenderPlan, CatalogError> {
    let entry = catalog
        .lookup(id)
        .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })?;
    Ok(plan_for(entry))
}

/// Build the render plan for a validated catalogue entry.
pub fn plan_for(entry: &DashboardConfig) -> RenderPlan {
    match &entry.presentation {
        Presentation::EmbeddedReport { embed_url } => RenderPlan::EmbeddedFrame {
            embed_url: embed_url.clone(),
        },
        Presentation::GeneratedAnalytics {
            embed_url,
            fallback_document_path,
            prefer_fallback,
        } => match embed_url {
            // The live embed is only attempted when the deployment opts
            // out of the fallback preference; the frame still carries the
            // document to recover to on load failure.
            Some(url) if !prefer_fallback => RenderPlan::FrameWithFallback {
                embed_url: url.clone(),
                fallback_document_path: fallback_document_path.clone(),
            },
            _ => RenderPlan::StaticDocument {
                document_path: fallback_document_path.clone(),
            },
        },
        Presentation::MultiReport { reports } => RenderPlan::TabbedReports {
            tabs: reports.iter().map(child_plan).collect(),
            selected: 0,
        },
        Presentation::AiAssistant => RenderPlan::AssistantPage,
    }
}

fn child_plan(child: &ChildReport) -> ReportTab {
    let plan = match &child.source {
        ChildSource::EmbeddedReport { embed_url } => RenderPlan::EmbeddedFrame {
            embed_url: embed_url.clone(),
        },
        ChildSource::Document { document_path } => RenderPlan::StaticDocument {
            document_path: document_path.clone(),
        },
    };
    ReportTab {
        id: child.id.clone(),
        title: child.title.clone(),
        description: child.description.clone(),
        plan,
    }
}

/// Resolve a comparison route's `dashboards` parameter into panes.
///
/// Each comma-separated id resolves independently; lookup failures and
/// entries without an embeddable payload become explicit empty-state panes
/// rather than errors. Blank segments are dropped.
pub fn resolve_comparison(catalog: &Catalog, dashboards_param: &str) -> Vec<ComparisonPane> {
    dashboards_param
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| match catalog.lookup(id) {
            None => ComparisonPane {
                id: id.to_string(),
                title: None,
                content: PaneContent::Unavailable {
                    message: PANE_NOT_FOUND.to_string(),
                },
            },
            Some(entry) => {
                let plan = plan_for(entry);
                let content = if plan.is_embeddable() {
                    PaneContent::Resolved { plan }
                } else {
                    PaneContent::Unavailable {
                        message: PANE_NOT_EMBEDDABLE.to_string(),
                    }
                };
                ComparisonPane {
                    id: entry.id.clone(),
                    title: Some(entry.title.clone()),
                    content,
                }
            }
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
