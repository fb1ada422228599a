//! The dashboard catalogue: an immutable, insertion-ordered mapping from
//! dashboard id to its validated configuration.

use std::collections::HashMap;

use serde::Deserialize;
use sleuth_core::{
    CatalogError, ChildSource, DashboardConfig, IconName, Presentation,
};

/// Immutable dashboard catalogue.
///
/// `all()` preserves insertion order; `lookup()` is an index read. There
/// are no mutation operations: deployments that need a different catalogue
/// supply a TOML file at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<DashboardConfig>,
    index: HashMap<String, usize>,
}

/// On-disk catalogue file shape for [`Catalog::from_toml`].
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    dashboards: Vec<DashboardConfig>,
}

impl Catalog {
    /// Build a catalogue from entries, validating each one.
    ///
    /// Validation enforces what the type system cannot: unique ids,
    /// non-blank identifiers and titles, non-blank payload fields for the
    /// declared kind, and non-empty, duplicate-free child report lists.
    pub fn new(entries: Vec<DashboardConfig>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            validate_entry(entry)?;
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: entry.id.clone(),
                });
            }
        }
        Ok(Self { entries, index })
    }

    /// The built-in catalogue.
    pub fn builtin() -> Self {
        let entries = builtin_entries();
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            index.insert(entry.id.clone(), position);
        }
        Self { entries, index }
    }

    /// Load a deployment catalogue from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(text).map_err(|e| CatalogError::InvalidFile {
            reason: e.to_string(),
        })?;
        Self::new(file.dashboards)
    }

    /// Look up an entry by id.
    pub fn lookup(&self, id: &str) -> Option<&DashboardConfig> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    /// All entries, in insertion order.
    pub fn all(&self) -> &[DashboardConfig] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_entry(entry: &DashboardConfig) -> Result<(), CatalogError> {
    if entry.id.trim().is_empty() {
        return Err(CatalogError::MissingField {
            id: "<unnamed>".to_string(),
            field: "id",
        });
    }
    if entry.title.trim().is_empty() {
        return Err(CatalogError::MissingField {
            id: entry.id.clone(),
            field: "title",
        });
    }

    match &entry.presentation {
        Presentation::EmbeddedReport { embed_url } => {
            require(entry, embed_url, "embed_url")?;
        }
        Presentation::GeneratedAnalytics {
            embed_url,
            fallback_document_path,
            ..
        } => {
            require(entry, fallback_document_path, "fallback_document_path")?;
            if let Some(url) = embed_url {
                require(entry, url, "embed_url")?;
            }
        }
        Presentation::MultiReport { reports } => {
            if reports.is_empty() {
                return Err(CatalogError::EmptyReports {
                    id: entry.id.clone(),
                });
            }
            let mut seen = HashMap::with_capacity(reports.len());
            for child in reports {
                require(entry, &child.id, "reports.id")?;
                require(entry, &child.title, "reports.title")?;
                match &child.source {
                    ChildSource::EmbeddedReport { embed_url } => {
                        require(entry, embed_url, "reports.embed_url")?;
                    }
                    ChildSource::Document { document_path } => {
                        require(entry, document_path, "reports.document_path")?;
                    }
                }
                if seen.insert(child.id.clone(), ()).is_some() {
                    return Err(CatalogError::DuplicateChildId {
                        id: entry.id.clone(),
                        child_id: child.id.clone(),
                    });
                }
            }
        }
        Presentation::AiAssistant => {}
    }
    Ok(())
}

fn require(
    entry: &DashboardConfig,
    value: &str,
    field: &'static str,
) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::MissingField {
            id: entry.id.clone(),
            field,
        });
    }
    Ok(())
}

// ============================================================================
// BUILT-IN CATALOGUE
// ============================================================================

/// The six built-in dashboards. Embed URLs point at the reporting
/// deployments this hub aggregates; document paths are served from the
/// client's static assets.
pub fn builtin_entries() -> Vec<DashboardConfig> {
    use sleuth_core::ChildReport;

    vec![
        DashboardConfig {
            id: "linkedin".to_string(),
            title: "LinkedIn Analytics".to_string(),
            description: "Track LinkedIn engagement, followers, and post performance".to_string(),
            icon: IconName::Linkedin,
            presentation: Presentation::EmbeddedReport {
                embed_url: "https://app.powerbi.com/reportEmbed?reportId=f78bbeed-d785-4088-82df-6c5ca5e14c9e&autoAuth=true&ctid=81fe4302-0838-482a-b5d1-2db7126cf178".to_string(),
            },
        },
        DashboardConfig {
            id: "google-analytics".to_string(),
            title: "Google Analytics".to_string(),
            description: "Website traffic, user behavior, and conversion metrics".to_string(),
            icon: IconName::BarChart,
            presentation: Presentation::GeneratedAnalytics {
                embed_url: Some("https://lookerstudio.google.com/embed/reporting/1c566451-86f9-40e1-9ef1-90b8ffaea128/page/kIV1C".to_string()),
                fallback_document_path: "/Google_Analytics_Website.pdf".to_string(),
                prefer_fallback: true,
            },
        },
        DashboardConfig {
            id: "custom-reports".to_string(),
            title: "Custom Reports".to_string(),
            description: "Custom analytics reports".to_string(),
            icon: IconName::FileBarChart,
            presentation: Presentation::MultiReport {
                reports: vec![
                    ChildReport {
                        id: "powerbi-report".to_string(),
                        title: "PowerBI Dashboard".to_string(),
                        description: Some("PowerBI analytics dashboard with key metrics".to_string()),
                        source: ChildSource::EmbeddedReport {
                            embed_url: "https://app.powerbi.com/reportEmbed?reportId=d0d378cf-8db0-4029-bc94-5d4b47a882ab&autoAuth=true&ctid=81fe4302-0838-482a-b5d1-2db7126cf178".to_string(),
                        },
                    },
                    ChildReport {
                        id: "social-analytics".to_string(),
                        title: "Social Analytics".to_string(),
                        description: Some("Social media performance metrics and insights".to_string()),
                        source: ChildSource::Document {
                            document_path: "/Microsoft-Power-BI-Presentation.pdf".to_string(),
                        },
                    },
                    ChildReport {
                        id: "ga-jan-mar".to_string(),
                        title: "GA: Jan-Mar 2023".to_string(),
                        description: Some("Google Analytics report for January to March 2023".to_string()),
                        source: ChildSource::Document {
                            document_path: "/Google_Analytics_Jan_Mar.pdf".to_string(),
                        },
                    },
                    ChildReport {
                        id: "ga-feb15-mar15".to_string(),
                        title: "GA: Feb 15-Mar 15".to_string(),
                        description: Some("Google Analytics report for February 15 to March 15, 2023".to_string()),
                        source: ChildSource::Document {
                            document_path: "/Google_Analytics_Feb15_Mar15.pdf".to_string(),
                        },
                    },
                ],
            },
        },
        DashboardConfig {
            id: "planable".to_string(),
            title: "Content Calendar Analytics".to_string(),
            description: "Analyze content performance and scheduling efficiency".to_string(),
            icon: IconName::PieChart,
            presentation: Presentation::EmbeddedReport {
                embed_url: "https://plannable.io/reportEmbed?reportId=planable".to_string(),
            },
        },
        DashboardConfig {
            id: "odoo".to_string(),
            title: "Business Analytics".to_string(),
            description: "Access business operations and ERP analytics".to_string(),
            icon: IconName::Building,
            presentation: Presentation::EmbeddedReport {
                embed_url: "https://odoo.com/reportEmbed?reportId=odoo".to_string(),
            },
        },
        DashboardConfig {
            id: "ai-navigator".to_string(),
            title: "AI Content Assistant".to_string(),
            description: "AI-powered social media insights and content suggestions".to_string(),
            icon: IconName::Brain,
            presentation: Presentation::AiAssistant,
        },
    ]
}

// =============================================================================
// TESTS
// =============================================================================
