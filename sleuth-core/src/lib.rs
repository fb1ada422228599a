//! Sleuth Core - Entity Types
//!
//! Pure data structures with no behavior beyond construction helpers.
//! All other crates depend on this. This crate contains ONLY data types
//! and the error taxonomy - no catalogue logic, no I/O.

pub mod dashboard;
pub mod draft;
pub mod error;
pub mod render;
pub mod user;

pub use dashboard::{
    ChildReport, ChildSource, DashboardConfig, IconName, Presentation, PresentationKind,
};
pub use draft::{
    DraftPrompt, DraftRequest, DraftResponse, DEFAULT_CONTENT_TYPE, DEFAULT_TONE, DEFAULT_TOPIC,
    DEFAULT_WORD_COUNT,
};
pub use error::{CatalogError, DraftError, SleuthError, SleuthResult, StorageError};
pub use render::{ComparisonPane, PaneContent, RenderPlan, ReportTab};
pub use user::{UserPreferences, UserProfile};

/// Dashboard identifier: catalogue-stable, used in routes, storage keys,
/// and comparison query parameters.
pub type DashboardId = String;
