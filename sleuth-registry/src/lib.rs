//! Sleuth Registry - Dashboard Catalogue & Presentation Resolution
//!
//! The catalogue is configuration, not a database: it is loaded and
//! validated once at process start and is immutable for the lifetime of the
//! running service. This crate owns that load/validate step, free-text
//! search over the catalogue, and the resolution algorithm that turns a
//! dashboard id into a kind-specific render plan.

pub mod catalog;
pub mod resolve;
pub mod search;

pub use catalog::Catalog;
pub use resolve::{resolve, resolve_comparison};
pub use search::filter;
