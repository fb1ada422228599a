//! Sleuth Session - User State, History, and Comparison Selection
//!
//! The per-user mutable state around the catalogue: the authenticated
//! profile with its favorites (persisted on every mutation), the
//! recently-viewed history (append-to-front, deduplicated, capped), and the
//! transient comparison selector. Durable state goes through the
//! [`StateStore`] trait so the service uses JSON files on disk while tests
//! use an in-memory map.

pub mod compare;
pub mod history;
pub mod store;
pub mod user;

pub use compare::{ComparisonSelector, SelectorState, ToggleOutcome, MAX_COMPARE};
pub use history::{HistoryTracker, DEFAULT_RECENT_LIMIT, MAX_STORED};
pub use store::{
    read_json, write_json, InMemoryStore, JsonFileStore, StateStore, NOTEPAD_KEY, PROFILE_KEY,
    RECENT_KEY,
};
pub use user::UserStore;
