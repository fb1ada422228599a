//! User profile and preferences.

use serde::{Deserialize, Serialize};

use crate::DashboardId;

/// Mutable per-user preferences, persisted with the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserPreferences {
    /// Favorite dashboard ids. Duplicate-free and insertion-ordered;
    /// membership toggles rather than appends.
    #[serde(default)]
    pub favorite_reports: Vec<DashboardId>,
}

/// The authenticated identity, as consumed from the identity boundary.
///
/// Created at login, persisted to the durable store on every mutation,
/// rehydrated at startup. An unparseable durable copy is discarded and the
/// user is treated as logged out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub preferences: UserPreferences,
}

impl UserProfile {
    /// The demo identity issued by the built-in login. The external
    /// identity provider is an out-of-scope collaborator; the core only
    /// consumes id/name/email plus login/logout triggers.
    pub fn demo(email: impl Into<String>) -> Self {
        Self {
            id: "1".to_string(),
            name: "Demo User".to_string(),
            email: email.into(),
            role: "user".to_string(),
            preferences: UserPreferences::default(),
        }
    }

    /// Whether `id` is currently a favorite.
    pub fn has_favorite(&self, id: &str) -> bool {
        self.preferences.favorite_reports.iter().any(|f| f == id)
    }

    /// Toggle membership of `id` in the favorites set: add if absent,
    /// remove if present. Two toggles of the same id restore the original
    /// set.
    pub fn toggle_favorite(&mut self, id: &str) {
        if self.has_favorite(id) {
            self.preferences.favorite_reports.retain(|f| f != id);
        } else {
            self.preferences.favorite_reports.push(id.to_string());
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
