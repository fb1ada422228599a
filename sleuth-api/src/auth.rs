//! Session token management.
//!
//! The identity provider is an external collaborator; the API consumes
//! only "is a user authenticated, and who" plus login/logout triggers.
//! Sessions here are opaque server-issued bearer tokens mapping to the
//! profile id. Tokens live for the process lifetime or until logout; the
//! durable profile outlives them.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

/// A live session record.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// In-process session registry.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: DashMap<String, Session>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token for a profile id.
    pub fn issue(&self, user_id: &str) -> String {
        let token = Uuid::new_v4().simple().to_string();
        self.sessions.insert(
            token.clone(),
            Session {
                user_id: user_id.to_string(),
                created_at: Utc::now(),
            },
        );
        token
    }

    /// Look up a token; `None` for unknown or revoked tokens.
    pub fn validate(&self, token: &str) -> Option<Session> {
        self.sessions.get(token).map(|entry| entry.value().clone())
    }

    /// Revoke a token. Returns whether it existed.
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Revoke every session for a profile id (logout clears all tabs).
    pub fn revoke_user(&self, user_id: &str) {
        self.sessions.retain(|_, session| session.user_id != user_id);
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_then_validate() {
        let sessions = SessionManager::new();
        let token = sessions.issue("1");

        let session = sessions.validate(&token).unwrap();
        assert_eq!(session.user_id, "1");
    }

    #[test]
    fn test_unknown_token_is_invalid() {
        let sessions = SessionManager::new();
        assert!(sessions.validate("deadbeef").is_none());
    }

    #[test]
    fn test_revoked_token_stops_validating() {
        let sessions = SessionManager::new();
        let token = sessions.issue("1");

        assert!(sessions.revoke(&token));
        assert!(sessions.validate(&token).is_none());
        assert!(!sessions.revoke(&token));
    }

    #[test]
    fn test_revoke_user_clears_every_session() {
        let sessions = SessionManager::new();
        let a = sessions.issue("1");
        let b = sessions.issue("1");
        let other = sessions.issue("2");

        sessions.revoke_user("1");
        assert!(sessions.validate(&a).is_none());
        assert!(sessions.validate(&b).is_none());
        assert!(sessions.validate(&other).is_some());
    }

    #[test]
    fn test_tokens_are_unique() {
        let sessions = SessionManager::new();
        assert_ne!(sessions.issue("1"), sessions.issue("1"));
    }
}
