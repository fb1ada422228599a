//! API Configuration Module
//!
//! Configuration is loaded from environment variables with development
//! defaults. The catalogue, the state directory, and the upstream
//! completion credentials are all deployment concerns; the built-in
//! catalogue and platform data directory apply when nothing is set.

use std::path::PathBuf;

use secrecy::SecretString;

/// Default completion model when `SLEUTH_DRAFT_MODEL` is unset.
pub const DEFAULT_DRAFT_MODEL: &str = "gpt-3.5-turbo";

/// API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Allowed CORS origins (comma-separated in the env var).
    /// Empty means allow all origins (dev mode).
    pub cors_origins: Vec<String>,

    /// Override for the durable state directory. `None` uses the
    /// platform-local data directory.
    pub state_dir: Option<PathBuf>,

    /// Optional TOML catalogue file replacing the built-in catalogue.
    pub catalog_path: Option<PathBuf>,

    /// Upstream completion API key. `None` disables content drafting;
    /// the endpoint then reports a configuration error.
    pub openai_api_key: Option<SecretString>,

    /// Completion model for the draft provider.
    pub draft_model: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(), // Empty = allow all
            state_dir: None,
            catalog_path: None,
            openai_api_key: None,
            draft_model: DEFAULT_DRAFT_MODEL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `SLEUTH_CORS_ORIGINS`: Comma-separated allowed origins (empty = allow all)
    /// - `SLEUTH_STATE_DIR`: Durable state directory override
    /// - `SLEUTH_CATALOG_PATH`: TOML catalogue file override
    /// - `OPENAI_API_KEY`: Upstream completion credentials
    /// - `SLEUTH_DRAFT_MODEL`: Completion model (default: gpt-3.5-turbo)
    pub fn from_env() -> Self {
        let cors_origins = std::env::var("SLEUTH_CORS_ORIGINS")
            .map(|raw| parse_cors_origins(&raw))
            .unwrap_or_default();

        let state_dir = std::env::var("SLEUTH_STATE_DIR").ok().map(PathBuf::from);
        let catalog_path = std::env::var("SLEUTH_CATALOG_PATH").ok().map(PathBuf::from);

        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(SecretString::from);

        let draft_model = std::env::var("SLEUTH_DRAFT_MODEL")
            .ok()
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DRAFT_MODEL.to_string());

        Self {
            cors_origins,
            state_dir,
            catalog_path,
            openai_api_key,
            draft_model,
        }
    }

    /// Check if running with a restricted CORS origin list.
    pub fn is_cors_restricted(&self) -> bool {
        !self.cors_origins.is_empty()
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_cors_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}
