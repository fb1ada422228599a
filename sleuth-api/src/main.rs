//! Sleuth API Server Entry Point
//!
//! Bootstraps configuration, loads and validates the catalogue, opens the
//! durable state store, and starts the Axum HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use sleuth_api::{create_api_router, ApiConfig, ApiError, ApiResult, AppState};
use sleuth_draft::{DraftProvider, OpenAiDraftProvider};
use sleuth_registry::Catalog;
use sleuth_session::{JsonFileStore, StateStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ApiResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ApiConfig::from_env();

    let catalog = load_catalog(&config)?;
    tracing::info!(entries = catalog.len(), "catalogue loaded");

    let store: Arc<dyn StateStore> = match &config.state_dir {
        Some(dir) => Arc::new(JsonFileStore::new(dir)),
        None => Arc::new(JsonFileStore::open_default().map_err(ApiError::from)?),
    };

    let drafts: Option<Arc<dyn DraftProvider>> = match config.openai_api_key.clone() {
        Some(key) => Some(Arc::new(OpenAiDraftProvider::new(
            key,
            config.draft_model.clone(),
        ))),
        None => {
            tracing::warn!(
                "OPENAI_API_KEY not set - the content-generator endpoint will report a \
                 configuration error"
            );
            None
        }
    };

    let state = AppState::new(Arc::new(catalog), store, drafts);
    let app: Router = create_api_router(state, &config);

    let addr = resolve_bind_addr()?;
    tracing::info!(%addr, "Starting Sleuth API server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::internal_error(format!("Failed to bind {}: {}", addr, e)))?;

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => {
            result.map_err(|e| ApiError::internal_error(format!("Server error: {}", e)))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

fn load_catalog(config: &ApiConfig) -> ApiResult<Catalog> {
    match &config.catalog_path {
        None => Ok(Catalog::builtin()),
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| {
                ApiError::configuration_error(format!(
                    "Failed to read catalogue file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            Catalog::from_toml(&text).map_err(ApiError::from)
        }
    }
}

fn resolve_bind_addr() -> ApiResult<SocketAddr> {
    let host = std::env::var("SLEUTH_API_BIND").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port_str = std::env::var("PORT")
        .ok()
        .or_else(|| std::env::var("SLEUTH_API_PORT").ok())
        .unwrap_or_else(|| "3003".to_string());
    let port = port_str
        .parse::<u16>()
        .map_err(|_| ApiError::invalid_input(format!("Invalid port value: {}", port_str)))?;

    let addr = format!("{}:{}", host, port);
    addr.parse::<SocketAddr>()
        .map_err(|e| ApiError::invalid_input(format!("Invalid bind address {}: {}", addr, e)))
}
