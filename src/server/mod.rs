//! HTTP boundary: route definitions, shared state, and error mapping.

mod error;
mod handlers;

pub use error::ApiError;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::sources::{ArxivSource, Source};
use crate::store::{StoreError, UploadStore};
use crate::summarizer::OllamaClient;

/// Shared per-process state. Requests share nothing mutable beyond the
/// upload directory itself.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: UploadStore,
    pub ollama: OllamaClient,
    pub source: Arc<dyn Source>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, StoreError> {
        let store = UploadStore::new(&config.uploads.dir)?;
        let ollama = OllamaClient::new(&config.backend);
        Ok(Self {
            config: Arc::new(config),
            store,
            ollama,
            source: Arc::new(ArxivSource::new()),
        })
    }

    /// Replace the remote source (for testing).
    #[allow(dead_code)]
    pub fn with_source(mut self, source: Arc<dyn Source>) -> Self {
        self.source = source;
        self
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let max_upload = state.config.uploads.max_file_size_bytes();

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/upload-and-summarize", post(handlers::upload_and_summarize))
        .route("/upload-paper", post(handlers::upload_paper))
        .route("/arxiv-paper", post(handlers::arxiv_paper))
        .route("/summarize", post(handlers::summarize_paper))
        .route("/related-work/{paper_id}", get(handlers::related_work))
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the HTTP server until shutdown.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config)?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
