//! Web module for ytnotes
//!
//! Serves the single-page form: a link input, a thumbnail preview and the
//! generated notes or an error message.

mod error;
mod handlers;
mod page;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::notes::NotesPipeline;

pub use error::WebError;
pub use page::escape_html;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<NotesPipeline>,
}

impl AppState {
    pub fn new(pipeline: NotesPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

/// Create the form router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/notes", post(handlers::create_notes))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the form until Ctrl-C.
pub async fn serve(state: AppState, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Web form listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")?;

    info!("Web form stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
