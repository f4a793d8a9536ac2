//! Domain name suggestion service.
//!
//! `POST /generate` forwards a free-text business description to a
//! structured-completion service together with fixed brand-strategy
//! instructions, and relays the parsed suggestions plus token and timing
//! metadata back to the caller.

pub mod api;
pub mod client;
pub mod completion;
pub mod config;
pub mod error;
pub mod openai;
pub mod prompt;
pub mod suggestions;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::signal;
use tracing::info;

use crate::completion::{CompletionService, OutputFormat};
use crate::config::AppConfig;
use crate::openai::OpenAiResponses;

/// Immutable per-process state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionService>,
    pub instructions: Arc<str>,
    pub format: Arc<OutputFormat>,
    pub suggestion_count: usize,
}

impl AppState {
    /// State with the default brand-strategy prompt and output schema.
    pub fn new(completion: Arc<dyn CompletionService>) -> Self {
        Self {
            completion,
            instructions: prompt::brand_strategy_instructions(prompt::SUGGESTION_COUNT).into(),
            format: Arc::new(suggestions::output_format()),
            suggestion_count: prompt::SUGGESTION_COUNT,
        }
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        Self::new(Arc::new(OpenAiResponses::from_config(cfg)))
    }
}

pub fn build_app(state: AppState) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received");
}
