use anyhow::Context;
use domain_suggest::{build_app, config::AppConfig, run_server, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("domain_suggest=info,tower_http=info")),
        )
        .init();

    let cfg = AppConfig::from_env().context("invalid configuration")?;
    info!(model = %cfg.model, base_url = %cfg.base_url, "starting domain suggestion service");

    let app = build_app(AppState::from_config(&cfg));
    run_server(app, cfg.bind_addr()).await.context("server failed")
}
