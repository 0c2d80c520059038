//! Kanri HTTP server entry point.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use kanri::domain::{ProjectService, TaskIntakeService, TaskRequestParser};
use kanri::server::{build_router, AppState};
use kanri::storage::{FileStorage, Storage};
use kanri::{AnthropicProvider, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let api_key = config
        .anthropic_api_key
        .clone()
        .context("ANTHROPIC_API_KEY is not set")?;
    let provider = Arc::new(AnthropicProvider::new(
        api_key,
        config.model.clone(),
        config.model_timeout,
    )?);

    let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(&config.data_dir));

    let parser = TaskRequestParser::new(provider, config.holidays.clone());
    let state = AppState {
        intake: Arc::new(TaskIntakeService::new(parser, Arc::clone(&storage))),
        projects: Arc::new(ProjectService::new(Arc::clone(&storage))),
        storage,
    };

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, model = %config.model, "kanri server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
