use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};

use pod_doctor::app_state::build_app_state;
use pod_doctor::config::AppConfig;
use pod_doctor::core::client::cluster_reader::KubeClusterReader;
use pod_doctor::core::client::kube_client::build_kube_client;
use pod_doctor::core::client::llm_client::OpenAiCompletionClient;
use pod_doctor::routes::app_router;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let _log_guard = pod_doctor::logging::init(config.log_dir.as_deref());

    if let Err(e) = run(config).await {
        error!("❌ pod-doctor stopped: {:#}", e);
        return Err(e);
    }
    Ok(())
}

async fn run(config: AppConfig) -> Result<()> {
    info!(
        "🚀 Starting pod-doctor (model={}, token={})",
        config.llm.model,
        config.llm.masked_token()
    );

    let client = build_kube_client()
        .await
        .context("Failed to build Kubernetes client")?;
    let reader = Arc::new(KubeClusterReader::new(client, config.log_tail_lines));
    let completion = Arc::new(OpenAiCompletionClient::new(config.llm.clone())?);

    let state = build_app_state(reader, completion);
    let app = app_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.server_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server_addr))?;
    info!("Listening on {}", config.server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
