use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use tolk::application::services::TranslationPipeline;
use tolk::infrastructure::observability::{TracingConfig, init_tracing};
use tolk::infrastructure::process::TokioProcessRunner;
use tolk::infrastructure::providers::ProviderSetFactory;
use tolk::infrastructure::storage::LocalArtifactStore;
use tolk::infrastructure::workspace::TempDirWorkspaceManager;
use tolk::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let providers = ProviderSetFactory::create(&settings.providers)
        .context("Provider configuration is incomplete")?;

    let artifact_store = Arc::new(
        LocalArtifactStore::new(PathBuf::from(&settings.storage.artifact_root))
            .context("Failed to prepare artifact store")?,
    );
    let workspace_manager = Arc::new(TempDirWorkspaceManager::new(PathBuf::from(
        &settings.storage.workspace_root,
    )));

    let pipeline = Arc::new(TranslationPipeline::new(
        providers,
        Arc::new(TokioProcessRunner),
        workspace_manager,
        artifact_store.clone(),
        settings.transcode.options(),
    ));

    tracing::info!(
        artifact_root = %settings.storage.artifact_root,
        workspace_root = %settings.storage.workspace_root,
        transcoder = %settings.transcode.command,
        "Translation pipeline ready"
    );

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState {
        pipeline,
        artifact_store,
        settings,
    };
    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
