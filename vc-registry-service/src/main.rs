use service_core::observability::init_tracing;
use vc_registry_service::config::VcConfig;
use vc_registry_service::services::init_metrics;
use vc_registry_service::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration - fail fast if MONGO_URI is missing
    let config = VcConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        &config.service_name,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    )?;

    // Must run before any metric is recorded
    init_metrics()?;

    tracing::info!(
        service = %config.service_name,
        version = env!("CARGO_PKG_VERSION"),
        database = %config.mongodb.database,
        collection = %config.mongodb.collection,
        "Starting VC registry service"
    );

    let app = Application::build(config).await?;
    app.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    tracing::info!("Service shutdown complete");
    Ok(())
}
