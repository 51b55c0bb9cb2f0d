//! Interactive terminal search client.
//!
//! All tracing/diagnostic output goes to stderr so that stdout remains a
//! clean rendering channel for the UI.

use hyperserp::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise tracing to stderr only (stdout is reserved for the UI).
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = AppConfig::load().map_err(|e| anyhow::anyhow!("failed to load config: {e}"))?;
    tracing::info!(base_url = %config.search.base_url, "hyperserp starting");

    hyperserp::ui::run(config).await.map_err(|e| {
        tracing::error!(error = %e, "hyperserp exited with error");
        anyhow::anyhow!("hyperserp failed: {e}")
    })?;

    Ok(())
}
