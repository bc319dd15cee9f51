use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use choice_compass::adapters::http::app_router;
use choice_compass::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    config.validate().context("validating configuration")?;

    init_tracing(&config)?;

    let addr = config.server.socket_addr()?;
    let app = app_router(&config);

    info!(
        %addr,
        environment = config.server.environment.as_str(),
        timeout_secs = config.server.request_timeout_secs,
        cors = %config.server.cors_policy(),
        iterations = config.analysis.bounded_iterations(),
        shared_std_dev = config.analysis.shared_std_dev,
        noise_std_dev = config.analysis.noise_std_dev,
        seed = ?config.analysis.seed,
        "Choice Compass starting"
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.is_production() {
        builder.json().init();
    } else {
        builder.compact().init();
    }
    Ok(())
}
