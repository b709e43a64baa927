use anyhow::{Context, Result};
use briefly::{
    app,
    app_state::AppState,
    config::{Config, LogFormat},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format() {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    let bind_addr = config.bind_addr().to_string();
    info!(
        environment = config.environment().as_str(),
        remote_inference = config.inference().is_some(),
        "starting api"
    );

    let state = AppState::from_config(config)?;
    let app = app::router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    info!(address = %bind_addr, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
