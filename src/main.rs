use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod common;
mod config;
mod docs;
mod infrastructure;
mod modules;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use config::settings::AppConfig;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting server...");

    let config = AppConfig::new()?;
    let transcriber = infrastructure::transcription::create_engine(&config.whisper);
    info!(
        provider = ?config.whisper.provider,
        storage_root = %config.storage_root.display(),
        ffmpeg = %config.ffmpeg_bin,
        "Configuration loaded"
    );

    let addr = format!("0.0.0.0:{}", config.server_port);
    let app = app::create_app(AppState::new(&config, transcriber));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
