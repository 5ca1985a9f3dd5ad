use anyhow::Result;
use tokio::net::TcpListener;

pub mod ai;
pub mod api;
pub mod client;
pub mod config;
pub mod couplet;
pub mod error;
mod system_info;
mod text_utils;

pub use api::{router, AppState};
pub use client::CoupletClient;
pub use config::Config;
pub use couplet::Couplet;
pub use error::{ErrorKind, GenerationError};
pub use system_info::{get_system_info, SystemInfo};
pub use text_utils::{normalize_prompt, MAX_PROMPT_CHARS};

// ──────────────────────────────────────────────────────────────
// Main application setup
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    // Load .env first so RUST_LOG from it applies
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();

    tracing::info!("Starting couplet service...");

    let listener = TcpListener::bind(&config.bind_addr).await?;
    run_on_listener(listener, config).await
}

/// Serve the API on an already bound listener.
pub async fn run_on_listener(listener: TcpListener, config: Config) -> Result<()> {
    match &config.ai {
        Some(ai) => tracing::info!(
            model = %ai.model,
            endpoint = %ai.endpoint,
            max_tokens = ?ai.max_tokens,
            "Completion API configured"
        ),
        None => tracing::warn!("OPENAI_API_KEY not set; every generation request will fail"),
    }

    let addr = listener.local_addr()?;
    tracing::info!(%addr, "Listening");

    let app = router(AppState::new(config.ai));
    axum::serve(listener, app).await?;
    Ok(())
}
