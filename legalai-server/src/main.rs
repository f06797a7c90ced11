//! legalai-server - Legal document analysis service
//!
//! Forwards documents and follow-up questions to the generative-language
//! API and returns structured results to the browser pages.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use legalai_common::config::{
    self, DEFAULT_API_BASE_URL, DEFAULT_BIND_ADDRESS, DEFAULT_MODEL,
};
use tokio::signal;
use tracing::info;

use legalai_server::gateway::{GatewaySettings, ModelGateway};
use legalai_server::{build_router, AppState};

/// Command-line arguments for legalai-server
#[derive(Parser, Debug)]
#[command(name = "legalai-server")]
#[command(about = "Legal document analysis service")]
#[command(version)]
struct Args {
    /// Path to TOML config file (default: <config_dir>/legalai/legalai.toml)
    #[arg(short, long, env = "LEGALAI_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long, env = "LEGALAI_BIND")]
    bind: Option<String>,

    /// Model id for analysis and chat
    #[arg(long, env = "LEGALAI_MODEL")]
    model: Option<String>,

    /// Base URL of the generative-language API
    #[arg(long, env = "LEGALAI_API_BASE_URL")]
    api_base_url: Option<String>,

    /// Log level when RUST_LOG is not set
    #[arg(long, env = "LEGALAI_LOG_LEVEL")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config is read before tracing starts so its log level can apply;
    // anything it wants to report is logged again once tracing is up.
    let config_path = args.config.clone().or_else(config::default_config_path);
    let toml_config = match &config_path {
        Some(path) => config::load_toml_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => config::TomlConfig::default(),
    };

    let log_level = args
        .log_level
        .clone()
        .unwrap_or_else(|| toml_config.logging.level.clone());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{},tower_http=info", log_level).into()),
        )
        .init();

    info!(
        "Starting legalai-server v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match &config_path {
        Some(path) if path.exists() => info!("Config file: {}", path.display()),
        Some(path) => info!("Config file not found at {}, using defaults", path.display()),
        None => info!("No config directory on this platform, using defaults"),
    }

    let api_key = config::resolve_api_key(&toml_config);

    let model = args
        .model
        .or(toml_config.gemini.model)
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let api_base_url = args
        .api_base_url
        .or(toml_config.gemini.api_base_url)
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let bind = args
        .bind
        .or(toml_config.bind_address)
        .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

    info!("Model: {}", model);

    let settings = GatewaySettings::new(api_key)
        .with_model(model)
        .with_api_base_url(api_base_url);
    let gateway = ModelGateway::new(settings).context("Failed to create model gateway")?;

    let app = build_router(AppState::new(gateway));

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("Failed to bind to {}", bind))?;
    info!("Listening on http://{}", bind);
    info!("Health check: http://{}/health", bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
