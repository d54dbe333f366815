mod app_state;
mod cli;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chatbox_ai::{ChatSession, HttpClientConfig, HttpReplyClient, SessionOptions};
use chatbox_common::ChatboxError;
use chatbox_config::{ChatboxConfig, ENDPOINT_ENV};
use tracing_subscriber::EnvFilter;

/// Load `--env-file` if given, else the nearest `.env`. Variables already set
/// in the environment are kept.
fn load_env_file(path: Option<&Path>) -> Result<(), dotenvy::Error> {
    match path {
        Some(path) => dotenvy::from_path(path),
        None => dotenvy::dotenv().map(|_| ()),
    }
}

/// `--log-level` wins, then `RUST_LOG`, then the config file.
fn log_directive(args: &cli::Args, config: &ChatboxConfig) -> String {
    if let Some(level) = &args.log_level {
        return level.clone();
    }
    if let Ok(env) = std::env::var("RUST_LOG") {
        if !env.trim().is_empty() {
            return env;
        }
    }
    config.logging.level.as_filter().to_string()
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = cli::parse();

    let env_file = args.env_file.as_ref().map(PathBuf::from);
    let env_error = load_env_file(env_file.as_deref()).err();

    // Logging depends on the config, so config errors are reported after init.
    let config_path = args.config.as_ref().map(PathBuf::from);
    let (mut config, config_error) = match chatbox_config::load_config(config_path.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (ChatboxConfig::default(), Some(e)),
    };
    chatbox_config::apply_endpoint_override(&mut config, args.endpoint.clone());

    init_logging(&log_directive(&args, &config));

    tracing::info!("Chatbox v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &args.config {
        tracing::info!("Using config override: {path}");
    }
    if let (Some(path), Some(e)) = (&args.env_file, env_error) {
        tracing::warn!("Failed to load env file {path}: {e}");
    }
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if args.endpoint.is_none() && std::env::var(ENDPOINT_ENV).is_ok() {
        tracing::debug!("Endpoint taken from {ENDPOINT_ENV}");
    }
    tracing::info!(endpoint = %config.endpoint.url, "Config loaded");

    if let Err(e) = run(&args, &config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

fn run(args: &cli::Args, config: &ChatboxConfig) -> chatbox_common::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .map_err(|e| ChatboxError::Runtime(e.to_string()))?;

    let client = HttpReplyClient::new(HttpClientConfig::from_endpoint(&config.endpoint))
        .map_err(|e| ChatboxError::Endpoint(e.to_string()))?;

    let session = ChatSession::with_options(
        Arc::new(client),
        runtime.handle().clone(),
        SessionOptions::from_config(&config.chat),
    );

    let mut app = app_state::ChatboxApp::new(session, std::io::stdout());
    let lines = app_state::spawn_line_reader();

    tracing::info!("Entering input loop");
    app.run(args.start, lines)?;
    Ok(())
}
