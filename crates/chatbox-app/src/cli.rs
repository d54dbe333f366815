use clap::Parser;

/// Chatbox: a terminal chat widget backed by a remote reply endpoint.
#[derive(Parser, Debug)]
#[command(name = "chatbox", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Reply endpoint URL override (takes precedence over CHATBOX_ENDPOINT).
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Load environment variables from this file instead of the nearest `.env`.
    #[arg(long)]
    pub env_file: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Open the chat right away instead of waiting for /start.
    #[arg(long)]
    pub start: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
