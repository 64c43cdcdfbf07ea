//! Concierge terminal chat client entry point.
//!
//! Binary name: `concierge`
//!
//! Parses CLI arguments, initializes tracing, loads the config file, then
//! runs the interactive chat loop against the hotel chatbot API.

mod chat;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "concierge",
    about = "Terminal client for the hotel recommendation chatbot",
    version
)]
struct Cli {
    /// Base URL of the chatbot API (overrides config.toml).
    #[arg(long, env = "CONCIERGE_BASE_URL")]
    base_url: Option<String>,

    /// Data directory holding config.toml (default: ~/.concierge).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Email to associate with the session.
    #[arg(long, default_value = "")]
    email: String,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,concierge_core=debug,concierge_infra=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| dirs::home_dir().map(|home| home.join(".concierge")))
        .unwrap_or_else(|| PathBuf::from("."));

    let mut config = concierge_infra::config::load_config(&data_dir).await;
    if let Some(base_url) = cli.base_url {
        config.api_base_url = base_url;
    }
    tracing::debug!(base_url = %config.api_base_url, "chat client configured");

    chat::run_chat_loop(&config, &cli.email).await
}
