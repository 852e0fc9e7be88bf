use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use snip_url::{config, logging, server};

/// URL shortener HTTP service.
#[derive(Parser)]
#[command(name = "snip-url")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Dotenv file with configuration variables (defaults to `.env` if present)
    #[arg(long, env = "CONFIG_PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.config {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    let config = config::load_from_env()?;
    logging::init(&config)?;
    config.print_summary();

    server::run(config).await
}
