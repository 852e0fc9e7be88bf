//! CLI administration tool for snip-url.
//!
//! Works directly against the SQLite file, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Store a URL under a chosen alias
//! cargo run --bin admin -- save https://example.com --alias ex1
//!
//! # Store a URL under a generated alias
//! cargo run --bin admin -- save https://example.com
//!
//! # Look an alias up
//! cargo run --bin admin -- resolve ex1
//!
//! # Check the database
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `STORAGE_PATH` (required): SQLite database file
//! - `ALIAS_LENGTH` (optional): generated alias length, 4-32, default 6

use snip_url::application::services::UrlService;
use snip_url::infrastructure::persistence::SqliteUrlRepository;
use snip_url::utils::alias_generator::{AliasGenerator, DEFAULT_ALIAS_LENGTH};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for managing snip-url.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Store a URL under an alias
    Save {
        /// Absolute URL to store
        url: String,

        /// Alias to use (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Print the URL stored under an alias
    Resolve {
        /// Alias to look up
        alias: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let storage_path = std::env::var("STORAGE_PATH").context("STORAGE_PATH must be set")?;
    let alias_length = match std::env::var("ALIAS_LENGTH") {
        Ok(value) => value
            .parse()
            .with_context(|| format!("ALIAS_LENGTH must be a number, got '{}'", value))?,
        Err(_) => DEFAULT_ALIAS_LENGTH,
    };
    let generator = AliasGenerator::new(alias_length).context("Invalid ALIAS_LENGTH")?;

    let repo = Arc::new(
        SqliteUrlRepository::connect(&storage_path, 1, Duration::from_secs(30))
            .await
            .context("Failed to open storage")?,
    );

    let result = match cli.command {
        Commands::Save { url, alias } => save(repo.clone(), generator, url, alias).await,
        Commands::Resolve { alias } => resolve(repo.clone(), alias).await,
        Commands::Db { action } => handle_db_action(action, &repo, &storage_path).await,
    };

    repo.close().await;
    result
}

/// Stores a URL, validating it the same way the HTTP API does.
async fn save(
    repo: Arc<SqliteUrlRepository>,
    generator: AliasGenerator,
    url: String,
    alias: Option<String>,
) -> Result<()> {
    url::Url::parse(&url).with_context(|| format!("'{}' is not a valid url", url))?;

    let service = UrlService::new(repo, generator);
    let saved = service
        .save_url(&url, alias.filter(|a| !a.is_empty()))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to save url: {}", e))?;

    println!("{}", "✅ URL saved".green().bold());
    println!("  Alias: {}", saved.alias.bright_yellow().bold());
    println!("  ID:    {}", saved.id.to_string().bright_black());
    println!("  URL:   {}", url.cyan());

    Ok(())
}

/// Prints the URL for an alias.
async fn resolve(repo: Arc<SqliteUrlRepository>, alias: String) -> Result<()> {
    let service = UrlService::new(repo, AliasGenerator::default());

    match service.resolve_url(&alias).await {
        Ok(url) => {
            println!("{} → {}", alias.bright_yellow(), url.cyan());
            Ok(())
        }
        Err(e) => {
            println!("{}", format!("❌ {}", e).red());
            anyhow::bail!("could not resolve '{}'", alias)
        }
    }
}

/// Handles database diagnostic commands.
async fn handle_db_action(
    action: DbAction,
    repo: &SqliteUrlRepository,
    storage_path: &str,
) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            repo.ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let count = repo
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

            println!("  File:    {}", storage_path.bright_white());
            println!("  Aliases: {}", count.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
