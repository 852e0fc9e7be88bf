//! Tracing subscriber setup.
//!
//! `local` deployments log human-readable text; `dev` and `prod` log JSON
//! lines. The filter comes from the configured level (`RUST_LOG` syntax).

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Builds the filter from a `RUST_LOG`-style directive string.
pub fn env_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).with_context(|| format!("invalid log filter '{directives}'"))
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the log filter is invalid or a subscriber is already set.
pub fn init(config: &Config) -> Result<()> {
    let filter = env_filter(&config.log_level)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if config.log_format == "json" {
        builder.json().with_current_span(true).try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::debug!(env = %config.env, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_accepts_levels_and_directives() {
        assert!(env_filter("info").is_ok());
        assert!(env_filter("debug,sqlx=warn,tower_http=info").is_ok());
    }

    #[test]
    fn test_env_filter_rejects_garbage() {
        assert!(env_filter("info,snip_url=loud").is_err());
    }
}
