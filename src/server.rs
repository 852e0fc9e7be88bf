//! HTTP server initialization and runtime setup.
//!
//! Handles storage setup, dependency wiring, and the Axum server lifecycle.

use crate::application::services::UrlService;
use crate::config::Config;
use crate::infrastructure::persistence::SqliteUrlRepository;
use crate::routes::app_router;
use crate::state::{AppState, BasicCredentials};
use crate::utils::alias_generator::AliasGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::path::Path;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite storage (file created and schema applied if missing)
/// - URL service with the configured alias length
/// - Axum HTTP server with graceful shutdown
///
/// The store is opened once here, shared by every request, and closed after
/// the server has drained.
///
/// # Errors
///
/// Returns an error if:
/// - Storage cannot be opened
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    if let Some(parent) = Path::new(&config.storage_path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create storage directory {}", parent.display()))?;
    }

    let repository = Arc::new(
        SqliteUrlRepository::connect(
            &config.storage_path,
            config.db_max_connections,
            config.db_acquire_timeout(),
        )
        .await
        .context("failed to init storage")?,
    );
    tracing::info!("Storage initialized at {}", config.storage_path);

    let generator =
        AliasGenerator::new(config.alias_length).context("invalid alias generator settings")?;
    let url_service = Arc::new(UrlService::new(repository.clone(), generator));
    let credentials = BasicCredentials::new(&config.http_user, &config.http_password);
    let state = AppState::new(url_service, credentials);

    let app = app_router(state, config.request_timeout());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, closing storage");
    repository.close().await;

    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM where supported.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
