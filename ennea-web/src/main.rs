//! ennea-web - Enneagram quiz HTTP service
//!
//! Startup order: config file, tracing, build banner, storage, router, serve.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use ennea_common::articles::ArticleCatalog;
use ennea_common::config::{find_config_file, StorageBackend, TomlConfig};
use ennea_common::db::{init_database, InMemoryResultStore, ResultStore, SqliteResultStore};
use ennea_web::config::{log_filter, CliOverrides, ServerConfig};
use ennea_web::{build_router, AppState};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "ennea-web")]
#[command(about = "Enneagram personality quiz API", long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "ENNEA_PORT")]
    port: Option<u16>,

    /// Address to bind
    #[arg(short, long, env = "ENNEA_BIND")]
    bind: Option<String>,

    /// Folder holding ennea.db
    #[arg(short, long)]
    root_folder: Option<PathBuf>,

    /// Result storage backend (memory or sqlite)
    #[arg(short, long, env = "ENNEA_STORAGE")]
    storage: Option<StorageBackend>,

    /// Config file (defaults to ~/.config/ennea/config.toml, then /etc/ennea/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Tracing filter may come from the config file, so read it first and
    // report problems once logging is up.
    let config_path = args.config.clone().or_else(find_config_file);
    let loaded = config_path.as_deref().map(TomlConfig::load);
    let toml_config = match &loaded {
        Some(Ok(config)) => config.clone(),
        _ => TomlConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| log_filter(&toml_config).into()),
        )
        .with_target(true)
        .init();

    info!(
        "Starting ennea-web v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match (&config_path, loaded) {
        (Some(path), Some(Ok(_))) => info!("Loaded config file {}", path.display()),
        (Some(path), Some(Err(e))) => {
            warn!("Ignoring config file {}: {}", path.display(), e)
        }
        _ => info!("No config file found, using defaults"),
    }

    let config = ServerConfig::resolve(
        CliOverrides {
            port: args.port,
            bind: args.bind,
            root_folder: args.root_folder,
            storage: args.storage,
        },
        &toml_config,
    );
    info!("Root folder: {}", config.root_folder.display());

    let results: Arc<dyn ResultStore> = match config.storage {
        StorageBackend::Memory => {
            info!("Storing results in memory (lost on restart)");
            Arc::new(InMemoryResultStore::new())
        }
        StorageBackend::Sqlite => {
            let db_path = config.database_path();
            let pool = init_database(&db_path)
                .await
                .with_context(|| format!("Failed to open database {}", db_path.display()))?;
            info!("✓ Database ready: {}", db_path.display());
            Arc::new(SqliteResultStore::new(pool))
        }
    };

    let articles = ArticleCatalog::builtin();
    info!("Loaded {} published articles", articles.published().count());

    let state = AppState::new(results, Arc::new(articles));
    let app = build_router(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("ennea-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
