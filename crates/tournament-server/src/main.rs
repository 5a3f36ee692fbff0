//! Tournament catalog server binary.
//!
//! Opens the store, seeds it with the sample catalog when empty, then serves
//! the web API until interrupted.

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tournament_core::SampleCatalog;
use tournament_server::config::ServerConfig;
use tournament_server::repo::TournamentRepo;
use tournament_server::{db, router, seed, AppState};
use tracing_subscriber::EnvFilter;

/// Sports tournament catalog server.
#[derive(Parser)]
#[command(name = "tournament-server")]
#[command(about = "Serves the sports tournament catalog over HTTP")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = ServerConfig::DEFAULT_PATH)]
    config: PathBuf,

    /// Address to bind, overriding the configuration file
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Path to the SQLite database, overriding the configuration file
    #[arg(long)]
    db: Option<PathBuf>,

    /// Export directory, overriding the configuration file
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Do not populate an empty database with sample tournaments
    #[arg(long)]
    no_seed: bool,
}

impl Args {
    fn into_config(self) -> anyhow::Result<ServerConfig> {
        let mut config = ServerConfig::load(&self.config)
            .with_context(|| format!("loading {}", self.config.display()))?;

        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(db) = self.db {
            config.database_path = db;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if self.no_seed {
            config.seed_sample_data = false;
        }

        Ok(config)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl+c: {}", e);
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Args::parse().into_config()?;
    tracing::info!("Database: {:?}", config.database_path);
    tracing::info!("Output directory: {:?}", config.output_dir);

    let db = db::init_db(&config.database_path)
        .with_context(|| format!("opening {}", config.database_path.display()))?;

    if config.seed_sample_data {
        let repo = TournamentRepo::new(db.clone());
        seed::populate_if_empty(&repo, &mut SampleCatalog::new())
            .context("seeding sample tournaments")?;
    }

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating {}", config.output_dir.display()))?;

    let app = router(AppState::new(db, config.output_dir.clone()));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    tracing::info!("Server running on http://{}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
