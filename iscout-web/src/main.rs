//! iscout-web - Influencer Scout backend service
//!
//! Forwards search criteria to the Anthropic Messages API, parses the
//! response into influencer records, persists them in SQLite, and serves
//! the CRUD/listing/export HTTP surface.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use iscout_common::config::{ensure_data_dir, resolve_data_dir, Settings};
use iscout_web::services::claude_client::ClaudeClient;
use iscout_web::{build_router, AppState};

#[derive(Debug, Parser)]
#[command(name = "iscout-web", about = "Influencer Scout backend service")]
struct Args {
    /// Data directory holding the SQLite database
    #[arg(long, env = "ISCOUT_DATA")]
    data_dir: Option<PathBuf>,

    /// HTTP listen port
    #[arg(long, env = "ISCOUT_PORT", default_value_t = 8001)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting Influencer Scout (iscout-web) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::parse();
    let settings = Settings::from_env(args.port)?;

    let data_dir = resolve_data_dir(args.data_dir.as_deref());
    let db_path = ensure_data_dir(&data_dir)?;
    info!("Database: {}", db_path.display());

    let pool = iscout_common::db::init_database_pool(&db_path).await?;
    info!("Database connection established");

    let claude = ClaudeClient::new(settings.api_key.clone());

    // Startup credential check is advisory only; a bad key still surfaces
    // as a provider error on the first search request.
    match claude.probe().await {
        Ok(()) => info!("Anthropic credential verified"),
        Err(e) => warn!("Anthropic credential check failed: {}", e),
    }

    let state = AppState::new(pool, claude);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", settings.port)).await?;
    info!("iscout-web listening on http://0.0.0.0:{}", settings.port);
    info!("Health check: http://127.0.0.1:{}/health", settings.port);

    axum::serve(listener, app).await?;

    Ok(())
}
