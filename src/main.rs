//! Score service runner (default binary).
//!
//! Reads `SCORES_*` environment variables and serves the score API until
//! interrupted. Log verbosity follows `RUST_LOG` (default `info`).

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use game_scores::server::{run_server, ServerConfig};

#[actix_web::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(?config, "starting score service");

    run_server(config, None).await
}
