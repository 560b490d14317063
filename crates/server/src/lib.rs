//! Score service - HTTP API over a SQLite score store
//!
//! Players' clients post finished-round scores and read the top-10
//! leaderboard, overall or per game.
//!
//! # Endpoints
//!
//! - `GET /api/scores?game={tetris|hangman|all}`: top 10 by score
//! - `POST /api/scores`: `{ playerName, score, game? }` → `201` with the record
//! - `GET /health`: `{"status":"ok"}`
//! - `GET /`: service banner and the list of games
//!
//! Errors are `{"message": ...}` with `400` for rejected input and `500` for
//! store failures.
//!
//! # Environment Variables
//!
//! - `SCORES_HOST`: Bind address (default: "127.0.0.1")
//! - `SCORES_PORT`: Port number (default: 5000)
//! - `SCORES_DB_PATH`: SQLite file or `:memory:` (default: "scores.db")
//! - `SCORES_JSON_LIMIT`: Maximum body size in bytes (default: 16384)
//!
//! # Testing
//!
//! ```bash
//! curl -s -X POST localhost:5000/api/scores \
//!   -H 'content-type: application/json' \
//!   -d '{"playerName":"ada","score":130,"game":"hangman"}'
//! curl -s 'localhost:5000/api/scores?game=hangman'
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod protocol;
pub mod reporter;
pub mod response;
pub mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use tokio::sync::oneshot;

pub use game_scores_core as core;
pub use game_scores_types as types;

pub use config::ServerConfig;
pub use error::SubmitError;
pub use protocol::*;
pub use reporter::ScoreReporter;
pub use response::json_config;
pub use store::ScoreStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ScoreStore>,
}

impl AppState {
    pub fn new(store: ScoreStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Register every route of the score API
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/health", web::get().to(handlers::health))
        .service(
            web::resource("/api/scores")
                .route(web::get().to(handlers::list_scores))
                .route(web::post().to(handlers::submit_score)),
        )
        .default_service(web::to(handlers::not_found));
}

/// Browser clients are served from another origin
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// Open the store named by the config
pub fn open_store(config: &ServerConfig) -> anyhow::Result<ScoreStore> {
    if config.in_memory() {
        ScoreStore::open_in_memory()
    } else {
        ScoreStore::open(&config.db_path)
    }
}

/// Run the HTTP service until it is stopped.
///
/// The bound address is sent on `ready_tx` once listening, which lets callers
/// bind port 0 and learn the real port.
pub async fn run_server(
    config: ServerConfig,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let state = web::Data::new(AppState::new(open_store(&config)?));
    let json_limit = config.json_limit;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(json_config(json_limit))
            .wrap(cors())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(addr)?;

    let bound = server.addrs().first().copied().unwrap_or(addr);
    tracing::info!(addr = %bound, db = %config.db_path, "score service listening");
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    server.run().await?;
    Ok(())
}
