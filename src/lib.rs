//! Game Scores (workspace facade crate).
//!
//! Exposes `game_scores::{core,server,types}` while the implementation lives in
//! dedicated crates under `crates/`.

pub use game_scores_core as core;
pub use game_scores_server as server;
pub use game_scores_types as types;
