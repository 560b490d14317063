//! Bot runner that fills the score database.
//!
//! Plays seeded puzzle and word-guess rounds and reports each final score
//! into the SQLite store through the once-per-round submission gate, then
//! prints the resulting leaderboards.

mod bots;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use game_scores::core::{GameFilter, SimpleRng, WordGuessSession};
use game_scores::server::{ScoreReporter, ScoreStore};
use game_scores::types::GameId;

#[derive(Parser, Debug)]
#[command(name = "autoplay")]
#[command(about = "Play bot rounds of the puzzle and word games and record their scores")]
struct Cli {
    /// SQLite database to write into
    #[arg(long, env = "SCORES_DB_PATH", default_value = "scores.db")]
    db: String,
    /// Which game(s) to play
    #[arg(long, value_enum, default_value_t = CliGame::All)]
    game: CliGame,
    /// Rounds per game
    #[arg(long, default_value_t = 5)]
    rounds: u32,
    /// First seed; round `i` uses `seed + i`
    #[arg(long, default_value_t = 1)]
    seed: u32,
    /// Pieces placed before a puzzle round is abandoned
    #[arg(long, default_value_t = 300)]
    max_pieces: u32,
    /// Player name recorded with each score
    #[arg(long, default_value = "autoplay")]
    player: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CliGame {
    Tetris,
    Hangman,
    All,
}

impl CliGame {
    fn games(self) -> &'static [GameId] {
        match self {
            CliGame::Tetris => &[GameId::Tetris],
            CliGame::Hangman => &[GameId::Hangman],
            CliGame::All => &GameId::ALL,
        }
    }
}

fn open_store(path: &str) -> Result<ScoreStore> {
    if path == game_scores::server::config::IN_MEMORY_DB {
        ScoreStore::open_in_memory()
    } else {
        ScoreStore::open(path)
    }
}

fn play_rounds(store: ScoreStore, cli: &Cli, game: GameId) -> ScoreStore {
    let mut reporter = ScoreReporter::new(store, cli.player.clone(), game);
    let mut word_rng = SimpleRng::new(cli.seed);

    for round in 0..cli.rounds {
        reporter.new_round();
        let seed = cli.seed.wrapping_add(round);
        let score = match game {
            GameId::Tetris => bots::play_puzzle(seed, cli.max_pieces),
            GameId::Hangman => {
                let mut session = WordGuessSession::random(&mut word_rng);
                let score = bots::play_word(&mut session);
                tracing::debug!(word = session.word(), status = ?session.status(), "word round over");
                score
            }
        };
        tracing::info!(%game, round, seed, score, "round finished");
        reporter.round_finished(score);
    }

    reporter.into_sink()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    let mut store = open_store(&cli.db)?;

    for &game in cli.game.games() {
        store = play_rounds(store, &cli, game);
    }

    for &game in cli.game.games() {
        println!("== {game} ==");
        for (rank, record) in store.leaderboard(GameFilter::Game(game))?.iter().enumerate() {
            println!(
                "{:>2}. {:<16} {:>8}  {}",
                rank + 1,
                record.player_name,
                record.score,
                record.created_at.to_rfc3339()
            );
        }
    }
    println!("{} scores stored in {}", store.count()?, cli.db);

    Ok(())
}
