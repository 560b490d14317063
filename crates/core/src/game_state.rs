//! Game state module - the falling-block puzzle session
//!
//! Ties together board, shapes, piece generator and scoring. Each falling
//! piece moves through three phases:
//!
//! - **falling**: gravity ticks move it down one row while the row below is free
//! - **landed**: a downward step collided; the piece is marked `settled`
//! - **merged**: its blocks are written into the board, full rows are swept,
//!   and the next piece spawns at the top center
//!
//! If the freshly spawned piece already collides, the game is over and every
//! action except `Restart` becomes a no-op. Timers and key presses live
//! outside; drivers call [`GameState::apply_action`] and [`GameState::tick`].

use crate::board::Board;
use crate::pieces::Shape;
use crate::rng::PieceQueue;
use crate::scoring::{drop_interval_ms, line_clear_score, next_level};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Cell, GameAction, PieceKind, SPAWN_X, SPAWN_Y, START_LEVEL};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    /// Set once a downward step collided
    pub settled: bool,
}

impl ActivePiece {
    /// Create a new piece at the spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            shape: Shape::new(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
            settled: false,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.shape.kind()
    }

    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.x, self.y)
    }

    /// Whether one row lower would collide
    pub fn is_grounded(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.x, self.y + 1)
    }
}

/// Emitted each time a piece merges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    pub level: u32,
    pub level_up: bool,
    pub game_over: bool,
}

/// Complete puzzle session state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    piece_queue: PieceQueue,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Monotonic id for spawned pieces.
    piece_id: u32,
    last_event: Option<LockEvent>,
    score: u32,
    level: u32,
    lines: u32,
    drop_timer_ms: u32,
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Create a game over a prepared board (replays, puzzles, tests)
    pub fn with_board(seed: u32, board: Board) -> Self {
        Self {
            board,
            active: None,
            piece_queue: PieceQueue::new(seed),
            episode_id: 0,
            piece_id: 0,
            last_event: None,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            drop_timer_ms: 0,
            game_over: false,
            started: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Accepting gameplay actions
    pub fn playing(&self) -> bool {
        self.started && !self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn seed(&self) -> u32 {
        self.piece_queue.seed()
    }

    /// Preview of the piece that spawns next
    pub fn next_piece(&self) -> PieceKind {
        self.piece_queue.peek()
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current fall interval, `1000ms / level`
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Spawn a new piece from the queue.
    ///
    /// Returns false and ends the game when the spawn position is blocked.
    fn spawn_piece(&mut self) -> bool {
        let piece = ActivePiece::new(self.piece_queue.draw());

        if piece.collides(&self.board) {
            self.game_over = true;
            self.active = None;
            return false;
        }

        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        self.drop_timer_ms = 0;

        true
    }

    /// Try to move the active piece
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.playing() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if self.board.collides(&active.shape, active.x + dx, active.y + dy) {
            return false;
        }

        self.active = Some(ActivePiece {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        });
        true
    }

    /// One downward step.
    ///
    /// Moves the piece down when the row below is free. Otherwise the piece
    /// lands in place and is merged immediately. Returns true if it moved.
    pub fn step_down(&mut self) -> bool {
        if !self.playing() {
            return false;
        }
        if self.try_move(0, 1) {
            return true;
        }

        if let Some(active) = self.active.as_mut() {
            active.settled = true;
            self.lock_piece();
        }
        false
    }

    /// Rotate the active piece clockwise; rejected if the result collides
    pub fn try_rotate(&mut self) -> bool {
        if !self.playing() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.shape.rotated_cw();
        if self.board.collides(&rotated, active.x, active.y) {
            return false;
        }

        self.active = Some(ActivePiece {
            shape: rotated,
            ..active
        });
        true
    }

    /// Drop the active piece as far as it goes and merge it.
    ///
    /// Returns the number of rows travelled.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.playing() {
            return 0;
        }
        let Some(active) = self.active else {
            return 0;
        };

        let mut distance: i8 = 0;
        while !self
            .board
            .collides(&active.shape, active.x, active.y + distance + 1)
        {
            distance += 1;
        }

        self.active = Some(ActivePiece {
            y: active.y + distance,
            settled: true,
            ..active
        });
        self.lock_piece();

        distance as u32
    }

    /// Merge the active piece into the board, sweep full rows, score them and
    /// spawn the next piece.
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let merged = self.board.merge_piece(&active.shape, active.x, active.y);
        debug_assert!(merged, "active piece overlapped the board");

        let cleared = self.board.sweep_rows();
        let scored_level = self.level;
        let line_score = line_clear_score(cleared, scored_level);

        if cleared > 0 {
            self.score = self.score.saturating_add(line_score);
            self.lines = self.lines.saturating_add(cleared as u32);
            self.level = next_level(self.level, self.lines);
        }

        self.spawn_piece();

        self.last_event = Some(LockEvent {
            lines_cleared: cleared as u32,
            line_clear_score: line_score,
            level: self.level,
            level_up: self.level > scored_level,
            game_over: self.game_over,
        });
    }

    /// Take and clear the last merge event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn is_grounded(&self) -> bool {
        match self.active {
            Some(ref piece) => piece.is_grounded(&self.board),
            None => false,
        }
    }

    /// Row the active piece would land on (ghost piece)
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        let mut y = active.y;
        while !self.board.collides(&active.shape, active.x, y + 1) {
            y += 1;
        }
        Some(y)
    }

    /// Advance the fall timer by `elapsed_ms`; steps the piece down once the
    /// current fall interval has elapsed. Returns true if a step happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.playing() || self.active.is_none() {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.drop_interval_ms() {
            return false;
        }

        self.drop_timer_ms = 0;
        self.step_down();
        true
    }

    /// Apply a game action. Returns true if the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Restart => {
                self.restart();
                true
            }
            _ if !self.playing() => false,
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop | GameAction::Tick => {
                self.step_down();
                true
            }
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::Forfeit => {
                self.game_over = true;
                self.active = None;
                true
            }
        }
    }

    /// Fresh board, score and level, same seed
    pub fn restart(&mut self) {
        let next_episode = self.episode_id.wrapping_add(1);
        *self = Self::new(self.seed());
        self.episode_id = next_episode;
        self.start();
    }

    /// Board with the active piece drawn in as transient cells
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (y, row) in out.cells.iter_mut().enumerate() {
            row.copy_from_slice(self.board.row(y));
        }

        if let Some(active) = self.active {
            for (dx, dy) in active.shape.blocks() {
                let (x, y) = (active.x + dx, active.y + dy);
                if !self.board.is_out_of_bounds(x, y) {
                    out.cells[y as usize][x as usize] = Cell::transient(active.kind());
                }
            }
        }

        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = self.next_piece();
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
