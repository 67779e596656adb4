//! Game state module - the immutable state value and the reducer
//!
//! [`GameState::apply`] is the whole engine: it takes the current state and
//! one [`Command`] and returns the next state. The input is never modified.
//! Randomness enters only through the [`PieceSource`] passed to `apply`, and
//! only when a turn ends and a new preview piece is drawn.
//!
//! Piece lifecycle: spawned → moved/rotated by commands → resting (the
//! gravity drop fails) → locked by the turn resolver → next piece spawned.

use crate::board::{is_valid_move, Board};
use crate::gravity::{self, speed_curve, ClockStep};
use crate::pieces::{spawn_piece, Piece};
use crate::rng::{EntropySource, PieceSource};
use crate::scoring::{calculate_level, calculate_line_score};
use crate::types::{Command, START_LEVEL};

/// What happened when the last piece locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub level_up: bool,
    /// The lock or the following spawn ended the game.
    pub topped_out: bool,
}

/// Complete game state. Cheap to clone; replaced wholesale on every command.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    score: u32,
    level: u32,
    lines: u32,
    board: Board,
    piece: Piece,
    next_piece: Piece,
    /// Ticks per row drop; always `speed_curve(level)`.
    gravity: f64,
    /// Ticks left until the next gravity drop, reloaded from
    /// `gravity::reload(gravity)`.
    countdown: f64,
    game_over: bool,
    last_event: Option<TurnEvent>,
}

impl GameState {
    /// Fresh game: empty board, level 1, score 0, two pieces drawn from `source`.
    pub fn new(source: &mut dyn PieceSource) -> Self {
        let piece = spawn_piece(source);
        let next_piece = spawn_piece(source).at_preview();
        let gravity = speed_curve(START_LEVEL);

        Self {
            score: 0,
            level: START_LEVEL,
            lines: 0,
            board: Board::new(),
            piece,
            next_piece,
            gravity,
            countdown: gravity::reload(gravity),
            game_over: false,
            last_event: None,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Total lines cleared.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The active piece.
    ///
    /// Always a valid placement while the game is running. After a block-out
    /// the game-over state keeps the spawned piece even though it overlaps
    /// the board.
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next_piece
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn countdown(&self) -> f64 {
        self.countdown
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// The most recent lock, if any piece has locked yet.
    pub fn last_event(&self) -> Option<TurnEvent> {
        self.last_event
    }

    /// Replace the board, keeping the active piece.
    ///
    /// # Panics
    ///
    /// Panics if the board has full rows or the active piece no longer fits.
    pub fn with_board(self, board: Board) -> Self {
        assert!(board.full_rows().is_empty(), "board must not contain full rows");
        assert!(self.piece.fits(&board), "active piece must fit the new board");
        Self { board, ..self }
    }

    /// Replace the active piece.
    ///
    /// # Panics
    ///
    /// Panics if the piece does not fit the board.
    pub fn with_piece(self, piece: Piece) -> Self {
        assert!(piece.fits(&self.board), "active piece must fit the board");
        Self { piece, ..self }
    }

    /// Replace the preview piece (re-anchored at the preview position).
    pub fn with_next_piece(self, next_piece: Piece) -> Self {
        Self {
            next_piece: next_piece.at_preview(),
            ..self
        }
    }

    /// Jump to `level`, recomputing gravity and reloading the countdown.
    pub fn with_level(self, level: u32) -> Self {
        let level = level.max(START_LEVEL);
        let gravity = speed_curve(level);
        Self {
            level,
            gravity,
            countdown: gravity::reload(gravity),
            ..self
        }
    }

    /// Whether the active piece can move one row down.
    pub fn can_drop(&self) -> bool {
        is_valid_move(
            &self.board,
            &self.piece.matrix,
            self.piece.row + 1,
            self.piece.col,
        )
    }

    /// Reduce one command into the next state.
    ///
    /// Rejected moves and every command after game over return an equal state.
    pub fn apply(&self, command: Command, source: &mut dyn PieceSource) -> GameState {
        let mut next = self.clone();
        if next.game_over {
            return next;
        }

        match command {
            Command::MoveLeft => {
                next.try_shift(0, -1);
            }
            Command::MoveRight => {
                next.try_shift(0, 1);
            }
            Command::MoveDown => {
                next.try_shift(1, 0);
            }
            Command::Rotate => {
                next.try_rotate();
            }
            Command::Tick => next.tick(source),
        }
        next
    }

    /// Commit a shifted piece if the target is legal.
    fn try_shift(&mut self, d_row: i32, d_col: i32) -> bool {
        let candidate = self.piece.shifted(d_row, d_col);
        if !candidate.fits(&self.board) {
            return false;
        }
        self.piece = candidate;
        true
    }

    /// Commit a clockwise rotation at the same anchor if legal. No kicks.
    fn try_rotate(&mut self) -> bool {
        let candidate = self.piece.rotated();
        if !candidate.fits(&self.board) {
            return false;
        }
        self.piece = candidate;
        true
    }

    fn tick(&mut self, source: &mut dyn PieceSource) {
        match gravity::step(self.countdown) {
            ClockStep::Wait(remaining) => self.countdown = remaining,
            ClockStep::Drop => {
                if !self.try_shift(1, 0) {
                    self.resolve_turn(source);
                }
                self.countdown = gravity::reload(self.gravity);
            }
        }
    }

    /// Lock the resting piece, clear full rows, score, and spawn the next piece.
    fn resolve_turn(&mut self, source: &mut dyn PieceSource) {
        let lock = self
            .board
            .lock(&self.piece.matrix, self.piece.row, self.piece.col);

        let cleared = self.board.clear_full_rows().len();
        let score_delta = calculate_line_score(cleared, self.level);
        self.score = self.score.saturating_add(score_delta);
        self.lines += cleared as u32;

        // A game started above level 1 keeps its level until the lines catch up.
        let level = calculate_level(self.lines).max(self.level);
        let level_up = level > self.level;
        if level_up {
            self.level = level;
            self.gravity = speed_curve(level);
        }

        let incoming = spawn_piece(source).at_preview();
        self.piece = std::mem::replace(&mut self.next_piece, incoming).at_spawn();

        let topped_out = lock.above_top > 0 || !self.piece.fits(&self.board);
        self.game_over = topped_out;

        self.last_event = Some(TurnEvent {
            lines_cleared: cleared as u32,
            score_delta,
            level_up,
            topped_out,
        });
    }
}

/// Start a game with pieces drawn from OS entropy.
pub fn new_game() -> GameState {
    GameState::new(&mut EntropySource::new())
}

/// Start a game with pieces drawn from `source`.
pub fn new_game_with(source: &mut dyn PieceSource) -> GameState {
    GameState::new(source)
}

/// Free-function form of [`GameState::apply`].
pub fn apply(state: &GameState, command: Command, source: &mut dyn PieceSource) -> GameState {
    state.apply(command, source)
}

/// Host-side holder for the one authoritative state and its piece source.
///
/// It only threads the state through [`GameState::apply`]; hosts that want
/// to keep history can hold the returned values themselves.
#[derive(Debug, Clone)]
pub struct Game<S: PieceSource> {
    state: GameState,
    source: S,
}

impl<S: PieceSource> Game<S> {
    pub fn new(mut source: S) -> Self {
        let state = GameState::new(&mut source);
        Self { state, source }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn apply(&mut self, command: Command) -> &GameState {
        self.state = self.state.apply(command, &mut self.source);
        &self.state
    }

    /// Throw the current game away and start over with the same source.
    pub fn restart(&mut self) {
        self.state = GameState::new(&mut self.source);
    }
}
