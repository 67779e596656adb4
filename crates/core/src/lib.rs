//! Core game logic - a pure, deterministic falling-block reducer
//!
//! The engine is a single function `(GameState, Command) -> GameState`. It has
//! **zero dependencies** on rendering, input devices, clocks, or I/O:
//!
//! - **Deterministic**: piece selection is the only randomness, and it is
//!   injected through [`PieceSource`]
//! - **Immutable**: every command produces a new state value; the old one is
//!   left untouched
//! - **Total**: illegal moves are silently rejected, never errors
//!
//! # Module Structure
//!
//! - [`matrix`]: square cell grids for piece footprints, with clockwise rotation
//! - [`board`]: the 20x10 board, the placement rule, locking and line clearing
//! - [`pieces`]: the seven-shape catalog and the active [`Piece`]
//! - [`rng`]: [`PieceSource`] and its seeded, entropy and scripted sources
//! - [`gravity`]: level → ticks-per-drop curve and the tick countdown
//! - [`scoring`]: line-clear points and level progression
//! - [`game_state`]: [`GameState`], the reducer, and the [`Game`] holder
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, SeededSource};
//! use blockfall_types::Command;
//!
//! let mut source = SeededSource::new(12345);
//! let state = GameState::new(&mut source);
//!
//! let moved = state.apply(Command::MoveLeft, &mut source);
//! assert_eq!(moved.piece().col, state.piece().col - 1);
//!
//! // The input state is unchanged.
//! assert_eq!(state.piece().col, 3);
//! ```
//!
//! # Timing
//!
//! Send [`Command::Tick`](blockfall_types::Command::Tick) at a fixed rate
//! (nominally 60 per second). The engine counts ticks down from
//! [`GameState::gravity`] and drops the piece when the count runs out; a drop
//! that cannot move ends the turn.

pub mod board;
pub mod game_state;
pub mod gravity;
pub mod matrix;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{is_valid_move, Board, LockOutcome};
pub use game_state::{apply, new_game, new_game_with, Game, GameState, TurnEvent};
pub use gravity::speed_curve;
pub use matrix::Matrix;
pub use pieces::{spawn_piece, Piece};
pub use rng::{EntropySource, PieceSource, SeededSource, SequenceSource, SimpleRng};
pub use scoring::{calculate_level, calculate_line_score};
