//! Terminal rendering for the falling-block game.
//!
//! The engine state is drawn into a [`FrameBuffer`] by [`GameView`], which is
//! pure and testable, then written out by [`TerminalRenderer`]. Each board
//! cell is two terminal columns wide so blocks look roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
