//! Shared types and constants for the falling-block engine.
//!
//! Everything here is plain data with no dependencies, so it can be used by the
//! engine, the terminal host, and tests alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: row -1, col 3 (the piece may overhang the top edge)
//! - **Preview anchor**: row 0, col 1 (where the next piece sits in a preview box)
//!
//! # Timing
//!
//! The engine counts ticks, not milliseconds. A host is expected to send one
//! [`Command::Tick`] per frame at a fixed rate; [`FPS`] is the nominal rate the
//! gravity curve is calibrated against (60 ticks per row at level 1).
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 60 | Ticks per cell drop at level 1 |
//! | `TICK_MS` | 16 | Default host tick interval (~60 FPS) |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines needed per level |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(ShapeKind::ALL.len(), 7);
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Nominal tick rate the gravity curve is expressed in.
pub const FPS: u32 = 60;

/// Default real-time interval between host ticks (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Row anchor for a newly spawned active piece.
pub const SPAWN_ROW: i32 = -1;

/// Column anchor for a newly spawned active piece.
pub const SPAWN_COL: i32 = 3;

/// Row anchor for the next-piece preview.
pub const PREVIEW_ROW: i32 = 0;

/// Column anchor for the next-piece preview.
pub const PREVIEW_COL: i32 = 1;

/// Starting level of a fresh game.
pub const START_LEVEL: u32 = 1;

/// Lines that must be cleared to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table (classic Nintendo values).
///
/// Base points for clearing N lines at once; multiplied by the current level.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven piece shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    Z,
    T,
}

impl ShapeKind {
    /// All shapes in catalog order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::T,
    ];
}

/// Visual identity of a filled cell.
///
/// Each shape owns exactly one color. Empty cells are represented by
/// [`Cell`]'s `None`, never by a `Color` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Red,
    Purple,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::Cyan,
        Color::Blue,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Red,
        Color::Purple,
    ];

    /// 24-bit color for renderers.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Cyan => (80, 220, 220),
            Color::Blue => (80, 120, 220),
            Color::Orange => (255, 165, 0),
            Color::Yellow => (240, 220, 80),
            Color::Green => (100, 220, 120),
            Color::Red => (220, 80, 80),
            Color::Purple => (200, 120, 220),
        }
    }
}

/// A single grid cell: `None` is empty, `Some(color)` is filled.
pub type Cell = Option<Color>;

/// Commands fed to the reducer, one at a time.
///
/// User input and the periodic clock share this enum so that a host can
/// serialize both event sources into one stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down (never locks)
    MoveDown,
    /// Rotate piece 90° clockwise in place
    Rotate,
    /// Advance the gravity clock by one tick
    Tick,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::MoveDown,
        Command::Rotate,
        Command::Tick,
    ];

    /// Parse a command from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveDown"), Some(Command::MoveDown));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "movedown" => Some(Command::MoveDown),
            "rotate" => Some(Command::Rotate),
            "tick" => Some(Command::Tick),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveDown => "moveDown",
            Command::Rotate => "rotate",
            Command::Tick => "tick",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names_roundtrip() {
        for cmd in Command::ALL {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
    }

    #[test]
    fn scoring_table_defaults() {
        assert_eq!(LINE_SCORES, [0, 40, 100, 300, 1200]);
        assert_eq!(LINES_PER_LEVEL, 10);
        assert_eq!(START_LEVEL, 1);
    }
}
