//! Terminal input module (host-facing).
//!
//! Maps `crossterm` key events onto engine [`Command`](crate::types::Command)s.
//! The engine never sees key codes; hosts translate here and feed the result
//! to the reducer alongside their own periodic ticks.

pub mod map;

pub use blockfall_types as types;

pub use map::{map_key, should_quit};
