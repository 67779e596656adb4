//! Gravity module - level-dependent drop speed and the tick countdown
//!
//! Gravity is measured in ticks per one-row drop. The host sends a tick per
//! frame; the engine counts down and drops the piece when the count runs out.

use crate::types::FPS;

/// Ticks per one-row drop at `level`.
///
/// `(0.8 - (level - 1) * 0.007) ^ (level - 1) * FPS`. Exactly [`FPS`] at
/// level 1 and strictly decreasing after that. Level 0 is treated as level 1.
pub fn speed_curve(level: u32) -> f64 {
    let n = level.saturating_sub(1);
    let base = 0.8 - f64::from(n) * 0.007;
    base.powi(n as i32) * f64::from(FPS)
}

/// Countdown value to load for a given gravity.
///
/// Past level ~115 the curve's base goes negative and `powi` alternates sign
/// with growing magnitude, so the raw value is clamped to `[0, FPS]`: never
/// slower than level 1, and anything at or below one fires every tick.
pub fn reload(gravity: f64) -> f64 {
    gravity.clamp(0.0, f64::from(FPS))
}

/// Result of advancing the countdown by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockStep {
    /// Not yet; ticks remaining.
    Wait(f64),
    /// The countdown ran out: drop the piece and reload.
    Drop,
}

/// Advance `countdown` by one tick.
///
/// Fires once the remaining count reaches zero, so a gravity of 60 drops on
/// the 60th tick. Gravities at or below one fire every tick.
pub fn step(countdown: f64) -> ClockStep {
    let remaining = countdown - 1.0;
    if remaining <= 0.0 {
        ClockStep::Drop
    } else {
        ClockStep::Wait(remaining)
    }
}
