//! Host configuration read from the environment.

use std::env;
use std::time::Duration;

use crate::core::{EntropySource, PieceSource, SeededSource};
use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Fixed piece seed; `None` draws from OS entropy.
    pub seed: Option<u32>,
    pub tick_ms: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: TICK_MS as u64,
        }
    }
}

impl HostConfig {
    /// `BLOCKFALL_SEED` and `BLOCKFALL_TICK_MS`; unparseable values fall back
    /// to the defaults.
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("BLOCKFALL_SEED").ok().as_deref(),
            env::var("BLOCKFALL_TICK_MS").ok().as_deref(),
        )
    }

    fn from_vars(seed: Option<&str>, tick_ms: Option<&str>) -> Self {
        let seed = seed.and_then(|s| s.trim().parse().ok());
        let tick_ms = tick_ms
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(TICK_MS as u64);

        Self { seed, tick_ms }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn piece_source(&self) -> Box<dyn PieceSource> {
        match self.seed {
            Some(seed) => Box::new(SeededSource::new(seed)),
            None => Box::new(EntropySource::new()),
        }
    }
}
