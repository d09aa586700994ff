//! Runtime configuration, read from environment variables.
//!
//! - `TUI_2048_SEED`: RNG seed (`u32`); unset or unparsable means clock-derived
//! - `TUI_2048_LOG_PATH`: file that receives log output; unset means no log file
//!
//! Log filtering itself follows `RUST_LOG`, as usual for `env_logger`.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const SEED_VAR: &str = "TUI_2048_SEED";
pub const LOG_PATH_VAR: &str = "TUI_2048_LOG_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed seed for reproducible games.
    pub seed: Option<u32>,
    /// Where log records go. Without it logging stays off unless `RUST_LOG` is set,
    /// because stderr shares the terminal with the game.
    pub log_path: Option<PathBuf>,
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(SEED_VAR).and_then(|s| s.trim().parse().ok());

        let log_path = lookup(LOG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self { seed, log_path }
    }

    /// The configured seed, or one derived from the clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }

    /// `env_logger` filter used when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.log_path.is_some() {
            "info"
        } else {
            "off"
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
