//! Runtime configuration from `PIG_TETRIS_*` environment variables.
//!
//! Every variable is optional; missing or unparsable values keep the default.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::Rules;
use crate::input::DEFAULT_KEY_RELEASE_TIMEOUT_MS;
use crate::types::{FRAME_MS, MOVE_REPEAT_MS};

/// Smallest arena side; the I piece needs four cells.
pub const MIN_ARENA_SIDE: usize = 4;
/// Largest arena side the terminal view lays out.
pub const MAX_ARENA_SIDE: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub rules: Rules,
    pub seed: u32,
    pub frame_ms: u32,
    pub move_repeat_ms: u32,
    pub key_release_timeout_ms: u32,
    /// Session journal destination; `None` disables the journal
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map here).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parsed = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());
        let ms = |key: &str, default: u32| {
            parsed(key)
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(default)
                .max(1)
        };
        let side = |key: &str, default: usize| {
            parsed(key)
                .map(|v| v.clamp(MIN_ARENA_SIDE as u64, MAX_ARENA_SIDE as u64) as usize)
                .unwrap_or(default)
        };

        let defaults = Rules::default();
        let rules = Rules {
            width: side("PIG_TETRIS_WIDTH", defaults.width),
            height: side("PIG_TETRIS_HEIGHT", defaults.height),
            initial_drop_ms: ms("PIG_TETRIS_INITIAL_DROP_MS", defaults.initial_drop_ms),
            base_drop_ms: ms("PIG_TETRIS_BASE_DROP_MS", defaults.base_drop_ms),
            fast_drop_ms: ms("PIG_TETRIS_FAST_DROP_MS", defaults.fast_drop_ms),
            ..defaults
        };

        let seed = parsed("PIG_TETRIS_SEED")
            .map(|v| v as u32)
            .unwrap_or_else(seed_from_clock);

        let log_path = lookup("PIG_TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            rules,
            seed,
            frame_ms: FRAME_MS,
            move_repeat_ms: ms("PIG_TETRIS_MOVE_REPEAT_MS", MOVE_REPEAT_MS),
            key_release_timeout_ms: ms(
                "PIG_TETRIS_KEY_RELEASE_TIMEOUT_MS",
                DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            ),
            log_path,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
