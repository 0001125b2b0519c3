//! Scoring module - row-clear points and the fall-speed curve
//!
//! Every cleared row is worth a flat amount. The fall interval halves each
//! time the score crosses another multiple of the speed-up step.

use crate::types::{
    ARENA_HEIGHT, ARENA_WIDTH, BASE_DROP_MS, FAST_DROP_MS, INITIAL_DROP_MS, ROW_CLEAR_SCORE,
    SPEEDUP_SCORE_STEP,
};

/// Tunable rules for one game instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub width: usize,
    pub height: usize,
    /// Fall interval before the first lock
    pub initial_drop_ms: u32,
    /// Baseline of the difficulty curve; also the value restored on board reset
    pub base_drop_ms: u32,
    /// Fall interval while fast drop is held
    pub fast_drop_ms: u32,
    pub row_clear_score: u32,
    pub speedup_score_step: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            initial_drop_ms: INITIAL_DROP_MS,
            base_drop_ms: BASE_DROP_MS,
            fast_drop_ms: FAST_DROP_MS,
            row_clear_score: ROW_CLEAR_SCORE,
            speedup_score_step: SPEEDUP_SCORE_STEP,
        }
    }
}

impl Rules {
    /// Default rules on an arena of the given size
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Fall interval for `score` under these rules
    pub fn drop_interval_ms(&self, score: u32) -> u32 {
        drop_interval_for_score(self.base_drop_ms, self.speedup_score_step, score)
    }
}

/// `base / 2^floor(score / step)`, never below 1ms
pub fn drop_interval_for_score(base_ms: u32, step: u32, score: u32) -> u32 {
    let halvings = score.checked_div(step).unwrap_or(0);
    let interval = base_ms.checked_shr(halvings).unwrap_or(0);
    interval.max(1)
}

/// Points for clearing `rows` rows at once
pub fn row_clear_points(rows: u32, per_row: u32) -> u32 {
    rows.saturating_mul(per_row)
}
