//! Scoring module - classic line-clear scoring and level progression.

use crate::types::{
    BASE_FALL_MS, FALL_MS_PER_LEVEL, LINES_PER_LEVEL, LINE_SCORES, MAX_SPEED_LEVEL,
};

/// Points awarded for clearing `lines` rows at `level` (0-based).
///
/// Classic rules: 40/100/300/1200 base, multiplied by `level + 1`.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_SCORES[lines - 1] * (level + 1)
}

/// Whether the given totals warrant a level-up.
pub fn should_level_up(total_lines: u32, level: u32) -> bool {
    total_lines >= (level + 1) * LINES_PER_LEVEL
}

/// Gravity interval in milliseconds at `level`.
///
/// One drop per second at level 0, 45 ms faster per level, capped so the
/// interval never goes below 10 ms.
pub fn fall_interval_ms(level: u32) -> u32 {
    BASE_FALL_MS - level.min(MAX_SPEED_LEVEL) * FALL_MS_PER_LEVEL
}
