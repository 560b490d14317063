//! Scoring module - line clear points, levels and fall speed
//!
//! Line clears use a fixed lookup (40 / 100 / 300 / 1200) multiplied by the
//! level in effect when the piece merged. Clearing more than four rows at once
//! still pays the four-row value. Levels start at 1.

use crate::types::{BASE_DROP_MS, LINES_PER_LEVEL, LINE_SCORES};

/// Points for clearing `lines` rows in one sweep at `level`
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    let base = LINE_SCORES[lines.min(LINE_SCORES.len() - 1)];
    base.saturating_mul(level)
}

/// Level after reaching `total_lines`, starting from `level`.
///
/// The level goes up by one each time the line count exceeds `level * 10`,
/// so 11 lines are needed to leave level 1 and 21 to leave level 2.
pub fn next_level(level: u32, total_lines: u32) -> u32 {
    let mut level = level.max(1);
    while total_lines > level.saturating_mul(LINES_PER_LEVEL) {
        level += 1;
    }
    level
}

/// Fall interval for a level: `1000ms / level`
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS / level.max(1)
}
