//! Scoring module - line-clear points and level progression
//!
//! Classic table: 40 / 100 / 300 / 1200 points for 1-4 lines, multiplied by
//! the level the clear happened on. Every [`LINES_PER_LEVEL`] cleared lines
//! advance one level, starting from [`START_LEVEL`].

use crate::types::{LINES_PER_LEVEL, LINE_SCORES, START_LEVEL};

/// Points for clearing `lines` rows at once on `level`.
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// Level reached after `total_lines` cleared lines.
pub fn calculate_level(total_lines: u32) -> u32 {
    START_LEVEL + total_lines / LINES_PER_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_line_scores() {
        assert_eq!(calculate_line_score(0, 1), 0);
        assert_eq!(calculate_line_score(1, 1), 40);
        assert_eq!(calculate_line_score(2, 1), 100);
        assert_eq!(calculate_line_score(3, 1), 300);
        assert_eq!(calculate_line_score(4, 1), 1200);

        assert_eq!(calculate_line_score(1, 5), 40 * 5);
        assert_eq!(calculate_line_score(4, 5), 1200 * 5);
    }

    #[test]
    fn test_more_than_four_lines_scores_nothing() {
        assert_eq!(calculate_line_score(5, 3), 0);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(calculate_level(0), 1);
        assert_eq!(calculate_level(9), 1);
        assert_eq!(calculate_level(10), 2);
        assert_eq!(calculate_level(29), 3);
        assert_eq!(calculate_level(100), 11);
    }
}
