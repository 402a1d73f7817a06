//! Score and level progression
//!
//! Mutated only by the engine after a lock that cleared rows.

use crate::config::Rules;

/// Score, level and drop cadence for the current game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameProgress {
    pub score: u32,
    pub level: u32,
    pub lines_cleared_this_level: u32,
    pub lines_to_level_up: u32,
    pub drop_interval_ms: u32,
    /// Lines cleared since the game started, across levels
    pub total_lines: u32,
}

/// What a level-up changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
    pub bonus: u32,
    pub drop_interval_ms: u32,
    pub lines_to_level_up: u32,
}

impl GameProgress {
    /// Initial values for a fresh game
    pub fn new(rules: &Rules) -> Self {
        Self {
            score: 0,
            level: rules.initial_level,
            lines_cleared_this_level: 0,
            lines_to_level_up: rules.initial_lines_to_level_up,
            drop_interval_ms: rules.initial_drop_interval_ms,
            total_lines: 0,
        }
    }

    /// Award points for `lines` rows cleared by one lock
    ///
    /// Returns the points added.
    pub fn award_lines(&mut self, lines: usize, rules: &Rules) -> u32 {
        let points = rules.line_clear_score(lines);
        self.score = self.score.saturating_add(points);
        self.lines_cleared_this_level = self.lines_cleared_this_level.saturating_add(lines as u32);
        self.total_lines = self.total_lines.saturating_add(lines as u32);
        points
    }

    pub fn level_up_due(&self) -> bool {
        self.lines_cleared_this_level >= self.lines_to_level_up
    }

    /// Advance one level, awarding `empty_rows * empty_row_bonus`
    pub fn level_up(&mut self, empty_rows: usize, rules: &Rules) -> LevelUp {
        let bonus = (empty_rows as u32).saturating_mul(rules.empty_row_bonus);
        self.score = self.score.saturating_add(bonus);
        self.level = self.level.saturating_add(1);
        self.drop_interval_ms = rules.next_drop_interval_ms(self.drop_interval_ms);
        self.lines_to_level_up = self
            .lines_to_level_up
            .saturating_add(rules.lines_to_level_up_increment);
        self.lines_cleared_this_level = 0;

        LevelUp {
            level: self.level,
            bonus,
            drop_interval_ms: self.drop_interval_ms,
            lines_to_level_up: self.lines_to_level_up,
        }
    }
}
