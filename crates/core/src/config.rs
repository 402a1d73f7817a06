//! Engine configuration - field dimensions and the rules table
//!
//! Scoring constants differ between rule sets, so every value the engine's
//! scoring and leveling uses lives here rather than being hard-coded.
//! Both structs deserialize with defaults, so a rules file only needs to name
//! the values it changes:
//!
//! ```
//! use blockfall_core::config::{EngineConfig, Rules};
//!
//! let config = EngineConfig::default();
//! assert_eq!((config.rows, config.cols), (20, 10));
//! assert_eq!(config.rules.line_clear_score(4), 150);
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::*;

/// Scoring and leveling rules
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Points for clearing `n` rows at once, at index `n - 1`
    pub line_scores: Vec<u32>,
    /// Points when more rows clear than `line_scores` covers
    pub overflow_score: u32,
    /// Level-up bonus per empty row
    pub empty_row_bonus: u32,
    pub initial_level: u32,
    pub initial_drop_interval_ms: u32,
    pub drop_interval_step_ms: u32,
    pub drop_interval_floor_ms: u32,
    pub initial_lines_to_level_up: u32,
    pub lines_to_level_up_increment: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            line_scores: LINE_SCORES.to_vec(),
            overflow_score: OVERFLOW_LINE_SCORE,
            empty_row_bonus: EMPTY_ROW_BONUS,
            initial_level: INITIAL_LEVEL,
            initial_drop_interval_ms: INITIAL_DROP_INTERVAL_MS,
            drop_interval_step_ms: DROP_INTERVAL_STEP_MS,
            drop_interval_floor_ms: DROP_INTERVAL_FLOOR_MS,
            initial_lines_to_level_up: LINES_TO_LEVEL_UP,
            lines_to_level_up_increment: LINES_TO_LEVEL_UP_INCREMENT,
        }
    }
}

impl Rules {
    /// Points for `lines` rows cleared by a single lock
    pub fn line_clear_score(&self, lines: usize) -> u32 {
        if lines == 0 {
            return 0;
        }
        self.line_scores
            .get(lines - 1)
            .copied()
            .unwrap_or(self.overflow_score)
    }

    /// Drop interval after one level-up from `current_ms`
    pub fn next_drop_interval_ms(&self, current_ms: u32) -> u32 {
        current_ms
            .saturating_sub(self.drop_interval_step_ms)
            .max(self.drop_interval_floor_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.line_scores.is_empty() {
            return Err(ConfigError::EmptyScoreTable);
        }
        if self.initial_drop_interval_ms == 0 || self.drop_interval_floor_ms == 0 {
            return Err(ConfigError::InvalidDropInterval {
                initial_ms: self.initial_drop_interval_ms,
                floor_ms: self.drop_interval_floor_ms,
            });
        }
        if self.initial_lines_to_level_up == 0 {
            return Err(ConfigError::InvalidLevelThreshold);
        }
        Ok(())
    }
}

/// Construction parameters for [`crate::PuzzleEngine`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    pub rules: Rules,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            rules: Rules::default(),
        }
    }
}

impl EngineConfig {
    /// Default rules on a `rows x cols` field
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            rules: Rules::default(),
        }
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dimensions(self.rows, self.cols)?;
        self.rules.validate()
    }
}

pub(crate) fn validate_dimensions(rows: usize, cols: usize) -> Result<(), ConfigError> {
    if rows < MIN_FIELD_DIMENSION || cols < MIN_FIELD_DIMENSION {
        return Err(ConfigError::InvalidDimensions {
            rows,
            cols,
            min: MIN_FIELD_DIMENSION,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_clear_score_uses_table_then_overflow() {
        let rules = Rules::default();
        assert_eq!(rules.line_clear_score(0), 0);
        assert_eq!(rules.line_clear_score(1), 10);
        assert_eq!(rules.line_clear_score(2), 30);
        assert_eq!(rules.line_clear_score(3), 70);
        assert_eq!(rules.line_clear_score(4), 150);
        assert_eq!(rules.line_clear_score(5), 200);
    }

    #[test]
    fn drop_interval_is_floored() {
        let rules = Rules::default();
        assert_eq!(rules.next_drop_interval_ms(1000), 900);
        assert_eq!(rules.next_drop_interval_ms(250), 200);
        assert_eq!(rules.next_drop_interval_ms(200), 200);
        assert_eq!(rules.next_drop_interval_ms(50), 200);
    }

    #[test]
    fn rejects_zero_dimensions() {
        let err = EngineConfig::new(0, 10).validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidDimensions {
                rows: 0,
                cols: 10,
                min: MIN_FIELD_DIMENSION
            }
        );
        assert!(EngineConfig::new(20, 3).validate().is_err());
        assert!(EngineConfig::new(4, 4).validate().is_ok());
    }

    #[test]
    fn rejects_broken_rules() {
        let rules = Rules {
            line_scores: vec![],
            ..Rules::default()
        };
        assert_eq!(rules.validate(), Err(ConfigError::EmptyScoreTable));

        let rules = Rules {
            drop_interval_floor_ms: 0,
            ..Rules::default()
        };
        assert!(matches!(
            rules.validate(),
            Err(ConfigError::InvalidDropInterval { .. })
        ));

        let rules = Rules {
            initial_lines_to_level_up: 0,
            ..Rules::default()
        };
        assert_eq!(rules.validate(), Err(ConfigError::InvalidLevelThreshold));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "cols": 12, "rules": { "empty_row_bonus": 25 } }"#)
                .unwrap();
        assert_eq!(config.rows, DEFAULT_ROWS);
        assert_eq!(config.cols, 12);
        assert_eq!(config.rules.empty_row_bonus, 25);
        assert_eq!(config.rules.line_scores, LINE_SCORES.to_vec());
    }
}
