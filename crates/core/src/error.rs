//! Configuration faults.
//!
//! Ordinary gameplay never produces an error: a blocked move or rotation is a
//! normal outcome and is reported as `false`. These variants describe setups
//! that can never be satisfied at runtime and are rejected at construction.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("field must be at least {min}x{min} cells, got {rows} rows x {cols} columns")]
    InvalidDimensions { rows: usize, cols: usize, min: usize },

    #[error("piece catalog is empty")]
    EmptyCatalog,

    #[error("line score table is empty")]
    EmptyScoreTable,

    #[error("drop interval must be positive (initial {initial_ms}ms, floor {floor_ms}ms)")]
    InvalidDropInterval { initial_ms: u32, floor_ms: u32 },

    #[error("lines needed to level up must be positive")]
    InvalidLevelThreshold,

    #[error("invalid field pattern at line {line}: {reason}")]
    InvalidPattern { line: usize, reason: String },
}
