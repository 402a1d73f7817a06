//! Read-only copy of the engine state for collaborators.

use crate::types::{Cell, PieceKind, Tile};

/// Owned copy of everything a renderer or HUD reads
///
/// Produced by [`crate::PuzzleEngine::snapshot`] so collaborators can draw
/// without borrowing the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Locked cells, row-major
    pub cells: Vec<Cell>,
    pub active_kind: PieceKind,
    pub active: [Tile; 4],
    pub next_kind: PieceKind,
    pub next: [Tile; 4],
    pub score: u32,
    pub level: u32,
    pub lines_cleared_this_level: u32,
    pub lines_to_level_up: u32,
    pub total_lines: u32,
    pub drop_interval_ms: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Locked cell at (x, y); `None` when empty or out of bounds
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        self.cells[y * self.cols + x]
    }
}
