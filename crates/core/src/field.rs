//! Field module - the grid of locked tiles
//!
//! The field is a `rows x cols` grid where each cell is empty or holds a locked
//! [`Tile`]. Uses a flat vector in row-major order (`y * cols + x`).
//! Coordinates: x grows to the right, y grows downward; row 0 is the top.
//!
//! The active piece is never written here while it moves; the field changes
//! only when a piece locks, when full rows collapse, and on a level-up wipe.

use crate::config::validate_dimensions;
use crate::error::ConfigError;
use crate::pieces::Piece;
use crate::types::{Cell, PieceKind, Rgb, Tile};

/// Color of `#` cells in [`Field::from_bottom_rows`] patterns
pub const PATTERN_COLOR: Rgb = Rgb::new(128, 128, 128);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Field {
    /// Create an empty field
    ///
    /// Dimensions are validated by the engine; see [`crate::EngineConfig::validate`].
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Build a pre-filled field from ASCII rows aligned to the bottom
    ///
    /// `.` is empty, `#` is a gray tile, a piece letter (`I O T S Z J L`,
    /// any case) is a tile in that piece's color. The last pattern line
    /// becomes the bottom row.
    ///
    /// ```
    /// use blockfall_core::Field;
    ///
    /// let field = Field::from_bottom_rows(20, 10, &["#########."]).unwrap();
    /// assert_eq!(field.locked_count(), 9);
    /// assert!(field.get(9, 19).unwrap().is_none());
    /// ```
    pub fn from_bottom_rows(rows: usize, cols: usize, pattern: &[&str]) -> Result<Self, ConfigError> {
        validate_dimensions(rows, cols)?;
        if pattern.len() > rows {
            return Err(ConfigError::InvalidPattern {
                line: rows,
                reason: format!("{} lines do not fit in {} rows", pattern.len(), rows),
            });
        }

        let mut field = Self::new(rows, cols);
        let top = rows - pattern.len();
        for (line, text) in pattern.iter().enumerate() {
            let width = text.chars().count();
            if width != cols {
                return Err(ConfigError::InvalidPattern {
                    line,
                    reason: format!("expected {} columns, got {}", cols, width),
                });
            }
            let y = top + line;
            for (x, ch) in text.chars().enumerate() {
                let color = match ch {
                    '.' => continue,
                    '#' => PATTERN_COLOR,
                    other => match PieceKind::from_str(&other.to_string()) {
                        Some(kind) => kind.color(),
                        None => {
                            return Err(ConfigError::InvalidPattern {
                                line,
                                reason: format!("unexpected character {:?}", other),
                            })
                        }
                    },
                };
                field.cells[y * cols + x] = Some(Tile { color, x, y });
            }
        }
        Ok(field)
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.cols || y as usize >= self.rows {
            return None;
        }
        Some(y as usize * self.cols + x as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Every locked tile, top-left to bottom-right
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.cells.iter().flatten()
    }

    pub fn locked_count(&self) -> usize {
        self.tiles().count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check whether every cell of `piece` is in bounds and empty
    pub fn can_place(&self, piece: &Piece) -> bool {
        piece.cells().iter().all(|&(x, y)| self.is_free(x, y))
    }

    /// Write a tile for every cell of `piece`
    ///
    /// Callers confirm placement with [`Field::can_place`] first; cells that
    /// fall outside the field are skipped.
    pub fn lock(&mut self, piece: &Piece, color: Rgb) {
        for (x, y) in piece.cells() {
            if let Some(idx) = self.index(x, y) {
                self.cells[idx] = Some(Tile {
                    color,
                    x: x as usize,
                    y: y as usize,
                });
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < self.rows && self.row(y).iter().all(Option::is_some)
    }

    fn is_row_empty(&self, y: usize) -> bool {
        self.row(y).iter().all(Option::is_none)
    }

    /// Clear every full row and collapse the rows above it
    ///
    /// Rows are scanned top to bottom. Each full row is removed on the spot:
    /// everything above it moves down one row and an empty row appears at the
    /// top. Rows above a collapsed row only move into indices that were already
    /// scanned, so the returned indices are the rows' original positions, in
    /// ascending order.
    pub fn clear_full_rows(&mut self) -> Vec<usize> {
        let mut cleared = Vec::new();
        for y in 0..self.rows {
            if self.is_row_full(y) {
                self.collapse_row(y);
                cleared.push(y);
            }
        }
        cleared
    }

    /// Remove row `y`, shifting rows `0..y` down by one
    fn collapse_row(&mut self, y: usize) {
        let width = self.cols;
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(None);

        // Keep stored coordinates equal to matrix indices.
        for row in 1..=y {
            for cell in &mut self.cells[row * width..(row + 1) * width] {
                if let Some(tile) = cell {
                    tile.y = row;
                }
            }
        }
    }

    /// Number of rows with no locked tile
    pub fn count_empty_rows(&self) -> usize {
        (0..self.rows).filter(|&y| self.is_row_empty(y)).count()
    }

    /// Remove every locked tile
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}
