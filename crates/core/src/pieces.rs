//! Pieces module - tetromino shapes and rotation lookup
//!
//! Each kind has four orientations, each a set of four cell offsets inside a
//! 4x4 box anchored at the piece's top-left corner. Rotation is a pure lookup
//! into the next orientation's row of the table; there are no wall kicks.

use crate::types::{Direction, PieceKind, Rotation};

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i32, i32);

/// Shape of a piece - 4 cell offsets from the piece anchor
pub type PieceShape = [CellOffset; 4];

/// Anchor column/row for newly activated pieces on a field `cols` wide
///
/// The 4x4 shape box is centered horizontally at the top of the field
/// (column 3 on a 10-wide field).
pub fn spawn_anchor(cols: usize) -> (i32, i32) {
    ((cols as i32 - 4) / 2, 0)
}

/// Rotation table indexed by `[kind.index()][rotation.index()]`
static SHAPES: [[PieceShape; 4]; 7] = [
    // I
    [
        [(0, 1), (1, 1), (2, 1), (3, 1)],
        [(2, 0), (2, 1), (2, 2), (2, 3)],
        [(0, 2), (1, 2), (2, 2), (3, 2)],
        [(1, 0), (1, 1), (1, 2), (1, 3)],
    ],
    // O
    [
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
    ],
    // T
    [
        [(1, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (1, 2)],
        [(1, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // S
    [
        [(1, 0), (2, 0), (0, 1), (1, 1)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(1, 1), (2, 1), (0, 2), (1, 2)],
        [(0, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // Z
    [
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(2, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (1, 2), (2, 2)],
        [(1, 0), (0, 1), (1, 1), (0, 2)],
    ],
    // J
    [
        [(0, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (2, 2)],
        [(1, 0), (1, 1), (0, 2), (1, 2)],
    ],
    // L
    [
        [(2, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (1, 2), (2, 2)],
        [(0, 1), (1, 1), (2, 1), (0, 2)],
        [(0, 0), (1, 0), (1, 1), (1, 2)],
    ],
];

/// Get the shape (cell offsets) for a piece kind and rotation
pub fn shape(kind: PieceKind, rotation: Rotation) -> &'static PieceShape {
    &SHAPES[kind.index()][rotation.index()]
}

/// A piece on the field: kind, orientation and anchor
///
/// Pieces are plain values; every transformation returns a new piece and the
/// engine decides whether to adopt it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a piece in its spawn orientation at the given anchor
    pub fn new(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// Create a piece at the spawn anchor of a field `cols` wide
    pub fn spawn(kind: PieceKind, cols: usize) -> Self {
        let (x, y) = spawn_anchor(cols);
        Self::new(kind, x, y)
    }

    /// Offsets for the current orientation
    pub fn shape(&self) -> &'static PieceShape {
        shape(self.kind, self.rotation)
    }

    /// Absolute field coordinates of the four occupied cells
    pub fn cells(&self) -> [(i32, i32); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// The same piece moved by `(dx, dy)`
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// The same piece moved one cell in `direction`
    pub fn shifted(&self, direction: Direction) -> Self {
        self.translated(direction.dx(), 0)
    }

    /// The same piece one row lower
    pub fn lowered(&self) -> Self {
        self.translated(0, 1)
    }

    /// The same piece in its next orientation, same anchor
    pub fn rotated(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_four_distinct_cells_inside_box() {
        for kind in PieceKind::ALL {
            for rotation in [Rotation::North, Rotation::East, Rotation::South, Rotation::West] {
                let s = shape(kind, rotation);
                for (i, a) in s.iter().enumerate() {
                    assert!((0..4).contains(&a.0) && (0..4).contains(&a.1));
                    for b in &s[i + 1..] {
                        assert_ne!(a, b, "{:?} {:?} repeats a cell", kind, rotation);
                    }
                }
            }
        }
    }

    #[test]
    fn o_piece_is_rotation_invariant() {
        let north = shape(PieceKind::O, Rotation::North);
        for rotation in [Rotation::East, Rotation::South, Rotation::West] {
            assert_eq!(shape(PieceKind::O, rotation), north);
        }
    }

    #[test]
    fn spawn_anchor_centers_box() {
        assert_eq!(spawn_anchor(10), (3, 0));
        assert_eq!(spawn_anchor(4), (0, 0));
        assert_eq!(spawn_anchor(11), (3, 0));
    }

    #[test]
    fn rotated_keeps_anchor() {
        let p = Piece::new(PieceKind::T, 2, 5);
        let r = p.rotated();
        assert_eq!((r.x, r.y), (2, 5));
        assert_eq!(r.rotation, Rotation::East);
        assert_eq!(r.cells(), [(3, 5), (3, 6), (4, 6), (3, 7)]);
    }

    #[test]
    fn translated_moves_every_cell() {
        let p = Piece::spawn(PieceKind::O, 10);
        assert_eq!(p.cells(), [(4, 0), (5, 0), (4, 1), (5, 1)]);
        assert_eq!(p.lowered().cells(), [(4, 1), (5, 1), (4, 2), (5, 2)]);
        assert_eq!(
            p.shifted(Direction::Left).cells(),
            [(3, 0), (4, 0), (3, 1), (4, 1)]
        );
    }
}
