//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types shared by the puzzle engine and its
//! collaborators (renderer, keyboard dispatcher, driver). All types are plain
//! data with no external dependencies.
//!
//! # Coordinates
//!
//! - `x` grows to the right, `y` grows downward
//! - Row 0 is the top of the field, so new pieces appear at `y = 0`
//!
//! # Default Rules
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 20 | Field height |
//! | `DEFAULT_COLS` | 10 | Field width |
//! | `LINE_SCORES` | 10/30/70/150 | Points for 1-4 rows cleared by one lock |
//! | `OVERFLOW_LINE_SCORE` | 200 | Points when more rows clear than the table covers |
//! | `EMPTY_ROW_BONUS` | 10 | Level-up bonus per empty row |
//! | `INITIAL_LEVEL` | 1 | Level after start/restart |
//! | `INITIAL_DROP_INTERVAL_MS` | 1000 | Drop cadence at the first level |
//! | `DROP_INTERVAL_STEP_MS` | 100 | Cadence speed-up per level |
//! | `DROP_INTERVAL_FLOOR_MS` | 200 | Fastest cadence |
//! | `LINES_TO_LEVEL_UP` | 10 | Lines needed for the first level-up |
//! | `LINES_TO_LEVEL_UP_INCREMENT` | 10 | Extra lines needed per level |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, Rotation};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! ```

/// Default field height in cells
pub const DEFAULT_ROWS: usize = 20;

/// Default field width in cells
pub const DEFAULT_COLS: usize = 10;

/// Smallest accepted field dimension (every shape fits in a 4x4 box)
pub const MIN_FIELD_DIMENSION: usize = 4;

/// Points for clearing 1, 2, 3 or 4 rows with a single lock
pub const LINE_SCORES: [u32; 4] = [10, 30, 70, 150];

/// Points when a lock clears more rows than `LINE_SCORES` covers
pub const OVERFLOW_LINE_SCORE: u32 = 200;

/// Level-up bonus per empty row left on the field
pub const EMPTY_ROW_BONUS: u32 = 10;

/// Level after start/restart
pub const INITIAL_LEVEL: u32 = 1;

/// Drop cadence at the first level (1000ms = 1 second per row)
pub const INITIAL_DROP_INTERVAL_MS: u32 = 1000;

/// Drop cadence speed-up applied on each level-up
pub const DROP_INTERVAL_STEP_MS: u32 = 100;

/// Fastest drop cadence
pub const DROP_INTERVAL_FLOOR_MS: u32 = 200;

/// Lines needed for the first level-up
pub const LINES_TO_LEVEL_UP: u32 = 10;

/// Extra lines needed for every following level-up
pub const LINES_TO_LEVEL_UP_INCREMENT: u32 = 10;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Position of this kind in [`PieceKind::ALL`] and in the shape table
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Color used for locked tiles of this kind
    pub fn color(self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0, 255, 255),
            PieceKind::O => Rgb::new(255, 255, 0),
            PieceKind::T => Rgb::new(128, 0, 128),
            PieceKind::S => Rgb::new(0, 255, 0),
            PieceKind::Z => Rgb::new(255, 0, 0),
            PieceKind::J => Rgb::new(0, 0, 255),
            PieceKind::L => Rgb::new(255, 165, 0),
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Single uppercase letter, as shown in the HUD
    pub fn letter(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }
}

/// The four discrete orientations of a piece
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Position of this orientation in the shape table
    pub fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// Horizontal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta of a one-cell move
    pub fn dx(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// A locked tile on the field
///
/// `x` and `y` always equal the tile's position in the field matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub color: Rgb,
    pub x: usize,
    pub y: usize,
}

/// A cell on the field
///
/// - `None`: Empty cell
/// - `Some(Tile)`: Cell holding a locked tile
pub type Cell = Option<Tile>;

/// Commands a driver can issue to the engine
///
/// Used by both the keyboard dispatcher and scripted drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it has landed
    SoftDrop,
    /// Rotate piece to its next orientation
    Rotate,
    /// Start a fresh game
    Restart,
}
