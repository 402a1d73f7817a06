//! Core game logic - the falling-block puzzle engine
//!
//! This crate contains the field, the piece catalog, the score/level rules and
//! the state machine that ties them together. It has **no dependencies** on
//! rendering, input or timers, making it:
//!
//! - **Deterministic**: pieces come from an injected [`PieceSource`], so a
//!   seed or a fixed sequence reproduces a game exactly
//! - **Testable**: every rule is reachable through the public API
//! - **Embeddable**: the caller drives it with commands and observes it
//!   through listeners
//!
//! # Module Structure
//!
//! - [`field`]: the grid of locked tiles, collision queries and row clearing
//! - [`pieces`]: the seven shapes, their four orientations and the spawn anchor
//! - [`engine`]: [`PuzzleEngine`], the `Playing` / `GameOver` state machine
//! - [`progress`]: score, level, lines and drop cadence
//! - [`events`]: [`GameEvent`] and the [`Listener`] protocol
//! - [`source`]: random and scripted piece sources
//! - [`config`]: field dimensions and the rules table
//! - [`snapshot`]: an owned copy of the state for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn horizontally centered at the top of the field
//! - Rotation is a table lookup around a fixed anchor; a blocked rotation is
//!   rejected (no wall kicks)
//! - A piece locks when a downward move fails
//! - Full rows collapse top-down; points depend on how many rows one lock clears
//! - Clearing enough rows levels up: the board is wiped, empty rows earn a
//!   bonus and the drop cadence speeds up
//! - The game ends when a freshly spawned piece has no room
//!
//! # Example
//!
//! ```
//! use blockfall_core::{DropOutcome, EngineConfig, PuzzleEngine, RandomPieces};
//!
//! let mut engine = PuzzleEngine::new(EngineConfig::default(), RandomPieces::seeded(12345))
//!     .expect("default config is valid");
//!
//! engine.move_left();
//! engine.rotate();
//! assert_eq!(engine.tick(), DropOutcome::Moved);
//!
//! assert_eq!(engine.score(), 0);
//! assert_eq!(engine.drop_interval_ms(), 1000);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod field;
pub mod pieces;
pub mod progress;
pub mod snapshot;
pub mod source;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use config::{EngineConfig, Rules};
pub use engine::{piece_tiles, DropOutcome, GameState, PuzzleEngine};
pub use error::ConfigError;
pub use events::{GameEvent, Listener, ListenerId};
pub use field::Field;
pub use pieces::{shape, spawn_anchor, Piece, PieceShape};
pub use progress::{GameProgress, LevelUp};
pub use snapshot::GameSnapshot;
pub use source::{PieceSequence, PieceSource, RandomPieces};
