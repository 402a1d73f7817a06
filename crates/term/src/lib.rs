//! Terminal rendering for the puzzle engine.
//!
//! Snapshots are drawn into a plain framebuffer (no widgets or layout engine)
//! which is then flushed to the terminal. Each field cell is two characters
//! wide to keep the blocks roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph};
pub use game_view::{GameView, Overlay, Viewport};
pub use renderer::{encode_changed_rows_into, encode_full_into, TerminalRenderer};
