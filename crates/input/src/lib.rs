//! Keyboard dispatch for the terminal driver.
//!
//! Maps `crossterm` key events into engine [`GameCommand`]s. Pause and quit
//! are driver concerns (the engine has no pause state), so they get their own
//! predicates instead of commands.
//!
//! [`GameCommand`]: crate::types::GameCommand

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_pause_key, should_quit};
