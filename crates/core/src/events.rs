//! Change notifications for renderers, HUDs and sound.
//!
//! Listeners are called synchronously from inside the engine command that
//! produced the event, in registration order. A listener must not call back
//! into the engine.

use crate::types::{PieceKind, Tile};

/// What just changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The field or the active piece changed; redraw the playing area.
    FieldUpdated,
    /// A new piece is queued; `tiles` are where it will appear.
    NextPiece { kind: PieceKind, tiles: [Tile; 4] },
    /// Rows cleared by the last lock, by original index, top to bottom.
    LinesCleared { rows: Vec<usize>, points: u32 },
    ScoreUpdated {
        score: u32,
        level: u32,
        lines_cleared_this_level: u32,
        lines_to_level_up: u32,
    },
    /// The field was wiped and the drop cadence changed.
    LevelUp {
        level: u32,
        bonus: u32,
        drop_interval_ms: u32,
    },
    GameOver { score: u32, level: u32 },
}

/// Receiver of [`GameEvent`]s
pub trait Listener {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> Listener for F {
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Handle returned by `add_listener`, used to unregister
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

/// Registered listeners in registration order
#[derive(Default)]
pub(crate) struct Listeners {
    entries: Vec<(ListenerId, Box<dyn Listener>)>,
    next_id: u32,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Box<dyn Listener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        for (_, listener) in &mut self.entries {
            listener.on_event(&event);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
