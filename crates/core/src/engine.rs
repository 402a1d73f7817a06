//! Puzzle engine - the falling-block state machine
//!
//! This module ties together the field, the active and next pieces, the piece
//! source and the score/level progression. Every command runs to completion
//! (including any lock, clear, level-up and spawn it triggers) and reports
//! what changed to the registered listeners before returning.
//!
//! The engine owns no timer: a driver calls [`PuzzleEngine::tick`] every
//! [`PuzzleEngine::drop_interval_ms`] milliseconds and re-reads the interval
//! after a level-up.

use crate::config::{EngineConfig, Rules};
use crate::error::ConfigError;
use crate::events::{GameEvent, Listener, ListenerId, Listeners};
use crate::field::Field;
use crate::pieces::Piece;
use crate::progress::GameProgress;
use crate::snapshot::GameSnapshot;
use crate::source::PieceSource;
use crate::types::{Direction, GameCommand, PieceKind, Tile};

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Playing,
    /// Terminal until [`PuzzleEngine::restart`]
    GameOver,
}

/// Result of a soft drop / tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The game is over; nothing changed.
    Ignored,
    /// The piece moved down one row.
    Moved,
    /// The piece landed and locked; the next piece is active.
    Locked { lines_cleared: usize },
    /// The piece locked and the next piece had no room to spawn.
    GameOver,
}

/// Tiles covered by `piece`, colored by its kind
pub fn piece_tiles(piece: &Piece) -> [Tile; 4] {
    let color = piece.kind.color();
    piece.cells().map(|(x, y)| Tile {
        color,
        x: x.max(0) as usize,
        y: y.max(0) as usize,
    })
}

#[derive(Debug)]
pub struct PuzzleEngine<S> {
    config: EngineConfig,
    field: Field,
    active: Piece,
    next: Piece,
    progress: GameProgress,
    state: GameState,
    source: S,
    listeners: Listeners,
}

impl<S: PieceSource> PuzzleEngine<S> {
    /// Create an engine on an empty field and start the game
    ///
    /// Fails if the configuration can never be played (field smaller than
    /// a piece box, empty score table, zero intervals).
    pub fn new(config: EngineConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let field = Field::new(config.rows, config.cols);
        Ok(Self::start(config, source, field))
    }

    /// Create an engine on a prepared field and start the game
    ///
    /// The field's dimensions become the configured dimensions. If the spawn
    /// area is already blocked, the game starts over.
    pub fn with_field(rules: Rules, source: S, field: Field) -> Result<Self, ConfigError> {
        let config = EngineConfig {
            rows: field.rows(),
            cols: field.cols(),
            rules,
        };
        config.validate()?;
        Ok(Self::start(config, source, field))
    }

    fn start(config: EngineConfig, mut source: S, field: Field) -> Self {
        let cols = config.cols;
        let active = Piece::spawn(source.next_kind(), cols);
        let next = Piece::spawn(source.next_kind(), cols);
        let state = if field.can_place(&active) {
            GameState::Playing
        } else {
            GameState::GameOver
        };

        Self {
            progress: GameProgress::new(&config.rules),
            config,
            field,
            active,
            next,
            state,
            source,
            listeners: Listeners::default(),
        }
    }

    // ---------------------------------------------------------------------
    // Listeners
    // ---------------------------------------------------------------------

    pub fn add_listener(&mut self, listener: impl Listener + 'static) -> ListenerId {
        self.listeners.add(Box::new(listener))
    }

    /// Returns false if `id` was not registered
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn emit(&mut self, event: GameEvent) {
        self.listeners.emit(event);
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn active_tiles(&self) -> [Tile; 4] {
        piece_tiles(&self.active)
    }

    /// Tiles of the next piece at the spawn anchor
    pub fn next_tiles(&self) -> [Tile; 4] {
        piece_tiles(&self.next)
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next.kind
    }

    pub fn progress(&self) -> &GameProgress {
        &self.progress
    }

    pub fn score(&self) -> u32 {
        self.progress.score
    }

    pub fn level(&self) -> u32 {
        self.progress.level
    }

    pub fn lines_cleared_this_level(&self) -> u32 {
        self.progress.lines_cleared_this_level
    }

    pub fn lines_to_level_up(&self) -> u32 {
        self.progress.lines_to_level_up
    }

    /// Cadence at which the driver should call [`PuzzleEngine::tick`]
    pub fn drop_interval_ms(&self) -> u32 {
        self.progress.drop_interval_ms
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            rows: self.field.rows(),
            cols: self.field.cols(),
            cells: self.field.cells().to_vec(),
            active_kind: self.active.kind,
            active: self.active_tiles(),
            next_kind: self.next.kind,
            next: self.next_tiles(),
            score: self.progress.score,
            level: self.progress.level,
            lines_cleared_this_level: self.progress.lines_cleared_this_level,
            lines_to_level_up: self.progress.lines_to_level_up,
            total_lines: self.progress.total_lines,
            drop_interval_ms: self.progress.drop_interval_ms,
            game_over: self.is_game_over(),
        }
    }

    // ---------------------------------------------------------------------
    // Commands
    // ---------------------------------------------------------------------

    /// Dispatch a command value
    ///
    /// Returns whether the command changed anything.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.move_piece(Direction::Left),
            GameCommand::MoveRight => self.move_piece(Direction::Right),
            GameCommand::Rotate => self.rotate(),
            GameCommand::SoftDrop => self.soft_drop() != DropOutcome::Ignored,
            GameCommand::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Move the active piece one column; horizontal moves never lock
    pub fn move_piece(&mut self, direction: Direction) -> bool {
        if self.is_game_over() {
            return false;
        }
        let moved = self.active.shifted(direction);
        self.try_adopt(moved)
    }

    pub fn move_left(&mut self) -> bool {
        self.move_piece(Direction::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_piece(Direction::Right)
    }

    /// Turn the active piece to its next orientation around the same anchor
    ///
    /// A rotation that would collide or leave the field is rejected outright.
    pub fn rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        let rotated = self.active.rotated();
        self.try_adopt(rotated)
    }

    /// Move the active piece down one row, locking it if it has landed
    pub fn soft_drop(&mut self) -> DropOutcome {
        if self.is_game_over() {
            return DropOutcome::Ignored;
        }

        let lowered = self.active.lowered();
        if self.try_adopt(lowered) {
            return DropOutcome::Moved;
        }

        let lines_cleared = self.lock_active();
        if self.spawn_next() {
            DropOutcome::Locked { lines_cleared }
        } else {
            DropOutcome::GameOver
        }
    }

    /// Timer-driven drop; identical to [`PuzzleEngine::soft_drop`]
    pub fn tick(&mut self) -> DropOutcome {
        self.soft_drop()
    }

    /// Start a fresh game on an empty field
    pub fn restart(&mut self) {
        let cols = self.config.cols;
        self.field = Field::new(self.config.rows, cols);
        self.progress = GameProgress::new(&self.config.rules);
        self.active = Piece::spawn(self.source.next_kind(), cols);
        self.next = Piece::spawn(self.source.next_kind(), cols);
        self.state = GameState::Playing;

        self.emit(GameEvent::FieldUpdated);
        self.emit_next_piece();
        self.emit_score();
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    /// Replace the active piece if `candidate` fits
    fn try_adopt(&mut self, candidate: Piece) -> bool {
        if !self.field.can_place(&candidate) {
            return false;
        }
        self.active = candidate;
        self.emit(GameEvent::FieldUpdated);
        true
    }

    /// Lock the active piece, clear rows, score and level up
    ///
    /// Returns the number of rows cleared.
    fn lock_active(&mut self) -> usize {
        let piece = self.active;
        self.field.lock(&piece, piece.kind.color());
        self.emit(GameEvent::FieldUpdated);

        let rows = self.field.clear_full_rows();
        let lines = rows.len();
        if lines == 0 {
            return 0;
        }

        let points = self.progress.award_lines(lines, &self.config.rules);
        self.emit(GameEvent::LinesCleared { rows, points });
        self.emit(GameEvent::FieldUpdated);

        if self.progress.level_up_due() {
            // Bonus counts the rows left empty before the wipe.
            let empty_rows = self.field.count_empty_rows();
            let up = self.progress.level_up(empty_rows, &self.config.rules);
            self.field.clear();
            self.emit(GameEvent::LevelUp {
                level: up.level,
                bonus: up.bonus,
                drop_interval_ms: up.drop_interval_ms,
            });
            self.emit(GameEvent::FieldUpdated);
        }

        self.emit_score();
        lines
    }

    /// Promote the next piece and queue a new one
    ///
    /// Returns false (and ends the game) if the promoted piece has no room.
    fn spawn_next(&mut self) -> bool {
        let kind = self.source.next_kind();
        self.active = self.next;
        self.next = Piece::spawn(kind, self.config.cols);
        self.emit_next_piece();

        if self.field.can_place(&self.active) {
            return true;
        }

        self.state = GameState::GameOver;
        self.emit(GameEvent::GameOver {
            score: self.progress.score,
            level: self.progress.level,
        });
        false
    }

    fn emit_next_piece(&mut self) {
        let event = GameEvent::NextPiece {
            kind: self.next.kind,
            tiles: self.next_tiles(),
        };
        self.emit(event);
    }

    fn emit_score(&mut self) {
        let p = self.progress;
        self.emit(GameEvent::ScoreUpdated {
            score: p.score,
            level: p.level,
            lines_cleared_this_level: p.lines_cleared_this_level,
            lines_to_level_up: p.lines_to_level_up,
        });
    }
}
