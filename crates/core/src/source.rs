//! Piece sources - where the engine gets its next piece kind
//!
//! The engine never touches an ambient random generator; it is handed a
//! [`PieceSource`] at construction. [`RandomPieces`] draws uniformly from a
//! catalog with any `rand` generator, [`PieceSequence`] replays a fixed list.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::ConfigError;
use crate::types::PieceKind;

/// A stream of piece kinds
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Uniform random choice over a catalog of kinds
#[derive(Debug, Clone)]
pub struct RandomPieces<R> {
    catalog: Vec<PieceKind>,
    rng: R,
}

impl<R: Rng> RandomPieces<R> {
    /// All seven kinds, equally likely
    pub fn new(rng: R) -> Self {
        Self {
            catalog: PieceKind::ALL.to_vec(),
            rng,
        }
    }

    /// Only the kinds in `catalog`; duplicates weight the draw
    pub fn with_catalog(catalog: Vec<PieceKind>, rng: R) -> Result<Self, ConfigError> {
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(Self { catalog, rng })
    }
}

impl RandomPieces<StdRng> {
    /// Deterministic source: the same seed yields the same piece stream
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PieceSource for RandomPieces<R> {
    fn next_kind(&mut self) -> PieceKind {
        // Non-empty by construction.
        *self
            .catalog
            .choose(&mut self.rng)
            .unwrap_or(&PieceKind::ALL[0])
    }
}

/// A fixed sequence of kinds, repeated forever
#[derive(Debug, Clone)]
pub struct PieceSequence {
    kinds: Vec<PieceKind>,
    pos: usize,
}

impl PieceSequence {
    pub fn new(kinds: Vec<PieceKind>) -> Result<Self, ConfigError> {
        if kinds.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(Self { kinds, pos: 0 })
    }

    /// The same kind every time
    pub fn repeat(kind: PieceKind) -> Self {
        Self {
            kinds: vec![kind],
            pos: 0,
        }
    }
}

impl PieceSource for PieceSequence {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.pos];
        self.pos = (self.pos + 1) % self.kinds.len();
        kind
    }
}
