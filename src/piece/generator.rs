//! # Piece Generator
//!
//! Produces pieces with a random shape and a caller-supplied serial number.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Piece, PieceKind};

/// Random source for piece shapes.
///
/// ## Plain English
///
/// The generator only rolls the dice for the shape. Whoever asks for a piece
/// also tells it which serial number to stamp on it, so the numbering stays
/// with the queue's owner and survives however many pieces get played.
#[derive(Debug)]
pub struct PieceGenerator<R: Rng = StdRng> {
    rng: R,
}

impl PieceGenerator<StdRng> {
    /// Creates a generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a generator that always produces the same shape sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PieceGenerator<R> {
    /// Wraps any random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Creates a piece with a uniformly chosen kind and the given id.
    pub fn generate(&mut self, next_id: u64) -> Piece {
        let kind = PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())];
        Piece::new(kind, next_id)
    }
}
