//! # Piece Module
//!
//! The pieces that flow through the queue and the generator that makes them.
//!
//! ## Plain English
//!
//! A piece is just two things written on a card:
//! - Its shape letter (I, O, T or L)
//! - A serial number, handed out in order and never reused

mod generator;

pub use generator::PieceGenerator;

use std::fmt;

// ============================================
// PIECE KIND
// ============================================

/// The shape label of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// Straight line of four
    I,
    /// Two-by-two square
    O,
    /// T shape
    T,
    /// L shape
    L,
}

impl PieceKind {
    /// Every kind a generator may pick from.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Returns the single-letter label.
    pub fn symbol(self) -> char {
        match self {
            Self::I => 'I',
            Self::O => 'O',
            Self::T => 'T',
            Self::L => 'L',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ============================================
// PIECE
// ============================================

/// One piece waiting in (or played from) the queue.
///
/// Small and immutable, so it is copied in and out of the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    /// Shape label
    pub kind: PieceKind,

    /// Serial number in generation order
    pub id: u64,
}

impl Piece {
    /// Creates a piece.
    pub fn new(kind: PieceKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}
