//! # Piece Queue Module
//!
//! This module provides the circular (ring) queue that holds upcoming pieces.
//!
//! ## Plain English Explanation
//!
//! Imagine the "next pieces" preview in a Tetris game, with exactly 5 spots.
//! 1. A new piece always lines up at the back
//! 2. The piece you play always comes from the front
//! 3. When all 5 spots are taken, no new piece can line up until one is played
//!
//! Nothing ever slides around in memory: the front and back simply walk
//! forward around the circle.

mod ring_buffer;

pub use ring_buffer::{QueueError, RingBuffer};

use std::fmt;

use log::debug;

use crate::piece::Piece;

/// Number of slots in the piece queue.
pub const QUEUE_CAPACITY: usize = 5;

// ============================================
// PIECE QUEUE
// Domain wrapper around the generic ring buffer
// ============================================

/// The queue of upcoming pieces.
///
/// ## Plain English Explanation
///
/// This is the ring buffer specialised for pieces. It adds logging on every
/// change and a printable view of what is waiting in line.
#[derive(Debug, Default)]
pub struct PieceQueue {
    inner: RingBuffer<Piece, QUEUE_CAPACITY>,
}

impl PieceQueue {
    /// Creates an empty queue with the read position reset.
    pub fn new() -> Self {
        Self {
            inner: RingBuffer::new(),
        }
    }

    /// Puts the queue back into its freshly initialized state.
    pub fn reset(&mut self) {
        self.inner.clear();
        debug!("Piece queue reset");
    }

    /// Returns true if no pieces are waiting.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns true if all slots are taken.
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    /// Adds a piece at the back of the line.
    ///
    /// ## What Happens (Plain English)
    ///
    /// 1. If every spot is taken, the piece is refused and nothing changes
    /// 2. Otherwise it goes into the spot right after the newest piece
    ///    (wrapping around to spot 0 after spot 4)
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), QueueError> {
        self.inner.push(piece)?;
        debug!("Enqueued {} ({}/{})", piece, self.len(), QUEUE_CAPACITY);
        Ok(())
    }

    /// Removes the piece at the front of the line.
    pub fn dequeue(&mut self) -> Result<Piece, QueueError> {
        let piece = self.inner.pop()?;
        debug!("Dequeued {} ({}/{})", piece, self.len(), QUEUE_CAPACITY);
        Ok(piece)
    }

    /// Returns the number of waiting pieces.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns the fixed number of slots.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns the next piece to be played without removing it.
    pub fn front(&self) -> Option<&Piece> {
        self.inner.peek_oldest()
    }

    /// Returns the most recently added piece.
    pub fn back(&self) -> Option<&Piece> {
        self.inner.peek_newest()
    }

    /// Iterates pieces from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.inner.iter()
    }

    /// Copies the waiting pieces out, oldest first.
    pub fn snapshot(&self) -> Vec<Piece> {
        self.inner.get_all_cloned()
    }

    /// Returns a printable view of the queue.
    ///
    /// ## Output
    /// ```text
    /// Piece queue (3/5): [I 0] [T 1] [L 2]
    /// ```
    /// or `Queue is empty!` when nothing is waiting.
    pub fn display(&self) -> QueueDisplay<'_> {
        QueueDisplay { queue: self }
    }
}

/// Human-readable listing of a [`PieceQueue`], produced by [`PieceQueue::display`].
pub struct QueueDisplay<'a> {
    queue: &'a PieceQueue,
}

impl fmt::Display for QueueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.queue.is_empty() {
            return write!(f, "Queue is empty!");
        }

        write!(
            f,
            "Piece queue ({}/{}):",
            self.queue.len(),
            self.queue.capacity()
        )?;
        for piece in self.queue.iter() {
            write!(f, " {}", piece)?;
        }
        Ok(())
    }
}

// ============================================
// TESTS
// ============================================
