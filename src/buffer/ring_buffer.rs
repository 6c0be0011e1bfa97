//! # Ring Buffer Implementation
//!
//! A fixed-size circular buffer that refuses new elements when full.
//!
//! ## Plain English
//!
//! Picture a round table with numbered seats. Guests sit down in the next
//! free seat going clockwise, and the guest who has been seated the longest
//! is always the next to leave. When every seat is taken, newcomers are
//! turned away instead of pushing anybody off their chair.

use thiserror::Error;

// ============================================
// QUEUE ERRORS
// ============================================

/// The two ways a ring buffer operation can be refused.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    /// Tried to push while every slot is occupied
    #[error("queue is full (capacity {capacity})")]
    Full {
        /// How many slots the buffer has
        capacity: usize,
    },

    /// Tried to pop while no slot is occupied
    #[error("queue is empty")]
    Empty,
}

// ============================================
// RING BUFFER
// ============================================

/// A fixed-capacity FIFO ring buffer backed by an owned array.
///
/// ## Properties
/// - Fixed capacity `N` (never grows, never shrinks)
/// - O(1) push and pop, no element shifting
/// - `count` tells full and empty apart when the write position wraps
///   back onto `head`
/// - Refuses pushes when full and pops when empty, leaving state untouched
#[derive(Debug)]
pub struct RingBuffer<T, const N: usize> {
    /// Storage slots; `Some` exactly for the `count` slots starting at `head`
    slots: [Option<T>; N],

    /// Index of the oldest element
    head: usize,

    /// Number of occupied slots
    count: usize,
}

impl<T, const N: usize> RingBuffer<T, N> {
    /// Creates an empty ring buffer.
    ///
    /// ## Example
    /// ```
    /// # use tetris_stack::buffer::RingBuffer;
    /// let buffer: RingBuffer<i32, 5> = RingBuffer::new();
    /// assert_eq!(buffer.capacity(), 5);
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new() -> Self {
        const { assert!(N > 0, "RingBuffer requires a capacity greater than zero") }
        Self {
            slots: std::array::from_fn(|_| None),
            head: 0,
            count: 0,
        }
    }

    /// Appends an item at the tail.
    ///
    /// Returns `QueueError::Full` and leaves the buffer unchanged when every
    /// slot is taken.
    pub fn push(&mut self, item: T) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::Full { capacity: N });
        }

        let tail = (self.head + self.count) % N;
        self.slots[tail] = Some(item);
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the oldest item.
    ///
    /// Returns `QueueError::Empty` and leaves the buffer unchanged when there
    /// is nothing to remove.
    pub fn pop(&mut self) -> Result<T, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }

        let item = self.slots[self.head].take().ok_or(QueueError::Empty)?;
        self.head = (self.head + 1) % N;
        self.count -= 1;
        Ok(item)
    }

    /// Returns the number of items currently stored.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the buffer holds no items.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.count == N
    }

    /// Returns the fixed capacity.
    pub fn capacity(&self) -> usize {
        N
    }

    /// Returns the index of the oldest element.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Drops every item and resets the read position.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.count = 0;
    }

    /// Returns the oldest item without removing it.
    pub fn peek_oldest(&self) -> Option<&T> {
        self.iter().next()
    }

    /// Returns the newest item without removing it.
    pub fn peek_newest(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Returns an iterator over all items (oldest to newest).
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.count).filter_map(move |offset| self.slots[(self.head + offset) % N].as_ref())
    }
}

impl<T: Clone, const N: usize> RingBuffer<T, N> {
    /// Returns cloned copies of all items (oldest first).
    pub fn get_all_cloned(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================
// TESTS
// ============================================
