//! # Error Types Module
//!
//! This module defines all the error types used throughout Tetris Stack.
//!
//! ## Plain English Explanation
//!
//! Most things that go "wrong" here are not really failures, just requests
//! that cannot be honoured right now:
//!
//! - "QueueFull: there is no room for another piece"
//! - "QueueEmpty: there is no piece left to play"
//! - "UnknownChoice: that is not one of the menu options"
//!
//! Those are reported and the game carries on. Only a broken console
//! (I/O error) or a bad configuration stops the program.

use std::io;

use thiserror::Error;

use crate::buffer::QueueError;
use crate::config::ConfigError;

// ============================================
// MAIN APPLICATION ERROR
// ============================================

/// The main error type for Tetris Stack
#[derive(Debug, Error)]
pub enum StackError {
    /// Tried to insert a piece while every queue slot is taken
    ///
    /// ## What This Means
    /// Play a piece first to make room.
    #[error("Queue is full! Maximum capacity: {capacity} pieces")]
    QueueFull {
        /// Number of slots in the queue
        capacity: usize,
    },

    /// Tried to play a piece while the queue is empty
    ///
    /// ## What This Means
    /// Insert a new piece first.
    #[error("Queue is empty! There are no pieces to play")]
    QueueEmpty,

    /// A number was entered that is not a menu option
    #[error("Unknown option {0}! Enter 0, 1 or 2")]
    UnknownChoice(i64),

    /// Something that is not a number was entered at the menu prompt
    #[error("Invalid input {0:?}! Enter 0, 1 or 2")]
    InvalidInput(String),

    /// Configuration rejected at startup
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading from or writing to the console failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl StackError {
    /// Returns true if the console loop should report this and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::QueueFull { .. } | Self::QueueEmpty | Self::UnknownChoice(_) | Self::InvalidInput(_)
        )
    }
}

impl From<QueueError> for StackError {
    fn from(err: QueueError) -> Self {
        match err {
            QueueError::Full { capacity } => Self::QueueFull { capacity },
            QueueError::Empty => Self::QueueEmpty,
        }
    }
}

// ============================================
// RESULT TYPE ALIAS
// ============================================

/// A Result type that uses StackError
pub type StackResult<T> = Result<T, StackError>;

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StackError::QueueFull { capacity: 5 };
        let message = format!("{}", err);
        assert!(message.contains("full"));
        assert!(message.contains('5'));
    }

    #[test]
    fn test_queue_error_conversion() {
        assert!(matches!(
            StackError::from(QueueError::Full { capacity: 5 }),
            StackError::QueueFull { capacity: 5 }
        ));
        assert!(matches!(
            StackError::from(QueueError::Empty),
            StackError::QueueEmpty
        ));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "console closed");
        let app_err: StackError = io_err.into();

        match app_err {
            StackError::Io(_) => {} // Expected
            _ => panic!("Expected Io error variant"),
        }
        assert!(!StackError::Io(io::Error::other("x")).is_recoverable());
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(StackError::QueueEmpty.is_recoverable());
        assert!(StackError::QueueFull { capacity: 5 }.is_recoverable());
        assert!(StackError::UnknownChoice(9).is_recoverable());
        assert!(StackError::InvalidInput("abc".into()).is_recoverable());
        assert!(!StackError::Config(ConfigError::PrefillExceedsCapacity(9)).is_recoverable());
    }
}
