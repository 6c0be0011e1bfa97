//! # Configuration Module
//!
//! This module handles all configurable settings for Tetris Stack.
//!
//! ## Plain English Explanation
//!
//! The queue itself is always five slots long, but a few things about a
//! session can be tuned:
//! - Whether the dice are loaded (a fixed seed gives a repeatable game)
//! - How many pieces are waiting when the game starts
//! - Whether the title banner is printed
//! - How chatty the log output is

use log::LevelFilter;
use thiserror::Error;

use crate::buffer::QUEUE_CAPACITY;

// ============================================
// MAIN CONFIGURATION
// ============================================

/// All configuration options for Tetris Stack
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    // ----------------------------------------
    // GENERATION SETTINGS
    // ----------------------------------------
    /// Seed for the piece generator
    ///
    /// ## Plain English
    /// `None` rolls fresh dice every run. `Some(n)` replays exactly the same
    /// sequence of shapes every time, which is what the tests rely on.
    pub seed: Option<u64>,

    /// How many pieces are generated into the queue at startup
    ///
    /// ## Limits
    /// - Minimum: 0 (start with an empty queue)
    /// - Maximum: the queue capacity (5)
    /// - Default: 5 (start full)
    pub prefill_count: usize,

    // ----------------------------------------
    // OUTPUT SETTINGS
    // ----------------------------------------
    /// Print the title banner when the console starts
    pub show_banner: bool,

    /// Maximum log level handed to the logger
    pub log_level: LevelFilter,
}

impl Config {
    /// A repeatable game: fixed seed, otherwise defaults.
    pub fn deterministic(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// A game that starts with nothing in the queue.
    pub fn empty_start() -> Self {
        Self {
            prefill_count: 0,
            ..Self::default()
        }
    }

    /// Validates the configuration and returns errors if invalid
    ///
    /// Returns a list of problems, or empty if all is well.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.prefill_count > QUEUE_CAPACITY {
            errors.push(ConfigError::PrefillExceedsCapacity(self.prefill_count));
        }

        errors
    }

    /// Parses a log level name such as `info` or `DEBUG`.
    pub fn parse_log_level(name: &str) -> Result<LevelFilter, ConfigError> {
        name.trim()
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(name.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            prefill_count: QUEUE_CAPACITY,
            show_banner: true,
            log_level: LevelFilter::Warn,
        }
    }
}

// ============================================
// CONFIGURATION ERRORS
// ============================================

/// Errors that can occur with configuration values
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// More starting pieces were asked for than the queue can hold
    #[error("Cannot prefill {0} pieces into a queue of {capacity}", capacity = QUEUE_CAPACITY)]
    PrefillExceedsCapacity(usize),

    /// Log level name not recognised
    #[error("Unknown log level '{0}' (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.seed, None);
        assert_eq!(config.prefill_count, 5);
        assert!(config.show_banner);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_presets() {
        assert_eq!(Config::deterministic(3).seed, Some(3));
        assert_eq!(Config::empty_start().prefill_count, 0);
        assert!(Config::empty_start().validate().is_empty());
    }

    #[test]
    fn test_validation_errors() {
        let mut config = Config::default();

        config.prefill_count = 6;
        assert_eq!(
            config.validate(),
            vec![ConfigError::PrefillExceedsCapacity(6)]
        );

        config.prefill_count = 5;
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(Config::parse_log_level("debug"), Ok(LevelFilter::Debug));
        assert_eq!(Config::parse_log_level(" OFF "), Ok(LevelFilter::Off));
        assert_eq!(
            Config::parse_log_level("loud"),
            Err(ConfigError::InvalidLogLevel("loud".to_string()))
        );
    }
}
