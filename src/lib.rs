//! # Tetris Stack
//!
//! A console game loop around a fixed five-slot circular queue of
//! upcoming Tetris pieces.
//!
//! ## Architecture Overview
//!
//! The application is structured into independent modules:
//!
//! - `buffer`: Ring buffer and the piece queue built on it
//! - `piece`: Piece values and the random piece generator
//! - `console`: Menu parsing and the interactive loop
//! - `config`: Application configuration
//! - `error`: Error types

// ============================================
// MODULE DECLARATIONS
// ============================================

pub mod buffer;
pub mod config;
pub mod console;
pub mod error;
pub mod piece;

// ============================================
// RE-EXPORTS
// ============================================

pub use buffer::{PieceQueue, QUEUE_CAPACITY};
pub use config::Config;
pub use console::{Console, MenuChoice};
pub use error::{StackError, StackResult};
pub use piece::{Piece, PieceGenerator, PieceKind};

// ============================================
// IMPORTS
// ============================================

use log::{info, warn, LevelFilter};

// ============================================
// APPLICATION STATE
// ============================================

/// The Tetris Stack application.
///
/// ## Plain English
///
/// This is the "table" the game is played on. It holds:
/// - The queue of upcoming pieces
/// - The dice used to pick shapes
/// - The next serial number to hand out
/// - A tally of what happened this session
///
/// Everything lives in this one value and is passed around explicitly;
/// there is no global game state.
pub struct TetrisStack {
    /// The circular queue of upcoming pieces
    queue: PieceQueue,

    /// Picks the shape of each new piece
    generator: PieceGenerator,

    /// Serial number for the next generated piece
    next_id: u64,

    /// Application configuration
    config: Config,

    /// Statistics about this session
    stats: SessionStats,
}

/// Running tally of a session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    /// Pieces removed from the front of the queue
    pub pieces_played: u64,
    /// Pieces generated and added to the back of the queue
    pub pieces_inserted: u64,
    /// Play or insert requests refused because the queue was empty or full
    pub rejected_actions: u64,
    /// Menu entries that were not a valid option
    pub invalid_commands: u64,
}

impl TetrisStack {
    /// Creates a new game with default configuration.
    pub fn new() -> StackResult<Self> {
        Self::with_config(Config::default())
    }

    /// Creates a new game with custom configuration.
    ///
    /// ## Parameters
    /// - `config`: The configuration to use
    ///
    /// ## Returns
    /// A game whose queue already holds `config.prefill_count` pieces,
    /// or the first configuration error found
    pub fn with_config(config: Config) -> StackResult<Self> {
        if let Some(error) = config.validate().into_iter().next() {
            return Err(StackError::Config(error));
        }

        let generator = match config.seed {
            Some(seed) => {
                info!("Using fixed piece seed {}", seed);
                PieceGenerator::seeded(seed)
            }
            None => PieceGenerator::from_entropy(),
        };

        let mut game = Self {
            queue: PieceQueue::new(),
            generator,
            next_id: 0,
            config,
            stats: SessionStats::default(),
        };

        let filled = game.prefill(game.config.prefill_count);
        info!(
            "Tetris Stack initialized with {}/{} pieces",
            filled, QUEUE_CAPACITY
        );

        Ok(game)
    }

    /// Generates pieces into the queue until `count` were added or it is full.
    ///
    /// Returns how many pieces were added.
    pub fn prefill(&mut self, count: usize) -> usize {
        let mut added = 0;
        while added < count && !self.queue.is_full() {
            let piece = self.next_piece();
            if self.queue.enqueue(piece).is_err() {
                break;
            }
            added += 1;
        }
        added
    }

    /// Plays the piece at the front of the queue.
    ///
    /// Returns `StackError::QueueEmpty` if there is nothing to play.
    pub fn play(&mut self) -> StackResult<Piece> {
        match self.queue.dequeue() {
            Ok(piece) => {
                self.stats.pieces_played += 1;
                info!("Played {}", piece);
                Ok(piece)
            }
            Err(err) => {
                self.stats.rejected_actions += 1;
                warn!("Play refused: {}", err);
                Err(err.into())
            }
        }
    }

    /// Generates a new piece and adds it to the back of the queue.
    ///
    /// The full check happens before generation, so a refused insert does
    /// not use up a serial number.
    pub fn insert(&mut self) -> StackResult<Piece> {
        if self.queue.is_full() {
            self.stats.rejected_actions += 1;
            warn!("Insert refused: queue is full");
            return Err(StackError::QueueFull {
                capacity: self.queue.capacity(),
            });
        }

        let piece = self.next_piece();
        self.queue.enqueue(piece)?;
        self.stats.pieces_inserted += 1;
        info!("Inserted {}", piece);
        Ok(piece)
    }

    /// Counts a menu entry that could not be understood.
    pub fn record_invalid_command(&mut self) {
        self.stats.invalid_commands += 1;
    }

    /// Returns the queue of upcoming pieces.
    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    /// Returns the serial number the next piece will get.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Returns a copy of the current statistics.
    pub fn stats(&self) -> SessionStats {
        self.stats.clone()
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn next_piece(&mut self) -> Piece {
        let piece = self.generator.generate(self.next_id);
        self.next_id += 1;
        piece
    }
}

// ============================================
// LOGGING
// ============================================

/// Initialize logging.
///
/// `RUST_LOG` still wins when set; `level` is only the fallback.
pub fn init_logging(level: LevelFilter) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level.as_str()),
    )
    .format_timestamp(None)
    .try_init();
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(game: &TetrisStack) -> Vec<u64> {
        game.queue().iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_app_creation() {
        init_logging(LevelFilter::Warn);
        let app = TetrisStack::new();
        assert!(app.is_ok());
    }

    #[test]
    fn test_starts_full_with_ids_zero_to_four() {
        let game = TetrisStack::with_config(Config::deterministic(1)).unwrap();
        assert!(game.queue().is_full());
        assert_eq!(game.queue().len(), 5);
        assert_eq!(ids(&game), vec![0, 1, 2, 3, 4]);
        assert_eq!(game.next_id(), 5);
    }

    #[test]
    fn test_play_then_insert_scenario() {
        let mut game = TetrisStack::with_config(Config::deterministic(1)).unwrap();

        let played = game.play().unwrap();
        assert_eq!(played.id, 0);
        assert_eq!(game.queue().len(), 4);
        assert!(!game.queue().is_full());

        let inserted = game.insert().unwrap();
        assert_eq!(inserted.id, 5);
        assert_eq!(game.queue().len(), 5);
        assert!(game.queue().is_full());
        assert_eq!(ids(&game), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_play_on_empty_queue() {
        let mut game = TetrisStack::with_config(Config::empty_start()).unwrap();

        assert!(matches!(game.play(), Err(StackError::QueueEmpty)));
        assert_eq!(game.queue().len(), 0);
        assert_eq!(game.stats().rejected_actions, 1);
    }

    #[test]
    fn test_insert_on_full_queue_keeps_id_counter() {
        let mut game = TetrisStack::with_config(Config::deterministic(9)).unwrap();
        let before = game.queue().snapshot();

        assert!(matches!(
            game.insert(),
            Err(StackError::QueueFull { capacity: 5 })
        ));
        assert_eq!(game.queue().snapshot(), before);
        assert_eq!(game.next_id(), 5);
    }

    #[test]
    fn test_ids_strictly_increase_across_plays() {
        let mut game = TetrisStack::with_config(Config::deterministic(3)).unwrap();
        let mut seen = Vec::new();

        for _ in 0..20 {
            seen.push(game.play().unwrap().id);
            game.insert().unwrap();
        }
        seen.extend(ids(&game));

        assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(seen.first(), Some(&0));
    }

    #[test]
    fn test_partial_prefill() {
        let config = Config {
            prefill_count: 2,
            ..Config::deterministic(4)
        };
        let game = TetrisStack::with_config(config).unwrap();
        assert_eq!(ids(&game), vec![0, 1]);
    }

    #[test]
    fn test_invalid_config_is_refused() {
        let config = Config {
            prefill_count: 8,
            ..Config::default()
        };
        assert!(matches!(
            TetrisStack::with_config(config),
            Err(StackError::Config(_))
        ));
    }

    #[test]
    fn test_stats_tally() {
        let mut game = TetrisStack::with_config(Config::deterministic(5)).unwrap();
        game.play().unwrap();
        game.insert().unwrap();
        let _ = game.insert();
        game.record_invalid_command();

        let stats = game.stats();
        assert_eq!(stats.pieces_played, 1);
        assert_eq!(stats.pieces_inserted, 1);
        assert_eq!(stats.rejected_actions, 1);
        assert_eq!(stats.invalid_commands, 1);
    }
}
