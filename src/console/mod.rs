//! # Console Module
//!
//! The interactive loop: show the queue, ask for an action, carry it out.
//!
//! ## Plain English
//!
//! Each round:
//! 1. Print what is waiting in the queue
//! 2. Print the menu and read one line
//! 3. Play a piece, insert a piece, or quit
//! 4. Say what happened (or why it could not happen)
//!
//! Reading and writing go through any `BufRead`/`Write` pair, so the same
//! loop runs against the terminal or against an in-memory script in tests.

mod menu;

pub use menu::{parse_choice, MenuChoice};

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::error::{StackError, StackResult};
use crate::{SessionStats, TetrisStack};

/// Drives a [`TetrisStack`] from a line-based input and a text output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs rounds until the player quits or input ends.
    ///
    /// Queue and menu errors are printed and the loop continues; only I/O
    /// errors end it early.
    pub fn run(&mut self, game: &mut TetrisStack) -> StackResult<SessionStats> {
        if game.config().show_banner {
            writeln!(self.output, "=== TETRIS STACK - PIECE QUEUE ===")?;
        }

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "--- CURRENT QUEUE ---")?;
            writeln!(self.output, "{}", game.queue().display())?;
            self.write_menu()?;

            let Some(line) = self.read_line()? else {
                info!("Input closed, leaving the game");
                writeln!(self.output)?;
                self.write_goodbye()?;
                break;
            };

            match self.dispatch(game, &line) {
                Ok(true) => continue,
                Ok(false) => break,
                Err(err) if err.is_recoverable() => {
                    writeln!(self.output)?;
                    writeln!(self.output, "Error: {}", err)?;
                }
                Err(err) => return Err(err),
            }
        }

        self.output.flush()?;
        Ok(game.stats())
    }

    /// Handles one line. Returns `Ok(false)` when the player quits.
    fn dispatch(&mut self, game: &mut TetrisStack, line: &str) -> StackResult<bool> {
        let choice = match parse_choice(line) {
            Ok(choice) => choice,
            Err(err) => {
                game.record_invalid_command();
                return Err(err);
            }
        };
        debug!("Menu choice: {:?}", choice);

        match choice {
            MenuChoice::Quit => {
                writeln!(self.output)?;
                self.write_goodbye()?;
                Ok(false)
            }
            MenuChoice::Play => {
                let piece = game.play()?;
                writeln!(self.output)?;
                writeln!(self.output, "Piece played: {}", piece)?;
                Ok(true)
            }
            MenuChoice::Insert => {
                let piece = game.insert()?;
                writeln!(self.output)?;
                writeln!(self.output, "New piece added: {}", piece)?;
                Ok(true)
            }
        }
    }

    fn write_menu(&mut self) -> StackResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== ACTIONS ===")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}", choice)?;
        }
        write!(self.output, "Choose an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn write_goodbye(&mut self) -> StackResult<()> {
        writeln!(self.output, "Leaving the game...")?;
        writeln!(self.output, "Thanks for playing Tetris Stack!")?;
        Ok(())
    }

    /// Reads one line, `None` at end of input.
    fn read_line(&mut self) -> StackResult<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(StackError::Io)?;
        Ok((read > 0).then_some(line))
    }

    /// Returns the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use std::io::{self, Cursor};

    fn run_script(config: Config, script: &str) -> (StackResult<SessionStats>, String, TetrisStack) {
        let mut game = TetrisStack::with_config(config).unwrap();
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        let result = console.run(&mut game);
        let output = String::from_utf8(console.into_output()).unwrap();
        (result, output, game)
    }

    #[test]
    fn test_quit_immediately() {
        let (result, output, game) = run_script(Config::deterministic(1), "0\n");

        assert_eq!(result.unwrap(), SessionStats::default());
        assert!(output.contains("TETRIS STACK"));
        assert!(output.contains("Piece queue (5/5)"));
        assert!(output.contains("Thanks for playing"));
        assert_eq!(game.queue().len(), 5);
    }

    #[test]
    fn test_play_and_insert() {
        let (result, output, game) = run_script(Config::deterministic(1), "1\n2\n0\n");

        let stats = result.unwrap();
        assert_eq!(stats.pieces_played, 1);
        assert_eq!(stats.pieces_inserted, 1);
        assert!(output.contains("Piece played: ["));
        assert!(output.contains(" 0]"));
        assert!(output.contains("New piece added: ["));
        let ids: Vec<u64> = game.queue().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let (result, output, game) = run_script(Config::empty_start(), "1\nabc\n9\n2\n0\n");

        let stats = result.unwrap();
        assert_eq!(stats.rejected_actions, 1);
        assert_eq!(stats.invalid_commands, 2);
        assert_eq!(stats.pieces_inserted, 1);
        assert!(output.contains("Queue is empty!"));
        assert!(output.contains("Error: Queue is empty! There are no pieces to play"));
        assert!(output.contains("Error: Invalid input \"abc\""));
        assert!(output.contains("Error: Unknown option 9"));
        assert_eq!(game.queue().len(), 1);
    }

    #[test]
    fn test_insert_into_full_queue_reports_capacity() {
        let (_, output, _) = run_script(Config::deterministic(2), "2\n0\n");
        assert!(output.contains("Error: Queue is full! Maximum capacity: 5 pieces"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let (result, output, _) = run_script(Config::deterministic(1), "1\n");
        assert_eq!(result.unwrap().pieces_played, 1);
        assert!(output.contains("Leaving the game"));
    }

    #[test]
    fn test_banner_can_be_hidden() {
        let config = Config {
            show_banner: false,
            ..Config::deterministic(1)
        };
        let (_, output, _) = run_script(config, "0\n");
        assert!(!output.contains("TETRIS STACK"));
    }

    struct BrokenInput;

    impl io::Read for BrokenInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_io_error_is_fatal() {
        let mut game = TetrisStack::with_config(Config::deterministic(1)).unwrap();
        let mut console = Console::new(io::BufReader::new(BrokenInput), Vec::new());
        assert!(matches!(console.run(&mut game), Err(StackError::Io(_))));
    }
}
