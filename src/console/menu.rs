//! # Menu Choices
//!
//! Turns one line typed at the prompt into a menu action.
//!
//! ## Plain English
//!
//! The player types a number. Anything that is not one of the three
//! options, including text that is not a number at all, is reported and
//! the menu is shown again.

use std::fmt;

use crate::error::{StackError, StackResult};

/// One of the actions offered at the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// Leave the game
    Quit,
    /// Remove the front piece (dequeue)
    Play,
    /// Generate a new piece at the back (enqueue)
    Insert,
}

impl MenuChoice {
    /// Every option in the order it is listed.
    pub const ALL: [MenuChoice; 3] = [MenuChoice::Play, MenuChoice::Insert, MenuChoice::Quit];

    /// Returns the number the player types to select this option.
    pub fn code(self) -> i64 {
        match self {
            Self::Quit => 0,
            Self::Play => 1,
            Self::Insert => 2,
        }
    }

    /// Looks up an option by its number.
    pub fn from_code(code: i64) -> StackResult<Self> {
        match code {
            0 => Ok(Self::Quit),
            1 => Ok(Self::Play),
            2 => Ok(Self::Insert),
            other => Err(StackError::UnknownChoice(other)),
        }
    }

    /// Short description shown in the menu.
    pub fn label(self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::Play => "Play piece (dequeue)",
            Self::Insert => "Insert new piece (enqueue)",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code(), self.label())
    }
}

/// Parses a line read from the prompt.
///
/// Surrounding whitespace is ignored. Non-numeric text gives
/// `StackError::InvalidInput`, numbers outside the menu give
/// `StackError::UnknownChoice`.
pub fn parse_choice(line: &str) -> StackResult<MenuChoice> {
    let trimmed = line.trim();
    let code = trimmed
        .parse::<i64>()
        .map_err(|_| StackError::InvalidInput(trimmed.to_string()))?;
    MenuChoice::from_code(code)
}
