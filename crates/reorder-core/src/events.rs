//! List events.
//!
//! The closed set of actions the host can apply to a [`ListState`](crate::ListState).
//! Each variant is handled by exactly one reducer in [`crate::update`].

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Direction in which the selected block moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards position 0.
    Up,
    /// Towards the end of the list.
    Down,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(ParseEventError::UnknownDirection(other.to_string())),
        }
    }
}

/// Actions dispatched by [`crate::update::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListEvent {
    /// Move the selected items as one block.
    Reorder { direction: Direction },

    /// Restore identity order and clear the selection.
    Reset,

    /// Set whether the item at original `index` is selected.
    ToggleSelection { index: usize, selected: bool },
}

/// Error returned when an action token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEventError {
    #[error("unknown direction '{0}' (expected 'up' or 'down')")]
    UnknownDirection(String),

    #[error("unknown action '{0}' (expected up, down, reset, select:N or deselect:N)")]
    UnknownAction(String),

    #[error("invalid item index '{value}' in action")]
    InvalidIndex {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl FromStr for ListEvent {
    type Err = ParseEventError;

    /// Parses a compact action token: `up`, `down`, `reset`, `select:N`, `deselect:N`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();

        if let Some((verb, arg)) = token.split_once(':') {
            let selected = match verb {
                "select" => true,
                "deselect" => false,
                _ => return Err(ParseEventError::UnknownAction(token.clone())),
            };
            let arg = arg.trim();
            let index = arg
                .parse::<usize>()
                .map_err(|source| ParseEventError::InvalidIndex {
                    value: arg.to_string(),
                    source,
                })?;
            return Ok(ListEvent::ToggleSelection { index, selected });
        }

        match token.as_str() {
            "reset" => Ok(ListEvent::Reset),
            "up" | "down" => Ok(ListEvent::Reorder {
                direction: token.parse()?,
            }),
            _ => Err(ParseEventError::UnknownAction(token)),
        }
    }
}
