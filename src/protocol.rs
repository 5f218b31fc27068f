use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::die::Die;

pub const WIN_ANNOUNCEMENT: &str = "Congratulations! You won! Press \"New Game\" to start again.";

/// One line from the front end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum Action {
    /// The action button: rolls, or deals a new game once won.
    Roll,
    Hold { id: Uuid },
    Show,
}

/// One line back to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MsgOut {
    Dice {
        dice: Vec<Die>,
        won: bool,
        button: &'static str,
    },
    GameWon {
        message: &'static str,
    },
    UnknownMessage(String),
}

pub fn parse_action(line: &str) -> Result<Action, serde_json::Error> {
    serde_json::from_str::<Action>(line.trim())
}
