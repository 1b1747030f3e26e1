use serde::{Deserialize, Serialize};

use crate::character::Character;

/// The persisted unit of progress: one character, or nothing yet.
///
/// The engine owns the live value exclusively for the whole session.
/// Everything that crosses the event channel is a clone, so the
/// persistence layer never observes a state mid-mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub character: Option<Character>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_character(character: Character) -> Self {
        Self {
            character: Some(character),
        }
    }
}
