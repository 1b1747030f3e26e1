//! The event channel contract between the engine and its host.
//!
//! The engine never talks to a terminal or a save file directly. It pushes
//! [`GameEvent`]s onto an outbound queue that the host drains, and receives
//! answers to the most recent prompt request through a single inbound call.
//! Ordering within the queue is the ordering the presentation layer must
//! render in.

use serde::{Deserialize, Serialize};

use crate::character::CharacterSnapshot;
use crate::game_state::GameState;
use crate::inventory::Inventory;

/// Advisory styling hint for a narrative message. Presentation layers map
/// these to colors; the engine attaches them and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Brutal,
    Pain,
    Serious,
    Positive,
    Informational,
}

/// How a prompt should be answered: free text or a pick from a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Input,
    List,
}

/// One question the engine needs answered before it can proceed.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub key: &'static str,
    pub kind: PromptKind,
    pub choices: Vec<String>,
}

impl Prompt {
    pub fn input(key: &'static str) -> Self {
        Self {
            key,
            kind: PromptKind::Input,
            choices: Vec::new(),
        }
    }

    pub fn list(key: &'static str, choices: Vec<String>) -> Self {
        Self {
            key,
            kind: PromptKind::List,
            choices,
        }
    }
}

/// An answer to one prompt, delivered back in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptResponse {
    pub key: String,
    pub value: String,
}

impl PromptResponse {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A narrative line to render.
///
/// `key` indexes the presentation layer's template table, `meta` supplies
/// the template variables, `sentiment` is a styling hint.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub key: &'static str,
    pub meta: Option<serde_json::Value>,
    pub sentiment: Option<Sentiment>,
}

impl Message {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            meta: None,
            sentiment: None,
        }
    }

    pub fn with_meta(key: &'static str, meta: serde_json::Value) -> Self {
        Self {
            key,
            meta: Some(meta),
            sentiment: None,
        }
    }

    pub fn sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = Some(sentiment);
        self
    }
}

/// Everything the engine can tell the outside world.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The engine needs these answers, in order, before proceeding.
    Prompts(Vec<Prompt>),
    /// A narrative line.
    Message(Message),
    /// Persistence checkpoint: save this before the next mutating transition.
    UpdateState(GameState),
    /// Display request, no mutation implied.
    ViewCharacter(CharacterSnapshot),
    /// Display request, no mutation implied.
    ViewInventory(Inventory),
    /// Terminal event; the consumer must delete the persisted save.
    CharacterDeath(CharacterSnapshot),
}
