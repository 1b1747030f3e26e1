//! Game engine: the finite-state machine that sequences character creation,
//! menu navigation, and combat resolution.
//!
//! The state graph is an explicit enum with guarded transitions; transient
//! states evaluate their entry effect and immediately follow their guard,
//! prompt states park the machine until the host calls
//! [`Engine::submit_prompt_response`]. The engine owns the [`GameState`]
//! exclusively for the session and performs no I/O: everything it wants the
//! outside world to know is pushed, in order, onto an outbound queue the
//! host drains.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::character::{Character, Profession};
use crate::combat_logic::resolve_encounter;
use crate::constants::{REST_GOLD_COST, REST_MAX_HEAL};
use crate::enemy::Enemy;
use crate::error::GameError;
use crate::events::{GameEvent, Message, Prompt, PromptResponse, Sentiment};
use crate::game_state::GameState;
use serde_json::json;

/// Actions offered from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    FightEnemy,
    Rest,
    ViewCharacter,
    ViewInventory,
    /// Debug only: ends the session through the death flow.
    GiveUp,
}

impl MenuAction {
    pub fn all() -> [MenuAction; 5] {
        [
            MenuAction::FightEnemy,
            MenuAction::Rest,
            MenuAction::ViewCharacter,
            MenuAction::ViewInventory,
            MenuAction::GiveUp,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::FightEnemy => "Fight an enemy",
            MenuAction::Rest => "Rest",
            MenuAction::ViewCharacter => "View character",
            MenuAction::ViewInventory => "View inventory",
            MenuAction::GiveUp => "Give up",
        }
    }

    fn from_label(label: &str) -> Option<MenuAction> {
        MenuAction::all().into_iter().find(|a| a.label() == label)
    }
}

/// The engine's state graph.
///
/// `Welcome`, `Combat`, `Rest`, `ViewCharacter`, and `ViewInventory` are
/// transient; `CreateCharacter` and `MainMenu` wait for a prompt response;
/// `Death` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Welcome,
    CreateCharacter,
    MainMenu,
    Combat,
    Rest,
    ViewCharacter,
    ViewInventory,
    Death,
}

/// Which prompt request is outstanding, so the inbound response is routed
/// to the right handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingPrompt {
    CharacterCreation,
    MainMenu,
}

pub struct Engine<R: Rng> {
    state: State,
    game_state: GameState,
    outbound: VecDeque<GameEvent>,
    pending: Option<PendingPrompt>,
    started: bool,
    over: bool,
    // One-shot "welcome back" greeting for rehydrated saves.
    returning: bool,
    rng: R,
}

impl Engine<StdRng> {
    /// Builds an engine from a loaded save, or a fresh one if there is none.
    pub fn new(saved: Option<GameState>) -> Self {
        Engine::with_rng(saved, StdRng::from_entropy())
    }
}

impl<R: Rng> Engine<R> {
    /// Like [`Engine::new`] but with a caller-supplied RNG, which makes
    /// whole sessions reproducible under a fixed seed.
    pub fn with_rng(saved: Option<GameState>, rng: R) -> Self {
        let game_state = saved.unwrap_or_default();
        let returning = game_state.character.is_some();

        Self {
            state: State::Welcome,
            game_state,
            outbound: VecDeque::new(),
            pending: None,
            started: false,
            over: false,
            returning,
            rng,
        }
    }

    /// Begins the session. Idempotent: calling it again is a no-op.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.run_transitions();
    }

    /// Delivers the answers to the currently pending prompt request.
    ///
    /// Responses must arrive in the same order and cardinality as the most
    /// recent [`GameEvent::Prompts`]; malformed input is not validated
    /// beyond shape (a menu answer that matches no action simply re-prompts).
    pub fn submit_prompt_response(
        &mut self,
        responses: Vec<PromptResponse>,
    ) -> Result<(), GameError> {
        if self.over {
            return Ok(());
        }

        match self.pending.take() {
            // No prompt outstanding; nothing to do.
            None => Ok(()),
            Some(PendingPrompt::CharacterCreation) => {
                let mut responses = responses.into_iter();
                let name = responses.next().map(|r| r.value).unwrap_or_default();
                let profession: Profession = responses
                    .next()
                    .map(|r| r.value)
                    .unwrap_or_default()
                    .parse()?;

                self.game_state.character = Some(Character::new(name, profession));
                self.push_update_state();
                // Back through welcome, which now routes to the main menu.
                self.state = State::Welcome;
                self.run_transitions();
                Ok(())
            }
            Some(PendingPrompt::MainMenu) => {
                let choice = responses
                    .into_iter()
                    .next()
                    .map(|r| r.value)
                    .unwrap_or_default();

                self.state = match MenuAction::from_label(&choice) {
                    Some(MenuAction::FightEnemy) => State::Combat,
                    Some(MenuAction::Rest) => State::Rest,
                    Some(MenuAction::ViewCharacter) => State::ViewCharacter,
                    Some(MenuAction::ViewInventory) => State::ViewInventory,
                    Some(MenuAction::GiveUp) => State::Death,
                    None => State::MainMenu,
                };
                self.run_transitions();
                Ok(())
            }
        }
    }

    /// Removes and returns every queued outbound event, in emission order.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.outbound.drain(..).collect()
    }

    /// True once the death state has run; no further events or prompts
    /// will be produced.
    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Runs transient states to completion, stopping at a prompt wait or
    /// at the terminal death state. At most one in-flight mutation of the
    /// game state: each arm finishes before the next state is considered.
    fn run_transitions(&mut self) {
        loop {
            match self.state {
                State::Welcome => {
                    self.outbound
                        .push_back(GameEvent::Message(Message::new("game.name")));

                    match self.game_state.character {
                        Some(ref character) => {
                            if self.returning {
                                self.returning = false;
                                self.outbound.push_back(GameEvent::Message(
                                    Message::with_meta(
                                        "welcome.returning",
                                        json!({ "name": character.name }),
                                    )
                                    .sentiment(Sentiment::Positive),
                                ));
                            }
                            self.state = State::MainMenu;
                        }
                        None => self.state = State::CreateCharacter,
                    }
                }
                State::CreateCharacter => {
                    self.outbound.push_back(GameEvent::Message(
                        Message::new("welcome.new").sentiment(Sentiment::Positive),
                    ));
                    self.outbound.push_back(GameEvent::Prompts(vec![
                        Prompt::input("name"),
                        Prompt::list(
                            "profession",
                            Profession::all().iter().map(|p| p.name().to_string()).collect(),
                        ),
                    ]));
                    self.pending = Some(PendingPrompt::CharacterCreation);
                    return;
                }
                State::MainMenu => {
                    self.outbound.push_back(GameEvent::Prompts(vec![Prompt::list(
                        "main",
                        MenuAction::all().iter().map(|a| a.label().to_string()).collect(),
                    )]));
                    self.pending = Some(PendingPrompt::MainMenu);
                    return;
                }
                State::Combat => {
                    let alive = match self.game_state.character.as_mut() {
                        Some(character) => {
                            let enemy = Enemy::generate(&mut self.rng);
                            let (_, events) = resolve_encounter(character, enemy, &mut self.rng);
                            self.outbound.extend(events);
                            character.is_alive()
                        }
                        None => true,
                    };
                    self.push_update_state();
                    self.state = if alive { State::MainMenu } else { State::Death };
                }
                State::Rest => {
                    if let Some(character) = self.game_state.character.as_mut() {
                        let events = rest(character);
                        self.outbound.extend(events);
                    }
                    self.push_update_state();
                    self.state = State::MainMenu;
                }
                State::ViewCharacter => {
                    if let Some(character) = self.game_state.character.as_ref() {
                        self.outbound
                            .push_back(GameEvent::ViewCharacter(character.snapshot()));
                    }
                    self.state = State::MainMenu;
                }
                State::ViewInventory => {
                    if let Some(character) = self.game_state.character.as_ref() {
                        self.outbound
                            .push_back(GameEvent::ViewInventory(character.inventory.clone()));
                    }
                    self.state = State::MainMenu;
                }
                State::Death => {
                    if let Some(character) = self.game_state.character.as_ref() {
                        self.outbound
                            .push_back(GameEvent::CharacterDeath(character.snapshot()));
                    }
                    self.over = true;
                    return;
                }
            }
        }
    }

    /// Persistence checkpoint: a clone of the whole state crosses the
    /// channel, never a live reference.
    fn push_update_state(&mut self) {
        self.outbound
            .push_back(GameEvent::UpdateState(self.game_state.clone()));
    }
}

/// Resting: pay gold, recover health.
///
/// Gold is only deducted once we know healing is actually needed; a
/// character at full health keeps their coin and just gets told to move on.
fn rest(character: &mut Character) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if character.gold < REST_GOLD_COST {
        events.push(GameEvent::Message(Message::with_meta(
            "rest.result.notEnoughGold",
            json!({ "gold": character.gold }),
        )));
        return events;
    }

    let needed = character.max_health - character.health;
    if needed <= 0 {
        events.push(GameEvent::Message(Message::new("rest.result.noHealNeeded")));
        return events;
    }

    character.gold -= REST_GOLD_COST;
    let gained = needed.min(REST_MAX_HEAL);
    character.health += gained;

    events.push(GameEvent::Message(Message::with_meta(
        "rest.result.change",
        json!({ "healthGain": gained, "goldCost": REST_GOLD_COST }),
    )));
    events.push(GameEvent::Message(Message::with_meta(
        "rest.result.stats",
        json!({ "health": character.health, "gold": character.gold }),
    )));
    events
}
