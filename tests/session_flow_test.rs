//! Integration test: full session flow
//!
//! Drives the engine through whole sessions the way the host binary does:
//! drain the outbound queue, answer the pending prompt, repeat. Checks the
//! state-machine routing, the event ordering contract, and the death flow.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fable::character::{Character, Profession};
use fable::engine::Engine;
use fable::events::{GameEvent, PromptResponse};
use fable::game_state::GameState;

fn seeded_engine(saved: Option<GameState>, seed: u64) -> Engine<ChaCha8Rng> {
    Engine::with_rng(saved, ChaCha8Rng::seed_from_u64(seed))
}

/// Answers the main-menu prompt with the given action label.
fn choose(engine: &mut Engine<ChaCha8Rng>, action: &str) -> Vec<GameEvent> {
    engine
        .submit_prompt_response(vec![PromptResponse::new("main", action)])
        .expect("menu response failed");
    engine.drain_events()
}

fn message_keys(events: &[GameEvent]) -> Vec<&'static str> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::Message(m) => Some(m.key),
            _ => None,
        })
        .collect()
}

// =============================================================================
// Creation and menu routing
// =============================================================================

#[test]
fn test_full_session_from_creation_to_menu() {
    let mut engine = seeded_engine(None, 7);
    engine.start();

    // Welcome, new-player message, then the two creation prompts
    let events = engine.drain_events();
    let GameEvent::Prompts(prompts) = events.last().unwrap() else {
        panic!("expected creation prompts");
    };
    assert_eq!(prompts.len(), 2);

    engine
        .submit_prompt_response(vec![
            PromptResponse::new("name", "Wanderer"),
            PromptResponse::new("profession", "Mage"),
        ])
        .unwrap();

    let events = engine.drain_events();
    // Checkpoint carries the new character before any further transition
    let GameEvent::UpdateState(state) = &events[0] else {
        panic!("expected update-state first, got {:?}", events[0]);
    };
    let character = state.character.as_ref().unwrap();
    assert_eq!(character.name, "Wanderer");
    assert_eq!(character.profession, Profession::Mage);
    assert_eq!(character.health, 50);
    assert_eq!(character.attack, 15);

    // Routed back through welcome and into the menu
    let GameEvent::Prompts(prompts) = events.last().unwrap() else {
        panic!("expected menu prompt");
    };
    assert_eq!(prompts[0].key, "main");
}

#[test]
fn test_views_round_trip_back_to_menu() {
    let state = GameState::with_character(Character::new(
        "Conan".to_string(),
        Profession::Warrior,
    ));
    let mut engine = seeded_engine(Some(state), 7);
    engine.start();
    engine.drain_events();

    let events = choose(&mut engine, "View character");
    assert!(matches!(&events[0], GameEvent::ViewCharacter(_)));
    assert!(matches!(events.last().unwrap(), GameEvent::Prompts(_)));

    let events = choose(&mut engine, "View inventory");
    assert!(matches!(&events[0], GameEvent::ViewInventory(_)));
    assert!(matches!(events.last().unwrap(), GameEvent::Prompts(_)));
}

// =============================================================================
// Combat flow
// =============================================================================

#[test]
fn test_combat_survivor_returns_to_menu_with_checkpoint() {
    let state = GameState::with_character(Character::new(
        "Conan".to_string(),
        Profession::Warrior,
    ));
    let mut engine = seeded_engine(Some(state), 11);
    engine.start();
    engine.drain_events();

    let events = choose(&mut engine, "Fight an enemy");
    let keys = message_keys(&events);

    // The fixed per-round order: dealt, receive, hitpoints
    let first_dealt = keys.iter().position(|k| *k == "combat.damage.dealt");
    assert_eq!(first_dealt, Some(0));
    assert_eq!(keys[1], "combat.damage.receive");
    assert_eq!(keys[2], "combat.hitpoints");

    // Checkpoint lands after the trace, before the next prompt
    let update_pos = events
        .iter()
        .position(|e| matches!(e, GameEvent::UpdateState(_)))
        .expect("combat must checkpoint state");
    let prompt_pos = events
        .iter()
        .position(|e| matches!(e, GameEvent::Prompts(_)))
        .expect("survivor returns to menu");
    assert!(update_pos < prompt_pos);
}

#[test]
fn test_death_in_combat_is_terminal() {
    let mut doomed = Character::new("Doomed".to_string(), Profession::Warrior);
    doomed.health = 1;
    let mut engine = seeded_engine(Some(GameState::with_character(doomed)), 11);
    engine.start();
    engine.drain_events();

    // Enemies always roll at least 21 health and 1 attack, so a character
    // with 1 health cannot outlast the first round.
    let events = choose(&mut engine, "Fight an enemy");

    let deaths = events
        .iter()
        .filter(|e| matches!(e, GameEvent::CharacterDeath(_)))
        .count();
    assert_eq!(deaths, 1);
    assert!(!events.iter().any(|e| matches!(e, GameEvent::Prompts(_))));
    assert!(engine.is_over());

    // Defeat credits nothing
    assert!(!message_keys(&events).contains(&"combat.result.enemyDefeated"));
}

#[test]
fn test_fighting_forever_eventually_dies() {
    let state = GameState::with_character(Character::new(
        "Conan".to_string(),
        Profession::Warrior,
    ));
    let mut engine = seeded_engine(Some(state), 1234);
    engine.start();
    engine.drain_events();

    // Health is never recovered, so repeated fights must terminate.
    for _ in 0..1000 {
        let events = choose(&mut engine, "Fight an enemy");
        if engine.is_over() {
            assert!(events
                .iter()
                .any(|e| matches!(e, GameEvent::CharacterDeath(_))));
            assert!(!events.iter().any(|e| matches!(e, GameEvent::Prompts(_))));
            return;
        }
        assert!(matches!(events.last().unwrap(), GameEvent::Prompts(_)));
    }
    panic!("character survived 1000 fights without healing");
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_scripted_session_reproducible_under_fixed_seed() {
    let run = |seed: u64| {
        let mut engine = seeded_engine(None, seed);
        engine.start();
        let mut trace = engine.drain_events();

        engine
            .submit_prompt_response(vec![
                PromptResponse::new("name", "Echo"),
                PromptResponse::new("profession", "Thief"),
            ])
            .unwrap();
        trace.extend(engine.drain_events());

        for action in ["Fight an enemy", "Rest", "Fight an enemy", "Give up"] {
            if engine.is_over() {
                break;
            }
            engine
                .submit_prompt_response(vec![PromptResponse::new("main", action)])
                .unwrap();
            trace.extend(engine.drain_events());
        }
        trace
    };

    assert_eq!(run(42), run(42));
}
