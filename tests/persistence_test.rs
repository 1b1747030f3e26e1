//! Integration test: persistence contract
//!
//! The engine never touches the disk itself; the host saves every
//! `UpdateState` checkpoint and deletes the save on death. These tests act
//! as that host, pushing checkpoints through a real `SaveManager` and
//! rehydrating a second session from the file.

use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fable::engine::Engine;
use fable::events::{GameEvent, PromptResponse};
use fable::game_state::GameState;
use fable::save_manager::SaveManager;

fn temp_save(name: &str) -> SaveManager {
    let path: PathBuf =
        std::env::temp_dir().join(format!("fable-it-{}-{}.json", name, std::process::id()));
    let manager = SaveManager::with_path(path);
    let _ = manager.delete();
    manager
}

/// Routes one batch of events the way main.rs does, returning the prompt
/// batch if the engine is waiting on one.
fn route_events(
    events: Vec<GameEvent>,
    save_manager: &SaveManager,
) -> Option<Vec<fable::events::Prompt>> {
    let mut prompts = None;
    for event in events {
        match event {
            GameEvent::Prompts(p) => prompts = Some(p),
            GameEvent::UpdateState(state) => save_manager.save(&state).expect("save failed"),
            GameEvent::CharacterDeath(_) => save_manager.delete().expect("delete failed"),
            _ => {}
        }
    }
    prompts
}

#[test]
fn test_checkpoints_rehydrate_an_identical_character() {
    let save_manager = temp_save("rehydrate");

    // First session: create a character and win a fight
    let mut engine = Engine::with_rng(None, ChaCha8Rng::seed_from_u64(9));
    engine.start();
    route_events(engine.drain_events(), &save_manager);
    engine
        .submit_prompt_response(vec![
            PromptResponse::new("name", "Conan"),
            PromptResponse::new("profession", "Warrior"),
        ])
        .unwrap();
    route_events(engine.drain_events(), &save_manager);
    engine
        .submit_prompt_response(vec![PromptResponse::new("main", "Fight an enemy")])
        .unwrap();
    route_events(engine.drain_events(), &save_manager);

    let live = engine.game_state().clone();
    assert!(save_manager.save_exists());

    // Second session: load and compare
    let loaded = save_manager
        .load()
        .expect("load failed")
        .expect("save missing");
    assert_eq!(loaded, live);

    let mut second = Engine::with_rng(Some(loaded), ChaCha8Rng::seed_from_u64(10));
    second.start();
    let events = second.drain_events();
    assert!(
        events.iter().any(|e| matches!(
            e,
            GameEvent::Message(m) if m.key == "welcome.returning"
        )),
        "rehydrated session should greet the returning player"
    );

    save_manager.delete().expect("cleanup failed");
}

#[test]
fn test_death_deletes_the_save() {
    let save_manager = temp_save("death");

    let mut doomed =
        fable::character::Character::new("Doomed".to_string(), fable::character::Profession::Mage);
    doomed.health = 1;
    let mut engine = Engine::with_rng(
        Some(GameState::with_character(doomed)),
        ChaCha8Rng::seed_from_u64(5),
    );
    engine.start();
    route_events(engine.drain_events(), &save_manager);

    engine
        .submit_prompt_response(vec![PromptResponse::new("main", "Fight an enemy")])
        .unwrap();

    // Combat checkpoints the (dead) state, then the death event removes
    // the save — the character's lifecycle ends with the session.
    route_events(engine.drain_events(), &save_manager);
    assert!(engine.is_over());
    assert!(!save_manager.save_exists());
}
