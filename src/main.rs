//! Host binary: wires the engine to the terminal and the save file.
//!
//! The player creates a character and then fights enemies of random
//! strength, receiving gold for each enemy defeated. Health is recovered
//! by resting, at the cost of gold. The engine drives itself through its
//! states and this loop only routes events: messages and views go to the
//! terminal adapter, state checkpoints go to the save manager, and prompt
//! answers are fed back in.

mod ui;

use std::io;

use fable::engine::Engine;
use fable::events::GameEvent;
use fable::save_manager::SaveManager;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("fable {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Fable - Turn-Based Terminal Text Adventure\n");
                println!("Usage: fable\n");
                println!("Create a character, fight enemies, rest to heal, try not to die.");
                println!("Progress is saved automatically and deleted when your character falls.");
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'fable --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let save_manager = SaveManager::new()?;
    let saved_state = save_manager.load()?;

    let mut engine = Engine::new(saved_state);
    engine.start();

    loop {
        let mut pending_prompts = None;

        for event in engine.drain_events() {
            match event {
                GameEvent::Prompts(prompts) => pending_prompts = Some(prompts),
                GameEvent::Message(message) => ui::render_message(&message),
                GameEvent::UpdateState(state) => save_manager.save(&state)?,
                GameEvent::ViewCharacter(snapshot) => ui::view_character(&snapshot),
                GameEvent::ViewInventory(inventory) => ui::view_inventory(&inventory),
                GameEvent::CharacterDeath(snapshot) => {
                    ui::handle_death(&snapshot);
                    save_manager.delete()?;
                }
            }
        }

        if engine.is_over() {
            return Ok(());
        }

        let Some(prompts) = pending_prompts else {
            // The engine stopped without a prompt or a death; nothing
            // left to drive.
            return Ok(());
        };

        let responses = ui::prompt_player(&prompts)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
        engine
            .submit_prompt_response(responses)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    }
}
