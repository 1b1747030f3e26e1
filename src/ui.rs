//! Line-oriented terminal adapter.
//!
//! This is a binary-only module (not part of `lib.rs`): it owns the message
//! template table, the sentiment-to-color mapping, and the stdin prompt
//! loop. The engine only ever hands it typed events.

use std::io::{self, BufRead, Write};

use crossterm::style::{Attribute, Color, Stylize};

use fable::character::CharacterSnapshot;
use fable::error::GameError;
use fable::events::{Message, Prompt, PromptKind, PromptResponse, Sentiment};
use fable::inventory::Inventory;

/// Template table, indexed by message key. Variables appear as `{name}`
/// and are filled from the message meta.
fn template(key: &str) -> Option<&'static str> {
    match key {
        "game.name" => Some("=== Fable ==="),
        "welcome.new" => Some("It looks like you are new here.\nLet's make your character."),
        "welcome.returning" => Some("Welcome back, {name}!"),
        "character.level" => {
            Some("You are now level {level}! You now have {health} health and {attack} attack.")
        }
        "character.level.next" => Some("Reach the next level at {nextLevelAt} XP!"),
        "combat.damage.dealt" => Some("You hit the enemy for {amount} damage."),
        "combat.damage.receive" => Some("The enemy hits you for {amount} damage."),
        "combat.hitpoints" => Some("You have {amount} hitpoints remaining."),
        "combat.result.enemyDefeated" => {
            Some("You have defeated the enemy! It dropped {quantity} x {name}.")
        }
        "combat.result.loot" => Some("You have received {gold} gold!"),
        "combat.result.xp" => Some("You gained {xp} XP!"),
        "combat.result.stats" => Some("You now have {health} health, {gold} gold and {xp} XP."),
        "rest.result.change" => Some("You have gained {healthGain} health for {goldCost} gold."),
        "rest.result.stats" => Some("You now have {health} health and {gold} gold."),
        "rest.result.notEnoughGold" => {
            Some("{gold} gold is not enough to rest. You need 10 gold.")
        }
        "rest.result.noHealNeeded" => Some("You do not need to rest right now."),
        "death" => Some("You have died. Your final stats were..."),
        _ => None,
    }
}

/// Titles shown when asking for each prompt key.
fn prompt_title(key: &str) -> &str {
    match key {
        "name" => "What is your name?",
        "profession" => "What is your profession?",
        "main" => "Choose your action!",
        other => other,
    }
}

/// Substitutes `{var}` placeholders from the message meta object.
fn fill(template: &str, meta: Option<&serde_json::Value>) -> String {
    let mut text = template.to_string();
    if let Some(serde_json::Value::Object(vars)) = meta {
        for (name, value) in vars {
            let rendered = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            text = text.replace(&format!("{{{}}}", name), &rendered);
        }
    }
    text
}

/// Renders a narrative line, styled by its sentiment hint.
pub fn render_message(message: &Message) {
    let text = match template(message.key) {
        Some(t) => fill(t, message.meta.as_ref()),
        None => message.key.to_string(),
    };

    match message.sentiment {
        Some(Sentiment::Brutal) => {
            println!("{}", text.with(Color::Red).attribute(Attribute::Bold))
        }
        Some(Sentiment::Pain) => {
            println!("{}", text.with(Color::Magenta).attribute(Attribute::Bold))
        }
        Some(Sentiment::Serious) => println!("{}", text.attribute(Attribute::Reverse)),
        Some(Sentiment::Positive) => println!("{}", text.with(Color::Green)),
        Some(Sentiment::Informational) => println!("{}", text.with(Color::Yellow)),
        None => println!("{}", text),
    }
}

/// Asks the player every prompt in order and collects the answers.
pub fn prompt_player(prompts: &[Prompt]) -> Result<Vec<PromptResponse>, GameError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut responses = Vec::with_capacity(prompts.len());

    for prompt in prompts {
        let value = match prompt.kind {
            PromptKind::Input => read_input(&mut input, prompt_title(prompt.key)),
            PromptKind::List => {
                if prompt.choices.is_empty() {
                    return Err(GameError::UnhandledPromptType {
                        key: prompt.key.to_string(),
                        reason: "list prompt with no choices".to_string(),
                    });
                }
                read_choice(&mut input, prompt_title(prompt.key), &prompt.choices)
            }
        };
        responses.push(PromptResponse::new(prompt.key, value));
    }

    Ok(responses)
}

fn read_line(input: &mut impl BufRead) -> String {
    let mut line = String::new();
    // EOF just yields an empty answer; the engine re-prompts on nonsense.
    let _ = input.read_line(&mut line);
    line.trim().to_string()
}

fn read_input(input: &mut impl BufRead, title: &str) -> String {
    print!("{} ", title.with(Color::Cyan));
    let _ = io::stdout().flush();
    read_line(input)
}

fn read_choice(input: &mut impl BufRead, title: &str, choices: &[String]) -> String {
    loop {
        println!("{}", title.with(Color::Cyan));
        for (i, choice) in choices.iter().enumerate() {
            println!("  {}. {}", i + 1, choice);
        }
        print!("> ");
        let _ = io::stdout().flush();

        let line = read_line(input);
        if let Ok(n) = line.parse::<usize>() {
            if n >= 1 && n <= choices.len() {
                return choices[n - 1].clone();
            }
        }
        // Picking by name works too
        if let Some(choice) = choices.iter().find(|c| c.as_str() == line) {
            return choice.clone();
        }
        println!("Pick a number between 1 and {}.", choices.len());
    }
}

/// Displays the character snapshot.
pub fn view_character(snapshot: &CharacterSnapshot) {
    println!("\nCharacter Stats");
    println!("---------------");
    println!("Name:       {}", snapshot.name);
    println!("Profession: {}", snapshot.profession);
    println!("Level:      {}", snapshot.level);
    println!("XP:         {}/{}", snapshot.xp, snapshot.next_level_at);
    println!("Health:     {}/{}", snapshot.health, snapshot.max_health);
    println!("Attack:     {}", snapshot.attack);
    println!("Gold:       {}\n", snapshot.gold);
}

/// Displays the inventory contents.
pub fn view_inventory(inventory: &Inventory) {
    println!("\nInventory");
    println!("---------------");
    if inventory.is_empty() {
        println!("(empty)");
    }
    for stack in inventory.stacks() {
        println!("{} x {}", stack.quantity, stack.name);
    }
    println!();
}

/// Final farewell: the death message and one last look at the character.
pub fn handle_death(snapshot: &CharacterSnapshot) {
    let text = template("death").unwrap_or("You have died.");
    println!("{}", text.with(Color::Red).attribute(Attribute::Bold));
    view_character(snapshot);
}
