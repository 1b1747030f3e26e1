//! Combat resolver: runs one full encounter to completion.
//!
//! Given a character and a freshly rolled enemy, fights synchronous rounds
//! until a terminal health condition, producing the turn-by-turn event trace
//! and the outcome. Loot, gold, experience, and level-ups are applied here;
//! everything else is visible only through the returned events.

use rand::Rng;
use serde_json::json;

use crate::character::Character;
use crate::enemy::Enemy;
use crate::events::{GameEvent, Message, Sentiment};

/// Terminal result of a single encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOutcome {
    Victory,
    Defeat,
}

/// Rolls the loot drop for a defeated enemy: a coin flip between the two
/// fixed item tables.
fn roll_loot(rng: &mut impl Rng) -> (&'static str, u32) {
    if rng.gen::<f64>() > 0.5 {
        ("Raw Meat", rng.gen_range(1..=3))
    } else {
        ("Bone", rng.gen_range(1..=2))
    }
}

/// Fights `enemy` to the death, mutating `character` as the rounds land.
///
/// Every round both blows land: the enemy takes profession-rolled damage,
/// then the enemy's counterattack lands even if the enemy just dropped to
/// zero. The character's health is checked first when the loop exits, so a
/// round where both sides fall is a defeat.
///
/// On defeat nothing is credited and the (non-positive) health is retained
/// for the death flow to display. On victory the drop, gold, and experience
/// are applied, with at most one level-up per encounter — experience
/// overshooting two thresholds at once still advances a single level.
pub fn resolve_encounter(
    character: &mut Character,
    mut enemy: Enemy,
    rng: &mut impl Rng,
) -> (EncounterOutcome, Vec<GameEvent>) {
    let mut events = Vec::new();

    while character.is_alive() && enemy.is_alive() {
        let prev_enemy_health = enemy.health;
        let damage = character.profession.roll_damage(character.attack, rng);
        enemy.health -= damage;
        events.push(GameEvent::Message(
            Message::with_meta(
                "combat.damage.dealt",
                json!({ "amount": prev_enemy_health - enemy.health }),
            )
            .sentiment(Sentiment::Brutal),
        ));

        character.apply_damage(enemy.attack);
        events.push(GameEvent::Message(
            Message::with_meta("combat.damage.receive", json!({ "amount": enemy.attack }))
                .sentiment(Sentiment::Pain),
        ));

        events.push(GameEvent::Message(Message::with_meta(
            "combat.hitpoints",
            json!({ "amount": character.health }),
        )));
    }

    // Tie-break: the character's death wins over a simultaneous enemy death.
    if !character.is_alive() {
        return (EncounterOutcome::Defeat, events);
    }

    let (drop_name, drop_quantity) = roll_loot(rng);
    character.inventory.add_item(drop_name, drop_quantity);
    events.push(GameEvent::Message(Message::with_meta(
        "combat.result.enemyDefeated",
        json!({ "name": drop_name, "quantity": drop_quantity }),
    )));

    character.gold += enemy.gold;
    events.push(GameEvent::Message(
        Message::with_meta("combat.result.loot", json!({ "gold": enemy.gold }))
            .sentiment(Sentiment::Informational),
    ));

    character.gain_xp(enemy.xp);
    events.push(GameEvent::Message(
        Message::with_meta("combat.result.xp", json!({ "xp": enemy.xp }))
            .sentiment(Sentiment::Informational),
    ));

    if character.xp >= character.next_level_at {
        character.level_up();
        events.push(GameEvent::Message(
            Message::with_meta(
                "character.level",
                json!({
                    "level": character.level,
                    "health": character.health,
                    "attack": character.attack,
                }),
            )
            .sentiment(Sentiment::Informational),
        ));
        events.push(GameEvent::Message(
            Message::with_meta(
                "character.level.next",
                json!({ "nextLevelAt": character.next_level_at }),
            )
            .sentiment(Sentiment::Informational),
        ));
    }

    events.push(GameEvent::Message(Message::with_meta(
        "combat.result.stats",
        json!({
            "health": character.health,
            "gold": character.gold,
            "xp": character.xp,
        }),
    )));

    (EncounterOutcome::Victory, events)
}
