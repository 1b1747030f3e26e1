use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::GameError;
use crate::inventory::Inventory;

/// A character's combat class, chosen once at creation.
///
/// The profession determines base stats and the outgoing damage rule.
/// Damage is computed by a method on the variant so there is no runtime
/// string dispatch anywhere in combat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Profession {
    Warrior,
    Thief,
    Mage,
}

impl Profession {
    pub fn all() -> [Profession; 3] {
        [Profession::Warrior, Profession::Thief, Profession::Mage]
    }

    pub fn base_health(&self) -> i32 {
        match self {
            Profession::Warrior => WARRIOR_BASE_HEALTH,
            Profession::Thief => THIEF_BASE_HEALTH,
            Profession::Mage => MAGE_BASE_HEALTH,
        }
    }

    pub fn base_attack(&self) -> i32 {
        match self {
            Profession::Warrior => WARRIOR_BASE_ATTACK,
            Profession::Thief => THIEF_BASE_ATTACK,
            Profession::Mage => MAGE_BASE_ATTACK,
        }
    }

    /// Rolls one blow's worth of outgoing damage.
    ///
    /// Warriors and mages hit for flat attack. Thieves have a chance to
    /// land a critical hit that multiplies the blow.
    pub fn roll_damage(&self, attack: i32, rng: &mut impl Rng) -> i32 {
        match self {
            Profession::Warrior | Profession::Mage => attack,
            Profession::Thief => {
                if rng.gen::<f64>() < THIEF_CRIT_CHANCE {
                    attack * THIEF_CRIT_MULTIPLIER
                } else {
                    attack
                }
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Profession::Warrior => "Warrior",
            Profession::Thief => "Thief",
            Profession::Mage => "Mage",
        }
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profession {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Warrior" => Ok(Profession::Warrior),
            "Thief" => Ok(Profession::Thief),
            "Mage" => Ok(Profession::Mage),
            other => Err(GameError::InvalidProfession(other.to_string())),
        }
    }
}

/// The player character: stats, profession, and inventory.
///
/// Pure data plus mutation methods; no I/O. Health may dip to zero or
/// below transiently — `apply_damage` deliberately does not clamp, the
/// caller checks for death afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub gold: u32,
    pub level: u32,
    pub xp: u32,
    pub next_level_at: u32,
    pub health: i32,
    pub max_health: i32,
    pub profession: Profession,
    pub attack: i32,
    pub inventory: Inventory,
}

/// Read-only display view of a character, safe to hand across the
/// event channel without exposing the live state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    pub name: String,
    pub profession: String,
    pub gold: u32,
    pub level: u32,
    pub xp: u32,
    pub next_level_at: u32,
    pub health: i32,
    pub max_health: i32,
    pub attack: i32,
}

impl Character {
    /// Creates a fresh level-1 character of the given profession.
    pub fn new(name: String, profession: Profession) -> Self {
        Self {
            name,
            gold: STARTING_GOLD,
            level: 1,
            xp: 0,
            next_level_at: STARTING_NEXT_LEVEL_AT,
            health: profession.base_health(),
            max_health: profession.base_health(),
            profession,
            attack: profession.base_attack(),
            inventory: Inventory::new(),
        }
    }

    /// Reduces health by `amount` without clamping at zero.
    pub fn apply_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Credits experience with a level-scaled multiplier.
    ///
    /// The multiplier is `min(1 + level/10, 3)` in integer math, so it is
    /// 1 for levels 1-9, 2 for levels 10-19, and capped at 3 from level 20.
    /// Does not trigger a level-up; the combat resolver owns that check.
    pub fn gain_xp(&mut self, raw: u32) {
        let multiplier = (1 + self.level / 10).min(XP_MULTIPLIER_CAP);
        self.xp += raw * multiplier;
    }

    /// Advances the character one level.
    ///
    /// Raises attack and max health and recomputes the next-level
    /// threshold. Leftover experience carries over and current health is
    /// left where it was relative to the new, larger maximum.
    pub fn level_up(&mut self) {
        self.level += 1;
        self.attack += LEVEL_ATTACK_GAIN;
        self.max_health += (self.level as i32 - 1) * MAX_HEALTH_GAIN_PER_LEVEL;
        self.next_level_at = self.next_level_at + self.next_level_at * 2 - self.level * 50;
    }

    pub fn snapshot(&self) -> CharacterSnapshot {
        CharacterSnapshot {
            name: self.name.clone(),
            profession: self.profession.name().to_string(),
            gold: self.gold,
            level: self.level,
            xp: self.xp,
            next_level_at: self.next_level_at,
            health: self.health,
            max_health: self.max_health,
            attack: self.attack,
        }
    }
}
