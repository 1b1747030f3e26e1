use rand::Rng;

use crate::constants::*;

/// A randomly rolled opponent.
///
/// Enemies live only for the duration of a single encounter and are never
/// persisted. Rewards scale with the roll: tougher enemies carry more gold
/// and grant more experience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    pub health: i32,
    pub attack: i32,
    pub gold: u32,
    pub xp: u32,
}

impl Enemy {
    /// Rolls a fresh enemy for one encounter.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let attack = rng.gen_range(ENEMY_MIN_ATTACK..=ENEMY_MAX_ATTACK);
        let health = rng.gen_range(ENEMY_MIN_HEALTH..=ENEMY_MAX_HEALTH);

        Self {
            health,
            attack,
            gold: (health + attack) as u32,
            xp: health as u32,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}
