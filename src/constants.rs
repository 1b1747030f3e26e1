// Character progression constants
pub const STARTING_GOLD: u32 = 100;
pub const STARTING_NEXT_LEVEL_AT: u32 = 100;
pub const LEVEL_ATTACK_GAIN: i32 = 2;
pub const MAX_HEALTH_GAIN_PER_LEVEL: i32 = 20;
pub const XP_MULTIPLIER_CAP: u32 = 3;

// Profession base stats
pub const WARRIOR_BASE_HEALTH: i32 = 100;
pub const WARRIOR_BASE_ATTACK: i32 = 10;
pub const THIEF_BASE_HEALTH: i32 = 75;
pub const THIEF_BASE_ATTACK: i32 = 10;
pub const THIEF_CRIT_CHANCE: f64 = 0.15;
pub const THIEF_CRIT_MULTIPLIER: i32 = 3;
pub const MAGE_BASE_HEALTH: i32 = 50;
pub const MAGE_BASE_ATTACK: i32 = 15;

// Inventory constants
pub const INVENTORY_SLOTS: usize = 10;

// Enemy generation ranges (inclusive)
pub const ENEMY_MIN_ATTACK: i32 = 1;
pub const ENEMY_MAX_ATTACK: i32 = 10;
pub const ENEMY_MIN_HEALTH: i32 = 21;
pub const ENEMY_MAX_HEALTH: i32 = 30;

// Resting constants
pub const REST_GOLD_COST: u32 = 10;
pub const REST_MAX_HEAL: i32 = 25;
