use serde::{Deserialize, Serialize};

use crate::constants::INVENTORY_SLOTS;

/// A stack of identical items occupying one inventory slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub name: String,
    pub quantity: u32,
}

/// Bounded slot collection that merges stackable items by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<ItemStack>,
}

impl Inventory {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Adds `quantity` of the named item.
    ///
    /// If a stack with the same name exists its quantity is incremented,
    /// otherwise a new slot is used. When every slot is taken and no stack
    /// matches, the item is silently dropped. That is intended behavior,
    /// not an error: loot lost to a full pack is part of the game.
    pub fn add_item(&mut self, name: &str, quantity: u32) {
        if let Some(stack) = self.slots.iter_mut().find(|s| s.name == name) {
            stack.quantity += quantity;
            return;
        }

        if self.slots.len() < INVENTORY_SLOTS {
            self.slots.push(ItemStack {
                name: name.to_string(),
                quantity,
            });
        }
    }

    pub fn stacks(&self) -> &[ItemStack] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
