//! Inventory config and world pickup components.

use bevy::prelude::*;
use serde::Deserialize;

use super::equip::SlotId;
use super::items::ItemData;

/// Inventory tuning, loaded from the `inventory` section of the game config.
#[derive(Resource, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Cells in the inventory grid
    pub grid_slot_count: usize,
    /// HP restored from slot A when the item defines no restore amounts
    pub fallback_heal: i32,
    /// MP restored from slot B when the item defines no restore amounts
    pub fallback_mana: i32,
    /// (item id, count) granted on a new game
    pub starting_items: Vec<(String, i32)>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            grid_slot_count: 20,
            fallback_heal: 50,
            fallback_mana: 30,
            starting_items: Vec::new(),
        }
    }
}

impl InventoryConfig {
    /// (hp, mp) restored by using `item` from `slot`.
    pub fn restore_amounts(&self, item: &ItemData, slot: SlotId) -> (i32, i32) {
        let hp = item.restore_hp.max(0);
        let mp = item.restore_mp.max(0);
        if hp > 0 || mp > 0 {
            return (hp, mp);
        }
        match slot {
            SlotId::ConsumableB => (0, self.fallback_mana),
            _ => (self.fallback_heal, 0),
        }
    }
}

/// A collectible lying in the level. Touching it adds `amount` of the item.
#[derive(Component, Debug, Clone)]
pub struct ItemPickup {
    pub item_id: String,
    pub amount: i32,
}
