//! Inventory module - items, the carried item list, equip slots and pickups.
//!
//! The inventory and the equip slots are plain resources with methods that
//! either succeed or return an [`InventoryError`] without changing anything.
//! Systems and UI observers call those methods and announce slot changes with
//! [`EquipSlotChanged`].

mod components;
mod drag;
mod equip;
mod error;
mod items;
mod plugin;
mod store;
mod systems;

pub use components::{InventoryConfig, ItemPickup};
pub use drag::{DragSource, DragState};
pub use equip::{EquipSlotChanged, EquipSlots, SlotId};
pub use error::InventoryError;
pub use items::{items_match, load_item_definitions, ItemData, ItemRegistry, ItemType, ITEMS_DIR};
pub use plugin::InventoryPlugin;
pub use store::{GridEntry, Inventory, InventoryTab};
pub use systems::{
    bridge_weapon_slot, collect_pickups, detect_pickups, reset_inventory, spawn_pickup,
    sync_weapon_on_spawn, use_consumable_hotkeys,
};
