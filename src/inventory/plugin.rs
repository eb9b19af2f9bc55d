//! Inventory plugin - item registry, equip slots, pickups and hotkeys.

use bevy::prelude::*;

use super::components::InventoryConfig;
use super::drag::DragState;
use super::equip::{EquipSlotChanged, EquipSlots};
use super::items::{load_item_definitions, ItemRegistry};
use super::store::Inventory;
use super::systems::*;
use crate::core::{GameState, PlayState};
use crate::weapons::{apply_equip_requests, load_weapon_definitions};

pub struct InventoryPlugin;

impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Inventory>()
            .init_resource::<EquipSlots>()
            .init_resource::<DragState>()
            .init_resource::<InventoryConfig>()
            .init_resource::<ItemRegistry>()
            .add_event::<EquipSlotChanged>()
            // Items link to weapons, so weapons load first
            .add_systems(Startup, load_item_definitions.after(load_weapon_definitions))
            .add_systems(OnExit(GameState::StartMenu), reset_inventory)
            .add_systems(
                Update,
                (detect_pickups, collect_pickups)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                use_consumable_hotkeys.run_if(in_state(PlayState::Exploring)),
            )
            .add_systems(
                Update,
                (bridge_weapon_slot, sync_weapon_on_spawn).before(apply_equip_requests),
            );
    }
}
