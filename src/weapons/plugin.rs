//! Weapons plugin - weapon registry and equip handling.

use bevy::prelude::*;

use super::data::load_weapon_definitions;
use super::systems::*;

pub struct WeaponsPlugin;

impl Plugin for WeaponsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<WeaponEquipRequest>()
            .add_event::<WeaponChanged>()
            .add_systems(Startup, load_weapon_definitions)
            .add_systems(
                Update,
                (apply_equip_requests, bind_weapon_animations).chain(),
            );
    }
}
