//! Weapons module - weapon data, loadouts and equip events.

mod components;
mod data;
mod plugin;
mod systems;

pub use components::{AnimationBinding, BaseCombatStats, WeaponEquippable, WeaponLoadout};
pub use data::{
    load_weapon_definitions, ProjectileDef, WeaponData, WeaponRegistry, WeaponType, WEAPONS_DIR,
};
pub use plugin::WeaponsPlugin;
pub use systems::{apply_equip_requests, bind_weapon_animations, WeaponChanged, WeaponEquipRequest};
