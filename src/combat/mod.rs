//! Combat module - actor vitals, overlap resolution, damage and projectiles.

mod components;
mod plugin;
pub mod resolver;
mod systems;

pub use components::*;
pub use plugin::CombatPlugin;
pub use resolver::{CircleZone, DEFAULT_ATTACK_RADIUS, DEFAULT_DETECT_RADIUS};
pub use systems::{
    apply_damage, apply_restores, spawn_projectile, tick_conditions, CombatSet, HitEvent,
};
