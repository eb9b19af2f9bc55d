//! Hollow Grove - a small 2D side-scrolling action RPG in Bevy.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, config loading
//! - **Combat**: Health, conditions, damage, projectiles
//! - **Weapons**: Weapon data and per-actor loadouts
//! - **Player**: Platformer motor, attacks, death
//! - **Enemies**: Patrol/chase/attack brains, melee and ranged kinds
//! - **Inventory**: Items, equip slots, pickups, consumable hotkeys
//! - **Camera**: Dead-zone follow camera with level bounds
//! - **Audio**: Sound effects via bevy_kira_audio
//! - **World**: Levels, progression, the level exit
//! - **UI**: Menus, HUD, inventory screen
//!
//! Physics (`bevy_rapier2d`) and the kira audio backend are added by the
//! binary, so headless tests can build the game plugins on `MinimalPlugins`.

pub mod audio;
pub mod camera;
pub mod combat;
pub mod core;
pub mod data;
pub mod enemies;
pub mod inventory;
pub mod player;
pub mod ui;
pub mod weapons;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct HollowGrovePlugin;

impl Plugin for HollowGrovePlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Combat and equipment
            .add_plugins(combat::CombatPlugin)
            .add_plugins(weapons::WeaponsPlugin)

            // Actors
            .add_plugins(player::PlayerPlugin)
            .add_plugins(enemies::EnemyPlugin)

            // Items
            .add_plugins(inventory::InventoryPlugin)

            // Presentation
            .add_plugins(camera::CameraPlugin)
            .add_plugins(audio::SfxPlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
