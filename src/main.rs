//! Hollow Grove - Entry Point
//!
//! Controls:
//! - A/D or arrows: Move
//! - Space: Jump (twice for a double jump)
//! - J or left mouse: Attack
//! - 1 / 2: Use consumable slot A / B
//! - I: Inventory
//! - Escape: Pause/Unpause

use bevy::prelude::*;
use bevy_kira_audio::AudioPlugin;
use bevy_rapier2d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Hollow Grove".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Physics, one world unit per metre
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0))

        // Audio backend
        .add_plugins(AudioPlugin)

        // Our game plugin
        .add_plugins(hollow_grove::HollowGrovePlugin)

        .run();
}
