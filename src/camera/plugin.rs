//! Camera plugin - spawns the game camera and keeps it on the player.

use bevy::prelude::*;
use bevy::transform::TransformSystem;
use bevy_rapier2d::prelude::PhysicsSet;

use super::follow::CameraConfig;
use super::systems::*;
use crate::core::GameState;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraConfig>()
            .add_systems(Startup, spawn_game_camera)
            .add_systems(Update, target_new_player)
            .add_systems(OnEnter(GameState::StartMenu), reset_camera)
            .add_systems(
                PostUpdate,
                follow_target
                    .after(PhysicsSet::Writeback)
                    .before(TransformSystem::TransformPropagate),
            );
    }
}
