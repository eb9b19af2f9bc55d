//! Camera module - 2D follow camera with a dead zone and level bounds.

mod follow;
mod plugin;
mod systems;

pub use follow::{apply_dead_zone, clamp_to_bounds, CameraBounds, CameraConfig, CameraFollow};
pub use plugin::CameraPlugin;
pub use systems::{follow_target, reset_camera, spawn_game_camera, target_new_player, GameCamera};
