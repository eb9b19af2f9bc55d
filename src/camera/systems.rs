//! Camera spawning and follow systems.

use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use super::follow::{CameraBounds, CameraConfig, CameraFollow};
use crate::player::Player;

/// Marker for the single game camera.
#[derive(Component)]
pub struct GameCamera;

/// Spawn the orthographic game camera. Menus render through it too.
pub fn spawn_game_camera(mut commands: Commands, config: Res<CameraConfig>) {
    commands.spawn((
        Name::new("Game Camera"),
        Camera2d,
        OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: config.view_height.max(1.0),
            },
            ..OrthographicProjection::default_2d()
        },
        GameCamera,
        CameraFollow::default(),
    ));
}

/// Point the camera at a freshly spawned player.
pub fn target_new_player(
    players: Query<Entity, Added<Player>>,
    mut cameras: Query<&mut CameraFollow, With<GameCamera>>,
) {
    let Some(player) = players.iter().last() else {
        return;
    };
    for mut follow in cameras.iter_mut() {
        follow.set_target(Some(player));
    }
}

/// Move the camera towards its target after physics has written positions.
pub fn follow_target(
    time: Res<Time>,
    config: Res<CameraConfig>,
    bounds: Option<Res<CameraBounds>>,
    targets: Query<&Transform, Without<GameCamera>>,
    mut cameras: Query<
        (&mut Transform, &mut CameraFollow, &OrthographicProjection),
        With<GameCamera>,
    >,
) {
    for (mut transform, mut follow, projection) in cameras.iter_mut() {
        let Some(target) = follow.target() else {
            continue;
        };
        let Ok(target_transform) = targets.get(target) else {
            continue;
        };

        let half_view = projection.area.half_size();
        let half_view = (half_view.x > 0.0 && half_view.y > 0.0).then_some(half_view);

        let position = follow.step(
            transform.translation.truncate(),
            target_transform.translation.truncate(),
            time.delta_secs(),
            &config,
            bounds.as_deref(),
            half_view,
        );
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}

/// Drop the target and recentre when back at the start menu.
pub fn reset_camera(mut cameras: Query<(&mut Transform, &mut CameraFollow), With<GameCamera>>) {
    for (mut transform, mut follow) in cameras.iter_mut() {
        follow.set_target(None);
        transform.translation.x = 0.0;
        transform.translation.y = 0.0;
    }
}
