//! World plugin - level loading, progression and the level exit.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::data::{load_level_definitions, LevelRegistry};
use super::progress::LevelProgress;
use super::spawning::{build_level, LevelEntity, LevelExit};
use crate::camera::CameraBounds;
use crate::core::GameState;
use crate::enemies::{EnemyRegistry, EnemyRng};
use crate::inventory::ItemRegistry;
use crate::player::{Player, PlayerConfig};

/// World plugin - builds levels on entering play and tears them down after.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelRegistry>()
            .init_resource::<LevelProgress>()
            .add_systems(
                Startup,
                (load_level_definitions, init_level_progress).chain(),
            )
            .add_systems(OnEnter(GameState::Playing), setup_level)
            .add_systems(OnExit(GameState::Playing), cleanup_level)
            .add_systems(
                Update,
                detect_level_exit.run_if(in_state(GameState::Playing)),
            );
    }
}

fn init_level_progress(mut commands: Commands, registry: Res<LevelRegistry>) {
    commands.insert_resource(LevelProgress::new(registry.count()));
}

/// Build the current level.
pub fn setup_level(
    mut commands: Commands,
    registry: Res<LevelRegistry>,
    progress: Res<LevelProgress>,
    player_config: Res<PlayerConfig>,
    enemy_registry: Res<EnemyRegistry>,
    item_registry: Res<ItemRegistry>,
    mut rng: ResMut<EnemyRng>,
) {
    let Some(level) = registry.get(progress.current()) else {
        error!("Level {} not found in registry!", progress.current());
        return;
    };

    info!("Building level {}: {}", progress.current(), level.name);
    build_level(
        &mut commands,
        level,
        &player_config,
        &enemy_registry,
        &item_registry,
        &mut rng.0,
    );

    match level.bounds {
        Some(bounds) => commands.insert_resource(CameraBounds::from(bounds)),
        None => commands.remove_resource::<CameraBounds>(),
    }
}

/// Despawn everything belonging to the level.
pub fn cleanup_level(mut commands: Commands, level_query: Query<Entity, With<LevelEntity>>) {
    for entity in level_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<CameraBounds>();
}

/// Finish the level when the player touches the exit.
pub fn detect_level_exit(
    mut collisions: EventReader<CollisionEvent>,
    players: Query<(), With<Player>>,
    exits: Query<(), With<LevelExit>>,
    progress: Res<LevelProgress>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for collision in collisions.read() {
        let CollisionEvent::Started(a, b, _) = *collision else {
            continue;
        };
        let reached = (players.contains(a) && exits.contains(b))
            || (players.contains(b) && exits.contains(a));
        if !reached {
            continue;
        }

        if progress.is_last() {
            info!("Final level {} complete", progress.current());
            next_state.set(GameState::LevelComplete);
        } else {
            info!("Level {} passed", progress.current());
            next_state.set(GameState::LevelPass);
        }
        return;
    }
}
