//! Entity spawning for level construction.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use super::data::{LevelDefinition, PlatformDef};
use crate::enemies::{spawn_enemy, EnemyRegistry};
use crate::inventory::{spawn_pickup, ItemPickup, ItemRegistry};
use crate::player::{spawn_player, PlayerConfig};

/// Everything spawned for a level. Despawned when the level is left.
#[derive(Component, Debug, Default)]
pub struct LevelEntity;

/// Touching this finishes the level.
#[derive(Component, Debug)]
pub struct LevelExit;

/// Spawn a static platform block.
pub fn spawn_platform(commands: &mut Commands, platform: &PlatformDef, color: Color) -> Entity {
    let size = Vec2::new(platform.width.max(0.01), platform.height.max(0.01));
    commands
        .spawn((
            Name::new("Platform"),
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(platform.x, platform.y, 0.0),
            RigidBody::Fixed,
            Collider::cuboid(size.x * 0.5, size.y * 0.5),
            Friction::coefficient(0.0),
            LevelEntity,
        ))
        .id()
}

/// Spawn the exit zone sensor.
pub fn spawn_exit(commands: &mut Commands, position: Vec2) -> Entity {
    commands
        .spawn((
            Name::new("Level Exit"),
            LevelExit,
            Sprite {
                color: Color::srgba(0.9, 0.85, 0.4, 0.5),
                custom_size: Some(Vec2::new(1.0, 2.0)),
                ..default()
            },
            Transform::from_translation(position.extend(1.0)),
            Collider::cuboid(0.5, 1.0),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
            LevelEntity,
        ))
        .id()
}

/// Spawn every entity of `level`. Returns the player entity.
pub fn build_level(
    commands: &mut Commands,
    level: &LevelDefinition,
    player_config: &PlayerConfig,
    enemy_registry: &EnemyRegistry,
    item_registry: &ItemRegistry,
    rng: &mut impl Rng,
) -> Entity {
    let (r, g, b) = level.platform_color;
    let platform_color = Color::srgb(r, g, b);
    for platform in &level.platforms {
        spawn_platform(commands, platform, platform_color);
    }

    for placement in &level.enemies {
        let Some(definition) = enemy_registry.get(&placement.kind) else {
            warn!("Unknown enemy type '{}' in level {}", placement.kind, level.name);
            continue;
        };
        spawn_enemy(
            commands,
            &placement.kind,
            definition,
            Vec2::new(placement.x, placement.y),
            rng,
        );
    }

    for placement in &level.pickups {
        let Some(item) = item_registry.get(&placement.item) else {
            warn!("Unknown item '{}' in level {}", placement.item, level.name);
            continue;
        };
        let (r, g, b) = item.icon_color;
        spawn_pickup(
            commands,
            ItemPickup {
                item_id: placement.item.clone(),
                amount: placement.amount,
            },
            Color::srgb(r, g, b),
            Vec2::new(placement.x, placement.y),
        );
    }

    spawn_exit(commands, level.exit.into());
    spawn_player(commands, level.player_spawn.into(), player_config)
}
