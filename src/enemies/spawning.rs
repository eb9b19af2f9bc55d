//! Enemy spawning from registry definitions.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use super::brain::EnemyBrain;
use super::components::{CorpseDelay, Enemy, EnemyType};
use super::data::EnemyDefinition;
use crate::combat::{Condition, Faction, Health, HurtDuration};
use crate::world::LevelEntity;

/// Spawn one enemy of `enemy_type` at `position`.
pub fn spawn_enemy(
    commands: &mut Commands,
    enemy_type: &str,
    definition: &EnemyDefinition,
    position: Vec2,
    rng: &mut impl Rng,
) -> Entity {
    let stats = definition.to_stats();
    let brain = EnemyBrain::new(position, &stats, rng);
    let (half_x, half_y) = definition.half_size;
    let (r, g, b) = definition.color;

    commands
        .spawn((
            (
                Enemy,
                EnemyType(enemy_type.to_string()),
                Name::new(definition.name.clone()),
                Faction::Enemy,
                LevelEntity,
            ),
            (
                Health::new(definition.max_health),
                Condition::default(),
                HurtDuration(definition.hurt_duration),
                CorpseDelay(definition.corpse_delay),
                definition.kind,
                stats,
                brain,
            ),
            Sprite {
                color: Color::srgb(r, g, b),
                custom_size: Some(Vec2::new(half_x * 2.0, half_y * 2.0)),
                ..default()
            },
            Transform::from_translation(position.extend(9.0)),
            (
                RigidBody::Dynamic,
                Collider::cuboid(half_x, half_y),
                LockedAxes::ROTATION_LOCKED,
                Velocity::zero(),
                GravityScale(3.0),
                Friction::coefficient(0.0),
            ),
        ))
        .id()
}
