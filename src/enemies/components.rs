//! Enemy-related components.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

use crate::combat::CircleZone;

/// Marker component for all enemies.
#[derive(Component)]
pub struct Enemy;

/// Enemy type identifier (matches RON file name).
#[derive(Component, Clone, Debug)]
pub struct EnemyType(pub String);

/// How an enemy attacks once its target is in the attack zone.
#[derive(Component, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum EnemyKind {
    /// Direct damage to the target if it is still in the attack zone.
    Melee { damage: i32 },
    /// Fires a projectile in the facing direction.
    Ranged { damage: i32, projectile_speed: f32 },
}

impl Default for EnemyKind {
    fn default() -> Self {
        EnemyKind::Melee { damage: 10 }
    }
}

/// AI state of an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyState {
    #[default]
    Idle,
    Patrol,
    Chase,
    Attack,
    Hurt,
    Dead,
}

/// Enemy movement and combat stats loaded from RON data files.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct EnemyStats {
    pub move_speed: f32,
    pub chase_speed: f32,
    pub patrol_radius: f32,
    pub patrol_wait_time: f32,
    pub patrol_arrive_distance: f32,
    pub attack_cooldown: f32,
    pub detect_zone: CircleZone,
    pub attack_zone: CircleZone,
}

impl Default for EnemyStats {
    fn default() -> Self {
        Self {
            move_speed: 2.0,
            chase_speed: 3.0,
            patrol_radius: 3.0,
            patrol_wait_time: 1.0,
            patrol_arrive_distance: 0.2,
            attack_cooldown: 1.2,
            detect_zone: CircleZone::new(Vec2::ZERO, crate::combat::DEFAULT_DETECT_RADIUS),
            attack_zone: CircleZone::new(Vec2::ZERO, crate::combat::DEFAULT_ATTACK_RADIUS),
        }
    }
}

/// Seconds an enemy corpse stays before despawning.
#[derive(Component, Clone, Copy, Debug)]
pub struct CorpseDelay(pub f32);

/// Random source for patrol point selection.
#[derive(Resource)]
pub struct EnemyRng(pub StdRng);

impl Default for EnemyRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}
