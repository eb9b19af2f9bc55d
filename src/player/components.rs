//! Player-related components.

use bevy::prelude::*;
use serde::Deserialize;

use crate::weapons::BaseCombatStats;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Player tuning, loaded from the `player` section of the game config.
#[derive(Resource, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Horizontal speed in units per second
    pub move_speed: f32,
    /// Vertical velocity set by a jump
    pub jump_force: f32,
    /// Mid-air jumps available after leaving the ground
    pub extra_jumps: u32,
    /// Multiplier on physics gravity
    pub gravity_scale: f32,
    /// Seconds spent in Hurt after a hit
    pub hurt_duration: f32,
    /// Ray length below the feet that still counts as grounded
    pub ground_check_distance: f32,
    pub max_health: i32,
    pub max_mana: i32,
    pub base_attack_power: i32,
    pub base_attack_range: f32,
    pub base_attack_cooldown: f32,
    /// Horizontal distance from the body centre to the attack point
    pub attack_point_offset: f32,
    /// Seconds between death and game over
    pub death_delay: f32,
    pub collider_half_height: f32,
    pub collider_half_width: f32,
    /// Animation set used with no weapon equipped
    pub base_animation_set: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 6.0,
            jump_force: 12.0,
            extra_jumps: 1,
            gravity_scale: 3.0,
            hurt_duration: 0.35,
            ground_check_distance: 0.1,
            max_health: 100,
            max_mana: 50,
            base_attack_power: 10,
            base_attack_range: 1.2,
            base_attack_cooldown: 0.6,
            attack_point_offset: 0.6,
            death_delay: 1.5,
            collider_half_height: 0.5,
            collider_half_width: 0.3,
            base_animation_set: "unarmed".to_string(),
        }
    }
}

impl PlayerConfig {
    pub fn base_combat_stats(&self) -> BaseCombatStats {
        BaseCombatStats {
            attack_power: self.base_attack_power,
            attack_range: self.base_attack_range,
            attack_cooldown: self.base_attack_cooldown,
        }
    }
}

/// Player locomotion/combat state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Move,
    Jump,
    DoubleJump,
    Fall,
    Hurt,
    Dead,
}

/// Countdown until the player may attack again.
#[derive(Component, Debug, Default)]
pub struct AttackCooldown {
    pub remaining: f32,
}

impl AttackCooldown {
    pub fn tick(&mut self, delta: f32) {
        self.remaining = (self.remaining - delta).max(0.0);
    }

    pub fn ready(&self) -> bool {
        self.remaining <= 0.0
    }
}

/// Countdown between the player's death and game over.
#[derive(Component)]
pub struct PlayerDeathTimer(pub Timer);
