//! Global events used for cross-system communication.
//!
//! The combat resolver sends `DamageEvent`s and the damage system applies them,
//! so attackers never touch their target's components directly.

use bevy::prelude::*;

/// Sent when an entity should take damage.
///
/// Amounts of zero or less are dropped by the damage system.
#[derive(Event, Debug, Clone, Copy)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage
    pub source: Entity,
    /// Damage amount
    pub amount: i32,
}

/// Sent when an entity's health reaches zero.
///
/// Emitted exactly once per entity; dead actors ignore further damage.
#[derive(Event, Debug, Clone, Copy)]
pub struct DeathEvent {
    /// Entity that died
    pub entity: Entity,
    /// Entity that dealt the killing blow (if any)
    pub killed_by: Option<Entity>,
}

/// Sent to restore health and/or mana on an entity.
#[derive(Event, Debug, Clone, Copy)]
pub struct RestoreEvent {
    pub target: Entity,
    pub health: i32,
    pub mana: i32,
}

/// Sent when the player touches a pickup.
#[derive(Event, Debug, Clone)]
pub struct ItemPickupEvent {
    /// The pickup entity being collected
    pub pickup: Entity,
    /// The player entity
    pub player: Entity,
}

/// Named sound cues played by the audio plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
pub enum SfxCue {
    Jump,
    Attack,
    Shoot,
    Hurt,
    Death,
    Pickup,
    Equip,
    Consume,
}

/// Request a one-shot sound effect.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum SfxEvent {
    /// A cue from the configured cue table
    Cue(SfxCue),
    /// A clip path under `assets/`, e.g. a weapon's own swing sound
    Clip(String),
}
