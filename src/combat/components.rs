//! Combat-related components.

use bevy::prelude::*;

// Re-export from core to avoid duplication
pub use crate::core::{DamageEvent, DeathEvent, RestoreEvent};

/// Component for entities that can take damage.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Health {
    current: i32,
    maximum: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        let max = max.max(1);
        Self {
            current: max,
            maximum: max,
        }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Subtract health, clamped at zero. Returns the amount actually removed.
    fn reduce(&mut self, amount: i32) -> i32 {
        let actual = amount.clamp(0, self.current);
        self.current -= actual;
        actual
    }

    /// Add health, clamped at the maximum. Returns the amount actually added.
    fn restore(&mut self, amount: i32) -> i32 {
        let actual = amount.clamp(0, self.maximum - self.current);
        self.current += actual;
        actual
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }

    pub fn percentage(&self) -> f32 {
        self.current as f32 / self.maximum as f32
    }
}

/// Mana pool spent by abilities and refilled by consumables.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Mana {
    current: i32,
    maximum: i32,
}

impl Mana {
    pub fn new(max: i32) -> Self {
        let max = max.max(0);
        Self {
            current: max,
            maximum: max,
        }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Spend mana. Fails without change when the pool is short or the actor is dead.
    pub fn use_mana(&mut self, amount: i32, condition: Condition) -> bool {
        if amount <= 0 || condition.is_dead() || self.current < amount {
            return false;
        }
        self.current -= amount;
        true
    }

    /// Refill mana up to the maximum. Returns the amount actually added.
    pub fn restore(&mut self, amount: i32, condition: Condition) -> i32 {
        if amount <= 0 || condition.is_dead() {
            return 0;
        }
        let actual = amount.min(self.maximum - self.current);
        self.current += actual;
        actual
    }

    pub fn percentage(&self) -> f32 {
        if self.maximum <= 0 {
            return 0.0;
        }
        self.current as f32 / self.maximum as f32
    }
}

/// Shared damage condition of every actor.
///
/// Actor state machines read this first: `Dead` short-circuits everything and
/// `Hurt` blocks movement and attacks until its timer runs out.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub enum Condition {
    #[default]
    Normal,
    Hurt {
        remaining: f32,
    },
    Dead,
}

/// What a single hit did to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Non-positive damage or a dead target.
    Ignored,
    /// Damage applied while already hurt; the hurt timer keeps running.
    Damaged,
    /// Damage applied and the target entered `Hurt`.
    Staggered,
    /// Health reached zero.
    Killed,
}

impl Condition {
    pub fn is_dead(&self) -> bool {
        matches!(self, Condition::Dead)
    }

    pub fn is_hurt(&self) -> bool {
        matches!(self, Condition::Hurt { .. })
    }

    /// Apply a hit to `health`.
    pub fn take_damage(&mut self, health: &mut Health, amount: i32, hurt_duration: f32) -> HitOutcome {
        if amount <= 0 || self.is_dead() {
            return HitOutcome::Ignored;
        }

        health.reduce(amount);
        if health.is_depleted() {
            *self = Condition::Dead;
            return HitOutcome::Killed;
        }

        if self.is_hurt() {
            return HitOutcome::Damaged;
        }

        *self = Condition::Hurt {
            remaining: hurt_duration,
        };
        HitOutcome::Staggered
    }

    /// Heal `health`. Dead actors stay dead.
    pub fn heal(&self, health: &mut Health, amount: i32) -> i32 {
        if amount <= 0 || self.is_dead() {
            return 0;
        }
        health.restore(amount)
    }

    /// Count down the hurt timer. Returns true on the tick it elapses.
    pub fn tick(&mut self, delta: f32) -> bool {
        let Condition::Hurt { remaining } = self else {
            return false;
        };
        *remaining -= delta;
        if *remaining <= 0.0 {
            *self = Condition::Normal;
            return true;
        }
        false
    }
}

/// How long this actor stays in `Hurt` after a hit.
#[derive(Component, Debug, Clone, Copy)]
pub struct HurtDuration(pub f32);

impl Default for HurtDuration {
    fn default() -> Self {
        Self(0.35)
    }
}

/// Which side an actor fights on. Used as the target filter for attacks.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Faction {
    Player,
    Enemy,
}

/// Timer for the pause between death and despawn / game over.
#[derive(Component)]
pub struct DeathTimer(pub Timer);

impl DeathTimer {
    pub fn from_seconds(seconds: f32) -> Self {
        Self(Timer::from_seconds(seconds, TimerMode::Once))
    }
}

impl Default for DeathTimer {
    fn default() -> Self {
        Self::from_seconds(1.5)
    }
}

/// Default projectile lifetime in seconds.
pub const PROJECTILE_LIFETIME: f32 = 3.0;

/// A flying attack that damages the first opposing actor it touches.
#[derive(Component, Debug)]
pub struct Projectile {
    pub direction: Vec2,
    pub speed: f32,
    pub damage: i32,
    pub owner: Entity,
    /// Only actors of this faction take damage.
    pub target: Faction,
    /// Zero disables the distance check.
    pub max_distance: f32,
    pub origin: Vec2,
    pub radius: f32,
    pub lifetime: Timer,
}

impl Projectile {
    pub fn new(
        origin: Vec2,
        direction: Vec2,
        speed: f32,
        damage: i32,
        owner: Entity,
        target: Faction,
        max_distance: f32,
    ) -> Self {
        let direction = if direction.length_squared() > 0.0 {
            direction.normalize()
        } else {
            Vec2::X
        };
        Self {
            direction,
            speed: speed.max(0.0),
            damage,
            owner,
            target,
            max_distance: max_distance.max(0.0),
            origin,
            radius: 0.15,
            lifetime: Timer::from_seconds(PROJECTILE_LIFETIME, TimerMode::Once),
        }
    }

    pub fn with_lifetime(mut self, seconds: f32) -> Self {
        self.lifetime = Timer::from_seconds(seconds.max(0.0), TimerMode::Once);
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius.max(0.01);
        self
    }

    pub fn velocity(&self) -> Vec2 {
        self.direction * self.speed
    }

    /// True once the projectile has flown at least `max_distance`.
    pub fn out_of_range(&self, position: Vec2) -> bool {
        self.max_distance > 0.0 && self.origin.distance(position) >= self.max_distance
    }
}
