//! Weapon loadout components and the equip trait.

use bevy::prelude::*;
use std::sync::Arc;

use super::data::{WeaponData, WeaponType};

/// Actor stats used when no weapon is equipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseCombatStats {
    pub attack_power: i32,
    pub attack_range: f32,
    pub attack_cooldown: f32,
}

impl Default for BaseCombatStats {
    fn default() -> Self {
        Self {
            attack_power: 10,
            attack_range: 1.2,
            attack_cooldown: 0.6,
        }
    }
}

/// Base stats plus the currently equipped weapon.
#[derive(Component, Debug, Clone, Default)]
pub struct WeaponLoadout {
    base: BaseCombatStats,
    equipped: Option<Arc<WeaponData>>,
}

impl WeaponLoadout {
    pub fn new(base: BaseCombatStats) -> Self {
        Self {
            base,
            equipped: None,
        }
    }

    pub fn base(&self) -> BaseCombatStats {
        self.base
    }

    pub fn equipped(&self) -> Option<&Arc<WeaponData>> {
        self.equipped.as_ref()
    }

    pub fn weapon_type(&self) -> WeaponType {
        self.equipped
            .as_ref()
            .map_or(WeaponType::Melee, |w| w.weapon_type)
    }

    /// Base power plus the weapon's bonus.
    pub fn current_attack_power(&self) -> i32 {
        self.base.attack_power + self.equipped.as_ref().map_or(0, |w| w.attack_power)
    }

    /// Weapon range if it sets one, otherwise base range.
    pub fn current_attack_range(&self) -> f32 {
        match &self.equipped {
            Some(w) if w.attack_range > 0.0 => w.attack_range,
            _ => self.base.attack_range,
        }
    }

    /// Weapon cooldown if it sets one, otherwise base cooldown.
    pub fn current_attack_cooldown(&self) -> f32 {
        match &self.equipped {
            Some(w) if w.attack_cooldown > 0.0 => w.attack_cooldown,
            _ => self.base.attack_cooldown,
        }
    }
}

/// Anything that can hold a weapon.
pub trait WeaponEquippable {
    fn can_equip(&self, weapon: Option<&WeaponData>) -> bool {
        weapon.is_some()
    }

    /// Replace the active weapon. Returns the previous one.
    fn equip_weapon(&mut self, weapon: Arc<WeaponData>) -> Option<Arc<WeaponData>>;

    /// Drop the active weapon, reverting to base stats.
    fn unequip_weapon(&mut self) -> Option<Arc<WeaponData>>;
}

impl WeaponEquippable for WeaponLoadout {
    fn equip_weapon(&mut self, weapon: Arc<WeaponData>) -> Option<Arc<WeaponData>> {
        self.equipped.replace(weapon)
    }

    fn unequip_weapon(&mut self) -> Option<Arc<WeaponData>> {
        self.equipped.take()
    }
}

/// Which animation set an actor currently plays.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct AnimationBinding {
    pub base: String,
    pub active: String,
}

impl AnimationBinding {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            active: base.clone(),
            base,
        }
    }

    /// Bind to the weapon's set, or back to base when it has none.
    pub fn bind(&mut self, weapon: Option<&WeaponData>) {
        self.active = weapon
            .and_then(|w| w.animation_set.clone())
            .unwrap_or_else(|| self.base.clone());
    }
}
