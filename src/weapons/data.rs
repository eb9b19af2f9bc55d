//! Weapon data loading from RON files.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::data::{load_ron_dir, DataLoadError};

/// Directory scanned for weapon definitions.
pub const WEAPONS_DIR: &str = "assets/data/weapons";

/// How a weapon delivers its damage.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WeaponType {
    #[default]
    Melee,
    Ranged,
}

fn default_projectile_speed() -> f32 {
    10.0
}

fn default_projectile_radius() -> f32 {
    0.15
}

fn default_projectile_lifetime() -> f32 {
    crate::combat::PROJECTILE_LIFETIME
}

/// Projectile settings for ranged weapons.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ProjectileDef {
    #[serde(default = "default_projectile_speed")]
    pub speed: f32,
    #[serde(default = "default_projectile_radius")]
    pub radius: f32,
    #[serde(default = "default_projectile_lifetime")]
    pub lifetime: f32,
}

impl Default for ProjectileDef {
    fn default() -> Self {
        Self {
            speed: default_projectile_speed(),
            radius: default_projectile_radius(),
            lifetime: default_projectile_lifetime(),
        }
    }
}

/// Immutable weapon stat bundle. Equip slots hold `Arc`s to these, never copies.
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct WeaponData {
    /// Registry key, taken from the file stem.
    #[serde(skip)]
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub weapon_type: WeaponType,
    /// Added to the wielder's base power.
    #[serde(default)]
    pub attack_power: i32,
    /// Replaces the base range when positive.
    #[serde(default)]
    pub attack_range: f32,
    /// Replaces the base cooldown when positive.
    #[serde(default)]
    pub attack_cooldown: f32,
    #[serde(default)]
    pub animation_set: Option<String>,
    #[serde(default)]
    pub attack_sfx: Option<String>,
    #[serde(default)]
    pub projectile: Option<ProjectileDef>,
}

impl WeaponData {
    /// Projectile settings, with defaults for ranged weapons that omit them.
    pub fn projectile_or_default(&self) -> ProjectileDef {
        self.projectile.clone().unwrap_or_default()
    }
}

/// Resource holding all loaded weapon definitions.
#[derive(Resource, Default, Debug)]
pub struct WeaponRegistry {
    weapons: HashMap<String, Arc<WeaponData>>,
}

impl WeaponRegistry {
    pub fn from_definitions(definitions: impl IntoIterator<Item = (String, WeaponData)>) -> Self {
        let weapons = definitions
            .into_iter()
            .map(|(id, mut data)| {
                data.id = id.clone();
                (id, Arc::new(data))
            })
            .collect();
        Self { weapons }
    }

    pub fn get(&self, id: &str) -> Option<Arc<WeaponData>> {
        self.weapons.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    pub fn load(dir: &Path) -> Result<Self, DataLoadError> {
        let (definitions, failures) = load_ron_dir::<WeaponData>(dir)?;
        for failure in failures {
            error!("Failed to load weapon definition: {}", failure);
        }
        Ok(Self::from_definitions(definitions))
    }
}

/// Load all weapon definitions from the assets/data/weapons/ directory.
pub fn load_weapon_definitions(mut commands: Commands) {
    let registry = match WeaponRegistry::load(Path::new(WEAPONS_DIR)) {
        Ok(registry) => registry,
        Err(e) => {
            warn!("{}. No weapons available.", e);
            WeaponRegistry::default()
        }
    };
    info!("Loaded {} weapon definitions", registry.len());
    commands.insert_resource(registry);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_ron;

    #[test]
    fn ranged_weapon_projectile_defaults() {
        let bow: WeaponData = parse_ron(
            "(display_name: \"Short Bow\", weapon_type: Ranged, attack_power: 4, attack_range: 6.0)",
            "inline",
        )
        .unwrap();
        assert_eq!(bow.weapon_type, WeaponType::Ranged);
        assert_eq!(bow.attack_cooldown, 0.0);
        assert_eq!(bow.projectile_or_default(), ProjectileDef::default());
    }

    #[test]
    fn registry_keys_by_stem_and_shares_data() {
        let registry = WeaponRegistry::from_definitions([(
            "iron_sword".to_string(),
            WeaponData {
                display_name: "Iron Sword".into(),
                attack_power: 8,
                ..default()
            },
        )]);
        let a = registry.get("iron_sword").unwrap();
        let b = registry.get("iron_sword").unwrap();
        assert_eq!(a.id, "iron_sword");
        assert!(Arc::ptr_eq(&a, &b));
        assert!(registry.get("missing").is_none());
    }
}
