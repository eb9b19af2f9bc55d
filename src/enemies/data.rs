//! Enemy data loading from RON files.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::components::{EnemyKind, EnemyStats};
use crate::combat::{CircleZone, DEFAULT_ATTACK_RADIUS, DEFAULT_DETECT_RADIUS};
use crate::data::load_ron_dir;

/// Directory scanned for enemy definitions.
pub const ENEMIES_DIR: &str = "assets/data/enemies";

/// Enemy definition loaded from RON file.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct EnemyDefinition {
    pub name: String,
    pub kind: EnemyKind,
    pub max_health: i32,
    pub move_speed: f32,
    pub chase_speed: f32,
    pub patrol_radius: f32,
    pub patrol_wait_time: f32,
    pub patrol_arrive_distance: f32,
    /// Zero or less uses the fallback detect radius.
    pub detect_radius: f32,
    pub detect_offset: (f32, f32),
    /// Zero or less uses the fallback attack radius.
    pub attack_radius: f32,
    pub attack_offset: (f32, f32),
    pub attack_cooldown: f32,
    pub hurt_duration: f32,
    /// Seconds the corpse stays before despawning.
    pub corpse_delay: f32,
    /// Body half extents (x, y).
    pub half_size: (f32, f32),
    pub color: (f32, f32, f32),
}

impl Default for EnemyDefinition {
    fn default() -> Self {
        Self {
            name: "Enemy".to_string(),
            kind: EnemyKind::default(),
            max_health: 30,
            move_speed: 2.0,
            chase_speed: 3.0,
            patrol_radius: 3.0,
            patrol_wait_time: 1.0,
            patrol_arrive_distance: 0.2,
            detect_radius: 0.0,
            detect_offset: (0.0, 0.0),
            attack_radius: 0.0,
            attack_offset: (0.0, 0.0),
            attack_cooldown: 1.2,
            hurt_duration: 0.35,
            corpse_delay: 1.0,
            half_size: (0.3, 0.45),
            color: (0.7, 0.25, 0.25),
        }
    }
}

impl EnemyDefinition {
    /// Convert to EnemyStats component.
    pub fn to_stats(&self) -> EnemyStats {
        EnemyStats {
            move_speed: self.move_speed,
            chase_speed: self.chase_speed,
            patrol_radius: self.patrol_radius.max(0.0),
            patrol_wait_time: self.patrol_wait_time,
            patrol_arrive_distance: self.patrol_arrive_distance,
            attack_cooldown: self.attack_cooldown,
            detect_zone: CircleZone::new(self.detect_offset.into(), self.detect_radius)
                .or_radius(DEFAULT_DETECT_RADIUS),
            attack_zone: CircleZone::new(self.attack_offset.into(), self.attack_radius)
                .or_radius(DEFAULT_ATTACK_RADIUS),
        }
    }
}

/// Resource holding all loaded enemy definitions.
#[derive(Resource, Default)]
pub struct EnemyRegistry {
    pub definitions: HashMap<String, EnemyDefinition>,
}

impl EnemyRegistry {
    /// Get an enemy definition by type name.
    pub fn get(&self, enemy_type: &str) -> Option<&EnemyDefinition> {
        self.definitions.get(enemy_type)
    }
}

/// Load all enemy definitions from the assets/data/enemies/ directory.
pub fn load_enemy_definitions(mut registry: ResMut<EnemyRegistry>) {
    let (definitions, failures) = match load_ron_dir::<EnemyDefinition>(Path::new(ENEMIES_DIR)) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("{}", e);
            return;
        }
    };

    for failure in failures {
        error!("Failed to load enemy definition: {}", failure);
    }

    for (enemy_type, definition) in definitions {
        info!("Loaded enemy definition: {} ({})", definition.name, enemy_type);
        registry.definitions.insert(enemy_type, definition);
    }

    info!("Loaded {} enemy definitions", registry.definitions.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_ron;

    #[test]
    fn missing_zone_radii_use_fallbacks() {
        let def: EnemyDefinition = parse_ron(
            "(name: \"Archer\", kind: Ranged(damage: 8, projectile_speed: 8.0))",
            "inline",
        )
        .unwrap();
        let stats = def.to_stats();
        assert_eq!(stats.detect_zone.radius, DEFAULT_DETECT_RADIUS);
        assert_eq!(stats.attack_zone.radius, DEFAULT_ATTACK_RADIUS);
        assert_eq!(
            def.kind,
            EnemyKind::Ranged {
                damage: 8,
                projectile_speed: 8.0
            }
        );
        assert_eq!(def.max_health, 30);
    }

    #[test]
    fn configured_zone_keeps_offset() {
        let def: EnemyDefinition =
            parse_ron("(attack_radius: 1.5, attack_offset: (0.4, 0.0))", "inline").unwrap();
        let stats = def.to_stats();
        assert_eq!(stats.attack_zone.radius, 1.5);
        assert_eq!(stats.attack_zone.offset, Vec2::new(0.4, 0.0));
    }
}
