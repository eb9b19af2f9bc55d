//! Level definitions and the level registry.

use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;

use crate::camera::CameraBounds;
use crate::data::load_ron_dir;

/// Directory holding one RON file per level. File names set the play order.
pub const LEVELS_DIR: &str = "assets/data/levels";

/// An axis-aligned solid block, given by centre and size.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct PlatformDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// An enemy placement, by enemy type id.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EnemyPlacement {
    pub kind: String,
    pub x: f32,
    pub y: f32,
}

/// An item lying in the level.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PickupPlacement {
    pub item: String,
    #[serde(default = "default_amount")]
    pub amount: i32,
    pub x: f32,
    pub y: f32,
}

fn default_amount() -> i32 {
    1
}

/// Camera limits in world units.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct BoundsDef {
    pub min: (f32, f32),
    pub max: (f32, f32),
}

impl From<BoundsDef> for CameraBounds {
    fn from(bounds: BoundsDef) -> Self {
        Self {
            min: bounds.min.into(),
            max: bounds.max.into(),
        }
    }
}

/// A complete level as stored on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelDefinition {
    pub name: String,
    pub player_spawn: (f32, f32),
    #[serde(default)]
    pub platforms: Vec<PlatformDef>,
    #[serde(default)]
    pub enemies: Vec<EnemyPlacement>,
    #[serde(default)]
    pub pickups: Vec<PickupPlacement>,
    /// Centre of the exit zone
    pub exit: (f32, f32),
    #[serde(default)]
    pub bounds: Option<BoundsDef>,
    #[serde(default = "default_platform_color")]
    pub platform_color: (f32, f32, f32),
}

fn default_platform_color() -> (f32, f32, f32) {
    (0.28, 0.24, 0.2)
}

/// Loaded levels, in play order. Level `n` is the n-th entry.
#[derive(Resource, Default, Debug)]
pub struct LevelRegistry {
    levels: Vec<(String, LevelDefinition)>,
}

impl LevelRegistry {
    pub fn from_definitions(levels: Vec<(String, LevelDefinition)>) -> Self {
        Self { levels }
    }

    /// Level by 1-based number.
    pub fn get(&self, number: u32) -> Option<&LevelDefinition> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.levels.get(index).map(|(_, level)| level)
    }

    pub fn count(&self) -> u32 {
        u32::try_from(self.levels.len()).unwrap_or(u32::MAX)
    }
}

/// Load all level definitions from assets/data/levels/.
pub fn load_level_definitions(mut commands: Commands) {
    let registry = match load_ron_dir::<LevelDefinition>(Path::new(LEVELS_DIR)) {
        Ok((levels, failures)) => {
            for failure in failures {
                error!("Failed to load level: {}", failure);
            }
            LevelRegistry::from_definitions(levels)
        }
        Err(e) => {
            warn!("{}. No levels available.", e);
            LevelRegistry::default()
        }
    };

    info!("Loaded {} level(s)", registry.count());
    commands.insert_resource(registry);
}
