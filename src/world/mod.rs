//! World module - level data, progression and level entities.

mod data;
mod error;
mod plugin;
mod progress;
mod spawning;

pub use data::{
    load_level_definitions, BoundsDef, EnemyPlacement, LevelDefinition, LevelRegistry,
    PickupPlacement, PlatformDef, LEVELS_DIR,
};
pub use error::LevelError;
pub use plugin::{cleanup_level, detect_level_exit, setup_level, WorldPlugin};
pub use progress::LevelProgress;
pub use spawning::{build_level, spawn_exit, spawn_platform, LevelEntity, LevelExit};
