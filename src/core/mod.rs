//! Core game module - states, events, config and fundamental systems.
//!
//! This module provides the foundation that all other game systems build upon.

mod config;
mod events;
mod plugin;
mod states;
mod tween;

pub use config::{load_game_config, GameConfig, LevelConfig, GAME_CONFIG_PATH};
pub use events::*;
pub use plugin::CorePlugin;
pub use states::*;
pub use tween::*;
