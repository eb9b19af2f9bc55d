//! Game configuration loaded from an external RON file.
//!
//! Allows tweaking gameplay tuning without recompilation. Every section falls
//! back to its defaults when omitted.

use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;

use crate::audio::AudioConfig;
use crate::camera::CameraConfig;
use crate::data::{load_ron_file, DataLoadError};
use crate::inventory::InventoryConfig;
use crate::player::PlayerConfig;

/// Path of the tuning file, relative to the working directory.
pub const GAME_CONFIG_PATH: &str = "assets/data/config/game.ron";

/// Level progression tuning.
#[derive(Resource, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Level number loaded by "New Game".
    pub first_level: u32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self { first_level: 1 }
    }
}

/// Top-level configuration file layout.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub camera: CameraConfig,
    pub inventory: InventoryConfig,
    pub audio: AudioConfig,
    pub levels: LevelConfig,
}

impl GameConfig {
    /// Load config from the RON file, falling back to defaults.
    pub fn load() -> Self {
        match load_ron_file::<GameConfig>(Path::new(GAME_CONFIG_PATH)) {
            Ok(config) => {
                info!("Loaded game config from {}", GAME_CONFIG_PATH);
                config
            }
            Err(e @ DataLoadError::FileNotFound(_)) => {
                warn!("{}. Using default game config.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using default game config.", e);
                Self::default()
            }
        }
    }

    /// Insert each section as its own resource.
    pub fn insert_into(self, commands: &mut Commands) {
        commands.insert_resource(self.player);
        commands.insert_resource(self.camera);
        commands.insert_resource(self.inventory);
        commands.insert_resource(self.audio);
        commands.insert_resource(self.levels);
    }
}

/// System to load game config at startup.
pub fn load_game_config(mut commands: Commands) {
    GameConfig::load().insert_into(&mut commands);
}
