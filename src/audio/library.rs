//! Sound effect configuration and loaded handles.

use bevy::prelude::*;
use bevy_kira_audio::AudioSource;
use serde::Deserialize;
use std::collections::HashMap;

use crate::core::SfxCue;

/// Audio tuning, loaded from the `audio` section of the game config.
#[derive(Resource, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Linear volume for one-shot effects
    pub sfx_volume: f64,
    /// Linear volume for the footstep loop
    pub footstep_volume: f64,
    /// Clip path per cue, relative to `assets/`
    pub cues: HashMap<SfxCue, String>,
    /// Looping clip played while the player runs on the ground
    pub footstep_loop: Option<String>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        let cues = [
            (SfxCue::Jump, "audio/sfx/jump.ogg"),
            (SfxCue::Attack, "audio/sfx/swing.ogg"),
            (SfxCue::Shoot, "audio/sfx/shoot.ogg"),
            (SfxCue::Hurt, "audio/sfx/hurt.ogg"),
            (SfxCue::Death, "audio/sfx/death.ogg"),
            (SfxCue::Pickup, "audio/sfx/pickup.ogg"),
            (SfxCue::Equip, "audio/sfx/equip.ogg"),
            (SfxCue::Consume, "audio/sfx/drink.ogg"),
        ]
        .into_iter()
        .map(|(cue, path)| (cue, path.to_string()))
        .collect();

        Self {
            sfx_volume: 0.6,
            footstep_volume: 0.4,
            cues,
            footstep_loop: Some("audio/sfx/footsteps.ogg".into()),
        }
    }
}

/// Loaded audio handles. Ad-hoc clips are cached on first use.
#[derive(Resource, Default)]
pub struct SfxLibrary {
    cues: HashMap<SfxCue, Handle<AudioSource>>,
    clips: HashMap<String, Handle<AudioSource>>,
    footsteps: Option<Handle<AudioSource>>,
}

impl SfxLibrary {
    pub fn cue(&self, cue: SfxCue) -> Option<Handle<AudioSource>> {
        self.cues.get(&cue).cloned()
    }

    pub fn footsteps(&self) -> Option<Handle<AudioSource>> {
        self.footsteps.clone()
    }

    /// Handle for an arbitrary clip path, loading it the first time.
    pub fn clip(&mut self, path: &str, asset_server: &AssetServer) -> Handle<AudioSource> {
        self.clips
            .entry(path.to_string())
            .or_insert_with(|| asset_server.load(path.to_string()))
            .clone()
    }
}

/// Start loading every configured cue.
pub fn load_sfx_library(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<AudioConfig>,
) {
    let cues: HashMap<SfxCue, Handle<AudioSource>> = config
        .cues
        .iter()
        .map(|(cue, path)| (*cue, asset_server.load(path.clone())))
        .collect();
    let footsteps = config
        .footstep_loop
        .as_ref()
        .map(|path| asset_server.load(path.clone()));

    info!("Loading {} sound cues", cues.len());
    commands.insert_resource(SfxLibrary {
        cues,
        clips: HashMap::new(),
        footsteps,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_ron;

    #[test]
    fn every_cue_has_a_default_clip() {
        let config = AudioConfig::default();
        for cue in [
            SfxCue::Jump,
            SfxCue::Attack,
            SfxCue::Shoot,
            SfxCue::Hurt,
            SfxCue::Death,
            SfxCue::Pickup,
            SfxCue::Equip,
            SfxCue::Consume,
        ] {
            assert!(config.cues.contains_key(&cue), "{cue:?} has no clip");
        }
    }

    #[test]
    fn overriding_cues_replaces_the_table() {
        let config: AudioConfig =
            parse_ron("(sfx_volume: 0.2, cues: { Jump: \"hop.wav\" })", "inline").unwrap();
        assert_eq!(config.sfx_volume, 0.2);
        assert_eq!(config.cues.len(), 1);
        assert_eq!(config.cues[&SfxCue::Jump], "hop.wav");
        assert!(config.footstep_loop.is_some());
    }
}
