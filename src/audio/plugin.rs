//! Sound effects plugin. Expects `bevy_kira_audio::AudioPlugin` to be added.

use bevy::prelude::*;

use super::library::{load_sfx_library, AudioConfig};
use super::systems::*;
use crate::core::GameState;

pub struct SfxPlugin;

impl Plugin for SfxPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AudioConfig>()
            .init_resource::<FootstepLoop>()
            .add_systems(Startup, load_sfx_library)
            .add_systems(Update, (cue_gameplay_sounds, play_sfx).chain())
            .add_systems(
                Update,
                update_footsteps.run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnExit(GameState::Playing), silence_footsteps);
    }
}
