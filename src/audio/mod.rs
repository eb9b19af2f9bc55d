//! Audio module - one-shot effects and the footstep loop via bevy_kira_audio.

mod library;
mod plugin;
mod systems;

pub use library::{load_sfx_library, AudioConfig, SfxLibrary};
pub use plugin::SfxPlugin;
pub use systems::{cue_gameplay_sounds, play_sfx, update_footsteps, FootstepLoop};
