//! Sound effect playback driven by gameplay events.

use bevy::prelude::*;
use bevy_kira_audio::prelude::*;

use super::library::{AudioConfig, SfxLibrary};
use crate::combat::{HitEvent, HitOutcome};
use crate::core::{DeathEvent, PlayState, SfxCue, SfxEvent};
use crate::player::{Player, PlayerMotor};
use crate::weapons::WeaponChanged;

/// Handle of the running footstep loop, if any.
#[derive(Resource, Default)]
pub struct FootstepLoop(Option<Handle<AudioInstance>>);

/// Translate combat and equip events into sound cues.
pub fn cue_gameplay_sounds(
    mut hits: EventReader<HitEvent>,
    mut deaths: EventReader<DeathEvent>,
    mut weapon_changes: EventReader<WeaponChanged>,
    mut sfx: EventWriter<SfxEvent>,
) {
    for hit in hits.read() {
        if matches!(hit.outcome, HitOutcome::Damaged | HitOutcome::Staggered) {
            sfx.send(SfxEvent::Cue(SfxCue::Hurt));
        }
    }
    for _ in deaths.read() {
        sfx.send(SfxEvent::Cue(SfxCue::Death));
    }
    for change in weapon_changes.read() {
        if change.weapon.is_some() {
            sfx.send(SfxEvent::Cue(SfxCue::Equip));
        }
    }
}

/// Play queued one-shot effects.
pub fn play_sfx(
    mut events: EventReader<SfxEvent>,
    audio: Res<Audio>,
    asset_server: Res<AssetServer>,
    config: Res<AudioConfig>,
    mut library: ResMut<SfxLibrary>,
) {
    for event in events.read() {
        let handle = match event {
            SfxEvent::Cue(cue) => {
                let Some(handle) = library.cue(*cue) else {
                    debug!("No clip configured for {:?}", cue);
                    continue;
                };
                handle
            }
            SfxEvent::Clip(path) => library.clip(path, &asset_server),
        };
        audio.play(handle).with_volume(config.sfx_volume);
    }
}

/// Run the footstep loop while the player moves on the ground.
pub fn update_footsteps(
    audio: Res<Audio>,
    config: Res<AudioConfig>,
    library: Res<SfxLibrary>,
    play_state: Option<Res<State<PlayState>>>,
    players: Query<&PlayerMotor, With<Player>>,
    mut footsteps: ResMut<FootstepLoop>,
    mut instances: ResMut<Assets<AudioInstance>>,
) {
    let exploring = play_state.is_some_and(|s| *s.get() == PlayState::Exploring);
    let moving = exploring && players.iter().any(PlayerMotor::moving_on_ground);

    match (&footsteps.0, moving) {
        (None, true) => {
            let Some(clip) = library.footsteps() else {
                return;
            };
            let handle = audio
                .play(clip)
                .looped()
                .with_volume(config.footstep_volume)
                .handle();
            footsteps.0 = Some(handle);
        }
        (Some(_), false) => stop_footsteps(&mut footsteps, &mut instances),
        _ => {}
    }
}

/// Silence the footstep loop when the level ends.
pub fn silence_footsteps(
    mut footsteps: ResMut<FootstepLoop>,
    mut instances: ResMut<Assets<AudioInstance>>,
) {
    stop_footsteps(&mut footsteps, &mut instances);
}

fn stop_footsteps(footsteps: &mut FootstepLoop, instances: &mut Assets<AudioInstance>) {
    if let Some(handle) = footsteps.0.take() {
        if let Some(instance) = instances.get_mut(&handle) {
            instance.stop(AudioTween::default());
        }
    }
}
