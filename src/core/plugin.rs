//! Core plugin that sets up game states, events, config and fundamental systems.

use bevy::prelude::*;

use super::config::load_game_config;
use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, StartMenu, Playing, etc.)
/// - Global events (DamageEvent, DeathEvent, etc.)
/// - Config loading and pause handling
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            .add_sub_state::<PlayState>()

            // Register global events
            .add_event::<DamageEvent>()
            .add_event::<DeathEvent>()
            .add_event::<RestoreEvent>()
            .add_event::<ItemPickupEvent>()
            .add_event::<SfxEvent>()

            // Config must exist before any Startup system reads it
            .add_systems(PreStartup, load_game_config)

            // Registries load during Startup, so the first Update can leave Loading
            .add_systems(Update, finish_loading.run_if(in_state(GameState::Loading)))

            // Pause/unpause with Escape key
            .add_systems(Update, handle_pause_input.run_if(in_state(GameState::Playing)))
            .add_systems(OnEnter(PlayState::Paused), pause_virtual_time)
            .add_systems(OnExit(PlayState::Paused), resume_virtual_time);
    }
}

/// Leave the loading state once Startup data loading has run.
fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::StartMenu);
}

/// Handle Escape: pause while exploring, resume while paused, close the inventory.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<PlayState>>,
    mut next_state: ResMut<NextState<PlayState>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }
    match current_state.get() {
        PlayState::Exploring => next_state.set(PlayState::Paused),
        PlayState::Paused | PlayState::Inventory => next_state.set(PlayState::Exploring),
    }
}

fn pause_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.pause();
}

fn resume_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.unpause();
}
