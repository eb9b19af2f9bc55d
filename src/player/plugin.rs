//! Player plugin - movement, attacks and death handling.

use bevy::prelude::*;

use super::combat::{self, handle_player_death};
use super::components::*;
use super::movement;
use crate::combat::CombatSet;
use crate::core::GameState;

/// Player plugin - handles player movement, attacks and death.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        // Set up movement and attack systems
        movement::setup_movement_systems(app);
        combat::setup_player_combat_systems(app);

        // Initialize resources (replaced by the loaded config in PreStartup)
        app.init_resource::<PlayerConfig>();

        app.add_systems(
            Update,
            (
                handle_player_death.after(CombatSet::Damage),
                tick_player_death,
            )
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}

/// Move to game over once the death delay has elapsed.
fn tick_player_death(
    time: Res<Time>,
    mut query: Query<&mut PlayerDeathTimer, With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for mut timer in query.iter_mut() {
        timer.0.tick(time.delta());
        if timer.0.just_finished() {
            info!("Player death delay over, transitioning to Game Over");
            next_state.set(GameState::GameOver);
        }
    }
}
