//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::ai;
use super::components::EnemyRng;
use super::data::{load_enemy_definitions, EnemyRegistry};
use crate::combat::CombatSet;
use crate::core::GameState;

/// Enemy plugin - handles enemy AI, death, and despawning.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<EnemyRegistry>()
            .init_resource::<EnemyRng>()
            .add_systems(Startup, load_enemy_definitions)
            // Brains act alongside the player
            .add_systems(Update, ai::enemy_brains.in_set(CombatSet::Action))
            // Deaths are handled after damage lands
            .add_systems(
                Update,
                (ai::handle_enemy_death, ai::despawn_dead_enemies)
                    .chain()
                    .after(CombatSet::Damage)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
