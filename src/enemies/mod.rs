//! Enemies module - enemy entities, AI, and spawning.

mod ai;
mod brain;
mod components;
pub mod data;
mod plugin;
mod spawning;

pub use ai::{despawn_dead_enemies, enemy_brains, handle_enemy_death};
pub use brain::{EnemyBrain, EnemyDirective, EnemySenses};
pub use components::*;
pub use data::{EnemyDefinition, EnemyRegistry};
pub use plugin::EnemyPlugin;
pub use spawning::spawn_enemy;
