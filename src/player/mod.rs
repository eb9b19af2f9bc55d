//! Player module - player entity, state machine, movement and attacks.

mod combat;
mod components;
mod motor;
mod movement;
mod plugin;

pub use combat::{attack_point, handle_player_death, player_attack};
pub use components::*;
pub use motor::{MotorInput, MotorOutput, MotorSenses, PlayerMotor, AXIS_DEAD_ZONE};
pub use movement::{player_motor, read_motor_input, spawn_player};
pub use plugin::PlayerPlugin;
