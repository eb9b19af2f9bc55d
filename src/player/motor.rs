//! Player state machine, evaluated once per frame from sensed inputs.

use bevy::prelude::*;

use super::components::{PlayerConfig, PlayerState};
use crate::combat::Condition;

/// Inputs below this magnitude count as no input.
pub const AXIS_DEAD_ZONE: f32 = 0.01;

/// Raw control input for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct MotorInput {
    /// Horizontal axis in [-1, 1]
    pub axis: f32,
    pub jump_pressed: bool,
}

/// What physics reported about the player this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct MotorSenses {
    pub grounded: bool,
    pub vertical_velocity: f32,
}

/// Velocity directives for the physics body.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotorOutput {
    /// `None` leaves the current horizontal velocity alone.
    pub velocity_x: Option<f32>,
    /// `Some` overrides the vertical velocity (jumps, death).
    pub velocity_y: Option<f32>,
    /// True on the frame a jump or double jump starts.
    pub jumped: bool,
}

/// Player state machine component.
#[derive(Component, Debug, Clone)]
pub struct PlayerMotor {
    state: PlayerState,
    jumps_remaining: u32,
    facing: f32,
    moving_on_ground: bool,
}

impl Default for PlayerMotor {
    fn default() -> Self {
        Self {
            state: PlayerState::Idle,
            jumps_remaining: 0,
            facing: 1.0,
            moving_on_ground: false,
        }
    }
}

impl PlayerMotor {
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// +1 facing right, -1 facing left.
    pub fn facing(&self) -> f32 {
        self.facing
    }

    pub fn jumps_remaining(&self) -> u32 {
        self.jumps_remaining
    }

    /// Grounded and walking: drives the footstep loop.
    pub fn moving_on_ground(&self) -> bool {
        self.moving_on_ground
    }

    /// Advance one frame.
    pub fn step(
        &mut self,
        input: MotorInput,
        senses: MotorSenses,
        condition: Condition,
        config: &PlayerConfig,
    ) -> MotorOutput {
        if condition.is_dead() {
            let was_dead = self.state == PlayerState::Dead;
            self.state = PlayerState::Dead;
            self.moving_on_ground = false;
            // Death stops the body once; afterwards physics is left alone.
            return if was_dead {
                MotorOutput::default()
            } else {
                MotorOutput {
                    velocity_x: Some(0.0),
                    velocity_y: Some(0.0),
                    jumped: false,
                }
            };
        }

        if senses.grounded {
            self.jumps_remaining = config.extra_jumps;
        }

        if condition.is_hurt() {
            self.state = PlayerState::Hurt;
            self.moving_on_ground = false;
            return MotorOutput::default();
        }

        let mut output = MotorOutput {
            velocity_x: Some(input.axis * config.move_speed),
            ..default()
        };

        if input.jump_pressed {
            if senses.grounded {
                self.state = PlayerState::Jump;
                output.jumped = true;
            } else if self.jumps_remaining > 0 {
                self.jumps_remaining -= 1;
                self.state = PlayerState::DoubleJump;
                output.jumped = true;
            }
        }

        if output.jumped {
            output.velocity_y = Some(config.jump_force);
        } else {
            self.state = self.locomotion_state(input.axis, senses);
        }

        if input.axis > AXIS_DEAD_ZONE {
            self.facing = 1.0;
        } else if input.axis < -AXIS_DEAD_ZONE {
            self.facing = -1.0;
        }

        self.moving_on_ground = self.state == PlayerState::Move
            && senses.grounded
            && input.axis.abs() > AXIS_DEAD_ZONE;

        output
    }

    fn locomotion_state(&self, axis: f32, senses: MotorSenses) -> PlayerState {
        if !senses.grounded {
            if self.state == PlayerState::DoubleJump && senses.vertical_velocity >= AXIS_DEAD_ZONE {
                return PlayerState::DoubleJump;
            }
            return if senses.vertical_velocity >= AXIS_DEAD_ZONE {
                PlayerState::Jump
            } else {
                PlayerState::Fall
            };
        }

        if axis.abs() > AXIS_DEAD_ZONE {
            PlayerState::Move
        } else {
            PlayerState::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUND: MotorSenses = MotorSenses {
        grounded: true,
        vertical_velocity: 0.0,
    };

    fn air(vy: f32) -> MotorSenses {
        MotorSenses {
            grounded: false,
            vertical_velocity: vy,
        }
    }

    fn input(axis: f32, jump: bool) -> MotorInput {
        MotorInput {
            axis,
            jump_pressed: jump,
        }
    }

    #[test]
    fn ground_locomotion_uses_axis_dead_zone() {
        let config = PlayerConfig::default();
        let mut motor = PlayerMotor::default();

        let out = motor.step(input(0.005, false), GROUND, Condition::Normal, &config);
        assert_eq!(motor.state(), PlayerState::Idle);
        assert_eq!(motor.facing(), 1.0);
        assert!(!motor.moving_on_ground());
        assert!((out.velocity_x.unwrap() - 0.03).abs() < 1e-6);

        let out = motor.step(input(-1.0, false), GROUND, Condition::Normal, &config);
        assert_eq!(motor.state(), PlayerState::Move);
        assert_eq!(motor.facing(), -1.0);
        assert!(motor.moving_on_ground());
        assert_eq!(out.velocity_x, Some(-6.0));
    }

    #[test]
    fn jump_then_double_jump_consumes_extra_jump() {
        let config = PlayerConfig::default();
        let mut motor = PlayerMotor::default();

        let out = motor.step(input(0.0, true), GROUND, Condition::Normal, &config);
        assert!(out.jumped);
        assert_eq!(out.velocity_y, Some(12.0));
        assert_eq!(motor.state(), PlayerState::Jump);

        let out = motor.step(input(0.0, true), air(8.0), Condition::Normal, &config);
        assert!(out.jumped);
        assert_eq!(motor.state(), PlayerState::DoubleJump);
        assert_eq!(motor.jumps_remaining(), 0);

        // Still rising: stays in DoubleJump.
        motor.step(input(0.0, false), air(3.0), Condition::Normal, &config);
        assert_eq!(motor.state(), PlayerState::DoubleJump);

        // No jumps left.
        let out = motor.step(input(0.0, true), air(-2.0), Condition::Normal, &config);
        assert!(!out.jumped);
        assert_eq!(motor.state(), PlayerState::Fall);

        // Landing refills.
        motor.step(input(0.0, false), GROUND, Condition::Normal, &config);
        assert_eq!(motor.jumps_remaining(), config.extra_jumps);
        assert_eq!(motor.state(), PlayerState::Idle);
    }

    #[test]
    fn rising_without_double_jump_is_jump_state() {
        let config = PlayerConfig::default();
        let mut motor = PlayerMotor::default();
        motor.step(input(0.0, false), air(0.5), Condition::Normal, &config);
        assert_eq!(motor.state(), PlayerState::Jump);
    }

    #[test]
    fn hurt_blocks_drive_and_jump_then_recovers() {
        let config = PlayerConfig::default();
        let mut motor = PlayerMotor::default();

        let out = motor.step(
            input(1.0, true),
            GROUND,
            Condition::Hurt { remaining: 0.2 },
            &config,
        );
        assert_eq!(motor.state(), PlayerState::Hurt);
        assert_eq!(out, MotorOutput::default());

        motor.step(input(1.0, false), GROUND, Condition::Normal, &config);
        assert_eq!(motor.state(), PlayerState::Move);
    }

    #[test]
    fn dead_is_terminal_and_stops_once() {
        let config = PlayerConfig::default();
        let mut motor = PlayerMotor::default();

        let out = motor.step(input(1.0, true), GROUND, Condition::Dead, &config);
        assert_eq!(motor.state(), PlayerState::Dead);
        assert_eq!(out.velocity_x, Some(0.0));
        assert_eq!(out.velocity_y, Some(0.0));

        let out = motor.step(input(1.0, true), GROUND, Condition::Dead, &config);
        assert_eq!(motor.state(), PlayerState::Dead);
        assert_eq!(out, MotorOutput::default());
    }
}
