//! Enemy state machine: target tracking, patrol, chase and attack timing.
//!
//! The brain sees the world only through [`EnemySenses`] and answers with an
//! [`EnemyDirective`]; the AI systems do the physics and spawning.

use bevy::prelude::*;
use rand::Rng;

use super::components::{EnemyState, EnemyStats};
use crate::combat::resolver::nearest_in_zone;
use crate::combat::Condition;

/// Horizontal distances below this count as arrived.
const MOVE_DEAD_ZONE: f32 = 0.01;

/// What the enemy can perceive this frame.
#[derive(Debug, Clone, Copy)]
pub struct EnemySenses<'a> {
    pub position: Vec2,
    /// Living players and their positions.
    pub players: &'a [(Entity, Vec2)],
}

/// Velocity and attack directives for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnemyDirective {
    pub velocity_x: f32,
    /// Zero vertical velocity as well (dead bodies stop).
    pub halt: bool,
    /// The attack timer expired: execute the attack against this target.
    pub attack: Option<Entity>,
}

/// Per-enemy AI state.
#[derive(Component, Debug, Clone)]
pub struct EnemyBrain {
    state: EnemyState,
    target: Option<Entity>,
    last_known_position: Vec2,
    patrol_center: Vec2,
    patrol_target: Vec2,
    patrol_wait: f32,
    attack_timer: f32,
    facing: f32,
}

impl EnemyBrain {
    /// New brain patrolling around `home`.
    pub fn new(home: Vec2, stats: &EnemyStats, rng: &mut impl Rng) -> Self {
        let mut brain = Self {
            state: EnemyState::Idle,
            target: None,
            last_known_position: home,
            patrol_center: home,
            patrol_target: home,
            patrol_wait: 0.0,
            attack_timer: 0.0,
            facing: 1.0,
        };
        brain.pick_patrol_point(stats, rng);
        brain
    }

    pub fn state(&self) -> EnemyState {
        self.state
    }

    pub fn target(&self) -> Option<Entity> {
        self.target
    }

    pub fn facing(&self) -> f32 {
        self.facing
    }

    pub fn patrol_center(&self) -> Vec2 {
        self.patrol_center
    }

    pub fn patrol_target(&self) -> Vec2 {
        self.patrol_target
    }

    pub fn last_known_position(&self) -> Vec2 {
        self.last_known_position
    }

    /// Advance one frame.
    pub fn step(
        &mut self,
        delta: f32,
        senses: EnemySenses,
        condition: Condition,
        stats: &EnemyStats,
        rng: &mut impl Rng,
    ) -> EnemyDirective {
        if condition.is_dead() {
            self.state = EnemyState::Dead;
            return EnemyDirective {
                halt: true,
                ..default()
            };
        }

        self.track_target(senses, stats, rng);

        if condition.is_hurt() {
            self.state = EnemyState::Hurt;
            return EnemyDirective::default();
        }
        if self.state == EnemyState::Hurt {
            // Hurt timer just elapsed: one idle frame before re-evaluating.
            self.state = EnemyState::Idle;
            return EnemyDirective::default();
        }

        let target = self
            .target
            .and_then(|e| find(senses.players, e).map(|pos| (e, pos)));

        match target {
            Some((entity, position)) => {
                self.last_known_position = position;
                if stats.attack_zone.contains(senses.position, self.facing, position) {
                    self.attack(delta, entity, stats)
                } else {
                    self.state = EnemyState::Chase;
                    EnemyDirective {
                        velocity_x: self.move_towards(senses.position, position, stats.chase_speed),
                        ..default()
                    }
                }
            }
            None => self.patrol(delta, senses.position, stats, rng),
        }
    }

    fn track_target(&mut self, senses: EnemySenses, stats: &EnemyStats, rng: &mut impl Rng) {
        if let Some(target) = self.target {
            let position = find(senses.players, target);
            let still_detected = position
                .is_some_and(|p| stats.detect_zone.contains(senses.position, self.facing, p));
            if !still_detected {
                if let Some(position) = position {
                    self.last_known_position = position;
                }
                self.target = None;
                self.patrol_center = self.last_known_position;
                self.patrol_wait = 0.0;
                self.pick_patrol_point(stats, rng);
            }
            return;
        }

        if let Some((entity, position)) = nearest_in_zone(
            &stats.detect_zone,
            senses.position,
            self.facing,
            senses.players.iter().copied(),
        ) {
            self.target = Some(entity);
            self.last_known_position = position;
        }
    }

    fn attack(&mut self, delta: f32, target: Entity, stats: &EnemyStats) -> EnemyDirective {
        self.state = EnemyState::Attack;
        self.attack_timer -= delta;
        let mut directive = EnemyDirective::default();
        if self.attack_timer <= 0.0 {
            directive.attack = Some(target);
            self.attack_timer = stats.attack_cooldown;
        }
        directive
    }

    fn patrol(
        &mut self,
        delta: f32,
        position: Vec2,
        stats: &EnemyStats,
        rng: &mut impl Rng,
    ) -> EnemyDirective {
        if self.patrol_wait > 0.0 {
            self.patrol_wait -= delta;
            self.state = EnemyState::Idle;
            return EnemyDirective::default();
        }

        if (self.patrol_target.x - position.x).abs() <= stats.patrol_arrive_distance {
            self.patrol_wait = stats.patrol_wait_time;
            self.state = EnemyState::Idle;
            self.pick_patrol_point(stats, rng);
            return EnemyDirective::default();
        }

        self.state = EnemyState::Patrol;
        EnemyDirective {
            velocity_x: self.move_towards(position, self.patrol_target, stats.move_speed),
            ..default()
        }
    }

    fn move_towards(&mut self, position: Vec2, destination: Vec2, speed: f32) -> f32 {
        let delta_x = destination.x - position.x;
        if delta_x.abs() < MOVE_DEAD_ZONE {
            return 0.0;
        }
        self.facing = delta_x.signum();
        self.facing * speed
    }

    fn pick_patrol_point(&mut self, stats: &EnemyStats, rng: &mut impl Rng) {
        let offset_x = random_in_unit_circle(rng).x * stats.patrol_radius;
        self.patrol_target = Vec2::new(self.patrol_center.x + offset_x, self.patrol_center.y);
    }
}

fn find(players: &[(Entity, Vec2)], entity: Entity) -> Option<Vec2> {
    players
        .iter()
        .find(|(e, _)| *e == entity)
        .map(|(_, position)| *position)
}

/// Uniform point inside the unit circle.
fn random_in_unit_circle(rng: &mut impl Rng) -> Vec2 {
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    let radius = rng.gen::<f32>().sqrt();
    Vec2::new(angle.cos(), angle.sin()) * radius
}
