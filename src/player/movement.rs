//! Side-view player movement: input, ground checks and the motor.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::*;
use super::motor::{MotorInput, MotorSenses, PlayerMotor};
use crate::combat::{CombatSet, Condition, Faction, HurtDuration, Health, Mana};
use crate::core::{SfxCue, SfxEvent};
use crate::weapons::{AnimationBinding, WeaponLoadout};
use crate::world::LevelEntity;

/// Set up player movement systems.
pub fn setup_movement_systems(app: &mut App) {
    app.add_systems(Update, player_motor.in_set(CombatSet::Action));
}

/// Read the horizontal axis and jump key.
pub fn read_motor_input(keyboard: &ButtonInput<KeyCode>) -> MotorInput {
    let mut axis = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        axis -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        axis += 1.0;
    }

    MotorInput {
        axis,
        jump_pressed: keyboard.just_pressed(KeyCode::Space),
    }
}

/// Drive the player state machine and apply its velocity directives.
pub fn player_motor(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<PlayerConfig>,
    rapier_context: Query<&RapierContext>,
    mut player_query: Query<
        (
            Entity,
            &Transform,
            &Condition,
            &mut PlayerMotor,
            &mut Velocity,
            &mut Sprite,
        ),
        With<Player>,
    >,
    mut sfx: EventWriter<SfxEvent>,
) {
    let Ok((player_entity, transform, condition, mut motor, mut velocity, mut sprite)) =
        player_query.get_single_mut()
    else {
        return;
    };

    // Ground check: two short rays down from the bottom corners of the collider.
    let grounded = if let Ok(context) = rapier_context.get_single() {
        let feet = transform.translation.truncate() - Vec2::Y * config.collider_half_height;
        let filter = QueryFilter::default()
            .exclude_sensors()
            .exclude_collider(player_entity);
        [-0.9, 0.9].into_iter().any(|side| {
            let origin = feet + Vec2::X * config.collider_half_width * side;
            context
                .cast_ray(origin, Vec2::NEG_Y, config.ground_check_distance, true, filter)
                .is_some()
        })
    } else {
        false
    };

    let senses = MotorSenses {
        grounded,
        vertical_velocity: velocity.linvel.y,
    };
    let output = motor.step(read_motor_input(&keyboard), senses, *condition, &config);

    if let Some(vx) = output.velocity_x {
        velocity.linvel.x = vx;
    }
    if let Some(vy) = output.velocity_y {
        velocity.linvel.y = vy;
    }
    if output.jumped {
        sfx.send(SfxEvent::Cue(SfxCue::Jump));
    }

    sprite.flip_x = motor.facing() < 0.0;
}

/// Spawn the player entity for the current level.
pub fn spawn_player(commands: &mut Commands, position: Vec2, config: &PlayerConfig) -> Entity {
    commands
        .spawn((
            (
                Player,
                Name::new("Player"),
                Faction::Player,
                LevelEntity,
            ),
            // Combat components
            (
                Health::new(config.max_health),
                Mana::new(config.max_mana),
                Condition::default(),
                HurtDuration(config.hurt_duration),
                AttackCooldown::default(),
                WeaponLoadout::new(config.base_combat_stats()),
                AnimationBinding::new(config.base_animation_set.clone()),
            ),
            PlayerMotor::default(),
            Sprite {
                color: Color::srgb(0.85, 0.8, 0.6),
                custom_size: Some(Vec2::new(
                    config.collider_half_width * 2.0,
                    config.collider_half_height * 2.0,
                )),
                ..default()
            },
            Transform::from_translation(position.extend(10.0)),
            // Rapier physics components
            (
                RigidBody::Dynamic,
                Collider::cuboid(config.collider_half_width, config.collider_half_height),
                LockedAxes::ROTATION_LOCKED,
                Velocity::zero(),
                GravityScale(config.gravity_scale),
                Friction::coefficient(0.0),
                Ccd::enabled(),
                ActiveEvents::COLLISION_EVENTS,
            ),
        ))
        .id()
}
