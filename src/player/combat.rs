//! Player attacks: melee overlap or a projectile, driven by the weapon loadout.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::*;
use super::motor::PlayerMotor;
use crate::combat::resolver::{melee_targets, owning_actor};
use crate::combat::{spawn_projectile, CombatSet, Condition, DamageEvent, Faction, Projectile};
use crate::core::{SfxCue, SfxEvent};
use crate::weapons::{WeaponLoadout, WeaponType};

/// Set up player attack systems.
pub fn setup_player_combat_systems(app: &mut App) {
    app.add_systems(
        Update,
        player_attack
            .in_set(CombatSet::Action)
            .after(super::movement::player_motor),
    );
}

/// Where an attack originates for a body at `position` facing `facing`.
pub fn attack_point(position: Vec2, facing: f32, offset: f32) -> Vec2 {
    position + Vec2::X * facing.signum() * offset
}

/// Handle the attack key: cooldown, then melee overlap or a projectile.
pub fn player_attack(
    mut commands: Commands,
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    config: Res<PlayerConfig>,
    mut player_query: Query<
        (
            Entity,
            &Transform,
            &Condition,
            &PlayerMotor,
            &WeaponLoadout,
            &mut AttackCooldown,
        ),
        With<Player>,
    >,
    factions: Query<&Faction>,
    parents: Query<&Parent>,
    rapier_context: Query<&RapierContext>,
    mut damage_events: EventWriter<DamageEvent>,
    mut sfx: EventWriter<SfxEvent>,
) {
    let Ok((player_entity, transform, condition, motor, loadout, mut cooldown)) =
        player_query.get_single_mut()
    else {
        return;
    };

    cooldown.tick(time.delta_secs());

    let pressed = keyboard.just_pressed(KeyCode::KeyJ) || mouse.just_pressed(MouseButton::Left);
    if !pressed || !cooldown.ready() || condition.is_dead() || condition.is_hurt() {
        return;
    }

    cooldown.remaining = loadout.current_attack_cooldown();

    let point = attack_point(
        transform.translation.truncate(),
        motor.facing(),
        config.attack_point_offset,
    );
    let damage = loadout.current_attack_power();
    let range = loadout.current_attack_range();

    match loadout.weapon_type() {
        WeaponType::Melee => {
            let Ok(context) = rapier_context.get_single() else {
                return;
            };

            let mut hits = Vec::new();
            context.intersections_with_shape(
                point,
                0.0,
                &Collider::ball(range),
                QueryFilter::default().exclude_collider(player_entity),
                |hit| {
                    hits.push(hit);
                    true // Continue checking other entities
                },
            );

            let parent_of = |e: Entity| parents.get(e).ok().map(|p| p.get());
            let targets = melee_targets(player_entity, hits, |hit| {
                owning_actor(hit, |e| factions.contains(e), parent_of)
                    .filter(|actor| factions.get(*actor).is_ok_and(|f| *f == Faction::Enemy))
            });

            for target in targets {
                damage_events.send(DamageEvent {
                    target,
                    source: player_entity,
                    amount: damage,
                });
            }
            sfx.send(SfxEvent::Cue(SfxCue::Attack));
        }
        WeaponType::Ranged => {
            let projectile_def = loadout
                .equipped()
                .map(|w| w.projectile_or_default())
                .unwrap_or_default();
            let projectile = Projectile::new(
                point,
                Vec2::X * motor.facing(),
                projectile_def.speed,
                damage,
                player_entity,
                Faction::Enemy,
                range,
            )
            .with_radius(projectile_def.radius)
            .with_lifetime(projectile_def.lifetime);
            spawn_projectile(&mut commands, projectile, Color::srgb(0.9, 0.9, 0.5));
            sfx.send(SfxEvent::Cue(SfxCue::Shoot));
        }
    }

    if let Some(clip) = loadout.equipped().and_then(|w| w.attack_sfx.clone()) {
        sfx.send(SfxEvent::Clip(clip));
    }
}

/// Start the death delay when the player dies.
pub fn handle_player_death(
    mut commands: Commands,
    mut death_events: EventReader<crate::combat::DeathEvent>,
    config: Res<PlayerConfig>,
    player_query: Query<Entity, With<Player>>,
) {
    for event in death_events.read() {
        if player_query.get(event.entity).is_ok() {
            info!("Player died");
            commands
                .entity(event.entity)
                .insert(PlayerDeathTimer(Timer::from_seconds(
                    config.death_delay,
                    TimerMode::Once,
                )));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_point_follows_facing() {
        assert_eq!(attack_point(Vec2::new(2.0, 1.0), 1.0, 0.6), Vec2::new(2.6, 1.0));
        assert_eq!(attack_point(Vec2::new(2.0, 1.0), -1.0, 0.6), Vec2::new(1.4, 1.0));
    }
}
