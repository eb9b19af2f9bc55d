//! Enemy AI behavior systems.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::brain::{EnemyBrain, EnemySenses};
use super::components::{CorpseDelay, Enemy, EnemyKind, EnemyRng, EnemyStats};
use crate::combat::{
    spawn_projectile, Condition, DamageEvent, DeathEvent, DeathTimer, Faction, Projectile,
};
use crate::core::{SfxCue, SfxEvent};
use crate::player::Player;

/// Distance in front of the body where ranged enemies release projectiles.
const FIRE_POINT_OFFSET: f32 = 0.5;

/// Run every enemy brain and carry out its directives.
pub fn enemy_brains(
    mut commands: Commands,
    time: Res<Time>,
    mut rng: ResMut<EnemyRng>,
    player_query: Query<(Entity, &Transform, &Condition), (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (
            Entity,
            &Transform,
            &Condition,
            &EnemyStats,
            &EnemyKind,
            &mut EnemyBrain,
            &mut Velocity,
            Option<&mut Sprite>,
        ),
        (With<Enemy>, Without<Player>),
    >,
    mut damage_events: EventWriter<DamageEvent>,
    mut sfx: EventWriter<SfxEvent>,
) {
    let players: Vec<(Entity, Vec2)> = player_query
        .iter()
        .filter(|(_, _, condition)| !condition.is_dead())
        .map(|(entity, transform, _)| (entity, transform.translation.truncate()))
        .collect();

    let delta = time.delta_secs();

    for (entity, transform, condition, stats, kind, mut brain, mut velocity, sprite) in
        enemy_query.iter_mut()
    {
        let position = transform.translation.truncate();
        let senses = EnemySenses {
            position,
            players: &players,
        };
        let directive = brain.step(delta, senses, *condition, stats, &mut rng.0);

        if directive.halt {
            velocity.linvel = Vec2::ZERO;
        } else {
            velocity.linvel.x = directive.velocity_x;
        }

        if let Some(mut sprite) = sprite {
            sprite.flip_x = brain.facing() < 0.0;
        }

        let Some(target) = directive.attack else {
            continue;
        };

        match *kind {
            EnemyKind::Melee { damage } => {
                // Re-check: the target must still stand in the attack zone.
                let in_zone = players.iter().any(|(e, p)| {
                    *e == target && stats.attack_zone.contains(position, brain.facing(), *p)
                });
                if in_zone {
                    damage_events.send(DamageEvent {
                        target,
                        source: entity,
                        amount: damage,
                    });
                }
                sfx.send(SfxEvent::Cue(SfxCue::Attack));
            }
            EnemyKind::Ranged {
                damage,
                projectile_speed,
            } => {
                let facing = brain.facing();
                let origin = position + Vec2::X * facing * FIRE_POINT_OFFSET;
                let projectile = Projectile::new(
                    origin,
                    Vec2::X * facing,
                    projectile_speed,
                    damage,
                    entity,
                    Faction::Player,
                    0.0,
                );
                spawn_projectile(&mut commands, projectile, Color::srgb(0.8, 0.5, 0.3));
                sfx.send(SfxEvent::Cue(SfxCue::Shoot));
            }
        }
    }
}

/// Handle enemy death transition.
pub fn handle_enemy_death(
    mut commands: Commands,
    mut death_events: EventReader<DeathEvent>,
    mut enemy_query: Query<(Option<&CorpseDelay>, Option<&mut Sprite>), With<Enemy>>,
) {
    for event in death_events.read() {
        let Ok((delay, sprite)) = enemy_query.get_mut(event.entity) else {
            continue;
        };

        info!("Enemy {:?} died", event.entity);
        if let Some(mut sprite) = sprite {
            sprite.color = Color::srgba(0.3, 0.3, 0.3, 0.8);
        }
        let seconds = delay.map_or(1.0, |d| d.0);
        commands
            .entity(event.entity)
            .insert(DeathTimer::from_seconds(seconds));
    }
}

/// Despawn enemies after their corpse delay.
pub fn despawn_dead_enemies(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut DeathTimer), With<Enemy>>,
) {
    for (entity, mut death_timer) in query.iter_mut() {
        death_timer.0.tick(time.delta());

        if death_timer.0.finished() {
            commands.entity(entity).despawn_recursive();
        }
    }
}
