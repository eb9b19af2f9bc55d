//! Combat systems - condition timers, damage, restores and projectiles.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::*;
use super::components::Condition;
use super::resolver::{classify_contact, owning_actor, ProjectileContact};
use crate::core::{GameState, PlayState};
use crate::world::LevelEntity;

/// System set ordering for combat.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CombatSet {
    /// Hurt timers count down before anything reads them.
    Tick,
    /// Actor state machines: movement, attack triggers, projectile spawns.
    Action,
    /// Projectile flight and hits.
    Projectiles,
    /// Damage and restore application.
    Damage,
}

/// Emitted for every damage event that changed its target.
#[derive(Event, Debug, Clone, Copy)]
pub struct HitEvent {
    pub target: Entity,
    pub source: Entity,
    pub outcome: HitOutcome,
}

/// Configure combat systems.
pub fn setup_combat_systems(app: &mut App) {
    app
        // Events
        .add_event::<HitEvent>()

        // System ordering
        .configure_sets(
            Update,
            (
                CombatSet::Tick,
                CombatSet::Action,
                CombatSet::Projectiles,
                CombatSet::Damage,
            )
                .chain()
                .run_if(in_state(GameState::Playing))
                .run_if(in_state(PlayState::Exploring)),
        )

        .add_systems(Update, tick_conditions.in_set(CombatSet::Tick))

        .add_systems(
            Update,
            (advance_projectiles, projectile_hits)
                .chain()
                .in_set(CombatSet::Projectiles),
        )

        .add_systems(
            Update,
            (apply_damage, apply_restores).in_set(CombatSet::Damage),
        );
}

/// Count down hurt timers.
pub fn tick_conditions(time: Res<Time>, mut query: Query<&mut Condition>) {
    let delta = time.delta_secs();
    for mut condition in query.iter_mut() {
        if condition.is_hurt() {
            condition.tick(delta);
        }
    }
}

/// Apply damage to entities.
pub fn apply_damage(
    mut damage_events: EventReader<DamageEvent>,
    mut health_query: Query<(&mut Health, &mut Condition, Option<&HurtDuration>)>,
    mut hit_events: EventWriter<HitEvent>,
    mut death_events: EventWriter<DeathEvent>,
) {
    for event in damage_events.read() {
        let Ok((mut health, mut condition, hurt)) = health_query.get_mut(event.target) else {
            continue;
        };

        let hurt_duration = hurt.copied().unwrap_or_default().0;
        let outcome = condition.take_damage(&mut health, event.amount, hurt_duration);
        if outcome == HitOutcome::Ignored {
            continue;
        }

        debug!(
            "{:?} took {} damage from {:?} ({:?}), health {}/{}",
            event.target,
            event.amount,
            event.source,
            outcome,
            health.current(),
            health.maximum()
        );

        hit_events.send(HitEvent {
            target: event.target,
            source: event.source,
            outcome,
        });

        // Dead is terminal, so this fires at most once per entity.
        if outcome == HitOutcome::Killed {
            death_events.send(DeathEvent {
                entity: event.target,
                killed_by: Some(event.source),
            });
        }
    }
}

/// Apply heal and mana restore requests.
pub fn apply_restores(
    mut restore_events: EventReader<RestoreEvent>,
    mut query: Query<(&mut Health, Option<&mut Mana>, &Condition)>,
) {
    for event in restore_events.read() {
        let Ok((mut health, mana, condition)) = query.get_mut(event.target) else {
            warn!("Restore target {:?} has no health", event.target);
            continue;
        };

        let healed = condition.heal(&mut health, event.health);
        let restored = match mana {
            Some(mut mana) => mana.restore(event.mana, *condition),
            None => 0,
        };

        if healed > 0 || restored > 0 {
            info!("{:?} restored {} HP and {} MP", event.target, healed, restored);
        }
    }
}

/// Spawn a projectile entity owned by the current level.
pub fn spawn_projectile(commands: &mut Commands, projectile: Projectile, color: Color) -> Entity {
    let size = Vec2::splat(projectile.radius * 2.0);
    let angle = projectile.direction.y.atan2(projectile.direction.x);
    let transform = Transform::from_translation(projectile.origin.extend(5.0))
        .with_rotation(Quat::from_rotation_z(angle));

    commands
        .spawn((
            Name::new("Projectile"),
            Sprite {
                color,
                custom_size: Some(Vec2::new(size.x * 2.0, size.y)),
                ..default()
            },
            transform,
            projectile,
            LevelEntity,
        ))
        .id()
}

/// Move projectiles and expire them on timeout or when out of range.
pub fn advance_projectiles(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Transform, &mut Projectile)>,
) {
    for (entity, mut transform, mut projectile) in query.iter_mut() {
        let step = projectile.velocity() * time.delta_secs();
        transform.translation += step.extend(0.0);

        projectile.lifetime.tick(time.delta());
        if projectile.lifetime.finished() || projectile.out_of_range(transform.translation.truncate()) {
            commands.entity(entity).despawn_recursive();
        }
    }
}

/// Resolve projectile overlaps against the physics world.
pub fn projectile_hits(
    mut commands: Commands,
    projectiles: Query<(Entity, &Transform, &Projectile)>,
    factions: Query<&Faction>,
    parents: Query<&Parent>,
    sensors: Query<(), With<Sensor>>,
    rapier_context: Query<&RapierContext>,
    mut damage_events: EventWriter<DamageEvent>,
) {
    let Ok(context) = rapier_context.get_single() else {
        return;
    };

    let parent_of = |e: Entity| parents.get(e).ok().map(|p| p.get());

    for (entity, transform, projectile) in projectiles.iter() {
        let shape = Collider::ball(projectile.radius);
        let mut contact = None;

        context.intersections_with_shape(
            transform.translation.truncate(),
            0.0,
            &shape,
            QueryFilter::default(),
            |collider| {
                let target = owning_actor(collider, |e| factions.contains(e), parent_of)
                    .filter(|actor| factions.get(*actor).is_ok_and(|f| *f == projectile.target));
                match classify_contact(
                    collider,
                    sensors.contains(collider),
                    projectile.owner,
                    target,
                    parent_of,
                ) {
                    ProjectileContact::PassThrough => true,
                    found => {
                        contact = Some(found);
                        false // First solid contact consumes the projectile
                    }
                }
            },
        );

        let Some(found) = contact else {
            continue;
        };

        if let ProjectileContact::Hit(target) = found {
            damage_events.send(DamageEvent {
                target,
                source: projectile.owner,
                amount: projectile.damage,
            });
        }
        commands.entity(entity).despawn_recursive();
    }
}
