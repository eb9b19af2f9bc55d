//! Headless checks of damage, death and restore handling.

use bevy::ecs::event::EventCursor;
use bevy::prelude::*;

use hollow_grove::combat::{
    apply_damage, apply_restores, Condition, Health, HitEvent, HitOutcome, HurtDuration, Mana,
};
use hollow_grove::core::{DamageEvent, DeathEvent, RestoreEvent};

fn combat_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_event::<DamageEvent>()
        .add_event::<DeathEvent>()
        .add_event::<HitEvent>()
        .add_event::<RestoreEvent>()
        .add_systems(Update, (apply_damage, apply_restores).chain());
    app
}

fn spawn_actor(app: &mut App, max_health: i32) -> Entity {
    app.world_mut()
        .spawn((
            Health::new(max_health),
            Mana::new(20),
            Condition::default(),
            HurtDuration(0.3),
        ))
        .id()
}

fn hit(app: &mut App, target: Entity, source: Entity, amount: i32) {
    app.world_mut().send_event(DamageEvent {
        target,
        source,
        amount,
    });
}

fn drain<E: Event + Clone>(app: &App, cursor: &mut EventCursor<E>) -> Vec<E> {
    let events = app.world().resource::<Events<E>>();
    cursor.read(events).cloned().collect()
}

#[test]
fn non_positive_damage_is_ignored() {
    let mut app = combat_app();
    let source = app.world_mut().spawn_empty().id();
    let target = spawn_actor(&mut app, 30);

    hit(&mut app, target, source, 0);
    hit(&mut app, target, source, -5);
    app.update();

    let world = app.world();
    assert_eq!(world.get::<Health>(target).unwrap().current(), 30);
    assert_eq!(*world.get::<Condition>(target).unwrap(), Condition::Normal);
}

#[test]
fn death_is_reported_once_and_is_terminal() {
    let mut app = combat_app();
    let mut deaths = EventCursor::<DeathEvent>::default();
    let source = app.world_mut().spawn_empty().id();
    let target = spawn_actor(&mut app, 30);

    hit(&mut app, target, source, 10);
    app.update();
    assert!(app.world().get::<Condition>(target).unwrap().is_hurt());
    assert_eq!(app.world().get::<Health>(target).unwrap().current(), 20);

    hit(&mut app, target, source, 50);
    app.update();
    let first = drain(&app, &mut deaths);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].entity, target);
    assert_eq!(first[0].killed_by, Some(source));

    hit(&mut app, target, source, 10);
    app.world_mut().send_event(RestoreEvent {
        target,
        health: 25,
        mana: 0,
    });
    app.update();

    assert!(drain(&app, &mut deaths).is_empty());
    let world = app.world();
    assert_eq!(world.get::<Health>(target).unwrap().current(), 0);
    assert!(world.get::<Condition>(target).unwrap().is_dead());
}

#[test]
fn restores_are_capped_at_maximum() {
    let mut app = combat_app();
    let source = app.world_mut().spawn_empty().id();
    let target = spawn_actor(&mut app, 100);

    hit(&mut app, target, source, 70);
    app.update();

    app.world_mut().send_event(RestoreEvent {
        target,
        health: 40,
        mana: 0,
    });
    app.update();
    assert_eq!(app.world().get::<Health>(target).unwrap().current(), 70);

    app.world_mut().send_event(RestoreEvent {
        target,
        health: 500,
        mana: 5,
    });
    app.update();
    let world = app.world();
    assert_eq!(world.get::<Health>(target).unwrap().current(), 100);
    assert_eq!(world.get::<Mana>(target).unwrap().current(), 20);
}

#[test]
fn hits_while_hurt_do_not_restagger() {
    let mut app = combat_app();
    let mut hits = EventCursor::<HitEvent>::default();
    let source = app.world_mut().spawn_empty().id();
    let target = spawn_actor(&mut app, 50);

    hit(&mut app, target, source, 5);
    hit(&mut app, target, source, 5);
    app.update();

    let outcomes: Vec<_> = drain(&app, &mut hits).into_iter().map(|h| h.outcome).collect();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(
        outcomes,
[HitOutcome::Staggered, HitOutcome::Damaged]
    );
}
