//! Headless checks of level exits and level teardown.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy_rapier2d::prelude::CollisionEvent;
use bevy_rapier2d::rapier::geometry::CollisionEventFlags;

use hollow_grove::camera::CameraBounds;
use hollow_grove::core::{GameState, PlayState};
use hollow_grove::player::Player;
use hollow_grove::world::{cleanup_level, detect_level_exit, LevelEntity, LevelExit, LevelProgress};

fn world_app(progress: LevelProgress) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_state(GameState::Playing)
        .add_sub_state::<PlayState>()
        .add_event::<CollisionEvent>()
        .insert_resource(progress)
        .add_systems(OnExit(GameState::Playing), cleanup_level)
        .add_systems(
            Update,
            detect_level_exit.run_if(in_state(GameState::Playing)),
        );
    app.update();
    app
}

fn touch(app: &mut App, a: Entity, b: Entity) {
    app.world_mut()
        .send_event(CollisionEvent::Started(a, b, CollisionEventFlags::SENSOR));
}

fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

#[test]
fn exit_passes_a_level_when_more_remain() {
    let mut app = world_app(LevelProgress::new(2));
    let player = app.world_mut().spawn(Player).id();
    let exit = app.world_mut().spawn((LevelExit, LevelEntity)).id();

    touch(&mut app, exit, player);
    app.update();
    app.update();

    assert_eq!(state(&app), GameState::LevelPass);
    assert!(!app.world().entities().contains(exit));
}

#[test]
fn exit_on_the_last_level_completes_the_game() {
    let mut progress = LevelProgress::new(2);
    assert_eq!(progress.next(), Ok(2));
    let mut app = world_app(progress);
    let player = app.world_mut().spawn(Player).id();
    let exit = app.world_mut().spawn(LevelExit).id();

    touch(&mut app, player, exit);
    app.update();
    app.update();

    assert_eq!(state(&app), GameState::LevelComplete);
}

#[test]
fn other_contacts_do_not_end_the_level() {
    let mut app = world_app(LevelProgress::new(3));
    let player = app.world_mut().spawn(Player).id();
    let wall = app.world_mut().spawn(LevelEntity).id();
    let exit = app.world_mut().spawn(LevelExit).id();

    touch(&mut app, player, wall);
    touch(&mut app, wall, exit);
    app.update();
    app.update();

    assert_eq!(state(&app), GameState::Playing);
    assert!(app.world().entities().contains(wall));
}

#[test]
fn leaving_play_clears_level_entities_and_bounds() {
    let mut app = world_app(LevelProgress::new(1));
    let platform = app.world_mut().spawn(LevelEntity).id();
    let keeper = app.world_mut().spawn_empty().id();
    app.insert_resource(CameraBounds {
        min: Vec2::ZERO,
        max: Vec2::splat(10.0),
    });

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::GameOver);
    app.update();

    assert_eq!(state(&app), GameState::GameOver);
    assert!(!app.world().entities().contains(platform));
    assert!(app.world().entities().contains(keeper));
    assert!(app.world().get_resource::<CameraBounds>().is_none());
}
