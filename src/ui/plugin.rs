//! UI plugin - menus, HUD, and the inventory screen.

use bevy::prelude::*;

use super::{hud, inventory_panel};
use crate::core::{GameState, LevelConfig, PlayState};
use crate::world::LevelProgress;

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        hud::setup_hud_systems(app);
        inventory_panel::setup_inventory_panel(app);

        app
            // Start menu
            .add_systems(OnEnter(GameState::StartMenu), setup_start_menu)
            .add_systems(OnExit(GameState::StartMenu), despawn_screen::<StartMenuUi>)

            // Pause menu
            .add_systems(OnEnter(PlayState::Paused), setup_pause_menu)
            .add_systems(OnExit(PlayState::Paused), despawn_screen::<PauseMenuUi>)

            // Level results
            .add_systems(OnEnter(GameState::LevelPass), setup_level_pass)
            .add_systems(OnExit(GameState::LevelPass), despawn_screen::<ResultUi>)
            .add_systems(OnEnter(GameState::LevelComplete), setup_level_complete)
            .add_systems(OnExit(GameState::LevelComplete), despawn_screen::<ResultUi>)

            // Game over
            .add_systems(OnEnter(GameState::GameOver), setup_game_over)
            .add_systems(OnExit(GameState::GameOver), despawn_screen::<ResultUi>)

            .add_systems(Update, menu_button_input);
    }
}

/// Marker for start menu UI entities.
#[derive(Component)]
struct StartMenuUi;

/// Marker for pause menu UI entities.
#[derive(Component)]
struct PauseMenuUi;

/// Marker for level pass, level complete and game over screens.
#[derive(Component)]
struct ResultUi;

/// Marker for menu buttons.
#[derive(Component, Clone, Copy, Debug)]
enum MenuButton {
    NewGame,
    Quit,
    Resume,
    MainMenu,
    Retry,
    NextLevel,
}

const BUTTON_IDLE: Color = Color::srgb(0.15, 0.17, 0.14);
const BUTTON_HOVER: Color = Color::srgb(0.25, 0.28, 0.22);
const BUTTON_PRESSED: Color = Color::srgb(0.3, 0.34, 0.27);

fn setup_start_menu(commands: Commands) {
    spawn_screen(
        commands,
        StartMenuUi,
        "HOLLOW GROVE",
        Color::srgb(0.7, 0.8, 0.6),
        Color::srgb(0.05, 0.07, 0.05),
        &[("New Game", MenuButton::NewGame), ("Quit", MenuButton::Quit)],
    );
}

fn setup_pause_menu(commands: Commands) {
    spawn_screen(
        commands,
        PauseMenuUi,
        "PAUSED",
        Color::srgb(0.8, 0.8, 0.85),
        Color::srgba(0.0, 0.0, 0.0, 0.7),
        &[
            ("Resume", MenuButton::Resume),
            ("Main Menu", MenuButton::MainMenu),
        ],
    );
}

fn setup_level_pass(commands: Commands, progress: Res<LevelProgress>) {
    spawn_screen(
        commands,
        ResultUi,
        &format!("LEVEL {} CLEARED", progress.current()),
        Color::srgb(0.75, 0.85, 0.5),
        Color::srgba(0.02, 0.06, 0.02, 0.9),
        &[
            ("Next Level", MenuButton::NextLevel),
            ("Main Menu", MenuButton::MainMenu),
        ],
    );
}

fn setup_level_complete(commands: Commands) {
    spawn_screen(
        commands,
        ResultUi,
        "THE GROVE IS CLEAR",
        Color::srgb(0.9, 0.85, 0.5),
        Color::srgba(0.04, 0.04, 0.02, 0.9),
        &[("Main Menu", MenuButton::MainMenu)],
    );
}

fn setup_game_over(commands: Commands) {
    spawn_screen(
        commands,
        ResultUi,
        "YOU DIED",
        Color::srgb(0.8, 0.2, 0.2),
        Color::srgba(0.1, 0.0, 0.0, 0.9),
        &[
            ("Retry", MenuButton::Retry),
            ("Main Menu", MenuButton::MainMenu),
        ],
    );
}

/// Full-screen overlay with a title and a column of buttons.
fn spawn_screen<M: Component>(
    mut commands: Commands,
    marker: M,
    title: &str,
    title_color: Color,
    background: Color,
    buttons: &[(&str, MenuButton)],
) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            BackgroundColor(background),
            GlobalZIndex(10),
            marker,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(50.0)),
                    ..default()
                },
            ));

            for (label, button) in buttons {
                spawn_menu_button(parent, label, *button);
            }
        });
}

/// Helper to spawn a menu button.
fn spawn_menu_button(parent: &mut ChildBuilder, text: &str, button: MenuButton) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(200.0),
                height: Val::Px(50.0),
                margin: UiRect::all(Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_IDLE),
            button,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(text),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
            ));
        });
}

/// Handle menu button interactions on every screen.
fn menu_button_input(
    mut interaction_query: Query<
        (&Interaction, &MenuButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    level_config: Res<LevelConfig>,
    mut progress: ResMut<LevelProgress>,
    mut next_game_state: ResMut<NextState<GameState>>,
    mut next_play_state: ResMut<NextState<PlayState>>,
    mut exit: EventWriter<AppExit>,
) {
    for (interaction, button, mut bg_color) in interaction_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                *bg_color = BUTTON_PRESSED.into();
                match button {
                    MenuButton::NewGame => {
                        if let Err(e) = progress.load(level_config.first_level) {
                            warn!("{}. Starting from level 1.", e);
                            let _ = progress.load(1);
                        }
                        next_game_state.set(GameState::Playing);
                    }
                    MenuButton::Quit => {
                        exit.send(AppExit::Success);
                    }
                    MenuButton::Resume => {
                        next_play_state.set(PlayState::Exploring);
                    }
                    MenuButton::MainMenu => {
                        next_game_state.set(GameState::StartMenu);
                    }
                    MenuButton::Retry => {
                        info!("Retrying level {}", progress.reload());
                        next_game_state.set(GameState::Playing);
                    }
                    MenuButton::NextLevel => match progress.next() {
                        Ok(level) => {
                            info!("Advancing to level {}", level);
                            next_game_state.set(GameState::Playing);
                        }
                        Err(e) => {
                            info!("{}", e);
                            next_game_state.set(GameState::LevelComplete);
                        }
                    },
                }
            }
            Interaction::Hovered => {
                *bg_color = BUTTON_HOVER.into();
            }
            Interaction::None => {
                *bg_color = BUTTON_IDLE.into();
            }
        }
    }
}

/// Despawn every entity of one screen.
fn despawn_screen<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
