//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. For example,
//! player movement only runs while `PlayState::Exploring` is active, while
//! menu systems only run in the matching top-level state.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` while data files are read
/// - Move to `StartMenu` when loading completes
/// - `Playing` while a level is running
/// - `LevelPass` when a level exit is reached and more levels remain
/// - `LevelComplete` when the final level's exit is reached
/// - `GameOver` when the player dies
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading data files
    #[default]
    Loading,
    /// Start screen
    StartMenu,
    /// Active level
    Playing,
    /// Level cleared, next level available
    LevelPass,
    /// Final level cleared
    LevelComplete,
    /// Player has died
    GameOver,
}

/// Sub-states for gameplay - only active when `GameState::Playing`.
///
/// Pausing is a sub-state so the level stays alive underneath the overlay.
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameState = GameState::Playing)]
pub enum PlayState {
    /// Normal gameplay - movement, combat, exploration
    #[default]
    Exploring,
    /// Inventory screen is open
    Inventory,
    /// Pause overlay, virtual time frozen
    Paused,
}
