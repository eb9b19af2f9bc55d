//! Level progression errors.

use thiserror::Error;

/// Reasons a level change was refused. Progress is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LevelError {
    /// Requested level is outside `1..=max`.
    #[error("Invalid level number {requested} (levels 1..={max})")]
    OutOfRange { requested: u32, max: u32 },

    /// `next` was asked for while on the final level.
    #[error("Level {0} is the last level")]
    NoNextLevel(u32),
}
