//! Which level is being played.

use bevy::prelude::*;

use super::error::LevelError;

/// Current level number and how many levels exist.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    current: u32,
    max: u32,
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self { current: 1, max: 1 }
    }
}

impl LevelProgress {
    pub fn new(max: u32) -> Self {
        Self {
            current: 1,
            max: max.max(1),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_last(&self) -> bool {
        self.current >= self.max
    }

    /// Select level `number`.
    pub fn load(&mut self, number: u32) -> Result<u32, LevelError> {
        if number < 1 || number > self.max {
            return Err(LevelError::OutOfRange {
                requested: number,
                max: self.max,
            });
        }
        self.current = number;
        Ok(number)
    }

    /// Advance to the following level.
    pub fn next(&mut self) -> Result<u32, LevelError> {
        if self.is_last() {
            return Err(LevelError::NoNextLevel(self.current));
        }
        self.load(self.current + 1)
    }

    /// Play the current level again.
    pub fn reload(&self) -> u32 {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_rejects_out_of_range() {
        let mut progress = LevelProgress::new(3);
        assert_eq!(
            progress.load(0),
            Err(LevelError::OutOfRange { requested: 0, max: 3 })
        );
        assert_eq!(
            progress.load(4),
            Err(LevelError::OutOfRange { requested: 4, max: 3 })
        );
        assert_eq!(progress.current(), 1);
        assert_eq!(progress.load(3), Ok(3));
    }

    #[test]
    fn next_stops_at_last_level() {
        let mut progress = LevelProgress::new(2);
        assert_eq!(progress.next(), Ok(2));
        assert!(progress.is_last());
        assert_eq!(progress.next(), Err(LevelError::NoNextLevel(2)));
        assert_eq!(progress.reload(), 2);
    }
}
