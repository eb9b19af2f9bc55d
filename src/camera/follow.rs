//! Dead-zone camera follow with smoothing and a bounds clamp.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::smooth_damp;

/// Camera tuning, loaded from the `camera` section of the game config.
#[derive(Resource, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Full size of the dead zone around the focus point
    pub dead_zone: (f32, f32),
    /// SmoothDamp time per axis, in seconds
    pub smooth_time: (f32, f32),
    pub limit_to_bounds: bool,
    /// World units visible vertically
    pub view_height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            dead_zone: (2.0, 1.5),
            smooth_time: (0.15, 0.3),
            limit_to_bounds: true,
            view_height: 12.0,
        }
    }
}

/// World-space rectangle the camera may show. Set by the level.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct CameraBounds {
    pub min: Vec2,
    pub max: Vec2,
}

/// Move `focus` just far enough that `target` lies inside the dead zone.
pub fn apply_dead_zone(focus: Vec2, target: Vec2, size: Vec2) -> Vec2 {
    let half = size.max(Vec2::ZERO) * 0.5;
    let axis = |focus: f32, target: f32, half: f32| {
        let delta = target - focus;
        if delta > half {
            target - half
        } else if delta < -half {
            target + half
        } else {
            focus
        }
    };
    Vec2::new(
        axis(focus.x, target.x, half.x),
        axis(focus.y, target.y, half.y),
    )
}

/// Keep the view inside `bounds`.
///
/// With no view size the raw position is clamped. An axis where the view is
/// wider than the bounds centres on the bounds.
pub fn clamp_to_bounds(position: Vec2, bounds: &CameraBounds, half_view: Option<Vec2>) -> Vec2 {
    let Some(half) = half_view else {
        return position.clamp(bounds.min, bounds.max);
    };

    let axis = |value: f32, min: f32, max: f32, half: f32| {
        let (lo, hi) = (min + half, max - half);
        if lo > hi {
            (min + max) * 0.5
        } else {
            value.clamp(lo, hi)
        }
    };
    Vec2::new(
        axis(position.x, bounds.min.x, bounds.max.x, half.x),
        axis(position.y, bounds.min.y, bounds.max.y, half.y),
    )
}

/// Follow state carried by the camera entity.
#[derive(Component, Debug, Default)]
pub struct CameraFollow {
    target: Option<Entity>,
    focus: Option<Vec2>,
    velocity: Vec2,
}

impl CameraFollow {
    pub fn target(&self) -> Option<Entity> {
        self.target
    }

    /// Follow `target` from scratch: focus and velocity are reset.
    pub fn set_target(&mut self, target: Option<Entity>) {
        self.target = target;
        self.focus = None;
        self.velocity = Vec2::ZERO;
    }

    /// Advance one frame and return the new camera position.
    pub fn step(
        &mut self,
        current: Vec2,
        target: Vec2,
        delta: f32,
        config: &CameraConfig,
        bounds: Option<&CameraBounds>,
        half_view: Option<Vec2>,
    ) -> Vec2 {
        let focus = self.focus.unwrap_or(target);
        let focus = apply_dead_zone(focus, target, Vec2::from(config.dead_zone));
        self.focus = Some(focus);

        let mut desired = Vec2::new(
            smooth_damp(
                current.x,
                focus.x,
                &mut self.velocity.x,
                config.smooth_time.0,
                f32::INFINITY,
                delta,
            ),
            smooth_damp(
                current.y,
                focus.y,
                &mut self.velocity.y,
                config.smooth_time.1,
                f32::INFINITY,
                delta,
            ),
        );

        if config.limit_to_bounds {
            if let Some(bounds) = bounds {
                desired = clamp_to_bounds(desired, bounds, half_view);
            }
        }
        desired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> CameraBounds {
        CameraBounds {
            min: Vec2::new(-10.0, -5.0),
            max: Vec2::new(10.0, 5.0),
        }
    }

    #[test]
    fn dead_zone_holds_focus_inside() {
        let focus = apply_dead_zone(Vec2::ZERO, Vec2::new(0.8, -0.5), Vec2::new(2.0, 1.5));
        assert_eq!(focus, Vec2::ZERO);
    }

    #[test]
    fn dead_zone_drags_focus_to_edge() {
        let focus = apply_dead_zone(Vec2::ZERO, Vec2::new(3.0, -2.0), Vec2::new(2.0, 1.5));
        assert_eq!(focus, Vec2::new(2.0, -1.25));
    }

    #[test]
    fn negative_dead_zone_acts_as_zero() {
        let target = Vec2::new(0.4, 0.2);
        assert_eq!(apply_dead_zone(Vec2::ZERO, target, Vec2::new(-1.0, -1.0)), target);
    }

    #[test]
    fn clamp_keeps_view_inside_bounds() {
        let clamped = clamp_to_bounds(Vec2::new(9.0, 0.0), &bounds(), Some(Vec2::new(4.0, 3.0)));
        assert_eq!(clamped, Vec2::new(6.0, 0.0));
    }

    #[test]
    fn oversized_view_centres_on_bounds() {
        let clamped = clamp_to_bounds(Vec2::new(3.0, 4.0), &bounds(), Some(Vec2::new(12.0, 3.0)));
        assert_eq!(clamped, Vec2::new(0.0, 2.0));
    }

    #[test]
    fn no_view_size_clamps_raw_position() {
        let clamped = clamp_to_bounds(Vec2::new(12.0, -7.0), &bounds(), None);
        assert_eq!(clamped, Vec2::new(10.0, -5.0));
    }

    #[test]
    fn new_target_resets_focus_and_velocity() {
        let config = CameraConfig::default();
        let mut follow = CameraFollow::default();
        follow.set_target(Some(Entity::from_raw(1)));
        follow.step(Vec2::ZERO, Vec2::new(5.0, 0.0), 1.0 / 60.0, &config, None, None);
        assert!(follow.velocity.x > 0.0);

        follow.set_target(Some(Entity::from_raw(2)));
        assert_eq!(follow.velocity, Vec2::ZERO);
        assert!(follow.focus.is_none());
    }

    #[test]
    fn follow_settles_on_target() {
        let config = CameraConfig::default();
        let mut follow = CameraFollow::default();
        let target = Vec2::new(4.0, 2.0);
        let mut position = Vec2::ZERO;
        for _ in 0..300 {
            position = follow.step(position, target, 1.0 / 60.0, &config, None, None);
        }
        // The first frame snaps the focus onto the target
        assert!(position.distance(target) < 0.01);
    }
}
