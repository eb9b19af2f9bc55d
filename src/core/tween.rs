//! Critically damped smoothing used for camera follow.

/// Per-axis smoothing state, mirrored from the classic SmoothDamp spring.
///
/// `velocity` is carried between frames by the caller.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    max_speed: f32,
    delta: f32,
) -> f32 {
    if delta <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(0.0001);
    let omega = 2.0 / smooth_time;
    let x = omega * delta;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let max_change = max_speed * smooth_time;
    let change = (current - target).clamp(-max_change, max_change);
    let clamped_target = current - change;

    let temp = (*velocity + omega * change) * delta;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = clamped_target + (change + temp) * exp;

    // Prevent overshooting
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = (output - target) / delta;
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_towards_target() {
        let mut velocity = 0.0;
        let mut position = 0.0;
        for _ in 0..240 {
            position = smooth_damp(position, 10.0, &mut velocity, 0.15, f32::INFINITY, 1.0 / 60.0);
        }
        assert!((position - 10.0).abs() < 0.01);
    }

    #[test]
    fn never_overshoots() {
        let mut velocity = 0.0;
        let mut position = 0.0;
        for _ in 0..120 {
            position = smooth_damp(position, 5.0, &mut velocity, 0.3, f32::INFINITY, 1.0 / 30.0);
            assert!(position <= 5.0 + f32::EPSILON);
        }
    }

    #[test]
    fn zero_delta_keeps_position() {
        let mut velocity = 3.0;
        assert_eq!(smooth_damp(1.0, 4.0, &mut velocity, 0.2, f32::INFINITY, 0.0), 1.0);
        assert_eq!(velocity, 3.0);
    }
}
