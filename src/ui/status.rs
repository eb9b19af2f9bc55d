//! Status bar scaling for the inventory's weapon readouts.

/// Portion of a bar to fill. A non-positive `max` counts as 1.
pub fn fill_ratio(current: f32, max: f32) -> f32 {
    let max = if max <= 0.0 { 1.0 } else { max };
    (current / max).clamp(0.0, 1.0)
}

/// Bar maximum for an attack power readout.
pub fn attack_max(power: f32) -> f32 {
    10.0_f32.max(power * 1.5).max(power + 10.0)
}

/// Bar maximum for an attack range readout.
pub fn range_max(range: f32) -> f32 {
    1.0_f32.max(range * 1.2).max(3.0)
}

/// (value, max) for the cooldown bar. Shorter cooldowns fill more.
pub fn cooldown_bar(cooldown: f32) -> (f32, f32) {
    let max = 0.5_f32.max(cooldown * 2.0).max(2.0);
    (max - cooldown, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_ratio_clamps_and_guards_zero_max() {
        assert_eq!(fill_ratio(5.0, 10.0), 0.5);
        assert_eq!(fill_ratio(15.0, 10.0), 1.0);
        assert_eq!(fill_ratio(-1.0, 10.0), 0.0);
        assert_eq!(fill_ratio(0.5, 0.0), 0.5);
        assert_eq!(fill_ratio(3.0, -2.0), 1.0);
    }

    #[test]
    fn attack_scale_grows_with_power() {
        assert_eq!(attack_max(0.0), 10.0);
        assert_eq!(attack_max(18.0), 28.0);
        assert_eq!(attack_max(40.0), 60.0);
    }

    #[test]
    fn range_scale_has_a_floor_of_three() {
        assert_eq!(range_max(1.2), 3.0);
        assert!((range_max(5.0) - 6.0).abs() < 1e-5);
    }

    #[test]
    fn cooldown_bar_is_inverted() {
        assert_eq!(cooldown_bar(0.6), (1.4, 2.0));
        assert_eq!(cooldown_bar(1.5), (1.5, 3.0));
        let (fast, max) = cooldown_bar(0.2);
        let (slow, _) = cooldown_bar(1.0);
        assert!(fill_ratio(fast, max) > fill_ratio(slow, max));
    }
}
