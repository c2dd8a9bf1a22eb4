//! Scalar easing steps shared by every animated channel

/// Move `current` toward `target` by `factor` of the remaining distance.
///
/// With `factor` in (0, 1] the result never overshoots the target.
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Whether `current` is still more than `tolerance` away from `target`.
///
/// A NaN distance is not "more than" anything, so a NaN channel stops.
pub fn exceeds_tolerance(current: f32, target: f32, tolerance: f32) -> bool {
    (target - current).abs() > tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approach_step() {
        assert!((approach(0.0, 100.0, 0.1) - 10.0).abs() < 1e-5);
        assert!((approach(50.0, 0.0, 0.1) - 45.0).abs() < 1e-5);
    }

    #[test]
    fn test_approach_full_factor_snaps() {
        assert_eq!(approach(3.0, 7.0, 1.0), 7.0);
    }

    #[test]
    fn test_approach_never_overshoots() {
        let mut v = -40.0;
        for _ in 0..200 {
            let next = approach(v, 25.0, 0.1);
            assert!(next >= v && next <= 25.0);
            v = next;
        }
    }

    #[test]
    fn test_tolerance_boundary() {
        assert!(!exceeds_tolerance(1.0, 1.0, 0.01));
        assert!(!exceeds_tolerance(1.0, 1.005, 0.01));
        assert!(exceeds_tolerance(1.0, 1.5, 0.01));
        assert!(exceeds_tolerance(-2.0, 2.0, 0.01));
    }

    #[test]
    fn test_non_finite_distance_does_not_exceed() {
        assert!(!exceeds_tolerance(0.0, f32::NAN, 0.01));
        assert!(!exceeds_tolerance(f32::NAN, 3.0, 0.01));
        assert!(!exceeds_tolerance(f32::INFINITY, f32::INFINITY, 0.01));
    }
}
