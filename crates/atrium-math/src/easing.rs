//! Easing for build animations and scripted camera moves.

/// Quadratic ease-in-out: slow start, fast middle, slow end.
/// Input outside the unit range is clamped first.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        assert!((ease_in_out(0.0) - 0.0).abs() < 1e-6);
        assert!((ease_in_out(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_symmetric_around_midpoint() {
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert!((ease_in_out(0.25) + ease_in_out(0.75) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_starts_slower_than_linear() {
        assert!(ease_in_out(0.25) < 0.25);
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        assert!((ease_in_out(-3.0) - 0.0).abs() < 1e-6);
        assert!((ease_in_out(7.0) - 1.0).abs() < 1e-6);
    }
}
