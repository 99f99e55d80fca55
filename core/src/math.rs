//! Angle math helpers.
//!
//! All angles are in degrees. Yaw is circular and may accumulate past 360 in
//! either direction; pitch is always clamped to the vertical limits.

/// Lower pitch limit in degrees (cube tipped fully toward the viewer).
pub const PITCH_MIN: f32 = -90.0;

/// Upper pitch limit in degrees (cube tipped fully away from the viewer).
pub const PITCH_MAX: f32 = 90.0;

/// Normalize an angle to the half-open range [0°, 360°).
pub fn normalize_degrees(deg: f32) -> f32 {
    deg.rem_euclid(360.0)
}

/// Shortest signed rotation taking `current` to an angle congruent to
/// `target` mod 360, in degrees.
///
/// The result lies in (-180°, +180°]: applying `current + delta` lands on an
/// angle congruent to `target`, and `|delta| <= 180`. Exact antipodal targets
/// resolve to +180 (never -180) so the direction is deterministic. Non-finite
/// inputs yield 0 to avoid NaN propagation into the rotation state.
pub fn shortest_signed_delta(current: f32, target: f32) -> f32 {
    let delta = target - current;
    if !delta.is_finite() {
        return 0.0;
    }
    let wrapped = (delta + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid maps an exact antipode to -180; tie-break to +180.
    if wrapped == -180.0 { 180.0 } else { wrapped }
}

/// Clamp a pitch angle to [`PITCH_MIN`], [`PITCH_MAX`].
///
/// Non-finite input collapses to 0 (level), matching the engine's
/// normalize-never-reject policy.
pub fn clamp_pitch(pitch: f32) -> f32 {
    if !pitch.is_finite() {
        return 0.0;
    }
    pitch.clamp(PITCH_MIN, PITCH_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_both_directions() {
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-30.0), 330.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
    }

    #[test]
    fn shortest_delta_prefers_short_way() {
        assert_eq!(shortest_signed_delta(170.0, 180.0), 10.0);
        assert_eq!(shortest_signed_delta(170.0, -180.0), 10.0);
        assert_eq!(shortest_signed_delta(-30.0, -90.0), -60.0);
        assert_eq!(shortest_signed_delta(10.0, 350.0), -20.0);
    }

    #[test]
    fn shortest_delta_antipode_resolves_positive() {
        assert_eq!(shortest_signed_delta(0.0, 180.0), 180.0);
        assert_eq!(shortest_signed_delta(90.0, 270.0), 180.0);
        assert_eq!(shortest_signed_delta(0.0, -180.0), 180.0);
    }

    #[test]
    fn shortest_delta_congruence_and_bound() {
        let cases = [
            (0.0, 0.0),
            (0.0, 359.0),
            (725.0, -1000.0),
            (-45.0, 44.0),
            (15360.5, 12.25),
            (-0.5, 0.5),
        ];
        for (current, target) in cases {
            let delta = shortest_signed_delta(current, target);
            assert!(delta > -180.0 && delta <= 180.0, "delta {delta} out of range");
            let landed = normalize_degrees(current + delta);
            let expected = normalize_degrees(target);
            assert!(
                (landed - expected).abs() < 1e-3 || (landed - expected).abs() > 359.9,
                "{current} + {delta} should be congruent to {target}, got {landed}"
            );
        }
    }

    #[test]
    fn shortest_delta_non_finite_is_zero() {
        assert_eq!(shortest_signed_delta(f32::NAN, 10.0), 0.0);
        assert_eq!(shortest_signed_delta(0.0, f32::INFINITY), 0.0);
    }

    #[test]
    fn clamp_pitch_bounds() {
        assert_eq!(clamp_pitch(120.0), 90.0);
        assert_eq!(clamp_pitch(-91.0), -90.0);
        assert_eq!(clamp_pitch(45.0), 45.0);
        assert_eq!(clamp_pitch(f32::NAN), 0.0);
    }
}
