use crate::drift::NoiseSource;
use crate::state::VesselState;

// 1 knot ~ 1/3600 degree per second. Deliberately flat-earth; longitude is
// not scaled by latitude.
const KNOTS_TO_DEG_PER_SEC: f64 = 1.0 / 3_600.0;

const SPEED_DRIFT_KN: f64 = 0.05;
const COG_DRIFT_DEG: f64 = 0.5;
const TWS_DRIFT_KN: f64 = 0.1;
const TWD_DRIFT_DEG: f64 = 1.0;

/// Dead-reckon the vessel forward by `elapsed_secs`, then let speed, course,
/// and wind wander within their bands. The wander is applied per tick, not
/// per elapsed second, so a zero-length tick still perturbs.
pub fn advance(state: &mut VesselState, elapsed_secs: f64, noise: &mut impl NoiseSource) {
    let rate = state.boat_speed * KNOTS_TO_DEG_PER_SEC;
    let cog_rad = state.cog.to_radians();

    state.longitude += cog_rad.sin() * rate * elapsed_secs;
    state.latitude += cog_rad.cos() * rate * elapsed_secs;

    state.boat_speed =
        (state.boat_speed + noise.uniform_in(-SPEED_DRIFT_KN, SPEED_DRIFT_KN)).clamp(2.0, 8.0);
    state.cog = wrap_degrees(state.cog + noise.uniform_in(-COG_DRIFT_DEG, COG_DRIFT_DEG));
    state.tws = (state.tws + noise.uniform_in(-TWS_DRIFT_KN, TWS_DRIFT_KN)).clamp(5.0, 20.0);
    state.twd = wrap_degrees(state.twd + noise.uniform_in(-TWD_DRIFT_DEG, TWD_DRIFT_DEG));
}

// Double mod keeps the result strictly below 360 even when a tiny negative
// input rounds `value + 360.0` up to 360 exactly.
fn wrap_degrees(value: f64) -> f64 {
    ((value % 360.0) + 360.0) % 360.0
}

#[cfg(test)]
mod tests {
    use super::advance;
    use crate::drift::{DriftGenerator, NoiseSource};
    use crate::state::VesselState;

    // Every drift band is symmetric around zero, so the midpoint sample
    // yields no perturbation at all.
    struct ZeroNoise;

    impl NoiseSource for ZeroNoise {
        fn next_unit(&mut self) -> f64 {
            0.5
        }
    }

    // Always samples the top of the band.
    struct MaxNoise;

    impl NoiseSource for MaxNoise {
        fn next_unit(&mut self) -> f64 {
            1.0
        }
    }

    #[test]
    fn one_second_at_seed_speed_moves_the_expected_delta() {
        let mut state = VesselState::seeded(0);
        let rate = 5.5 / 3_600.0;
        let cog_rad = 225.0_f64.to_radians();
        let expected_lat = 37.8199 + cog_rad.cos() * rate;
        let expected_lon = -122.4783 + cog_rad.sin() * rate;

        advance(&mut state, 1.0, &mut ZeroNoise);

        assert!((state.latitude - expected_lat).abs() < 1e-12);
        assert!((state.longitude - expected_lon).abs() < 1e-12);
    }

    #[test]
    fn zero_elapsed_keeps_position_but_still_perturbs() {
        let mut state = VesselState::seeded(0);

        advance(&mut state, 0.0, &mut MaxNoise);

        assert_eq!(state.latitude, 37.8199);
        assert_eq!(state.longitude, -122.4783);
        assert_eq!(state.boat_speed, 5.55);
        assert_eq!(state.cog, 225.5);
    }

    #[test]
    fn zero_noise_leaves_speed_course_and_wind_untouched() {
        let mut state = VesselState::seeded(0);

        advance(&mut state, 1.0, &mut ZeroNoise);

        assert_eq!(state.boat_speed, 5.5);
        assert_eq!(state.cog, 225.0);
        assert_eq!(state.tws, 12.0);
        assert_eq!(state.twd, 270.0);
    }

    #[test]
    fn invariants_hold_over_many_drifting_ticks() {
        let mut state = VesselState::seeded(0);
        let mut drift = DriftGenerator::new(42);

        for _ in 0..2_000 {
            advance(&mut state, 1.0, &mut drift);

            assert!((2.0..=8.0).contains(&state.boat_speed));
            assert!((5.0..=20.0).contains(&state.tws));
            assert!((0.0..360.0).contains(&state.cog));
            assert!((0.0..360.0).contains(&state.twd));
        }
    }

    #[test]
    fn course_wraps_past_north() {
        let mut state = VesselState::seeded(0);
        state.cog = 359.8;

        advance(&mut state, 0.0, &mut MaxNoise);

        assert!((state.cog - 0.3).abs() < 1e-9);
    }

    #[test]
    fn speed_clamps_at_the_band_edges() {
        let mut state = VesselState::seeded(0);
        state.boat_speed = 7.99;
        state.tws = 19.99;

        advance(&mut state, 0.0, &mut MaxNoise);

        assert_eq!(state.boat_speed, 8.0);
        assert_eq!(state.tws, 20.0);
    }
}
