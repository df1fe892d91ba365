use crate::color::Color;

/// Angular frequency of the selection pulse in radians per second.
pub const PULSE_FREQUENCY: f32 = 5.0;
pub const PULSE_MIN_ALPHA: f32 = 0.2;
pub const PULSE_MAX_ALPHA: f32 = 1.0;

/// Blend factor of the selected-entry highlight at `elapsed` seconds.
pub fn pulse_alpha(elapsed: f32) -> f32 {
    let wave = ((elapsed * PULSE_FREQUENCY).sin() + 1.0) / 2.0;
    let alpha = wave * (PULSE_MAX_ALPHA - PULSE_MIN_ALPHA) + PULSE_MIN_ALPHA;
    alpha.clamp(PULSE_MIN_ALPHA, PULSE_MAX_ALPHA)
}

/// Highlight colour of the selected entry: white blended toward `selected`.
pub fn pulse_color(selected: Color, elapsed: f32) -> Color {
    Color::WHITE.lerp(selected, pulse_alpha(elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_alpha_bounds() {
        let mut rng = StdRng::seed_from_u64(0xDA27);
        for i in 0..2_000 {
            let t = i as f32 * 0.01;
            let a = pulse_alpha(t);
            assert!((PULSE_MIN_ALPHA..=PULSE_MAX_ALPHA).contains(&a), "t={t} a={a}");

            let t: f32 = rng.gen_range(0.0..100_000.0);
            let a = pulse_alpha(t);
            assert!((PULSE_MIN_ALPHA..=PULSE_MAX_ALPHA).contains(&a), "t={t} a={a}");
        }
    }

    #[test]
    fn test_alpha_extremes() {
        let peak = std::f32::consts::FRAC_PI_2 / PULSE_FREQUENCY;
        assert!((pulse_alpha(peak) - 1.0).abs() < 1e-5);
        assert!((pulse_alpha(3.0 * peak) - 0.2).abs() < 1e-5);
        assert!((pulse_alpha(0.0) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_color_at_peak_is_selected() {
        let gold = Color::rgb(255, 183, 3);
        let peak = std::f32::consts::FRAC_PI_2 / PULSE_FREQUENCY;
        assert_eq!(pulse_color(gold, peak), gold);
    }
}
