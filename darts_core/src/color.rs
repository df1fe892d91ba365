use serde::{Deserialize, Serialize};

/// Opaque RGB colour used by the menu model.
///
/// Serialised as a `[r, g, b]` triple so option files stay short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const LIGHT_BLUE: Color = Color::rgb(173, 216, 230);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend from `self` toward `to`. `t` is clamped to [0, 1].
    pub fn lerp(self, to: Color, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let channel = |a: u8, b: u8| -> u8 {
            let v = a as f32 + (b as f32 - a as f32) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Color {
            r: channel(self.r, to.r),
            g: channel(self.g, to.g),
            b: channel(self.b, to.b),
        }
    }

    /// Composite this colour over `background` with the given opacity.
    pub fn over(self, background: Color, alpha: f32) -> Color {
        background.lerp(self, alpha)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::rgb(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let gold = Color::rgb(255, 183, 3);
        assert_eq!(Color::WHITE.lerp(gold, 0.0), Color::WHITE);
        assert_eq!(Color::WHITE.lerp(gold, 1.0), gold);
    }

    #[test]
    fn test_lerp_clamps_factor() {
        let red = Color::rgb(200, 0, 0);
        assert_eq!(Color::BLACK.lerp(red, 3.0), red);
        assert_eq!(Color::BLACK.lerp(red, -1.0), Color::BLACK);
        assert_eq!(Color::BLACK.lerp(red, f32::NAN), Color::BLACK);
    }

    #[test]
    fn test_over_half_alpha() {
        let c = Color::rgb(200, 100, 0).over(Color::BLACK, 0.5);
        assert_eq!(c, Color::rgb(100, 50, 0));
    }
}
