use serde::{Deserialize, Serialize};

/// A stroke color in hue/saturation/brightness/alpha form.
///
/// Hue is in degrees `[0, 360]`; saturation, brightness and alpha are percentages
/// `[0, 100]`. Out-of-range components are clamped on construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
    pub alpha: f32,
}

impl Color {
    pub const BLACK: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        brightness: 0.0,
        alpha: 100.0,
    };

    /// Builds a color, clamping each component into its scale. NaN maps to zero.
    pub fn hsba(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Self {
        Self {
            hue: clamp_scale(hue, 360.0),
            saturation: clamp_scale(saturation, 100.0),
            brightness: clamp_scale(brightness, 100.0),
            alpha: clamp_scale(alpha, 100.0),
        }
    }

    /// Fully opaque color.
    pub fn hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self::hsba(hue, saturation, brightness, 100.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

fn clamp_scale(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_are_clamped() {
        // The shrub preset palette asks for brightness 151.
        let c = Color::hsba(400.0, -5.0, 151.0, f32::NAN);
        assert_eq!(c.hue, 360.0);
        assert_eq!(c.saturation, 0.0);
        assert_eq!(c.brightness, 100.0);
        assert_eq!(c.alpha, 0.0);
    }

    #[test]
    fn hsb_is_opaque() {
        assert_eq!(Color::hsb(120.0, 100.0, 61.0).alpha, 100.0);
    }
}
