// Simple color struct, created from an unsigned 32 representing RRGGBBAA
// or from hue/saturation/lightness, and written out as a CSS fill style

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    /// Builds a color from a hue in degrees and saturation, lightness and
    /// alpha in `0.0..=1.0`.
    pub fn from_hsla(hue_deg: f64, saturation: f64, lightness: f64, alpha: f64) -> Color {
        let s = saturation.max(0.0).min(1.0);
        let l = lightness.max(0.0).min(1.0);
        let h = hue_deg.rem_euclid(360.0) / 60.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - chroma / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Color {
            r: unit_to_byte(r + m),
            g: unit_to_byte(g + m),
            b: unit_to_byte(b + m),
            a: unit_to_byte(alpha),
        }
    }

    // e.g. "rgba(82, 177, 224, 0.302)"
    pub fn to_css(&self) -> String {
        let alpha = (self.a as f64 / 255.0 * 1000.0).round() / 1000.0;
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

fn unit_to_byte(value: f64) -> u8 {
    (value.max(0.0).min(1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u32_unpacks_rrggbbaa() {
        let c = Color::from_u32(0x11223344);
        assert_eq!(c, Color { r: 0x11, g: 0x22, b: 0x33, a: 0x44 });
    }

    #[test]
    fn primary_hues() {
        assert_eq!(Color::from_hsla(0.0, 1.0, 0.5, 1.0), Color::from_u32(0xff0000ff));
        assert_eq!(Color::from_hsla(120.0, 1.0, 0.5, 1.0), Color::from_u32(0x00ff00ff));
        assert_eq!(Color::from_hsla(240.0, 1.0, 0.5, 1.0), Color::from_u32(0x0000ffff));
    }

    #[test]
    fn hue_wraps_around() {
        assert_eq!(Color::from_hsla(360.0, 1.0, 0.5, 1.0), Color::from_hsla(0.0, 1.0, 0.5, 1.0));
        assert_eq!(Color::from_hsla(-120.0, 1.0, 0.5, 1.0), Color::from_hsla(240.0, 1.0, 0.5, 1.0));
    }

    #[test]
    fn background_palette_sample() {
        let c = Color::from_hsla(200.0, 0.7, 0.6, 1.0);
        assert_eq!((c.r, c.g, c.b), (82, 177, 224));
    }

    #[test]
    fn zero_saturation_is_grey() {
        let c = Color::from_hsla(75.0, 0.0, 0.5, 1.0);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
    }

    #[test]
    fn css_output() {
        assert_eq!(Color::from_u32(0xff0000ff).to_css(), "rgba(255, 0, 0, 1)");
        assert_eq!(Color::from_u32(0x0a141e00).to_css(), "rgba(10, 20, 30, 0)");
    }
}
