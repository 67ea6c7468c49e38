use crate::core::data::colour::Colour;
use crate::core::palette::rgb_palette::RgbPalette;

#[must_use]
pub fn blue_white_gradient_colour(t: f64) -> Colour {
    let t = t.clamp(0.0, 1.0);

    let r = (9.0 * (1.0 - t) * t * t * t * 255.0) as u8;
    let g = (15.0 * (1.0 - t) * (1.0 - t) * t * t * 255.0) as u8;
    let b = (8.5 * (1.0 - t) * (1.0 - t) * (1.0 - t) * t * 255.0) as u8;

    Colour { r, g, b }
}

#[must_use]
pub fn blue_white_gradient(size: usize) -> RgbPalette {
    RgbPalette::from_ramp(size, blue_white_gradient_colour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_endpoints_are_black() {
        assert_eq!(blue_white_gradient_colour(0.0), Colour { r: 0, g: 0, b: 0 });
        assert_eq!(blue_white_gradient_colour(1.0), Colour { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_colour_midpoint() {
        assert_eq!(
            blue_white_gradient_colour(0.5),
            Colour { r: 143, g: 239, b: 135 }
        );
    }

    #[test]
    fn test_colour_quarter() {
        assert_eq!(
            blue_white_gradient_colour(0.25),
            Colour { r: 26, g: 134, b: 228 }
        );
    }
}
