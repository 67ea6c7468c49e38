use crate::core::data::colour::Colour;
use crate::core::palette::rgb_palette::RgbPalette;

/// Black through red, orange and yellow to white.
#[must_use]
pub fn fire_gradient_colour(t: f64) -> Colour {
    let t = t.clamp(0.0, 1.0);

    let (r, g, b) = if t < 0.25 {
        let local_t = t / 0.25;
        ((local_t * 255.0) as u8, 0, 0)
    } else if t < 0.5 {
        let local_t = (t - 0.25) / 0.25;
        (255, (local_t * 165.0) as u8, 0)
    } else if t < 0.75 {
        let local_t = (t - 0.5) / 0.25;
        (255, (165.0 + local_t * 90.0) as u8, 0)
    } else {
        let local_t = (t - 0.75) / 0.25;
        (255, 255, (local_t * 255.0) as u8)
    };

    Colour { r, g, b }
}

#[must_use]
pub fn fire_gradient(size: usize) -> RgbPalette {
    RgbPalette::from_ramp(size, fire_gradient_colour)
}
