use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

pub const DEFAULT_PALETTE_SIZE: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    Empty,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "palette must contain at least one colour"),
        }
    }
}

impl Error for PaletteError {}

/// A colour ramp indexed by the running colour index of the chaos walk.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbPalette {
    colours: Vec<Colour>,
}

impl RgbPalette {
    pub fn from_colours(colours: Vec<Colour>) -> Result<Self, PaletteError> {
        if colours.is_empty() {
            return Err(PaletteError::Empty);
        }

        Ok(Self { colours })
    }

    /// Samples `colour_at` evenly over `[0, 1]`; always at least two entries.
    pub(crate) fn from_ramp(size: usize, colour_at: impl Fn(f64) -> Colour) -> Self {
        let last = size.max(2) - 1;
        let colours = (0..=last)
            .map(|i| colour_at(i as f64 / last as f64))
            .collect();

        Self { colours }
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Maps a colour index in `[0, 1]` to the nearest palette entry.
    /// Out-of-range indices are clamped.
    #[must_use]
    pub fn lookup(&self, color_index: f64) -> Colour {
        let last = self.colours.len() - 1;
        let idx = (color_index.clamp(0.0, 1.0) * last as f64 + 0.5) as usize;

        self.colours[idx.min(last)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grey_ramp() -> RgbPalette {
        RgbPalette::from_colours(
            (0..=255u8).map(|v| Colour { r: v, g: v, b: v }).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_palette_is_rejected() {
        assert_eq!(RgbPalette::from_colours(vec![]), Err(PaletteError::Empty));
    }

    #[test]
    fn test_lookup_endpoints() {
        let palette = grey_ramp();

        assert_eq!(palette.lookup(0.0), Colour { r: 0, g: 0, b: 0 });
        assert_eq!(palette.lookup(1.0), Colour { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn test_lookup_rounds_to_nearest_entry() {
        let palette = grey_ramp();

        // 0.5 * 255 + 0.5 = 128.0
        assert_eq!(palette.lookup(0.5).r, 128);
        assert_eq!(palette.lookup(1.0 / 255.0).r, 1);
    }

    #[test]
    fn test_lookup_clamps_out_of_range() {
        let palette = grey_ramp();

        assert_eq!(palette.lookup(-3.0).r, 0);
        assert_eq!(palette.lookup(7.5).r, 255);
        assert_eq!(palette.lookup(f64::NAN).r, 0);
    }

    #[test]
    fn test_ramp_has_at_least_two_entries() {
        let palette = RgbPalette::from_ramp(0, |t| {
            let v = (t * 255.0) as u8;
            Colour { r: v, g: v, b: v }
        });

        assert_eq!(palette.len(), 2);
        assert_eq!(palette.lookup(0.0).r, 0);
        assert_eq!(palette.lookup(1.0).r, 255);
    }

    #[test]
    fn test_single_colour_palette() {
        let red = Colour { r: 255, g: 0, b: 0 };
        let palette = RgbPalette::from_colours(vec![red]).unwrap();

        assert_eq!(palette.len(), 1);
        assert_eq!(palette.lookup(0.7), red);
    }
}
