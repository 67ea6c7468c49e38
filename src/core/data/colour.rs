#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A linear floating-point RGB triple, as stored in HDR buffers.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct HdrColour {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl HdrColour {
    #[must_use]
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    #[must_use]
    pub fn from_colour(colour: Colour) -> Self {
        Self {
            red: colour.r as f64 / 255.0,
            green: colour.g as f64 / 255.0,
            blue: colour.b as f64 / 255.0,
        }
    }
}
