use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKind {
    BlueWhiteGradient,
    FireGradient,
}

impl PaletteKind {
    pub const ALL: &'static [Self] = &[Self::FireGradient, Self::BlueWhiteGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FireGradient => "Fire gradient",
            Self::BlueWhiteGradient => "Blue-white gradient",
        }
    }

    /// Name accepted by `FromStr`, as used in configuration.
    #[must_use]
    pub const fn config_name(self) -> &'static str {
        match self {
            Self::FireGradient => "fire",
            Self::BlueWhiteGradient => "blue_white",
        }
    }
}

impl Default for PaletteKind {
    fn default() -> Self {
        Self::FireGradient
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPaletteKind {
    pub name: String,
}

impl fmt::Display for UnknownPaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown palette '{}'", self.name)
    }
}

impl Error for UnknownPaletteKind {}

impl FromStr for PaletteKind {
    type Err = UnknownPaletteKind;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.config_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownPaletteKind {
                name: name.to_string(),
            })
    }
}
