use crate::core::palette::{
    gradients::{blue_white_gradient::blue_white_gradient, fire_gradient::fire_gradient},
    kinds::PaletteKind,
    rgb_palette::{DEFAULT_PALETTE_SIZE, RgbPalette},
};

#[must_use]
pub fn palette_factory(kind: PaletteKind) -> RgbPalette {
    match kind {
        PaletteKind::FireGradient => fire_gradient(DEFAULT_PALETTE_SIZE),
        PaletteKind::BlueWhiteGradient => blue_white_gradient(DEFAULT_PALETTE_SIZE),
    }
}
