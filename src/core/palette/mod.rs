pub mod factory;
pub mod gradients;
pub mod kinds;
pub mod rgb_palette;
