mod controllers;
mod core;
mod presenters;
mod storage;

pub use controllers::demo_flame::demo_flame;
pub use controllers::flame_controller::FlameController;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::render_config::RenderConfig;
pub use presenters::file::hdr::HdrFilePresenter;

pub use crate::core::actions::render_flame::camera::Camera;
pub use crate::core::actions::render_flame::chaos_iterator::{
    ChaosIterator, IteratorPhase, IteratorStep,
};
pub use crate::core::actions::render_flame::render_flame::{
    RenderFlameError, render_flame, render_flame_with_seed,
};
pub use crate::core::actions::tone_map::tone_map::{ToneMapper, tone_map};
pub use crate::core::codec::rgbe::{decode_rgbe, decode_rgbe_bytes, encode_rgbe};
pub use crate::core::data::affine::Affine;
pub use crate::core::data::colour::{Colour, HdrColour};
pub use crate::core::data::hdr_image::{HdrImage, HdrImageError, calc_lum};
pub use crate::core::data::histogram::{Histogram, HistogramCell};
pub use crate::core::data::xyz_point::XYZPoint;
pub use crate::core::flames::errors::{FlameError, InitFailure, XFormSlot};
pub use crate::core::flames::flame::Flame;
pub use crate::core::flames::flame_params::FlameParams;
pub use crate::core::flames::transformation_context::TransformationContext;
pub use crate::core::flames::transition_table::{TABLE_SIZE, TransitionTable};
pub use crate::core::flames::variations::errors::VariationError;
pub use crate::core::flames::variations::registry::VariationRegistry;
pub use crate::core::flames::variations::variation::{
    Variation, VariationPriority, WeightedVariation,
};
pub use crate::core::flames::xform::XForm;
pub use crate::core::palette::factory::palette_factory;
pub use crate::core::palette::kinds::{PaletteKind, UnknownPaletteKind};
pub use crate::core::palette::rgb_palette::{PaletteError, RgbPalette};
pub use storage::read_hdr::{ReadHdrError, decode_hdr, read_hdr};
pub use storage::write_hdr::{WriteHdrError, encode_hdr, write_hdr};
