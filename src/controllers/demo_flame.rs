use crate::core::data::affine::Affine;
use crate::core::flames::flame::Flame;
use crate::core::flames::flame_params::FlameParams;
use crate::core::flames::variations::errors::VariationError;
use crate::core::flames::variations::registry::VariationRegistry;
use crate::core::flames::xform::XForm;
use crate::core::palette::rgb_palette::RgbPalette;

/// A Sierpinski-style flame bent by spherical and julian variations, with
/// a lightly blurred final transform.
pub fn demo_flame(
    registry: &VariationRegistry,
    palette: RgbPalette,
) -> Result<Flame, VariationError> {
    let params = FlameParams {
        centre_x: 0.5,
        centre_y: 0.4,
        pixels_per_unit: 360.0,
        sample_density: 50.0,
        ..FlameParams::default()
    };
    let mut flame = Flame::new(params, palette);

    let mut julian = registry.instantiate("julian")?;
    julian.set_parameter("power", 3.0)?;
    julian.set_parameter("dist", 1.0)?;

    flame.add_xform(
        XForm::new(0.5)
            .with_affine(Affine::new(0.5, 0.0, 0.0, 0.5, 0.0, 0.0))
            .with_color(0.0, 0.2)
            .with_variation(0.9, registry.instantiate("linear")?)
            .with_variation(0.1, registry.instantiate("spherical")?),
    );
    flame.add_xform(
        XForm::new(0.3)
            .with_affine(Affine::new(0.5, 0.0, 0.0, 0.5, 0.5, 0.0))
            .with_color(0.5, 0.2)
            .with_variation(1.0, registry.instantiate("linear")?),
    );
    flame.add_xform(
        XForm::new(0.2)
            .with_affine(Affine::new(0.5, 0.0, 0.0, 0.5, 0.25, 0.5))
            .with_color(1.0, 0.2)
            .with_variation(0.8, registry.instantiate("linear")?)
            .with_variation(0.2, julian),
    );
    flame.add_final_xform(
        XForm::new(0.0)
            .with_color(0.0, 1.0)
            .with_variation(0.01, registry.instantiate("pre_blur")?)
            .with_variation(1.0, registry.instantiate("linear")?),
    );

    Ok(flame)
}
