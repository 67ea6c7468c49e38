use std::f64::consts::TAU;

use crate::core::data::affine::Affine;
use crate::core::data::xyz_point::XYZPoint;
use crate::core::flames::transformation_context::TransformationContext;
use crate::core::flames::variations::variation::{Variation, VariationPriority};

/// Gaussian-ish jitter of the affine point before the main variations run.
#[derive(Debug, Clone, Default)]
pub struct PreBlur;

impl Variation for PreBlur {
    fn name(&self) -> &'static str {
        "pre_blur"
    }

    fn priority(&self) -> VariationPriority {
        VariationPriority::Pre
    }

    fn transform(
        &self,
        ctx: &mut TransformationContext,
        _xform: &Affine,
        _affine_tp: &XYZPoint,
        var_tp: &mut XYZPoint,
        amount: f64,
    ) {
        // sum of four uniforms, centred
        let r = (ctx.random() + ctx.random() + ctx.random() + ctx.random() - 2.0) * amount;
        let (sin_a, cos_a) = (ctx.random() * TAU).sin_cos();
        var_tp.x += r * cos_a;
        var_tp.y += r * sin_a;
    }

    fn box_clone(&self) -> Box<dyn Variation> {
        Box::new(self.clone())
    }
}
