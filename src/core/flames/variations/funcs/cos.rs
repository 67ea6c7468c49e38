use crate::core::data::affine::Affine;
use crate::core::data::xyz_point::XYZPoint;
use crate::core::flames::transformation_context::TransformationContext;
use crate::core::flames::variations::variation::Variation;

/// Complex cosine.
#[derive(Debug, Clone, Default)]
pub struct Cos;

impl Variation for Cos {
    fn name(&self) -> &'static str {
        "cos"
    }

    fn transform(
        &self,
        ctx: &mut TransformationContext,
        _xform: &Affine,
        affine_tp: &XYZPoint,
        var_tp: &mut XYZPoint,
        amount: f64,
    ) {
        let (sin_x, cos_x) = affine_tp.x.sin_cos();
        let sinh_y = affine_tp.y.sinh();
        let cosh_y = affine_tp.y.cosh();
        var_tp.x += amount * cos_x * cosh_y;
        var_tp.y -= amount * sin_x * sinh_y;
        if ctx.is_preserve_z() {
            var_tp.z += amount * affine_tp.z;
        }
    }

    fn box_clone(&self) -> Box<dyn Variation> {
        Box::new(self.clone())
    }
}
