use crate::core::data::affine::Affine;
use crate::core::data::xyz_point::XYZPoint;
use crate::core::flames::transformation_context::TransformationContext;
use crate::core::flames::variations::variation::Variation;

#[derive(Debug, Clone, Default)]
pub struct Linear3D;

impl Variation for Linear3D {
    fn name(&self) -> &'static str {
        "linear3D"
    }

    fn transform(
        &self,
        _ctx: &mut TransformationContext,
        _xform: &Affine,
        affine_tp: &XYZPoint,
        var_tp: &mut XYZPoint,
        amount: f64,
    ) {
        var_tp.x += amount * affine_tp.x;
        var_tp.y += amount * affine_tp.y;
        var_tp.z += amount * affine_tp.z;
    }

    fn box_clone(&self) -> Box<dyn Variation> {
        Box::new(self.clone())
    }
}
