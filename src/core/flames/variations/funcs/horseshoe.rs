use crate::core::data::affine::Affine;
use crate::core::data::xyz_point::XYZPoint;
use crate::core::flames::transformation_context::TransformationContext;
use crate::core::flames::variations::variation::Variation;

#[derive(Debug, Clone, Default)]
pub struct Horseshoe;

impl Variation for Horseshoe {
    fn name(&self) -> &'static str {
        "horseshoe"
    }

    fn transform(
        &self,
        ctx: &mut TransformationContext,
        _xform: &Affine,
        affine_tp: &XYZPoint,
        var_tp: &mut XYZPoint,
        amount: f64,
    ) {
        let sin_a = affine_tp.sin_a();
        let cos_a = affine_tp.cos_a();
        var_tp.x += amount * (sin_a * affine_tp.x - cos_a * affine_tp.y);
        var_tp.y += amount * (cos_a * affine_tp.x + sin_a * affine_tp.y);
        if ctx.is_preserve_z() {
            var_tp.z += amount * affine_tp.z;
        }
    }

    fn box_clone(&self) -> Box<dyn Variation> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_on_x_axis() {
        let mut ctx = TransformationContext::new(Some(0), 0, false);
        // r = 2, sin_a = 1, cos_a = 0
        let input = XYZPoint::new(2.0, 0.0, 0.0, 0.0);
        let mut out = XYZPoint::default();

        Horseshoe.transform(&mut ctx, &Affine::IDENTITY, &input, &mut out, 1.0);

        assert_eq!(out.x, 2.0);
        assert_eq!(out.y, 0.0);
    }

    #[test]
    fn test_point_on_y_axis() {
        let mut ctx = TransformationContext::new(Some(0), 0, false);
        let input = XYZPoint::new(0.0, 3.0, 0.0, 0.0);
        let mut out = XYZPoint::default();

        Horseshoe.transform(&mut ctx, &Affine::IDENTITY, &input, &mut out, 1.0);

        assert_eq!(out.x, -3.0);
        assert_eq!(out.y, 0.0);
    }
}
