use crate::core::data::affine::Affine;
use crate::core::data::xyz_point::XYZPoint;
use crate::core::flames::transformation_context::TransformationContext;
use crate::core::flames::variations::variation::Variation;

#[derive(Debug, Clone, Default)]
pub struct Linear;

impl Variation for Linear {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn transform(
        &self,
        ctx: &mut TransformationContext,
        _xform: &Affine,
        affine_tp: &XYZPoint,
        var_tp: &mut XYZPoint,
        amount: f64,
    ) {
        var_tp.x += amount * affine_tp.x;
        var_tp.y += amount * affine_tp.y;
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
    fn test_adds_scaled_input() {
        let mut ctx = TransformationContext::new(Some(0), 0, false);
        let input = XYZPoint::new(2.0, -4.0, 8.0, 0.0);
        let mut out = XYZPoint::new(1.0, 1.0, 1.0, 0.0);

        Linear.transform(&mut ctx, &Affine::IDENTITY, &input, &mut out, 0.5);

        assert_eq!(out, XYZPoint::new(2.0, -1.0, 1.0, 0.0));
    }

    #[test]
    fn test_preserve_z_carries_depth() {
        let mut ctx = TransformationContext::new(Some(0), 0, true);
        let input = XYZPoint::new(0.0, 0.0, 8.0, 0.0);
        let mut out = XYZPoint::default();

        Linear.transform(&mut ctx, &Affine::IDENTITY, &input, &mut out, 0.5);

        assert_eq!(out.z, 4.0);
    }
}
