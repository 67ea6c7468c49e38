use crate::core::data::affine::Affine;
use crate::core::data::xyz_point::XYZPoint;
use crate::core::flames::transformation_context::TransformationContext;
use crate::core::flames::variations::variation::Variation;

const EPSILON: f64 = 1.0e-10;

#[derive(Debug, Clone, Default)]
pub struct Spherical;

impl Variation for Spherical {
    fn name(&self) -> &'static str {
        "spherical"
    }

    fn transform(
        &self,
        ctx: &mut TransformationContext,
        _xform: &Affine,
        affine_tp: &XYZPoint,
        var_tp: &mut XYZPoint,
        amount: f64,
    ) {
        let r = amount / (affine_tp.sum_sq() + EPSILON);
        var_tp.x += affine_tp.x * r;
        var_tp.y += affine_tp.y * r;
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
    fn test_inverts_radius() {
        let mut ctx = TransformationContext::new(Some(0), 0, false);
        let input = XYZPoint::new(2.0, 0.0, 0.0, 0.0);
        let mut out = XYZPoint::default();

        Spherical.transform(&mut ctx, &Affine::IDENTITY, &input, &mut out, 1.0);

        assert!((out.x - 0.5).abs() < 1e-9);
        assert_eq!(out.y, 0.0);
    }

    #[test]
    fn test_origin_stays_finite() {
        let mut ctx = TransformationContext::new(Some(0), 0, false);
        let mut out = XYZPoint::default();

        Spherical.transform(&mut ctx, &Affine::IDENTITY, &XYZPoint::default(), &mut out, 1.0);

        assert!(out.is_finite());
    }
}
