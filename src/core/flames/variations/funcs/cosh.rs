use crate::core::data::affine::Affine;
use crate::core::data::xyz_point::XYZPoint;
use crate::core::flames::transformation_context::TransformationContext;
use crate::core::flames::variations::variation::Variation;

/// Complex hyperbolic cosine.
#[derive(Debug, Clone, Default)]
pub struct Cosh;

impl Variation for Cosh {
    fn name(&self) -> &'static str {
        "cosh"
    }

    fn transform(
        &self,
        ctx: &mut TransformationContext,
        _xform: &Affine,
        affine_tp: &XYZPoint,
        var_tp: &mut XYZPoint,
        amount: f64,
    ) {
        let (sin_y, cos_y) = affine_tp.y.sin_cos();
        let sinh_x = affine_tp.x.sinh();
        let cosh_x = affine_tp.x.cosh();
        var_tp.x += amount * cosh_x * cos_y;
        var_tp.y += amount * sinh_x * sin_y;
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
    fn test_matches_complex_hyperbolic_cosine() {
        let mut ctx = TransformationContext::new(Some(0), 0, false);
        let input = XYZPoint::new(0.5, 0.25, 0.0, 0.0);
        let mut out = XYZPoint::default();

        Cosh.transform(&mut ctx, &Affine::IDENTITY, &input, &mut out, 2.0);

        assert!((out.x - 2.0 * 0.5_f64.cosh() * 0.25_f64.cos()).abs() < 1e-12);
        assert!((out.y - 2.0 * 0.5_f64.sinh() * 0.25_f64.sin()).abs() < 1e-12);
    }
}
