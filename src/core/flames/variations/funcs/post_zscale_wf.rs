use crate::core::data::affine::Affine;
use crate::core::data::xyz_point::XYZPoint;
use crate::core::flames::transformation_context::TransformationContext;
use crate::core::flames::variations::errors::VariationError;
use crate::core::flames::variations::variation::{Variation, VariationPriority};

const NAME: &str = "post_zscale_wf";
const PARAM_ZTRANSLATE: &str = "ztranslate";
const PARAMETER_NAMES: &[&str] = &[PARAM_ZTRANSLATE];

/// Scales and shifts the depth of the summed point.
#[derive(Debug, Clone, Default)]
pub struct PostZScaleWf {
    ztranslate: f64,
}

impl Variation for PostZScaleWf {
    fn name(&self) -> &'static str {
        NAME
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        PARAMETER_NAMES
    }

    fn parameter(&self, name: &str) -> Option<f64> {
        match name {
            PARAM_ZTRANSLATE => Some(self.ztranslate),
            _ => None,
        }
    }

    fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), VariationError> {
        match name {
            PARAM_ZTRANSLATE => {
                self.ztranslate = value;
                Ok(())
            }
            _ => Err(VariationError::UnrecognizedParameter {
                variation: NAME,
                parameter: name.to_string(),
            }),
        }
    }

    fn priority(&self) -> VariationPriority {
        VariationPriority::Post
    }

    fn transform(
        &self,
        _ctx: &mut TransformationContext,
        _xform: &Affine,
        _affine_tp: &XYZPoint,
        var_tp: &mut XYZPoint,
        amount: f64,
    ) {
        var_tp.z = amount * var_tp.z + self.ztranslate;
    }

    fn box_clone(&self) -> Box<dyn Variation> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrites_depth_only() {
        let mut ctx = TransformationContext::new(Some(0), 0, false);
        let mut post = PostZScaleWf::default();
        post.set_parameter("ztranslate", 0.5).unwrap();
        let summed = XYZPoint::new(1.0, 2.0, 4.0, 0.3);
        let mut point = summed;

        post.transform(&mut ctx, &Affine::IDENTITY, &summed, &mut point, 2.0);

        assert_eq!(point, XYZPoint::new(1.0, 2.0, 8.5, 0.3));
        assert_eq!(post.priority(), VariationPriority::Post);
    }
}
