use crate::core::data::affine::Affine;
use crate::core::data::xyz_point::XYZPoint;
use crate::core::flames::transformation_context::TransformationContext;
use crate::core::flames::variations::errors::VariationError;
use crate::core::flames::variations::variation::Variation;

const NAME: &str = "waves2_3D";
const PARAM_FREQ: &str = "freq";
const PARAM_SCALE: &str = "scale";
const PARAMETER_NAMES: &[&str] = &[PARAM_FREQ, PARAM_SCALE];

#[derive(Debug, Clone)]
pub struct Waves2_3D {
    freq: f64,
    scale: f64,
}

impl Default for Waves2_3D {
    fn default() -> Self {
        Self {
            freq: 2.0,
            scale: 1.0,
        }
    }
}

impl Variation for Waves2_3D {
    fn name(&self) -> &'static str {
        NAME
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        PARAMETER_NAMES
    }

    fn parameter(&self, name: &str) -> Option<f64> {
        match name {
            PARAM_FREQ => Some(self.freq),
            PARAM_SCALE => Some(self.scale),
            _ => None,
        }
    }

    fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), VariationError> {
        match name {
            PARAM_FREQ => self.freq = value,
            PARAM_SCALE => self.scale = value,
            _ => {
                return Err(VariationError::UnrecognizedParameter {
                    variation: NAME,
                    parameter: name.to_string(),
                });
            }
        }
        Ok(())
    }

    fn transform(
        &self,
        _ctx: &mut TransformationContext,
        _xform: &Affine,
        affine_tp: &XYZPoint,
        var_tp: &mut XYZPoint,
        amount: f64,
    ) {
        let avg_xy = (affine_tp.x + affine_tp.y) / 2.0;
        var_tp.x += amount * (affine_tp.x + self.scale * (affine_tp.y * self.freq).sin());
        var_tp.y += amount * (affine_tp.y + self.scale * (affine_tp.x * self.freq).sin());
        var_tp.z += amount * (affine_tp.z + self.scale * (avg_xy * self.freq).sin());
    }

    fn box_clone(&self) -> Box<dyn Variation> {
        Box::new(self.clone())
    }
}
