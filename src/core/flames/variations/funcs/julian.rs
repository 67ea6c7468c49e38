use std::f64::consts::TAU;

use crate::core::data::affine::Affine;
use crate::core::data::xyz_point::XYZPoint;
use crate::core::flames::transformation_context::TransformationContext;
use crate::core::flames::variations::errors::VariationError;
use crate::core::flames::variations::variation::Variation;

const NAME: &str = "julian";
const PARAM_POWER: &str = "power";
const PARAM_DIST: &str = "dist";
const PARAMETER_NAMES: &[&str] = &[PARAM_POWER, PARAM_DIST];

/// Generalized Julia set root: picks one of `|power|` branches at random.
///
/// `power` is rounded to an integer. The branch count and radial exponent
/// are recomputed whenever `power` or `dist` change.
#[derive(Debug, Clone)]
pub struct Julian {
    power: f64,
    dist: f64,
    abs_power: usize,
    c_power: f64,
}

impl Default for Julian {
    fn default() -> Self {
        Self {
            power: 1.0,
            dist: 1.0,
            abs_power: 1,
            c_power: 0.5,
        }
    }
}

impl Julian {
    fn refresh_cache(&mut self) {
        self.abs_power = self.power.abs() as usize;
        self.c_power = if self.power == 0.0 {
            0.0
        } else {
            self.dist / self.power * 0.5
        };
    }
}

impl Variation for Julian {
    fn name(&self) -> &'static str {
        NAME
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        PARAMETER_NAMES
    }

    fn parameter(&self, name: &str) -> Option<f64> {
        match name {
            PARAM_POWER => Some(self.power),
            PARAM_DIST => Some(self.dist),
            _ => None,
        }
    }

    fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), VariationError> {
        match name {
            PARAM_POWER => self.power = value.round(),
            PARAM_DIST => self.dist = value,
            _ => {
                return Err(VariationError::UnrecognizedParameter {
                    variation: NAME,
                    parameter: name.to_string(),
                });
            }
        }
        self.refresh_cache();
        Ok(())
    }

    fn init(
        &mut self,
        _ctx: &mut TransformationContext,
        _xform: &Affine,
        _amount: f64,
    ) -> Result<(), VariationError> {
        if self.power == 0.0 || !self.power.is_finite() {
            return Err(VariationError::InvalidParameter {
                variation: NAME,
                parameter: PARAM_POWER,
                value: self.power,
            });
        }
        self.refresh_cache();
        Ok(())
    }

    fn transform(
        &self,
        ctx: &mut TransformationContext,
        _xform: &Affine,
        affine_tp: &XYZPoint,
        var_tp: &mut XYZPoint,
        amount: f64,
    ) {
        let branch = ctx.random_index(self.abs_power.max(1)) as f64;
        let a = (affine_tp.y.atan2(affine_tp.x) + TAU * branch) / self.power;
        let r = amount * affine_tp.sum_sq().powf(self.c_power);
        let (sin_a, cos_a) = a.sin_cos();

        var_tp.x += r * cos_a;
        var_tp.y += r * sin_a;
        if ctx.is_preserve_z() {
            var_tp.z += amount * affine_tp.z;
        }
    }

    fn box_clone(&self) -> Box<dyn Variation> {
        Box::new(self.clone())
    }
}
