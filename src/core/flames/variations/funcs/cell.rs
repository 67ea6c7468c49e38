use crate::core::data::affine::Affine;
use crate::core::data::xyz_point::XYZPoint;
use crate::core::flames::transformation_context::TransformationContext;
use crate::core::flames::variations::errors::VariationError;
use crate::core::flames::variations::variation::Variation;

const NAME: &str = "cell";
const PARAM_SIZE: &str = "size";
const PARAMETER_NAMES: &[&str] = &[PARAM_SIZE];

/// Tiles the plane into square cells and interleaves them so every
/// quadrant lands in the positive one.
#[derive(Debug, Clone)]
pub struct Cell {
    size: f64,
}

impl Default for Cell {
    fn default() -> Self {
        Self { size: 0.6 }
    }
}

fn interleave(index: i64) -> i64 {
    if index >= 0 { 2 * index } else { -(2 * index + 1) }
}

impl Variation for Cell {
    fn name(&self) -> &'static str {
        NAME
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        PARAMETER_NAMES
    }

    fn parameter(&self, name: &str) -> Option<f64> {
        match name {
            PARAM_SIZE => Some(self.size),
            _ => None,
        }
    }

    fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), VariationError> {
        match name {
            PARAM_SIZE => {
                self.size = value;
                Ok(())
            }
            _ => Err(VariationError::UnrecognizedParameter {
                variation: NAME,
                parameter: name.to_string(),
            }),
        }
    }

    fn init(
        &mut self,
        _ctx: &mut TransformationContext,
        _xform: &Affine,
        _amount: f64,
    ) -> Result<(), VariationError> {
        if self.size == 0.0 || !self.size.is_finite() {
            return Err(VariationError::InvalidParameter {
                variation: NAME,
                parameter: PARAM_SIZE,
                value: self.size,
            });
        }
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
        let inv_cell_size = 1.0 / self.size;
        let x = (affine_tp.x * inv_cell_size).floor() as i64;
        let y = (affine_tp.y * inv_cell_size).floor() as i64;

        let dx = affine_tp.x - x as f64 * self.size;
        let dy = affine_tp.y - y as f64 * self.size;

        let x = interleave(x);
        let y = interleave(y);

        var_tp.x += amount * (dx + x as f64 * self.size);
        var_tp.y -= amount * (dy + y as f64 * self.size);
        if ctx.is_preserve_z() {
            var_tp.z += amount * affine_tp.z;
        }
    }

    fn box_clone(&self) -> Box<dyn Variation> {
        Box::new(self.clone())
    }
}
