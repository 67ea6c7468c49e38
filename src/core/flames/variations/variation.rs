use std::fmt;

use crate::core::data::affine::Affine;
use crate::core::data::xyz_point::XYZPoint;
use crate::core::flames::transformation_context::TransformationContext;
use crate::core::flames::variations::errors::VariationError;

/// Where a variation runs inside its XForm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum VariationPriority {
    /// Rewrites the affine point before the main sum.
    Pre,
    /// Adds its contribution to the summed point.
    #[default]
    Normal,
    /// Rewrites the summed point.
    Post,
}

/// A named, parametrized point-transform kernel.
///
/// Instances are cloned from registry prototypes and owned by exactly one
/// XForm; each render lane gets its own copy so `init` can cache
/// lane-local constants.
pub trait Variation: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn parameter_names(&self) -> &'static [&'static str] {
        &[]
    }

    fn parameter(&self, _name: &str) -> Option<f64> {
        None
    }

    fn set_parameter(&mut self, name: &str, _value: f64) -> Result<(), VariationError> {
        Err(VariationError::UnrecognizedParameter {
            variation: self.name(),
            parameter: name.to_string(),
        })
    }

    fn priority(&self) -> VariationPriority {
        VariationPriority::Normal
    }

    /// One-time precompute for a lane, run before any sampling.
    fn init(
        &mut self,
        _ctx: &mut TransformationContext,
        _xform: &Affine,
        _amount: f64,
    ) -> Result<(), VariationError> {
        Ok(())
    }

    /// Adds this kernel's contribution, scaled by `amount`, into `var_tp`.
    fn transform(
        &self,
        ctx: &mut TransformationContext,
        xform: &Affine,
        affine_tp: &XYZPoint,
        var_tp: &mut XYZPoint,
        amount: f64,
    );

    fn box_clone(&self) -> Box<dyn Variation>;
}

impl Clone for Box<dyn Variation> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

/// A variation instance together with its blend amount inside an XForm.
#[derive(Debug, Clone)]
pub struct WeightedVariation {
    pub amount: f64,
    pub func: Box<dyn Variation>,
}

impl WeightedVariation {
    #[must_use]
    pub fn new(amount: f64, func: Box<dyn Variation>) -> Self {
        Self { amount, func }
    }
}
