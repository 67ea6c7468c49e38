use std::collections::BTreeMap;

use log::debug;

use crate::core::flames::variations::errors::VariationError;
use crate::core::flames::variations::funcs::{
    cell::Cell, cos::Cos, cosh::Cosh, horseshoe::Horseshoe, julian::Julian, linear::Linear,
    linear3d::Linear3D, post_zscale_wf::PostZScaleWf, pre_blur::PreBlur, spherical::Spherical,
    waves2_3d::Waves2_3D,
};
use crate::core::flames::variations::variation::Variation;

#[must_use]
pub fn builtin_variations() -> Vec<Box<dyn Variation>> {
    vec![
        Box::new(Linear),
        Box::new(Linear3D),
        Box::new(Spherical),
        Box::new(Horseshoe),
        Box::new(Cos),
        Box::new(Cosh),
        Box::new(Cell::default()),
        Box::new(Waves2_3D::default()),
        Box::new(Julian::default()),
        Box::new(PreBlur),
        Box::new(PostZScaleWf::default()),
    ]
}

/// Name-keyed catalog of variation prototypes.
#[derive(Debug, Clone)]
pub struct VariationRegistry {
    prototypes: BTreeMap<String, Box<dyn Variation>>,
}

impl VariationRegistry {
    /// An empty registry, without the built-in kernels.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            prototypes: BTreeMap::new(),
        }
    }

    /// Registers `prototype` under `name`, returning any prototype it replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        prototype: Box<dyn Variation>,
    ) -> Option<Box<dyn Variation>> {
        let name = name.into();
        debug!("Registering variation '{}'", name);
        self.prototypes.insert(name, prototype)
    }

    /// Clones the prototype registered under `name`.
    pub fn instantiate(&self, name: &str) -> Result<Box<dyn Variation>, VariationError> {
        self.prototypes
            .get(name)
            .map(|prototype| prototype.box_clone())
            .ok_or_else(|| VariationError::UnknownVariation {
                name: name.to_string(),
            })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.prototypes.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.prototypes.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}

impl Default for VariationRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for prototype in builtin_variations() {
            registry.register(prototype.name(), prototype);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registers_builtins() {
        let registry = VariationRegistry::default();
        let names: Vec<&str> = registry.names().collect();

        assert_eq!(registry.len(), 11);
        for expected in [
            "linear",
            "linear3D",
            "spherical",
            "horseshoe",
            "cos",
            "cosh",
            "cell",
            "waves2_3D",
            "julian",
            "pre_blur",
            "post_zscale_wf",
        ] {
            assert!(names.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_unknown_name() {
        let registry = VariationRegistry::default();

        assert_eq!(
            registry.instantiate("no_such_thing").unwrap_err(),
            VariationError::UnknownVariation {
                name: "no_such_thing".to_string()
            }
        );
    }

    #[test]
    fn test_instances_do_not_share_parameters() {
        let registry = VariationRegistry::default();
        let mut first = registry.instantiate("cell").unwrap();
        let second = registry.instantiate("cell").unwrap();

        first.set_parameter("size", 2.0).unwrap();

        assert_eq!(first.parameter("size"), Some(2.0));
        assert_eq!(second.parameter("size"), Some(0.6));
    }

    #[test]
    fn test_register_replaces_existing_prototype() {
        let mut registry = VariationRegistry::empty();
        assert!(registry.is_empty());

        assert!(registry.register("alias", Box::new(Linear)).is_none());
        let replaced = registry.register("alias", Box::new(Spherical));

        assert_eq!(replaced.map(|p| p.name()), Some("linear"));
        assert_eq!(registry.instantiate("alias").unwrap().name(), "spherical");
        assert!(registry.contains("alias"));
    }
}
