use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum VariationError {
    UnknownVariation {
        name: String,
    },
    UnrecognizedParameter {
        variation: &'static str,
        parameter: String,
    },
    InvalidParameter {
        variation: &'static str,
        parameter: &'static str,
        value: f64,
    },
}

impl fmt::Display for VariationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVariation { name } => {
                write!(f, "variation '{}' is not registered", name)
            }
            Self::UnrecognizedParameter {
                variation,
                parameter,
            } => {
                write!(
                    f,
                    "variation '{}' has no parameter named '{}'",
                    variation, parameter
                )
            }
            Self::InvalidParameter {
                variation,
                parameter,
                value,
            } => {
                write!(
                    f,
                    "variation '{}' cannot use {} = {}",
                    variation, parameter, value
                )
            }
        }
    }
}

impl Error for VariationError {}
