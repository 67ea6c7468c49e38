use std::{error::Error, fmt};

use crate::core::flames::variations::errors::VariationError;

/// Which XForm list a failing variation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XFormSlot {
    Main(usize),
    Final(usize),
}

impl fmt::Display for XFormSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main(idx) => write!(f, "xform {}", idx),
            Self::Final(idx) => write!(f, "final xform {}", idx),
        }
    }
}

/// A variation `init` that failed on one lane.
#[derive(Debug, Clone, PartialEq)]
pub struct InitFailure {
    pub thread_idx: usize,
    pub xform: XFormSlot,
    pub variation_idx: usize,
    pub source: VariationError,
}

impl fmt::Display for InitFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "thread {}, {}, variation {}: {}",
            self.thread_idx, self.xform, self.variation_idx, self.source
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlameError {
    NoXForms,
    InvalidThreadCount { thread_count: usize },
    InvalidWeight { xform_idx: usize, weight: f64 },
    VariationInit(Vec<InitFailure>),
}

impl fmt::Display for FlameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoXForms => {
                write!(f, "Flame has no xforms to iterate")
            }
            Self::InvalidThreadCount { thread_count } => {
                write!(f, "Thread count must be at least 1, got {}", thread_count)
            }
            Self::InvalidWeight { xform_idx, weight } => {
                write!(
                    f,
                    "Xform {} has weight {}; weights must be finite and non-negative",
                    xform_idx, weight
                )
            }
            Self::VariationInit(failures) => {
                write!(f, "{} variation(s) failed to initialise", failures.len())?;
                for failure in failures {
                    write!(f, "; {}", failure)?;
                }
                Ok(())
            }
        }
    }
}

impl Error for FlameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::VariationInit(failures) => failures
                .first()
                .map(|failure| &failure.source as &(dyn Error + 'static)),
            _ => None,
        }
    }
}
