pub mod errors;
pub mod funcs;
pub mod registry;
pub mod variation;
