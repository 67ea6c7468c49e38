pub mod errors;
pub mod flame;
pub mod flame_params;
pub mod transformation_context;
pub mod transition_table;
pub mod variations;
pub mod xform;
