pub mod camera;
pub mod chaos_iterator;
pub mod render_flame;
