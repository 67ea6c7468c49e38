pub mod render_flame;
pub mod tone_map;
