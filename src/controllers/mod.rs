pub mod demo_flame;
pub mod flame_controller;
pub mod ports;
pub mod render_config;
