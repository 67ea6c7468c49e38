pub mod actions;
pub mod codec;
pub mod data;
pub mod flames;
pub mod palette;
pub mod util;
