pub mod cell;
pub mod cos;
pub mod cosh;
pub mod horseshoe;
pub mod julian;
pub mod linear;
pub mod linear3d;
pub mod post_zscale_wf;
pub mod pre_blur;
pub mod spherical;
pub mod waves2_3d;
