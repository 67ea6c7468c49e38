pub mod affine;
pub mod colour;
pub mod hdr_image;
pub mod histogram;
pub mod xyz_point;
