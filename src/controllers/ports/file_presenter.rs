use std::path::Path;

use crate::core::data::hdr_image::HdrImage;
use crate::storage::write_hdr::WriteHdrError;

pub trait FilePresenterPort {
    fn present(&self, image: &HdrImage, filepath: impl AsRef<Path>) -> Result<(), WriteHdrError>;
}
