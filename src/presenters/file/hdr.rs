use std::fs;
use std::path::Path;

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::hdr_image::HdrImage;
use crate::storage::write_hdr::{WriteHdrError, write_hdr};

/// Writes rendered images as Radiance `.hdr` files, creating the parent
/// directory when needed.
pub struct HdrFilePresenter {}

impl FilePresenterPort for HdrFilePresenter {
    fn present(&self, image: &HdrImage, filepath: impl AsRef<Path>) -> Result<(), WriteHdrError> {
        let path = filepath.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| WriteHdrError::FileOpenFailure {
                path: path.to_path_buf(),
                source,
            })?;
        }

        write_hdr(image, path)?;
        info!(
            "Saved {}x{} image to {}",
            image.width(),
            image.height(),
            path.display()
        );

        Ok(())
    }
}

impl Default for HdrFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl HdrFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
