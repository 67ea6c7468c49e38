use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::data::hdr_image::{HdrImage, HdrImageError};

#[derive(Debug)]
pub enum WriteHdrError {
    FileOpenFailure { path: PathBuf, source: io::Error },
    Io(io::Error),
    HdrImage(HdrImageError),
}

impl fmt::Display for WriteHdrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileOpenFailure { path, source } => {
                write!(f, "cannot open {} for writing: {}", path.display(), source)
            }
            Self::Io(err) => write!(f, "hdr write error: {}", err),
            Self::HdrImage(err) => write!(f, "hdr image error: {}", err),
        }
    }
}

impl Error for WriteHdrError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FileOpenFailure { source, .. } => Some(source),
            Self::Io(err) => Some(err),
            Self::HdrImage(err) => Some(err),
        }
    }
}

impl From<io::Error> for WriteHdrError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<HdrImageError> for WriteHdrError {
    fn from(err: HdrImageError) -> Self {
        Self::HdrImage(err)
    }
}

/// Writes `image` as an uncompressed Radiance RGBE stream: a text header,
/// then one `R G B E` quadruple per pixel, top row first.
pub fn encode_hdr<W: Write>(writer: &mut W, image: &HdrImage) -> Result<(), WriteHdrError> {
    writeln!(writer, "#?RGBE")?;
    writeln!(writer, "FORMAT=32-bit_rle_rgbe")?;
    writeln!(writer)?;
    writeln!(writer, "-Y {} +X {}", image.height(), image.width())?;

    for y in 0..image.height() {
        for x in 0..image.width() {
            writer.write_all(&image.rgbe_value(x, y)?.to_be_bytes())?;
        }
    }

    writer.flush()?;
    Ok(())
}

pub fn write_hdr(image: &HdrImage, filepath: impl AsRef<Path>) -> Result<(), WriteHdrError> {
    let path = filepath.as_ref();
    let file = File::create(path).map_err(|source| WriteHdrError::FileOpenFailure {
        path: path.to_path_buf(),
        source,
    })?;

    encode_hdr(&mut BufWriter::new(file), image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::rgbe::encode_rgbe;

    const HEADER: &[u8] = b"#?RGBE\nFORMAT=32-bit_rle_rgbe\n\n-Y 2 +X 3\n";

    fn sample_image() -> HdrImage {
        let mut image = HdrImage::new(3, 2);
        image.set_rgb(0, 0, 1.0, 1.0, 1.0).unwrap();
        image.set_rgb(2, 1, 4.0, 2.0, 0.0).unwrap();
        image
    }

    #[test]
    fn test_encoded_layout() {
        let mut bytes = Vec::new();

        encode_hdr(&mut bytes, &sample_image()).unwrap();

        assert!(bytes.starts_with(HEADER));
        let pixels = &bytes[HEADER.len()..];
        assert_eq!(pixels.len(), 3 * 2 * 4);
        assert_eq!(&pixels[0..4], &[0xff, 0xff, 0xff, 0x80]);
        assert_eq!(&pixels[4..8], &[0, 0, 0, 0]);
        assert_eq!(&pixels[20..24], &encode_rgbe(4.0, 2.0, 0.0).to_be_bytes());
    }

    #[test]
    fn test_empty_image_is_header_only() {
        let mut bytes = Vec::new();

        encode_hdr(&mut bytes, &HdrImage::new(0, 0)).unwrap();

        assert_eq!(bytes, b"#?RGBE\nFORMAT=32-bit_rle_rgbe\n\n-Y 0 +X 0\n");
    }

    #[test]
    fn test_write_hdr_creates_file() {
        let path = std::env::temp_dir().join(format!("write_hdr_test_{}.hdr", std::process::id()));

        write_hdr(&sample_image(), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(bytes.starts_with(HEADER));
        assert_eq!(bytes.len(), HEADER.len() + 24);
    }

    #[test]
    fn test_unwritable_path_is_file_open_failure() {
        let path = std::env::temp_dir()
            .join("write_hdr_missing_dir_for_test")
            .join("nested")
            .join("out.hdr");

        let err = write_hdr(&sample_image(), &path).unwrap_err();

        assert!(matches!(err, WriteHdrError::FileOpenFailure { .. }));
        assert!(err.source().is_some());
    }
}
