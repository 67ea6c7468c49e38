use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::core::codec::rgbe::decode_rgbe_bytes;
use crate::core::data::colour::HdrColour;
use crate::core::data::hdr_image::{HdrImage, HdrImageError};

const SUPPORTED_FORMAT: &str = "32-bit_rle_rgbe";
const INITIAL_PIXEL_CAPACITY: usize = 1 << 16;

#[derive(Debug)]
pub enum ReadHdrError {
    FileOpenFailure { path: PathBuf, source: io::Error },
    Io(io::Error),
    MissingSignature,
    UnsupportedFormat { format: String },
    InvalidResolution { line: String },
    HdrImage(HdrImageError),
}

impl fmt::Display for ReadHdrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileOpenFailure { path, source } => {
                write!(f, "cannot open {} for reading: {}", path.display(), source)
            }
            Self::Io(err) => write!(f, "hdr read error: {}", err),
            Self::MissingSignature => write!(f, "stream does not start with '#?'"),
            Self::UnsupportedFormat { format } => {
                write!(f, "unsupported hdr pixel format '{}'", format)
            }
            Self::InvalidResolution { line } => {
                write!(f, "expected '-Y <height> +X <width>', got '{}'", line)
            }
            Self::HdrImage(err) => write!(f, "hdr image error: {}", err),
        }
    }
}

impl Error for ReadHdrError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FileOpenFailure { source, .. } => Some(source),
            Self::Io(err) => Some(err),
            Self::HdrImage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ReadHdrError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<HdrImageError> for ReadHdrError {
    fn from(err: HdrImageError) -> Self {
        Self::HdrImage(err)
    }
}

fn read_header_line<R: BufRead>(reader: &mut R) -> Result<String, ReadHdrError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn parse_resolution(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some("-Y"), Some(height), Some("+X"), Some(width), None) => {
            Some((height.parse().ok()?, width.parse().ok()?))
        }
        _ => None,
    }
}

/// Reads an uncompressed Radiance RGBE stream in the layout written by
/// `encode_hdr`. Run-length encoded scanlines are not supported.
pub fn decode_hdr<R: BufRead>(reader: &mut R) -> Result<HdrImage, ReadHdrError> {
    if !read_header_line(reader)?.starts_with("#?") {
        return Err(ReadHdrError::MissingSignature);
    }

    loop {
        let line = read_header_line(reader)?;
        if line.is_empty() {
            break;
        }
        if let Some(format) = line.strip_prefix("FORMAT=") {
            if format != SUPPORTED_FORMAT {
                return Err(ReadHdrError::UnsupportedFormat {
                    format: format.to_string(),
                });
            }
        }
    }

    let line = read_header_line(reader)?;
    let Some((height, width, pixel_count)) = parse_resolution(&line)
        .and_then(|(height, width)| Some((height, width, height.checked_mul(width)?)))
    else {
        return Err(ReadHdrError::InvalidResolution { line });
    };

    // grows with the pixels actually present so a bogus header cannot
    // force a huge allocation up front
    let mut cells = Vec::with_capacity(pixel_count.min(INITIAL_PIXEL_CAPACITY));
    let mut rgbe = [0u8; 4];
    for _ in 0..pixel_count {
        reader.read_exact(&mut rgbe)?;
        let [red, green, blue, exponent] = rgbe;
        let (red, green, blue) = decode_rgbe_bytes(red, green, blue, exponent);
        cells.push(HdrColour::new(red, green, blue));
    }

    Ok(HdrImage::from_data(width, height, cells)?)
}

pub fn read_hdr(filepath: impl AsRef<Path>) -> Result<HdrImage, ReadHdrError> {
    let path = filepath.as_ref();
    let file = File::open(path).map_err(|source| ReadHdrError::FileOpenFailure {
        path: path.to_path_buf(),
        source,
    })?;

    decode_hdr(&mut BufReader::new(file))
}
