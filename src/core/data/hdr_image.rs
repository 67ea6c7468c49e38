use crate::core::codec::rgbe::{decode_rgbe_bytes, encode_rgbe};
use crate::core::data::colour::HdrColour;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum HdrImageError {
    PixelOutsideBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    BoundsMismatch {
        image_size: usize,
        buffer_size: usize,
    },
    InvalidOversampleFactor {
        factor: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for HdrImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} image",
                    x, y, width, height
                )
            }
            Self::BoundsMismatch {
                image_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "image size {} does not match buffer size {}",
                    image_size, buffer_size
                )
            }
            Self::InvalidOversampleFactor {
                factor,
                width,
                height,
            } => {
                write!(
                    f,
                    "oversample factor {} must be at least 1 and divide {}x{}",
                    factor, width, height
                )
            }
        }
    }
}

impl Error for HdrImageError {}

#[must_use]
pub fn calc_lum(red: f64, green: f64, blue: f64) -> f64 {
    0.299 * red + 0.588 * green + 0.113 * blue
}

/// Dense floating-point RGB image; one cell per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HdrImage {
    width: usize,
    height: usize,
    cells: Vec<HdrColour>,
}

impl HdrImage {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![HdrColour::default(); width * height],
        }
    }

    pub fn from_data(
        width: usize,
        height: usize,
        cells: Vec<HdrColour>,
    ) -> Result<Self, HdrImageError> {
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(HdrImageError::BoundsMismatch {
                image_size: width.saturating_mul(height),
                buffer_size: cells.len(),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Reallocates the image as a zeroed `width x height` grid.
    pub fn init(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![HdrColour::default(); width * height];
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn cells(&self) -> &[HdrColour] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [HdrColour] {
        &mut self.cells
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize, HdrImageError> {
        if x >= self.width || y >= self.height {
            return Err(HdrImageError::PixelOutsideBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(y * self.width + x)
    }

    /// Seeds every cell with the given 8-bit colour, normalized to `[0, 1]`.
    pub fn fill_background(&mut self, red: u8, green: u8, blue: u8) {
        let colour = HdrColour::new(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        );
        self.cells.fill(colour);
    }

    pub fn set_rgb(
        &mut self,
        x: usize,
        y: usize,
        red: f64,
        green: f64,
        blue: f64,
    ) -> Result<(), HdrImageError> {
        let offset = self.offset(x, y)?;
        self.cells[offset] = HdrColour::new(red, green, blue);

        Ok(())
    }

    pub fn rgb(&self, x: usize, y: usize) -> Result<HdrColour, HdrImageError> {
        Ok(self.cells[self.offset(x, y)?])
    }

    pub fn lum(&self, x: usize, y: usize) -> Result<f64, HdrImageError> {
        let HdrColour { red, green, blue } = self.rgb(x, y)?;

        Ok(calc_lum(red, green, blue))
    }

    #[must_use]
    pub fn lum_ignore_bounds(&self, x: i64, y: i64) -> f64 {
        if x < 0 || y < 0 {
            return 0.0;
        }

        self.lum(x as usize, y as usize).unwrap_or(0.0)
    }

    /// Returns `(min, max)` luminance; an empty image yields `(f64::MAX, 0.0)`.
    #[must_use]
    pub fn min_max_lum(&self) -> (f64, f64) {
        self.cells
            .iter()
            .map(|c| calc_lum(c.red, c.green, c.blue))
            .fold((f64::MAX, 0.0_f64), |(min, max), lum| {
                (if lum < min { lum } else { min }, if lum > max { lum } else { max })
            })
    }

    /// Box-filters the image down by `factor` in both dimensions.
    ///
    /// Fails without touching the buffer when `factor` is zero or does not
    /// divide both dimensions.
    pub fn sample_down(&mut self, factor: usize) -> Result<(), HdrImageError> {
        if factor == 1 {
            return Ok(());
        }

        if factor < 1 || self.width % factor != 0 || self.height % factor != 0 {
            return Err(HdrImageError::InvalidOversampleFactor {
                factor,
                width: self.width,
                height: self.height,
            });
        }

        let new_width = self.width / factor;
        let new_height = self.height / factor;
        let div = (factor * factor) as f64;
        let mut cells = Vec::with_capacity(new_width * new_height);

        for row in (0..self.height).step_by(factor) {
            for col in (0..self.width).step_by(factor) {
                let mut sum = HdrColour::default();
                for y in row..row + factor {
                    for cell in &self.cells[y * self.width + col..y * self.width + col + factor] {
                        sum.red += cell.red;
                        sum.green += cell.green;
                        sum.blue += cell.blue;
                    }
                }
                cells.push(HdrColour::new(sum.red / div, sum.green / div, sum.blue / div));
            }
        }

        self.width = new_width;
        self.height = new_height;
        self.cells = cells;

        Ok(())
    }

    pub fn rgbe_value(&self, x: usize, y: usize) -> Result<u32, HdrImageError> {
        let HdrColour { red, green, blue } = self.rgb(x, y)?;

        Ok(encode_rgbe(red, green, blue))
    }

    pub fn set_rgbe_value(
        &mut self,
        x: usize,
        y: usize,
        rgbe: [u8; 4],
    ) -> Result<(), HdrImageError> {
        let [r, g, b, e] = rgbe;
        let (red, green, blue) = decode_rgbe_bytes(r, g, b, e);

        self.set_rgb(x, y, red, green, blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_image(width: usize, height: usize) -> HdrImage {
        let mut image = HdrImage::new(width, height);
        for y in 0..height {
            for x in 0..width {
                image
                    .set_rgb(x, y, (x + y) as f64, x as f64, y as f64)
                    .unwrap();
            }
        }
        image
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let image = HdrImage::new(10, 5);

        assert_eq!(image.width(), 10);
        assert_eq!(image.height(), 5);
        assert_eq!(image.cells().len(), 50);
        assert!(image.cells().iter().all(|c| *c == HdrColour::default()));
    }

    #[test]
    fn test_init_reallocates_zeroed() {
        let mut image = HdrImage::new(2, 2);
        image.fill_background(255, 255, 255);
        image.init(3, 4);

        assert_eq!(image.cells().len(), 12);
        assert!(image.cells().iter().all(|c| *c == HdrColour::default()));
    }

    #[test]
    fn test_from_data_size_mismatch() {
        let result = HdrImage::from_data(2, 2, vec![HdrColour::default(); 3]);

        assert_eq!(
            result.unwrap_err(),
            HdrImageError::BoundsMismatch {
                image_size: 4,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_from_data_overflowing_size() {
        let result = HdrImage::from_data(usize::MAX, 2, vec![]);

        assert_eq!(
            result.unwrap_err(),
            HdrImageError::BoundsMismatch {
                image_size: usize::MAX,
                buffer_size: 0
            }
        );
    }

    #[test]
    fn test_fill_background_red() {
        let mut image = HdrImage::new(4, 3);
        image.fill_background(255, 0, 0);

        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(image.rgb(x, y).unwrap(), HdrColour::new(1.0, 0.0, 0.0));
            }
        }
    }

    #[test]
    fn test_set_and_get_rgb() {
        let mut image = HdrImage::new(3, 3);
        image.set_rgb(2, 1, 0.1, 0.2, 0.3).unwrap();

        assert_eq!(image.rgb(2, 1).unwrap(), HdrColour::new(0.1, 0.2, 0.3));
        assert_eq!(image.cells()[5], HdrColour::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_set_rgb_outside_bounds() {
        let mut image = HdrImage::new(3, 3);
        let result = image.set_rgb(3, 0, 1.0, 1.0, 1.0);

        assert_eq!(
            result,
            Err(HdrImageError::PixelOutsideBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 3
            })
        );
    }

    #[test]
    fn test_lum_weights() {
        let mut image = HdrImage::new(2, 2);
        image.set_rgb(0, 0, 1.0, 0.0, 0.0).unwrap();
        image.set_rgb(1, 0, 0.0, 1.0, 0.0).unwrap();
        image.set_rgb(0, 1, 0.0, 0.0, 1.0).unwrap();

        assert_eq!(image.lum(0, 0).unwrap(), 0.299);
        assert_eq!(image.lum(1, 0).unwrap(), 0.588);
        assert_eq!(image.lum(0, 1).unwrap(), 0.113);
        assert_eq!(image.lum(1, 1).unwrap(), 0.0);
    }

    #[test]
    fn test_lum_ignore_bounds_returns_zero_outside() {
        let mut image = HdrImage::new(2, 2);
        image.fill_background(255, 255, 255);

        assert_eq!(image.lum_ignore_bounds(-1, 0), 0.0);
        assert_eq!(image.lum_ignore_bounds(0, 2), 0.0);
        assert_eq!(image.lum_ignore_bounds(1, 1), calc_lum(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_min_max_lum_on_uniform_buffer() {
        let mut image = HdrImage::new(16, 9);
        image.fill_background(40, 120, 200);
        let expected = calc_lum(40.0 / 255.0, 120.0 / 255.0, 200.0 / 255.0);

        assert_eq!(image.min_max_lum(), (expected, expected));
    }

    #[test]
    fn test_min_max_lum_finds_extremes() {
        let mut image = HdrImage::new(3, 1);
        image.set_rgb(0, 0, 0.5, 0.5, 0.5).unwrap();
        image.set_rgb(1, 0, 2.0, 2.0, 2.0).unwrap();
        image.set_rgb(2, 0, 0.1, 0.1, 0.1).unwrap();

        let (min, max) = image.min_max_lum();

        assert_eq!(min, calc_lum(0.1, 0.1, 0.1));
        assert_eq!(max, calc_lum(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_min_max_lum_on_empty_image() {
        assert_eq!(HdrImage::default().min_max_lum(), (f64::MAX, 0.0));
    }

    #[test]
    fn test_sample_down_by_four() {
        let mut image = gradient_image(400, 300);
        let original = image.clone();

        image.sample_down(4).unwrap();

        assert_eq!(image.width(), 100);
        assert_eq!(image.height(), 75);
        assert_eq!(image.cells().len(), 100 * 75);

        for y in [0, 1, 37, 74] {
            for x in [0, 1, 50, 99] {
                let mut sum = HdrColour::default();
                for sy in y * 4..y * 4 + 4 {
                    for sx in x * 4..x * 4 + 4 {
                        let c = original.rgb(sx, sy).unwrap();
                        sum.red += c.red;
                        sum.green += c.green;
                        sum.blue += c.blue;
                    }
                }
                let expected = HdrColour::new(sum.red / 16.0, sum.green / 16.0, sum.blue / 16.0);
                assert_eq!(image.rgb(x, y).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_sample_down_mean_of_block() {
        let mut image = gradient_image(4, 2);
        image.sample_down(2).unwrap();

        // block (0..2, 0..2): x+y = 0,1,1,2 / x = 0,1,0,1 / y = 0,0,1,1
        assert_eq!(image.rgb(0, 0).unwrap(), HdrColour::new(1.0, 0.5, 0.5));
        assert_eq!(image.rgb(1, 0).unwrap(), HdrColour::new(3.0, 2.5, 0.5));
    }

    #[test]
    fn test_sample_down_by_one_is_noop() {
        let mut image = gradient_image(5, 3);
        let original = image.clone();

        image.sample_down(1).unwrap();

        assert_eq!(image, original);
    }

    #[test]
    fn test_sample_down_rejects_non_divisor() {
        let mut image = gradient_image(400, 300);
        let original = image.clone();

        let result = image.sample_down(7);

        assert_eq!(
            result,
            Err(HdrImageError::InvalidOversampleFactor {
                factor: 7,
                width: 400,
                height: 300
            })
        );
        assert_eq!(image, original);
    }

    #[test]
    fn test_sample_down_rejects_zero() {
        let mut image = gradient_image(4, 4);
        let original = image.clone();

        assert!(matches!(
            image.sample_down(0),
            Err(HdrImageError::InvalidOversampleFactor { factor: 0, .. })
        ));
        assert_eq!(image, original);
    }

    #[test]
    fn test_rgbe_value_round_trip_through_set_rgbe_value() {
        let mut image = HdrImage::new(2, 1);
        image.set_rgb(0, 0, 1.0, 1.0, 1.0).unwrap();

        let rgbe = image.rgbe_value(0, 0).unwrap();
        image.set_rgbe_value(1, 0, rgbe.to_be_bytes()).unwrap();

        assert_eq!(rgbe, 0xffff_ff80);
        assert_eq!(image.rgb(1, 0).unwrap(), HdrColour::new(255.5 / 256.0, 255.5 / 256.0, 255.5 / 256.0));
    }
}
