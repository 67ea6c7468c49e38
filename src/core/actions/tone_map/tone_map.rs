use rayon::prelude::*;

use crate::core::data::colour::HdrColour;
use crate::core::data::hdr_image::{HdrImage, HdrImageError};
use crate::core::data::histogram::{Histogram, HistogramCell};
use crate::core::flames::flame_params::FlameParams;

/// Log-density tone mapping of a sample histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneMapper {
    k1: f64,
    k2: f64,
    gamma_inv: f64,
    gamma_threshold: f64,
    threshold_scale: f64,
    vibrancy: f64,
    background: HdrColour,
}

impl ToneMapper {
    #[must_use]
    pub fn new(params: &FlameParams) -> Self {
        let ppu = params.pixels_per_unit * params.cam_zoom;
        let area = (params.width * params.height) as f64 / (ppu * ppu);
        let oversample = params.spatial_oversample as f64;
        let gamma_inv = 1.0 / params.gamma;

        Self {
            k1: params.contrast * params.brightness * 255.0 * 268.0 / 256.0,
            k2: oversample * oversample / (params.contrast * area * params.sample_density),
            gamma_inv,
            gamma_threshold: params.gamma_threshold,
            threshold_scale: params.gamma_threshold.powf(gamma_inv) / params.gamma_threshold,
            vibrancy: params.vibrancy,
            background: HdrColour::from_colour(params.background),
        }
    }

    /// Output colour of one cell, or `None` where nothing was plotted.
    #[must_use]
    pub fn map_cell(&self, cell: &HistogramCell) -> Option<HdrColour> {
        if cell.count == 0 {
            return None;
        }

        let count = cell.count as f64;
        let ls = self.k1 * (1.0 + count * self.k2).ln() / count;
        let intensity = count * ls / 255.0;
        if !(intensity > 0.0) {
            return None;
        }

        let alpha = if intensity > self.gamma_threshold {
            intensity.powf(self.gamma_inv)
        } else {
            intensity * self.threshold_scale
        };
        let background_weight = (1.0 - alpha.min(1.0)).max(0.0);

        let channel = |sum: f64, background: f64| {
            let rgb = sum * ls / 255.0 / 255.0;
            self.vibrancy * alpha * rgb / intensity
                + (1.0 - self.vibrancy) * rgb.powf(self.gamma_inv)
                + background_weight * background
        };

        Some(HdrColour::new(
            channel(cell.red, self.background.red),
            channel(cell.green, self.background.green),
            channel(cell.blue, self.background.blue),
        ))
    }
}

/// Tone-maps `histogram` into `image`, row-parallel. Empty cells keep the
/// colour already in `image`.
pub fn tone_map(
    histogram: &Histogram,
    params: &FlameParams,
    image: &mut HdrImage,
) -> Result<(), HdrImageError> {
    if (histogram.width(), histogram.height()) != (image.width(), image.height()) {
        return Err(HdrImageError::BoundsMismatch {
            image_size: image.width() * image.height(),
            buffer_size: histogram.cells().len(),
        });
    }
    if image.width() == 0 {
        return Ok(());
    }

    let mapper = ToneMapper::new(params);
    let width = image.width();

    image
        .cells_mut()
        .par_chunks_mut(width)
        .zip(histogram.cells().par_chunks(width))
        .for_each(|(dst_row, src_row)| {
            for (dst, src) in dst_row.iter_mut().zip(src_row) {
                if let Some(colour) = mapper.map_cell(src) {
                    *dst = colour;
                }
            }
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    fn params() -> FlameParams {
        FlameParams {
            width: 4,
            height: 2,
            pixels_per_unit: 1.0,
            sample_density: 1.0,
            ..FlameParams::default()
        }
    }

    #[test]
    fn test_empty_cells_keep_background() {
        let histogram = Histogram::new(4, 2);
        let mut image = HdrImage::new(4, 2);
        image.fill_background(255, 0, 0);

        tone_map(&histogram, &params(), &mut image).unwrap();

        assert!(image.cells().iter().all(|c| *c == HdrColour::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_white_hits_follow_log_density() {
        let p = params();
        let mapper = ToneMapper::new(&p);
        let mut cell = HistogramCell::default();
        for _ in 0..3 {
            cell.add(Colour {
                r: 255,
                g: 255,
                b: 255,
            });
        }

        let colour = mapper.map_cell(&cell).unwrap();

        // area 8, k2 = 1 / 8
        let k1 = 4.0 * 255.0 * 268.0 / 256.0;
        let ls = k1 * (1.0 + 3.0 / 8.0_f64).ln() / 3.0;
        let intensity = 3.0 * ls / 255.0;
        let alpha = intensity.powf(0.25);
        let expected = alpha * (3.0 * 255.0 * ls / 255.0 / 255.0) / intensity;
        assert!((colour.red - expected).abs() < 1e-12);
        assert_eq!(colour.red, colour.green);
        assert_eq!(colour.green, colour.blue);
    }

    #[test]
    fn test_more_hits_are_brighter() {
        let mapper = ToneMapper::new(&params());
        let mut dim = HistogramCell::default();
        dim.add(Colour { r: 200, g: 100, b: 50 });
        let mut bright = dim;
        for _ in 0..50 {
            bright.add(Colour { r: 200, g: 100, b: 50 });
        }

        let dim = mapper.map_cell(&dim).unwrap();
        let bright = mapper.map_cell(&bright).unwrap();

        assert!(bright.red > dim.red);
        assert!(dim.red > dim.green && dim.green > dim.blue);
    }

    #[test]
    fn test_size_mismatch() {
        let histogram = Histogram::new(3, 2);
        let mut image = HdrImage::new(4, 2);

        assert_eq!(
            tone_map(&histogram, &params(), &mut image),
            Err(HdrImageError::BoundsMismatch {
                image_size: 8,
                buffer_size: 6
            })
        );
    }

    #[test]
    fn test_only_hit_cells_change() {
        let mut histogram = Histogram::new(4, 2);
        histogram.add_sample(3, 1, Colour { r: 255, g: 255, b: 255 });
        let mut image = HdrImage::new(4, 2);

        tone_map(&histogram, &params(), &mut image).unwrap();

        assert!(image.rgb(3, 1).unwrap().red > 0.0);
        assert_eq!(image.rgb(0, 0).unwrap(), HdrColour::default());
        assert_eq!(image.rgb(2, 1).unwrap(), HdrColour::default());
    }
}
