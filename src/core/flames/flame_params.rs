use crate::core::data::colour::Colour;

/// Global render parameters of a flame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlameParams {
    pub width: usize,
    pub height: usize,
    pub centre_x: f64,
    pub centre_y: f64,
    /// Camera angles, in degrees.
    pub cam_roll: f64,
    pub cam_pitch: f64,
    pub cam_yaw: f64,
    pub cam_perspective: f64,
    pub cam_zoom: f64,
    pub cam_z: f64,
    pub pixels_per_unit: f64,
    pub spatial_oversample: usize,
    /// Iterates per output pixel.
    pub sample_density: f64,
    pub background: Colour,
    pub gamma: f64,
    pub gamma_threshold: f64,
    pub brightness: f64,
    pub contrast: f64,
    pub vibrancy: f64,
    pub preserve_z: bool,
}

impl Default for FlameParams {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            centre_x: 0.0,
            centre_y: 0.0,
            cam_roll: 0.0,
            cam_pitch: 0.0,
            cam_yaw: 0.0,
            cam_perspective: 0.0,
            cam_zoom: 1.0,
            cam_z: 0.0,
            pixels_per_unit: 50.0,
            spatial_oversample: 1,
            sample_density: 100.0,
            background: Colour::default(),
            gamma: 4.0,
            gamma_threshold: 0.04,
            brightness: 4.0,
            contrast: 1.0,
            vibrancy: 1.0,
            preserve_z: false,
        }
    }
}

impl FlameParams {
    /// Raster size the chaos walk plots into.
    #[must_use]
    pub fn raster_size(&self) -> (usize, usize) {
        (
            self.width * self.spatial_oversample,
            self.height * self.spatial_oversample,
        )
    }

    /// Global iterate budget, `round(sample_density * width * height)`.
    #[must_use]
    pub fn sample_count(&self) -> u64 {
        let samples = (self.sample_density * (self.width * self.height) as f64).round();
        if samples.is_finite() && samples > 0.0 {
            samples as u64
        } else {
            0
        }
    }
}
