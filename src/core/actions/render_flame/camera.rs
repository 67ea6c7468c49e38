use crate::core::data::xyz_point::XYZPoint;
use crate::core::flames::flame_params::FlameParams;

const MIN_PERSPECTIVE_DEPTH: f64 = 1.0e-6;

/// Maps world coordinates of the chaos walk onto raster cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    raster_width: usize,
    raster_height: usize,
    cos_roll: f64,
    sin_roll: f64,
    roll_centre_x: f64,
    roll_centre_y: f64,
    scale_x: f64,
    scale_y: f64,
    projection: Option<Projection3D>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Projection3D {
    m00: f64,
    m01: f64,
    m10: f64,
    m11: f64,
    m12: f64,
    m20: f64,
    m21: f64,
    m22: f64,
    cam_z: f64,
    perspective: f64,
}

impl Projection3D {
    fn new(params: &FlameParams) -> Self {
        let yaw = -params.cam_yaw.to_radians();
        let pitch = params.cam_pitch.to_radians();
        let (sin_yaw, cos_yaw) = yaw.sin_cos();
        let (sin_pitch, cos_pitch) = pitch.sin_cos();

        Self {
            m00: cos_yaw,
            m01: -sin_yaw,
            m10: cos_pitch * sin_yaw,
            m11: cos_pitch * cos_yaw,
            m12: -sin_pitch,
            m20: sin_pitch * sin_yaw,
            m21: sin_pitch * cos_yaw,
            m22: cos_pitch,
            cam_z: params.cam_z,
            perspective: params.cam_perspective,
        }
    }

    fn project(&self, point: &XYZPoint) -> Option<(f64, f64)> {
        let z = point.z - self.cam_z;
        let x = self.m00 * point.x + self.m01 * point.y;
        let y = self.m10 * point.x + self.m11 * point.y + self.m12 * z;
        let depth = self.m20 * point.x + self.m21 * point.y + self.m22 * z;

        let zr = 1.0 - self.perspective * depth;
        if zr < MIN_PERSPECTIVE_DEPTH {
            return None;
        }
        Some((x / zr, y / zr))
    }
}

fn is_3d(params: &FlameParams) -> bool {
    params.cam_pitch != 0.0
        || params.cam_yaw != 0.0
        || params.cam_perspective != 0.0
        || params.cam_z != 0.0
}

fn to_cell(position: f64, scale: f64, size: usize) -> Option<usize> {
    let cell = (position * scale + 0.5).floor();
    if cell >= 0.0 && cell < size as f64 {
        Some(cell as usize)
    } else {
        None
    }
}

impl Camera {
    /// Builds the view of `params` over a raster of the given size
    /// (output size times the spatial oversample).
    #[must_use]
    pub fn new(params: &FlameParams, raster_width: usize, raster_height: usize) -> Self {
        let ppu = params.pixels_per_unit * params.cam_zoom * params.spatial_oversample as f64;
        let cam_w = raster_width as f64 / ppu;
        let cam_h = raster_height as f64 / ppu;
        let cam_x0 = params.centre_x - cam_w / 2.0;
        let cam_y0 = params.centre_y - cam_h / 2.0;

        let (sin_roll, cos_roll) = params.cam_roll.to_radians().sin_cos();
        let roll_centre_x =
            params.centre_x * (1.0 - cos_roll) - params.centre_y * sin_roll - cam_x0;
        let roll_centre_y =
            params.centre_y * (1.0 - cos_roll) + params.centre_x * sin_roll - cam_y0;

        Self {
            raster_width,
            raster_height,
            cos_roll,
            sin_roll,
            roll_centre_x,
            roll_centre_y,
            scale_x: (raster_width as f64 - 0.5) / cam_w,
            scale_y: (raster_height as f64 - 0.5) / cam_h,
            projection: is_3d(params).then(|| Projection3D::new(params)),
        }
    }

    /// Raster cell hit by `point`, or `None` when it falls outside the view.
    #[must_use]
    pub fn project(&self, point: &XYZPoint) -> Option<(usize, usize)> {
        let (x, y) = match &self.projection {
            Some(projection) => projection.project(point)?,
            None => (point.x, point.y),
        };

        let px = self.cos_roll * x + self.sin_roll * y + self.roll_centre_x;
        let py = -self.sin_roll * x + self.cos_roll * y + self.roll_centre_y;

        Some((
            to_cell(px, self.scale_x, self.raster_width)?,
            to_cell(py, self.scale_y, self.raster_height)?,
        ))
    }
}
