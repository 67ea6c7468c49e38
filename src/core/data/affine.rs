use crate::core::data::xyz_point::XYZPoint;

/// 2D affine coefficients in flam3 column order:
/// `x' = c00 * x + c10 * y + c20`, `y' = c01 * x + c11 * y + c21`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    pub c00: f64,
    pub c01: f64,
    pub c10: f64,
    pub c11: f64,
    pub c20: f64,
    pub c21: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Self = Self {
        c00: 1.0,
        c01: 0.0,
        c10: 0.0,
        c11: 1.0,
        c20: 0.0,
        c21: 0.0,
    };

    #[must_use]
    pub fn new(c00: f64, c01: f64, c10: f64, c11: f64, c20: f64, c21: f64) -> Self {
        Self { c00, c01, c10, c11, c20, c21 }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Writes the transformed x/y of `src` into `dst`; z and colour are copied.
    pub fn apply(&self, src: &XYZPoint, dst: &mut XYZPoint) {
        let x = self.c00 * src.x + self.c10 * src.y + self.c20;
        let y = self.c01 * src.x + self.c11 * src.y + self.c21;
        dst.x = x;
        dst.y = y;
        dst.z = src.z;
        dst.color = src.color;
    }
}
