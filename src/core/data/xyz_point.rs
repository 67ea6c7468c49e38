const ZERO_RADIUS: f64 = 1.0e-300;

/// A point of the chaos walk: world position plus the running colour index.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct XYZPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub color: f64,
}

impl XYZPoint {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64, color: f64) -> Self {
        Self { x, y, z, color }
    }

    #[must_use]
    pub fn sum_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.sum_sq().sqrt()
    }

    /// `x / r`, or zero at the origin.
    #[must_use]
    pub fn sin_a(&self) -> f64 {
        let r = self.radius();
        if r < ZERO_RADIUS { 0.0 } else { self.x / r }
    }

    /// `y / r`, or zero at the origin.
    #[must_use]
    pub fn cos_a(&self) -> f64 {
        let r = self.radius();
        if r < ZERO_RADIUS { 0.0 } else { self.y / r }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Clears the position, keeping the colour index.
    pub fn clear_position(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
        self.z = 0.0;
    }
}
