//! Coordinate structure for representing a single position

/// A position in a coordinate system
///
/// A non-finite `x` or `y` marks the coordinate as "not set". A 2D position
/// carries no `z`; a `z` of `NaN` is treated the same as an absent one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// X coordinate (longitude in geographic systems)
    pub x: f64,
    /// Y coordinate (latitude in geographic systems)
    pub y: f64,
    /// Z coordinate (elevation, optional)
    pub z: Option<f64>,
}

impl Coordinate {
    /// Create a new 2D coordinate
    pub fn new(x: f64, y: f64) -> Self {
        Coordinate { x, y, z: None }
    }

    /// Create a new 3D coordinate
    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Coordinate { x, y, z: Some(z) }
    }

    /// A coordinate with every ordinate unset
    pub fn empty() -> Self {
        Coordinate::new(f64::NAN, f64::NAN)
    }

    /// Check whether both `x` and `y` hold a finite value
    pub fn is_set(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Check if this coordinate has a finite Z value
    pub fn has_z(&self) -> bool {
        self.finite_z().is_some()
    }

    /// The Z value, only when it is finite
    pub fn finite_z(&self) -> Option<f64> {
        self.z.filter(|z| z.is_finite())
    }

    /// Exchange the x and y ordinates
    pub fn swap_axes(&mut self) {
        std::mem::swap(&mut self.x, &mut self.y);
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Coordinate::empty()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Coordinate::new(x, y)
    }
}

impl From<(f64, f64, f64)> for Coordinate {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Coordinate::new_3d(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_finite_ordinates_are_set() {
        assert!(Coordinate::new(1.0, -2.0).is_set());
        assert!(!Coordinate::empty().is_set());
        assert!(!Coordinate::new(f64::INFINITY, 1.0).is_set());
        assert!(!Coordinate::new(1.0, f64::NEG_INFINITY).is_set());
        // Z never decides whether a coordinate is set
        assert!(Coordinate::new_3d(1.0, 2.0, f64::NAN).is_set());
    }
}
