pub mod bulge;
pub mod distance_2d;
pub mod intersect_2d;
pub mod lathe_point;

pub use lathe_point::LathePoint;

/// Point type. Lathe geometry lives in the X (radial) / Z (spindle) plane;
/// the Y component is carried through but never read.
pub type Point3 = nalgebra::Point3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Number of decimals used when comparing radii and distances for
/// on-segment membership (a 1e-5 unit tolerance).
pub const ROUND_DECIMALS: i32 = 5;

/// Rounds `value` to `decimals` places.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Coordinate axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Returns the component of `p` along this axis.
    #[must_use]
    pub fn of(self, p: &Point3) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
            Self::Z => p.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_five_decimals() {
        assert!((round_to(6.000_004, ROUND_DECIMALS) - 6.0).abs() < f64::EPSILON);
        assert!((round_to(6.000_016, ROUND_DECIMALS) - 6.000_02).abs() < 1e-12);
    }

    #[test]
    fn axis_selects_component() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert!((Axis::X.of(&p) - 1.0).abs() < f64::EPSILON);
        assert!((Axis::Y.of(&p) - 2.0).abs() < f64::EPSILON);
        assert!((Axis::Z.of(&p) - 3.0).abs() < f64::EPSILON);
    }
}
