use crate::error::{GeometryError, Result};

use super::Point3;

/// Planar point operations in the lathe X–Z plane.
///
/// Angles are in degrees, measured from +X toward +Z and normalised to
/// `[0, 360)`. Linear interpolation is nalgebra's inherent
/// [`Point3::lerp`], which allows extrapolation for `t` outside `[0, 1]`.
pub trait LathePoint {
    /// Euclidean distance to `other` in the X–Z plane.
    fn distance_to(&self, other: &Point3) -> f64;

    /// Angle of the direction from `self` to `other`.
    fn angle_to(&self, other: &Point3) -> f64;

    /// Returns the point reached by travelling `distance` at `angle_deg`.
    fn project(&self, angle_deg: f64, distance: f64) -> Point3;

    /// Returns the candidate closest to `self`. Ties go to the earliest candidate.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyInput`] if `candidates` is empty.
    fn nearest(&self, candidates: &[Point3]) -> Result<Point3>;
}

impl LathePoint for Point3 {
    fn distance_to(&self, other: &Point3) -> f64 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    fn angle_to(&self, other: &Point3) -> f64 {
        let angle = (other.z - self.z).atan2(other.x - self.x).to_degrees();
        if angle < 0.0 {
            angle + 360.0
        } else {
            angle
        }
    }

    fn project(&self, angle_deg: f64, distance: f64) -> Point3 {
        let rad = angle_deg.to_radians();
        Point3::new(
            self.x + distance * rad.cos(),
            self.y,
            self.z + distance * rad.sin(),
        )
    }

    fn nearest(&self, candidates: &[Point3]) -> Result<Point3> {
        let mut iter = candidates.iter();
        let first = iter
            .next()
            .ok_or(GeometryError::EmptyInput("nearest requires at least one candidate"))?;

        let mut best = *first;
        let mut best_dist = self.distance_to(first);
        for candidate in iter {
            let d = self.distance_to(candidate);
            if d < best_dist {
                best = *candidate;
                best_dist = d;
            }
        }
        Ok(best)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::LatheError;

    #[test]
    fn distance_ignores_y() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 100.0, 4.0);
        assert_relative_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn distance_is_symmetric_and_zero_to_self() {
        let a = Point3::new(-2.5, 0.0, 7.0);
        let b = Point3::new(4.0, 0.0, -1.25);
        assert_relative_eq!(a.distance_to(&b), b.distance_to(&a));
        assert!(a.distance_to(&b) > 0.0);
        assert!(a.distance_to(&a).abs() < f64::EPSILON);
    }

    #[test]
    fn angle_to_diagonal_is_45() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(100.0, 100.0, 100.0);
        assert_relative_eq!(a.angle_to(&b), 45.0);
    }

    #[test]
    fn angle_to_is_normalised() {
        let o = Point3::origin();
        assert_relative_eq!(o.angle_to(&Point3::new(0.0, 0.0, -1.0)), 270.0);
        assert_relative_eq!(o.angle_to(&Point3::new(-1.0, 0.0, 0.0)), 180.0);
        assert!(o.angle_to(&Point3::new(1.0, 0.0, 0.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn lerp_extrapolates() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(10.0, 0.0, 10.0);
        let mid = a.lerp(&b, 0.5);
        assert_relative_eq!(mid.x, 5.0);
        assert_relative_eq!(mid.z, 5.0);
        let past = a.lerp(&b, 1.5);
        assert_relative_eq!(past.x, 15.0);
        let before = a.lerp(&b, -0.5);
        assert_relative_eq!(before.z, -5.0);
    }

    #[test]
    fn project_135_moves_back_and_up() {
        let p = Point3::new(0.0, 0.0, 10.0);
        let q = p.project(135.0, 2.0_f64.sqrt());
        assert_relative_eq!(q.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(q.z, 11.0, epsilon = 1e-12);
        assert_relative_eq!(p.angle_to(&q), 135.0, epsilon = 1e-9);
    }

    #[test]
    fn nearest_picks_closest() {
        let p = Point3::new(0.0, 0.0, 0.0);
        let near = Point3::new(100.0, 100.0, 100.0);
        let far = Point3::new(150.0, 130.0, 200.0);
        assert_eq!(p.nearest(&[far, near]).unwrap(), near);
    }

    #[test]
    fn nearest_tie_keeps_first() {
        let p = Point3::origin();
        let a = Point3::new(1.0, 0.0, 0.0);
        let b = Point3::new(-1.0, 0.0, 0.0);
        assert_eq!(p.nearest(&[a, b]).unwrap(), a);
    }

    #[test]
    fn nearest_empty_is_error() {
        let result = Point3::origin().nearest(&[]);
        assert!(matches!(
            result,
            Err(LatheError::Geometry(GeometryError::EmptyInput(_)))
        ));
    }
}
