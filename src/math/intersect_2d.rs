use super::{LathePoint, Point3};

/// Parametric intersection of the lines `a1 → a2` and `b1 → b2` in the X–Z plane.
///
/// Returns `(ua, ub)` such that the intersection point is
/// `a1 + ua * (a2 - a1) = b1 + ub * (b2 - b1)`, or `None` when the
/// determinant is exactly zero (parallel or collinear lines).
#[must_use]
pub fn line_line_params(a1: &Point3, a2: &Point3, b1: &Point3, b2: &Point3) -> Option<(f64, f64)> {
    let ua_t = (b2.x - b1.x) * (a1.z - b1.z) - (b2.z - b1.z) * (a1.x - b1.x);
    let ub_t = (a2.x - a1.x) * (a1.z - b1.z) - (a2.z - a1.z) * (a1.x - b1.x);
    let u_b = (b2.z - b1.z) * (a2.x - a1.x) - (b2.x - b1.x) * (a2.z - a1.z);

    if u_b == 0.0 {
        return None;
    }
    Some((ua_t / u_b, ub_t / u_b))
}

/// Solves `|a1 + u * (a2 - a1) - center| = radius` for `u`.
///
/// Returns `(u1, u2)` with `u1 = (-b + √Δ) / 2a` and `u2 = (-b - √Δ) / 2a`,
/// or `None` when the discriminant is negative or the line has zero length.
/// A tangent line yields two equal roots.
#[must_use]
pub fn line_circle_params(
    a1: &Point3,
    a2: &Point3,
    center: &Point3,
    radius: f64,
) -> Option<(f64, f64)> {
    let dx = a2.x - a1.x;
    let dz = a2.z - a1.z;
    let a = dx * dx + dz * dz;
    if a == 0.0 {
        return None;
    }

    let fx = a1.x - center.x;
    let fz = a1.z - center.z;
    let b = 2.0 * (dx * fx + dz * fz);
    let c = fx * fx + fz * fz - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let e = discriminant.sqrt();
    Some(((-b + e) / (2.0 * a), (-b - e) / (2.0 * a)))
}

/// Intersects two full circles in the X–Z plane using the radical line.
///
/// Returns `None` when the circles are disjoint, one lies inside the other,
/// or the centres coincide (concentric circles never intersect here, even
/// when their radii are equal). Tangent circles yield the same point twice.
#[must_use]
pub fn circle_circle_points(c1: &Point3, r1: f64, c2: &Point3, r2: f64) -> Option<[Point3; 2]> {
    let dist = c1.distance_to(c2);

    if dist > r1 + r2 || dist < (r1 - r2).abs() || dist == 0.0 {
        return None;
    }

    // Distance from c1 along c1→c2 to the radical line, and half chord length.
    let a = (r1 * r1 - r2 * r2 + dist * dist) / (2.0 * dist);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();
    let p = c1.lerp(c2, a / dist);
    let k = h / dist;

    Some([
        Point3::new(p.x - k * (c2.z - c1.z), 0.0, p.z + k * (c2.x - c1.x)),
        Point3::new(p.x + k * (c2.z - c1.z), 0.0, p.z - k * (c2.x - c1.x)),
    ])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn line_line_crossing() {
        let (ua, ub) = line_line_params(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(10.0, 0.0, 10.0),
            &Point3::new(0.0, 0.0, 10.0),
            &Point3::new(10.0, 0.0, 0.0),
        )
        .unwrap();
        assert_relative_eq!(ua, 0.5);
        assert_relative_eq!(ub, 0.5);
    }

    #[test]
    fn line_line_parallel_returns_none() {
        let result = line_line_params(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(10.0, 0.0, 0.0),
            &Point3::new(0.0, 0.0, 5.0),
            &Point3::new(10.0, 0.0, 5.0),
        );
        assert!(result.is_none());
    }

    #[test]
    fn line_line_params_outside_unit_range() {
        let (ua, ub) = line_line_params(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(3.0, 0.0, -1.0),
            &Point3::new(3.0, 0.0, 1.0),
        )
        .unwrap();
        assert_relative_eq!(ua, 3.0);
        assert_relative_eq!(ub, 0.5);
    }

    #[test]
    fn line_circle_two_roots() {
        // Horizontal line through a circle of radius 1 at the origin.
        let (u1, u2) = line_circle_params(
            &Point3::new(-2.0, 0.0, 0.0),
            &Point3::new(2.0, 0.0, 0.0),
            &Point3::origin(),
            1.0,
        )
        .unwrap();
        assert_relative_eq!(u1, 0.75);
        assert_relative_eq!(u2, 0.25);
    }

    #[test]
    fn line_circle_miss() {
        let result = line_circle_params(
            &Point3::new(-2.0, 0.0, 3.0),
            &Point3::new(2.0, 0.0, 3.0),
            &Point3::origin(),
            1.0,
        );
        assert!(result.is_none());
    }

    #[test]
    fn line_circle_tangent_double_root() {
        let (u1, u2) = line_circle_params(
            &Point3::new(-1.0, 0.0, 1.0),
            &Point3::new(1.0, 0.0, 1.0),
            &Point3::origin(),
            1.0,
        )
        .unwrap();
        assert_relative_eq!(u1, 0.5);
        assert_relative_eq!(u2, 0.5);
    }

    #[test]
    fn circle_circle_two_points() {
        let pts = circle_circle_points(
            &Point3::new(0.0, 0.0, 0.0),
            6.0,
            &Point3::new(10.0, 0.0, 0.0),
            6.0,
        )
        .unwrap();
        let h = 11.0_f64.sqrt();
        assert_relative_eq!(pts[0].x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(pts[0].z, h, epsilon = 1e-12);
        assert_relative_eq!(pts[1].x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(pts[1].z, -h, epsilon = 1e-12);
    }

    #[test]
    fn circle_circle_disjoint() {
        let result = circle_circle_points(&Point3::origin(), 1.0, &Point3::new(5.0, 0.0, 0.0), 1.0);
        assert!(result.is_none());
    }

    #[test]
    fn circle_circle_nested() {
        let result = circle_circle_points(&Point3::origin(), 5.0, &Point3::new(1.0, 0.0, 0.0), 1.0);
        assert!(result.is_none());
    }

    #[test]
    fn circle_circle_concentric_equal_radius() {
        let c = Point3::new(2.0, 0.0, 2.0);
        assert!(circle_circle_points(&c, 3.0, &c, 3.0).is_none());
    }

    #[test]
    fn circle_circle_tangent() {
        let pts =
            circle_circle_points(&Point3::origin(), 1.0, &Point3::new(2.0, 0.0, 0.0), 1.0).unwrap();
        assert_relative_eq!(pts[0].x, 1.0, epsilon = 1e-12);
        assert!(pts[0].z.abs() < 1e-12);
        assert_eq!(pts[0], pts[1]);
    }
}
