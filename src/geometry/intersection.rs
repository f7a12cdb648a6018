use tracing::trace;

use crate::error::Result;
use crate::math::intersect_2d::{circle_circle_points, line_circle_params, line_line_params};
use crate::math::{LathePoint, Point3};

use super::segment::{Segment, SegmentKind};

/// Result of intersecting two segments: the intersection points in the
/// order they were found. An empty result means no intersection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Intersection {
    points: Vec<Point3>,
}

impl Intersection {
    /// An empty result.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    fn from_points(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Returns `true` if at least one intersection point was found.
    #[must_use]
    pub fn found(&self) -> bool {
        !self.points.is_empty()
    }

    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    #[must_use]
    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }

    /// Returns the intersection point closest to `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyInput`](crate::error::GeometryError::EmptyInput)
    /// if nothing was found.
    pub fn nearest_to(&self, reference: &Point3) -> Result<Point3> {
        reference.nearest(&self.points)
    }
}

/// Routes a pair of segments to the line–line, arc–arc or arc–line solver.
pub(super) fn dispatch(a: &Segment, b: &Segment, extend: bool) -> Result<Intersection> {
    if a.length() == 0.0 || b.length() == 0.0 {
        trace!("zero-length segment, no intersection");
        return Ok(Intersection::none());
    }

    let result = match (*a.kind(), *b.kind()) {
        (SegmentKind::Line, SegmentKind::Line) => line_line(a, b, extend),
        (
            SegmentKind::Arc {
                center: c1,
                radius: r1,
                ..
            },
            SegmentKind::Arc {
                center: c2,
                radius: r2,
                ..
            },
        ) => arc_arc(a, &c1, r1, b, &c2, r2, extend),
        (SegmentKind::Arc { center, radius, .. }, SegmentKind::Line) => {
            arc_line(a, &center, radius, b, extend)
        }
        (SegmentKind::Line, SegmentKind::Arc { center, radius, .. }) => {
            arc_line(b, &center, radius, a, extend)
        }
    };

    trace!(found = result.points.len(), extend, "segment intersection");
    Ok(result)
}

fn line_line(a: &Segment, b: &Segment, extend: bool) -> Intersection {
    let (a1, a2) = (a.start(), a.end());
    let Some((ua, ub)) = line_line_params(a1, a2, b.start(), b.end()) else {
        return Intersection::none();
    };

    let unit = 0.0..=1.0;
    if extend || (unit.contains(&ua) && unit.contains(&ub)) {
        let pt = Point3::new(a1.x + ua * (a2.x - a1.x), 0.0, a1.z + ua * (a2.z - a1.z));
        return Intersection::from_points(vec![pt]);
    }
    Intersection::none()
}

fn arc_arc(
    a: &Segment,
    c1: &Point3,
    r1: f64,
    b: &Segment,
    c2: &Point3,
    r2: f64,
    extend: bool,
) -> Intersection {
    let Some(candidates) = circle_circle_points(c1, r1, c2, r2) else {
        return Intersection::none();
    };

    let points = candidates
        .into_iter()
        .filter(|p| extend || (a.point_on_segment(p) && b.point_on_segment(p)))
        .collect();
    Intersection::from_points(points)
}

/// Both roots are reported for a tangent line, so the touching point can
/// appear twice.
fn arc_line(arc: &Segment, center: &Point3, radius: f64, line: &Segment, extend: bool) -> Intersection {
    let (a1, a2) = (line.start(), line.end());
    let Some((u1, u2)) = line_circle_params(a1, a2, center, radius) else {
        return Intersection::none();
    };

    let unit = 0.0..=1.0;
    let points = [u1, u2]
        .into_iter()
        .filter(|u| extend || unit.contains(u))
        .map(|u| a1.lerp(a2, u))
        .filter(|p| extend || arc.point_on_segment(p))
        .collect();
    Intersection::from_points(points)
}
