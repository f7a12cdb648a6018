use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::math::bulge::{
    angle_from_bulge, bulge_from_angle, bulge_from_radius, bulge_from_radius_clamped,
    center_from_bulge, radius_from_bulge,
};
use crate::math::distance_2d::project_onto_line;
use crate::math::{round_to, Axis, LathePoint, Point3, ROUND_DECIMALS};

use super::intersection::{self, Intersection};

/// Rotational direction of an arc segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArcDirection {
    /// Negative bulge.
    Clockwise,
    /// Positive bulge.
    CounterClockwise,
}

/// Line/arc classification of a segment, derived once from its bulge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentKind {
    Line,
    Arc {
        center: Point3,
        radius: f64,
        direction: ArcDirection,
    },
}

/// A straight or circular segment between two points, encoded by a bulge.
///
/// `bulge = tan(included_angle / 4)`:
/// - `0` = straight line from `start` to `end`
/// - `> 0` = counter-clockwise arc
/// - `< 0` = clockwise arc
///
/// Segments are immutable; the `from_*` factories build new values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point3,
    end: Point3,
    bulge: f64,
    kind: SegmentKind,
}

impl Segment {
    /// Creates a new segment with the given endpoints and bulge.
    #[must_use]
    pub fn new(start: Point3, end: Point3, bulge: f64) -> Self {
        let kind = match center_from_bulge(&start, &end, bulge) {
            None => SegmentKind::Line,
            Some(center) => SegmentKind::Arc {
                center,
                radius: radius_from_bulge(start.distance_to(&end), bulge),
                direction: if bulge > 0.0 {
                    ArcDirection::CounterClockwise
                } else {
                    ArcDirection::Clockwise
                },
            },
        };
        Self {
            start,
            end,
            bulge,
            kind,
        }
    }

    /// Creates a straight segment (bulge = 0).
    #[must_use]
    pub fn line(start: Point3, end: Point3) -> Self {
        Self::new(start, end, 0.0)
    }

    /// Creates an arc spanning `angle` radians between `start` and `end`.
    /// A negative angle gives a clockwise arc.
    #[must_use]
    pub fn from_angle(start: Point3, end: Point3, angle: f64) -> Self {
        Self::new(start, end, bulge_from_angle(angle))
    }

    /// Creates the minor arc of the given radius between `start` and `end`.
    /// A negative radius gives a clockwise arc.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if `|radius|` is less
    /// than half the chord.
    pub fn from_radius(start: Point3, end: Point3, radius: f64) -> Result<Self> {
        let bulge = bulge_from_radius(start.distance_to(&end), radius)?;
        Ok(Self::new(start, end, bulge))
    }

    /// Like [`Segment::from_radius`], but a radius too small for the chord
    /// is clamped to a semicircle and reported through a warning.
    #[must_use]
    pub fn from_radius_clamped(start: Point3, end: Point3, radius: f64) -> Self {
        let bulge = bulge_from_radius_clamped(start.distance_to(&end), radius);
        Self::new(start, end, bulge)
    }

    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.end
    }

    #[must_use]
    pub fn bulge(&self) -> f64 {
        self.bulge
    }

    #[must_use]
    pub fn kind(&self) -> &SegmentKind {
        &self.kind
    }

    #[must_use]
    pub fn is_line(&self) -> bool {
        matches!(self.kind, SegmentKind::Line)
    }

    /// Returns the arc direction, or `None` for a line.
    #[must_use]
    pub fn direction(&self) -> Option<ArcDirection> {
        match self.kind {
            SegmentKind::Line => None,
            SegmentKind::Arc { direction, .. } => Some(direction),
        }
    }

    /// Returns the chord length between start and end.
    ///
    /// This is not the arc length for curved segments.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Returns the included angle in radians; `π` for a line.
    #[must_use]
    pub fn included_angle(&self) -> f64 {
        angle_from_bulge(self.bulge)
    }

    /// Returns the arc radius, or `0` for a line.
    #[must_use]
    pub fn radius(&self) -> f64 {
        match self.kind {
            SegmentKind::Line => 0.0,
            SegmentKind::Arc { radius, .. } => radius,
        }
    }

    /// Returns the arc centre, or `None` for a line.
    #[must_use]
    pub fn center_point(&self) -> Option<Point3> {
        match self.kind {
            SegmentKind::Line => None,
            SegmentKind::Arc { center, .. } => Some(center),
        }
    }

    /// Half the included angle.
    #[must_use]
    pub fn eta(&self) -> f64 {
        self.included_angle() / 2.0
    }

    /// `atan(bulge)`, a quarter of the included angle.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.bulge.atan()
    }

    /// Base angle of the isosceles triangle formed by the chord and centre.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        (PI - self.included_angle()) / 2.0
    }

    /// `gamma + epsilon`.
    #[must_use]
    pub fn phi(&self) -> f64 {
        self.gamma() + self.epsilon()
    }

    /// Candidate positions along `axis`: both endpoints and, for arcs,
    /// `center[axis] - radius`.
    #[must_use]
    pub fn axis_positions(&self, axis: Axis) -> Vec<f64> {
        let mut values = vec![axis.of(&self.start), axis.of(&self.end)];
        if let SegmentKind::Arc { center, radius, .. } = self.kind {
            values.push(axis.of(&center) - radius);
        }
        values
    }

    /// Returns the candidate from [`Segment::axis_positions`] closest to zero.
    ///
    /// Lathe paths sit on the negative X side, so selection is by absolute
    /// value. For arcs this is an approximation of the true extent, not a
    /// tight bound. Ties keep the earliest candidate.
    #[must_use]
    pub fn extent_min(&self, axis: Axis) -> f64 {
        self.select_by_abs(axis, |v, best| v.abs() < best.abs())
    }

    /// Returns the candidate from [`Segment::axis_positions`] furthest from zero.
    ///
    /// See [`Segment::extent_min`] for the selection rule.
    #[must_use]
    pub fn extent_max(&self, axis: Axis) -> f64 {
        self.select_by_abs(axis, |v, best| v.abs() > best.abs())
    }

    fn select_by_abs(&self, axis: Axis, better: impl Fn(f64, f64) -> bool) -> f64 {
        let first = axis.of(&self.start);
        self.axis_positions(axis)
            .into_iter()
            .skip(1)
            .fold(first, |best, v| if better(v, best) { v } else { best })
    }

    /// Returns `true` if `point` lies on this segment within a 1e-5 tolerance.
    ///
    /// Arc membership compares the rounded distance from the centre against
    /// the rounded radius, then checks the point's angle against the start
    /// and end angles (see [`LathePoint::angle_to`]).
    #[must_use]
    pub fn point_on_segment(&self, point: &Point3) -> bool {
        match self.kind {
            SegmentKind::Line => self.point_on_line(point),
            SegmentKind::Arc {
                center,
                radius,
                direction,
            } => {
                if round_to(center.distance_to(point), ROUND_DECIMALS)
                    != round_to(radius, ROUND_DECIMALS)
                {
                    return false;
                }

                let sa = center.angle_to(&self.start);
                let ea = center.angle_to(&self.end);
                let pa = center.angle_to(point);

                match (direction, sa < ea) {
                    (ArcDirection::CounterClockwise, true) => pa <= sa || pa >= ea,
                    (ArcDirection::CounterClockwise, false) => pa <= sa && pa >= ea,
                    (ArcDirection::Clockwise, true) => pa >= sa && pa <= ea,
                    (ArcDirection::Clockwise, false) => pa >= sa || pa <= ea,
                }
            }
        }
    }

    fn point_on_line(&self, point: &Point3) -> bool {
        let Some((t, dist)) = project_onto_line(point, &self.start, &self.end) else {
            return round_to(self.start.distance_to(point), ROUND_DECIMALS) == 0.0;
        };
        if round_to(dist, ROUND_DECIMALS) != 0.0 {
            return false;
        }
        let slack = 10f64.powi(-ROUND_DECIMALS) / self.length();
        (-slack..=1.0 + slack).contains(&t)
    }

    /// Returns `true` if both segments have exactly the same endpoints and bulge.
    #[must_use]
    pub fn is_same(&self, other: &Segment) -> bool {
        self.start == other.start && self.end == other.end && self.bulge == other.bulge
    }

    /// Returns the same path traversed from `end` to `start`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start, -self.bulge)
    }

    /// Intersects this segment with `other`.
    ///
    /// With `extend`, lines are treated as infinite and arcs as full circles
    /// (arc–arc and arc–line results are then not filtered by arc
    /// membership). Degenerate pairs (zero-length chords, parallel lines,
    /// concentric circles) produce an empty result.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ContractViolation`] if either segment has
    /// non-finite coordinates or bulge.
    pub fn intersect(&self, other: &Segment, extend: bool) -> Result<Intersection> {
        self.check_finite()?;
        other.check_finite()?;
        intersection::dispatch(self, other, extend)
    }

    fn check_finite(&self) -> Result<()> {
        let finite = [self.start.x, self.start.z, self.end.x, self.end.z, self.bulge]
            .iter()
            .all(|v| v.is_finite());
        if finite {
            Ok(())
        } else {
            Err(GeometryError::ContractViolation(format!(
                "segment has non-finite geometry: {self:?}"
            ))
            .into())
        }
    }
}
