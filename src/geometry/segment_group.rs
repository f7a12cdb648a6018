use crate::math::{Axis, LathePoint, Point3};

use super::segment::Segment;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

/// An ordered, directed chain of segments.
///
/// Insertion order is traversal order: the first segment added is the first
/// one machined. The group does not check that consecutive segments share
/// endpoints; see [`SegmentGroup::is_connected`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentGroup {
    segments: Vec<Segment>,
}

impl SegmentGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment to the end of the path.
    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Returns the segments in traversal order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Start of the first segment.
    #[must_use]
    pub fn start_point(&self) -> Option<Point3> {
        self.segments.first().map(|s| *s.start())
    }

    /// End of the last segment.
    #[must_use]
    pub fn end_point(&self) -> Option<Point3> {
        self.segments.last().map(|s| *s.end())
    }

    /// Returns `true` if every segment starts within `tolerance` of the
    /// previous segment's end.
    #[must_use]
    pub fn is_connected(&self, tolerance: f64) -> bool {
        self.segments
            .windows(2)
            .all(|pair| pair[0].end().distance_to(pair[1].start()) <= tolerance)
    }

    /// Computes the bounding box from each segment's
    /// [`extent_min`](Segment::extent_min) and [`extent_max`](Segment::extent_max).
    ///
    /// Inherits the arc extent approximation of those queries. Returns
    /// `None` for an empty group.
    #[must_use]
    pub fn bound_box(&self) -> Option<Aabb> {
        if self.segments.is_empty() {
            return None;
        }

        let axis_range = |axis: Axis| {
            self.segments.iter().fold(
                (f64::INFINITY, f64::NEG_INFINITY),
                |(lo, hi), seg| (lo.min(seg.extent_min(axis)), hi.max(seg.extent_max(axis))),
            )
        };

        let (x_min, x_max) = axis_range(Axis::X);
        let (y_min, y_max) = axis_range(Axis::Y);
        let (z_min, z_max) = axis_range(Axis::Z);
        Some(Aabb {
            min: Point3::new(x_min, y_min, z_min),
            max: Point3::new(x_max, y_max, z_max),
        })
    }
}

impl FromIterator<Segment> for SegmentGroup {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SegmentGroup {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
