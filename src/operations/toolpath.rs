use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geometry::{ArcDirection, Segment, SegmentGroup, SegmentKind};
use crate::math::{LathePoint, Point3, TOLERANCE};

use super::params::{FaceParams, FeedRates, StockExtents};

/// Kind of machine motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionKind {
    Rapid,
    Feed,
    Arc,
}

/// A single motion handed to the G-code formatter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionRecord {
    pub kind: MotionKind,
    pub target: Point3,
    /// `None` for rapid moves.
    pub feed_rate: Option<f64>,
    /// Absolute arc centre, present only for [`MotionKind::Arc`].
    pub arc_center: Option<Point3>,
    pub arc_direction: Option<ArcDirection>,
}

impl MotionRecord {
    #[must_use]
    pub fn rapid(target: Point3) -> Self {
        Self {
            kind: MotionKind::Rapid,
            target,
            feed_rate: None,
            arc_center: None,
            arc_direction: None,
        }
    }

    #[must_use]
    pub fn feed(target: Point3, feed_rate: f64) -> Self {
        Self {
            kind: MotionKind::Feed,
            target,
            feed_rate: Some(feed_rate),
            arc_center: None,
            arc_direction: None,
        }
    }

    #[must_use]
    pub fn arc(target: Point3, feed_rate: f64, center: Point3, direction: ArcDirection) -> Self {
        Self {
            kind: MotionKind::Arc,
            target,
            feed_rate: Some(feed_rate),
            arc_center: Some(center),
            arc_direction: Some(direction),
        }
    }
}

/// Converts pass sets into motion records.
///
/// Each group is approached from a retract position outside the stock,
/// cut segment by segment, and left by retracting along Z. Segments that do
/// not start where the previous one ended are reached with rapids via the
/// retract plane.
#[derive(Debug, Clone)]
pub struct ToolpathEmitter {
    stock: StockExtents,
    step_over: f64,
    finish_passes: u32,
    feeds: FeedRates,
}

impl ToolpathEmitter {
    /// Creates an emitter for passes composed with `params`.
    #[must_use]
    pub fn new(stock: StockExtents, params: &FaceParams, feeds: FeedRates) -> Self {
        Self {
            stock,
            step_over: params.step_over,
            finish_passes: params.finish_passes,
            feeds,
        }
    }

    /// Emits every pass in order. The last `finish_passes` groups use the
    /// finishing feed scale.
    #[must_use]
    pub fn emit(&self, passes: &[SegmentGroup]) -> Vec<MotionRecord> {
        let finish_from =
            passes.len().saturating_sub(usize::try_from(self.finish_passes).unwrap_or(usize::MAX));

        let records: Vec<MotionRecord> = passes
            .iter()
            .enumerate()
            .flat_map(|(i, group)| self.emit_group(group, i >= finish_from))
            .collect();

        debug!(
            passes = passes.len(),
            records = records.len(),
            "emitted toolpath"
        );
        records
    }

    /// Emits the motions for one group. Empty groups produce nothing.
    #[must_use]
    pub fn emit_group(&self, group: &SegmentGroup, finishing: bool) -> Vec<MotionRecord> {
        let Some(first) = group.segments().first() else {
            return Vec::new();
        };

        let start = first.start();
        let x_retract = self.x_retract(first);
        let z_retract = self.z_retract(first);

        let mut records = vec![
            MotionRecord::rapid(xz(x_retract, z_retract)),
            MotionRecord::rapid(xz(x_retract, start.z)),
            MotionRecord::rapid(*start),
        ];

        let mut previous: Option<&Segment> = None;
        for seg in group {
            if let Some(prev) = previous {
                if prev.end().distance_to(seg.start()) > TOLERANCE {
                    let z_clear = self.z_retract(seg);
                    records.push(MotionRecord::rapid(xz(prev.end().x, z_clear)));
                    records.push(MotionRecord::rapid(xz(seg.start().x, z_clear)));
                    records.push(MotionRecord::rapid(*seg.start()));
                }
            }
            records.push(self.cut(seg, finishing));
            previous = Some(seg);
        }

        if let Some(last) = group.segments().last() {
            let z_clear = z_retract.max(last.end().z);
            records.push(MotionRecord::rapid(xz(last.end().x, z_clear)));
            records.push(MotionRecord::rapid(xz(x_retract, z_clear)));
        }
        records
    }

    fn cut(&self, seg: &Segment, finishing: bool) -> MotionRecord {
        let rate = self.feed_rate(seg, finishing);
        match *seg.kind() {
            SegmentKind::Line => MotionRecord::feed(*seg.end(), rate),
            SegmentKind::Arc {
                center, direction, ..
            } => MotionRecord::arc(*seg.end(), rate, center, direction),
        }
    }

    /// Z-dominated travel runs along the spindle and takes the horizontal rate.
    fn feed_rate(&self, seg: &Segment, finishing: bool) -> f64 {
        let dx = (seg.end().x - seg.start().x).abs();
        let dz = (seg.end().z - seg.start().z).abs();
        let rate = if dz >= dx {
            self.feeds.horizontal()
        } else {
            self.feeds.vertical()
        };
        if finishing {
            rate * self.feeds.finish_scale()
        } else {
            rate
        }
    }

    fn x_retract(&self, seg: &Segment) -> f64 {
        (seg.start().x - self.step_over).min(self.stock.x_min - self.step_over)
    }

    fn z_retract(&self, seg: &Segment) -> f64 {
        seg.start().z.max(self.stock.z_max)
    }
}

fn xz(x: f64, z: f64) -> Point3 {
    Point3::new(x, 0.0, z)
}
