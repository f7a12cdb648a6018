pub mod intersection;
pub mod segment;
pub mod segment_group;

pub use intersection::Intersection;
pub use segment::{ArcDirection, Segment, SegmentKind};
pub use segment_group::{Aabb, SegmentGroup};
