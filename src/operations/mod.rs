mod face;
mod params;
mod toolpath;

pub use face::{FaceOperation, PassSet};
pub use params::{FaceParams, FeedRates, StockExtents};
pub use toolpath::{MotionKind, MotionRecord, ToolpathEmitter};
