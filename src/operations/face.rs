use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::{Segment, SegmentGroup};
use crate::math::{LathePoint, Point3};

use super::params::{FaceParams, StockExtents};

/// Direction of the lead-out move after each facing cut, in degrees.
const LEAD_OUT_ANGLE: f64 = 135.0;

/// Ordered passes of one operation, first cut first.
pub type PassSet = Vec<SegmentGroup>;

/// Faces the stock down to the part boundary in equal steps.
///
/// # Algorithm
///
/// 1. The last pass sits at the part's maximum Z plus stock-to-leave.
/// 2. `passes = ceil((stock_z_max + start_offset - z_end) / step_over)`;
///    the first pass starts `passes` full steps above `z_end`, so the
///    remainder is taken above the stock rather than as a short final step.
/// 3. Passes `0..=passes` each cut across X from outside the stock to the
///    minimum diameter, followed by a 135° lead-out of length `step_over`.
#[derive(Debug)]
pub struct FaceOperation {
    stock: StockExtents,
    part: SegmentGroup,
    params: FaceParams,
}

struct FacePlan {
    x_start: f64,
    x_end: f64,
    z_end: f64,
    pass_count: u32,
}

impl FaceOperation {
    /// Creates a new facing operation for `part` cut from `stock`.
    #[must_use]
    pub fn new(stock: StockExtents, part: SegmentGroup, params: FaceParams) -> Self {
        Self { stock, part, params }
    }

    #[must_use]
    pub fn params(&self) -> &FaceParams {
        &self.params
    }

    /// Number of full step-overs between the start plane and the final
    /// depth. The operation emits one more pass than this.
    ///
    /// # Errors
    ///
    /// See [`FaceOperation::execute`].
    pub fn pass_count(&self) -> Result<u32> {
        Ok(self.plan()?.pass_count)
    }

    /// Builds the pass set. Each pass is its own group holding the cut
    /// followed by its lead-out.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the parameters are
    /// invalid, the part boundary is empty, or the cut would not travel
    /// towards the spindle axis.
    pub fn execute(&self) -> Result<PassSet> {
        let plan = self.plan()?;
        let step = self.params.step_over;
        let z_first = plan.z_end + step * f64::from(plan.pass_count);

        let passes: PassSet = (0..=plan.pass_count)
            .map(|i| {
                let z = z_first - f64::from(i) * step;
                let cut_start = Point3::new(plan.x_start, 0.0, z);
                let cut_end = Point3::new(plan.x_end, 0.0, z);
                let lead_out = cut_end.project(LEAD_OUT_ANGLE, step);

                let mut group = SegmentGroup::new();
                group.add_segment(Segment::line(cut_start, cut_end));
                group.add_segment(Segment::line(cut_end, lead_out));
                group
            })
            .collect();

        debug!(
            passes = passes.len(),
            z_first,
            z_end = plan.z_end,
            "composed facing passes"
        );
        Ok(passes)
    }

    fn plan(&self) -> Result<FacePlan> {
        self.params.validate()?;

        let bound = self.part.bound_box().ok_or_else(|| {
            OperationError::InvalidInput("part boundary has no segments".to_owned())
        })?;

        let x_start = self.stock.x_min - self.params.extra_dia * 0.5;
        let x_end = -self.params.min_dia * 0.5;
        if x_start >= x_end {
            return Err(OperationError::InvalidInput(format!(
                "facing cut would not advance: x {x_start} -> {x_end}"
            ))
            .into());
        }

        let z_start = self.stock.z_max + self.params.start_offset;
        let z_end = bound.max.z + self.params.stock_to_leave;
        let steps = ((z_start - z_end) / self.params.step_over).ceil().max(0.0);
        if !steps.is_finite() || steps > f64::from(u32::MAX) {
            return Err(OperationError::InvalidInput(format!(
                "cannot face from z {z_start} to {z_end}"
            ))
            .into());
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pass_count = steps as u32;

        Ok(FacePlan {
            x_start,
            x_end,
            z_end,
            pass_count,
        })
    }
}
