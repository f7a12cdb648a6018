use serde::{Deserialize, Serialize};

use crate::error::{OperationError, Result};
use crate::geometry::Aabb;

/// Stock dimensions supplied by the operation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockExtents {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub z_min: f64,
    pub z_max: f64,
}

impl From<Aabb> for StockExtents {
    fn from(bb: Aabb) -> Self {
        Self {
            x_min: bb.min.x,
            x_max: bb.max.x,
            y_min: bb.min.y,
            y_max: bb.max.y,
            z_min: bb.min.z,
            z_max: bb.max.z,
        }
    }
}

/// Machining parameters for a facing operation.
///
/// Missing fields fall back to [`FaceParams::default`] when deserialised.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceParams {
    /// Depth removed per pass.
    pub step_over: f64,
    /// Material left on the part face for a later finishing operation.
    pub stock_to_leave: f64,
    /// Extra diameter cleared beyond the stock.
    pub extra_dia: f64,
    /// Diameter left uncut at the spindle axis.
    pub min_dia: f64,
    /// Clearance added above the stock face for the first pass.
    pub start_offset: f64,
    /// Number of trailing passes emitted at the finishing feed rate.
    pub finish_passes: u32,
}

impl Default for FaceParams {
    fn default() -> Self {
        Self {
            step_over: 1.0,
            stock_to_leave: 0.0,
            extra_dia: 0.0,
            min_dia: 0.0,
            start_offset: 0.0,
            finish_passes: 0,
        }
    }
}

impl FaceParams {
    /// Checks that the parameters describe a machinable facing plan.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if `step_over` is not
    /// positive, or any distance is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.step_over.is_finite() || self.step_over <= 0.0 {
            return Err(invalid(format!(
                "step_over must be positive, got {}",
                self.step_over
            )));
        }
        for (name, value) in [
            ("stock_to_leave", self.stock_to_leave),
            ("extra_dia", self.extra_dia),
            ("min_dia", self.min_dia),
            ("start_offset", self.start_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{name} must be non-negative, got {value}")));
            }
        }
        Ok(())
    }
}

/// Feed rates for cutting moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedRates {
    horizontal: f64,
    vertical: f64,
    #[serde(default = "default_finish_scale")]
    finish_scale: f64,
}

fn default_finish_scale() -> f64 {
    1.0
}

impl FeedRates {
    /// Creates feed rates for moves along Z (`horizontal`, the spindle axis)
    /// and along X (`vertical`).
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if either rate is not positive.
    pub fn new(horizontal: f64, vertical: f64) -> Result<Self> {
        for (name, value) in [("horizontal", horizontal), ("vertical", vertical)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(format!("{name} feed must be positive, got {value}")));
            }
        }
        Ok(Self {
            horizontal,
            vertical,
            finish_scale: default_finish_scale(),
        })
    }

    /// Sets the multiplier applied to both rates on finishing passes.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if `scale` is not positive.
    pub fn with_finish_scale(mut self, scale: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(invalid(format!("finish scale must be positive, got {scale}")));
        }
        self.finish_scale = scale;
        Ok(self)
    }

    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.horizontal
    }

    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.vertical
    }

    #[must_use]
    pub fn finish_scale(&self) -> f64 {
        self.finish_scale
    }
}

fn invalid(message: String) -> crate::error::LatheError {
    OperationError::InvalidInput(message).into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;

    #[test]
    fn default_params_are_valid() {
        assert!(FaceParams::default().validate().is_ok());
    }

    #[test]
    fn zero_step_over_is_rejected() {
        let params = FaceParams {
            step_over: 0.0,
            ..FaceParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn negative_stock_to_leave_is_rejected() {
        let params = FaceParams {
            stock_to_leave: -0.5,
            ..FaceParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn params_deserialize_with_defaults() {
        let params: FaceParams =
            serde_json::from_str(r#"{ "step_over": 2.5, "finish_passes": 1 }"#).unwrap();
        assert!((params.step_over - 2.5).abs() < f64::EPSILON);
        assert_eq!(params.finish_passes, 1);
        assert!(params.stock_to_leave.abs() < f64::EPSILON);
    }

    #[test]
    fn feed_rates_validate() {
        assert!(FeedRates::new(100.0, 50.0).is_ok());
        assert!(FeedRates::new(0.0, 50.0).is_err());
        assert!(FeedRates::new(100.0, f64::NAN).is_err());
        assert!(FeedRates::new(100.0, 50.0)
            .unwrap()
            .with_finish_scale(-1.0)
            .is_err());
    }

    #[test]
    fn stock_from_bound_box() {
        let stock = StockExtents::from(Aabb {
            min: Point3::new(-25.0, 0.0, -50.0),
            max: Point3::new(0.0, 0.0, 100.0),
        });
        assert!((stock.x_min + 25.0).abs() < f64::EPSILON);
        assert!((stock.z_max - 100.0).abs() < f64::EPSILON);
    }
}
