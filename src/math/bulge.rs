//! Bulge math for lathe segments.
//!
//! Bulge convention: `bulge = tan(included_angle / 4)`.
//! - `bulge = 0`: straight line
//! - `bulge > 0`: counter-clockwise arc (as seen in the lathe's Z–X view)
//! - `bulge < 0`: clockwise arc
//! - `|bulge| = 1`: semicircle
//!
//! All planar math uses the X and Z components of a point.
use std::f64::consts::PI;

use tracing::warn;

use crate::error::{GeometryError, Result};

use super::{LathePoint, Point3};

/// Returns the included angle (radians) encoded by `bulge`.
///
/// A straight segment reports `π`, the angle "subtended" by a line.
#[must_use]
pub fn angle_from_bulge(bulge: f64) -> f64 {
    if bulge == 0.0 {
        return PI;
    }
    bulge.atan() * 4.0
}

/// Returns the bulge for an included angle in radians.
#[must_use]
pub fn bulge_from_angle(angle: f64) -> f64 {
    (angle / 4.0).tan()
}

/// Returns the arc radius for a chord of length `chord` and the given bulge,
/// or `0` for a straight segment.
///
/// `r = chord * (1 + b²) / (4 * |b|)`, derived from `r = chord / (2 * sin(θ/2))`
/// with `θ = 4 * atan(b)`.
#[must_use]
pub fn radius_from_bulge(chord: f64, bulge: f64) -> f64 {
    if bulge == 0.0 {
        return 0.0;
    }
    chord * (1.0 + bulge * bulge) / (4.0 * bulge.abs())
}

/// Returns the arc centre for a bulge-encoded segment, or `None` for a line.
///
/// The centre sits on the perpendicular bisector of the chord, on the side
/// given by the normal `(start.z - end.z, end.x - start.x)` for negative
/// bulge and the opposite side for positive bulge. The distance is always
/// the minor-arc offset `sqrt(r² - (chord/2)²)`, so arcs with `|bulge| > 1`
/// get a centre on the same side as their minor counterpart.
///
/// A zero-length chord collapses the circle onto `start`.
#[must_use]
pub fn center_from_bulge(start: &Point3, end: &Point3, bulge: f64) -> Option<Point3> {
    if bulge == 0.0 {
        return None;
    }

    let chord = start.distance_to(end);
    if chord == 0.0 {
        return Some(*start);
    }

    let radius = radius_from_bulge(chord, bulge);
    let half = chord * 0.5;
    let offset = (radius * radius - half * half).max(0.0).sqrt();

    let mut base_x = offset * (start.z - end.z) / chord;
    let mut base_z = offset * (end.x - start.x) / chord;
    if bulge > 0.0 {
        base_x = -base_x;
        base_z = -base_z;
    }

    Some(Point3::new(
        (start.x + end.x) * 0.5 + base_x,
        0.0,
        (start.z + end.z) * 0.5 + base_z,
    ))
}

/// Returns the bulge of the minor arc with the given radius over a chord.
///
/// The sign of `radius` selects the arc direction.
///
/// # Errors
///
/// Returns [`GeometryError::ParameterOutOfRange`] when `|radius|` is smaller
/// than half the chord (no circle of that radius spans the chord), or when
/// `radius` is zero or not finite.
pub fn bulge_from_radius(chord: f64, radius: f64) -> Result<f64> {
    let ratio = half_chord_ratio(chord, radius);
    if !(-1.0..=1.0).contains(&ratio) {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "half_chord / radius",
            value: ratio,
            min: -1.0,
            max: 1.0,
        }
        .into());
    }
    Ok(bulge_from_angle(ratio.asin() * 2.0))
}

/// Like [`bulge_from_radius`], but clamps the `asin` argument into
/// `[-1, 1]` and emits a warning instead of failing. A radius that is too
/// small for the chord therefore yields a semicircle.
#[must_use]
pub fn bulge_from_radius_clamped(chord: f64, radius: f64) -> f64 {
    let ratio = half_chord_ratio(chord, radius);
    let clamped = if ratio.is_nan() { 1.0 } else { ratio.clamp(-1.0, 1.0) };
    if clamped != ratio {
        warn!(chord, radius, ratio, clamped, "radius out of range for chord, clamping");
    }
    bulge_from_angle(clamped.asin() * 2.0)
}

fn half_chord_ratio(chord: f64, radius: f64) -> f64 {
    (chord * 0.5) / radius
}
