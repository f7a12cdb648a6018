use super::Point3;

/// Projects `p` onto the infinite line through `a` and `b` in the X–Z plane.
///
/// Returns `(t, distance)` where `t` is the parameter of the foot point
/// (`0` at `a`, `1` at `b`) and `distance` is the perpendicular distance
/// from `p` to the line. Returns `None` when `a` and `b` coincide.
#[must_use]
pub fn project_onto_line(p: &Point3, a: &Point3, b: &Point3) -> Option<(f64, f64)> {
    let dx = b.x - a.x;
    let dz = b.z - a.z;
    let len_sq = dx * dx + dz * dz;
    if len_sq == 0.0 {
        return None;
    }

    let t = ((p.x - a.x) * dx + (p.z - a.z) * dz) / len_sq;
    let cross = (p.x - a.x) * dz - (p.z - a.z) * dx;
    Some((t, cross.abs() / len_sq.sqrt()))
}
