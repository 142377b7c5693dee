use super::Point2;

/// Signed in-circle determinant of `d` against the circle through `a`, `b`, `c`.
///
/// For a counter-clockwise `(a, b, c)` the result is positive when `d` lies strictly
/// inside the circle, negative when outside and zero when the four points are
/// co-circular. A clockwise triangle flips the sign, so for the clockwise meshes built
/// here a negative value means "inside".
///
/// Expanded by hand over coordinates translated to `d`, not through a matrix routine,
/// so the rounding path is fixed.
#[must_use]
pub fn in_circle_sign(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> f64 {
    let ax = a.x - d.x;
    let bx = b.x - d.x;
    let cx = c.x - d.x;

    let ay = a.y - d.y;
    let by = b.y - d.y;
    let cy = c.y - d.y;

    let a_lift = ax * ax + ay * ay;
    let b_lift = bx * bx + by * by;
    let c_lift = cx * cx + cy * cy;

    (ax * by * c_lift) + (ay * b_lift * cx) + (a_lift * bx * cy)
        - (cx * by * a_lift)
        - (cy * b_lift * ax)
        - (c_lift * bx * ay)
}
