use super::orientation_2d::signed_area_determinant;
use super::Point2;

/// Parametric segment-segment intersection test in 2D.
///
/// Solves `l1_p1 + u_a * (l1_p2 - l1_p1) = l2_p1 + u_b * (l2_p2 - l2_p1)`.
/// Parallel (including collinear) segments have a zero denominator and never
/// intersect. With `include_endpoints` both parameters may lie in the closed
/// interval `[0, 1]`; otherwise they must lie strictly inside `(0, 1)`.
#[must_use]
pub fn segments_intersect(
    l1_p1: &Point2,
    l1_p2: &Point2,
    l2_p1: &Point2,
    l2_p2: &Point2,
    include_endpoints: bool,
) -> bool {
    let denominator =
        (l2_p2.y - l2_p1.y) * (l1_p2.x - l1_p1.x) - (l2_p2.x - l2_p1.x) * (l1_p2.y - l1_p1.y);

    if denominator == 0.0 {
        return false;
    }

    let u_a = ((l2_p2.x - l2_p1.x) * (l1_p1.y - l2_p1.y)
        - (l2_p2.y - l2_p1.y) * (l1_p1.x - l2_p1.x))
        / denominator;
    let u_b = ((l1_p2.x - l1_p1.x) * (l1_p1.y - l2_p1.y)
        - (l1_p2.y - l1_p1.y) * (l1_p1.x - l2_p1.x))
        / denominator;

    if include_endpoints {
        (0.0..=1.0).contains(&u_a) && (0.0..=1.0).contains(&u_b)
    } else {
        u_a > 0.0 && u_a < 1.0 && u_b > 0.0 && u_b < 1.0
    }
}

/// Returns `true` if `point` lies on the segment `start`-`end`, excluding both ends.
///
/// Collinearity is tested exactly, so only points that sit on the segment in
/// floating point (typically grid or integer input) qualify.
#[must_use]
pub fn point_on_segment_interior(point: &Point2, start: &Point2, end: &Point2) -> bool {
    if signed_area_determinant(start, end, point) != 0.0 {
        return false;
    }
    (point - start).dot(&(end - start)) > 0.0 && (point - end).dot(&(start - end)) > 0.0
}
