use super::Point2;

/// Winding of three points in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Clockwise, or collinear.
    Clockwise,
    /// Strictly counter-clockwise.
    CounterClockwise,
}

/// Twice the signed area of the triangle `(p1, p2, p3)`.
///
/// Positive for counter-clockwise, negative for clockwise, zero when collinear.
#[must_use]
pub fn signed_area_determinant(p1: &Point2, p2: &Point2, p3: &Point2) -> f64 {
    p1.x * p2.y + p3.x * p1.y + p2.x * p3.y - p1.x * p3.y - p3.x * p2.y - p2.x * p1.y
}

/// Classifies the winding of `(p1, p2, p3)`.
///
/// A zero determinant (collinear points) counts as clockwise. Downstream
/// convexity and flip decisions depend on this tie-break.
#[must_use]
pub fn orientation(p1: &Point2, p2: &Point2, p3: &Point2) -> Orientation {
    if signed_area_determinant(p1, p2, p3) > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// Returns `true` if `(p1, p2, p3)` is clockwise or collinear.
#[must_use]
pub fn is_clockwise(p1: &Point2, p2: &Point2, p3: &Point2) -> bool {
    orientation(p1, p2, p3) == Orientation::Clockwise
}

/// Returns `true` if `a, b, c, d`, taken in that cyclic order, form a convex quadrilateral.
///
/// Decided from the orientations of `(a,b,c)`, `(a,b,d)`, `(b,c,d)` and `(c,a,d)`
/// against a fixed table of the six sign combinations a convex quad can produce
/// (three for each winding). Collinear triples fall on the clockwise side of the table.
#[must_use]
pub fn is_convex_quad(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> bool {
    let abc = is_clockwise(a, b, c);
    let abd = is_clockwise(a, b, d);
    let bcd = is_clockwise(b, c, d);
    let cad = is_clockwise(c, a, d);

    matches!(
        (abc, abd, bcd, cad),
        (true, true, true, false)
            | (true, true, false, true)
            | (true, false, true, true)
            | (false, false, false, true)
            | (false, false, true, false)
            | (false, true, false, false)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn ccw_triangle() {
        assert_eq!(
            orientation(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0)),
            Orientation::CounterClockwise
        );
    }

    #[test]
    fn cw_triangle() {
        assert_eq!(
            orientation(&p(0.0, 0.0), &p(0.0, 1.0), &p(1.0, 0.0)),
            Orientation::Clockwise
        );
    }

    #[test]
    fn collinear_counts_as_clockwise() {
        assert!(is_clockwise(&p(0.0, 0.0), &p(1.0, 1.0), &p(2.0, 2.0)));
        assert!(is_clockwise(&p(2.0, 2.0), &p(1.0, 1.0), &p(0.0, 0.0)));
    }

    #[test]
    fn determinant_is_twice_area() {
        let det = signed_area_determinant(&p(0.0, 0.0), &p(4.0, 0.0), &p(0.0, 3.0));
        approx::assert_relative_eq!(det, 12.0);
    }

    // ── Quad convexity ──

    #[test]
    fn square_is_convex_both_windings() {
        let (a, b, c, d) = (p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0));
        assert!(is_convex_quad(&a, &b, &c, &d)); // clockwise
        assert!(is_convex_quad(&d, &c, &b, &a)); // counter-clockwise
    }

    #[test]
    fn dart_is_not_convex() {
        // d sits inside triangle abc.
        let (a, b, c, d) = (p(0.0, 0.0), p(2.0, 4.0), p(4.0, 0.0), p(2.0, 1.0));
        assert!(!is_convex_quad(&a, &b, &c, &d));
        assert!(!is_convex_quad(&c, &b, &a, &d));
    }

    #[test]
    fn reflex_corner_at_b_is_not_convex() {
        // b is pushed inwards past the a-c diagonal.
        let (a, b, c, d) = (p(0.0, 0.0), p(-0.5, 1.5), p(0.0, 3.0), p(-2.0, 1.5));
        assert!(!is_convex_quad(&a, &b, &c, &d));
    }

    #[test]
    fn every_rotation_of_a_convex_quad_is_convex() {
        let pts = [p(0.0, 0.0), p(-1.0, 3.0), p(2.0, 5.0), p(4.0, 1.0)];
        for r in 0..4 {
            let q: Vec<Point2> = (0..4).map(|i| pts[(i + r) % 4]).collect();
            assert!(is_convex_quad(&q[0], &q[1], &q[2], &q[3]), "rotation {r}");
        }
    }
}
