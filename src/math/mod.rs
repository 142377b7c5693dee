pub mod circle_2d;
pub mod intersect_2d;
pub mod orientation_2d;

/// 2D point type. `y` carries the depth axis of the source scene.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// Default absolute tolerance for tolerance-based coordinate matching.
pub const TOLERANCE: f64 = 1e-10;

/// Projects points lying in the XZ plane onto 2D, dropping the unused `y` axis.
#[must_use]
pub fn points_from_xz(points: &[Point3]) -> Vec<Point2> {
    points.iter().map(|p| Point2::new(p.x, p.z)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xz_projection_drops_y() {
        let pts = points_from_xz(&[Point3::new(1.0, 0.0, 2.0), Point3::new(-3.0, 7.0, 4.5)]);
        assert_eq!(pts, vec![Point2::new(1.0, 2.0), Point2::new(-3.0, 4.5)]);
    }
}
