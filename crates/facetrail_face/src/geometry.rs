//! Arc and wink geometry.
//!
//! Arc angles use a clock frame: 0° points up, positive is clockwise on a
//! y-down screen. Wink angles use the plain math frame (0° = +x), which on a
//! y-down screen also turns clockwise.

use facetrail_core::Point2D;

use crate::path::PathData;

/// Point on a circle at `degrees` in the clock frame.
#[must_use]
pub fn polar_to_cartesian(center: Point2D, radius: f64, degrees: f64) -> Point2D {
    let radians = (degrees - 90.0).to_radians();
    Point2D::new(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}

/// Arc from `start_deg` to `end_deg` around `center`.
///
/// The path runs from the end angle back to the start angle with the sweep
/// flag cleared, so an arc centered on 180° bows downward into a smile.
#[must_use]
pub fn describe_arc(center: Point2D, radius: f64, start_deg: f64, end_deg: f64) -> PathData {
    let start = polar_to_cartesian(center, radius, end_deg);
    let end = polar_to_cartesian(center, radius, start_deg);
    let large_arc = end_deg - start_deg > 180.0;

    PathData::starting_at(start).arc_to(radius, large_arc, false, end)
}

/// Endpoint of a ray from `origin` at `degrees` (math frame).
#[must_use]
pub fn ray_end(origin: Point2D, length: f64, degrees: f64) -> Point2D {
    origin + Point2D::from_angle(degrees.to_radians()) * length
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathSegment;

    const EPS: f64 = 1e-9;

    fn close(a: Point2D, b: Point2D) -> bool {
        a.distance(b) < EPS
    }

    #[test]
    fn test_clock_frame() {
        let c = Point2D::new(50.0, 50.0);
        assert!(close(polar_to_cartesian(c, 10.0, 0.0), Point2D::new(50.0, 40.0)));
        assert!(close(polar_to_cartesian(c, 10.0, 90.0), Point2D::new(60.0, 50.0)));
        assert!(close(polar_to_cartesian(c, 10.0, 180.0), Point2D::new(50.0, 60.0)));
    }

    #[test]
    fn test_default_mouth_is_a_smile() {
        let center = Point2D::new(50.0, 56.0);
        let path = describe_arc(center, 32.0, 119.0, 215.0);

        let start = path.start().expect("arc has a start");
        let end = path.end().expect("arc has an end");

        // Drawn left to right, both ends below the center.
        assert!(start.x < end.x);
        assert!(start.y > center.y && end.y > center.y);
        assert!(matches!(
            path.segments()[1],
            PathSegment::ArcTo { large_arc: false, sweep: false, .. }
        ));
    }

    #[test]
    fn test_large_arc_flag() {
        let path = describe_arc(Point2D::new(50.0, 50.0), 20.0, 40.0, 320.0);
        assert!(matches!(
            path.segments()[1],
            PathSegment::ArcTo { large_arc: true, .. }
        ));

        // Exactly 180° is not large.
        let path = describe_arc(Point2D::new(50.0, 50.0), 20.0, 90.0, 270.0);
        assert!(matches!(
            path.segments()[1],
            PathSegment::ArcTo { large_arc: false, .. }
        ));
    }

    #[test]
    fn test_ray_end() {
        let end = ray_end(Point2D::new(10.0, 10.0), 5.0, 90.0);
        assert!(close(end, Point2D::new(10.0, 15.0)));
    }
}
