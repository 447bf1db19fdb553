//! Vector path data.
//!
//! Serializes to SVG path syntax (`M20 45 Q30 35 40 45`).

use std::fmt;

use facetrail_core::Point2D;

/// One path instruction. All coordinates are absolute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Start a new subpath.
    MoveTo(Point2D),
    /// Straight line.
    LineTo(Point2D),
    /// Quadratic Bézier.
    QuadTo {
        /// Control point.
        control: Point2D,
        /// End point.
        to: Point2D,
    },
    /// Circular arc (equal radii, no axis rotation).
    ArcTo {
        /// Arc radius.
        radius: f64,
        /// Take the arc longer than 180°.
        large_arc: bool,
        /// Positive-angle (clockwise on screen) direction.
        sweep: bool,
        /// End point.
        to: Point2D,
    },
    /// Close the subpath.
    Close,
}

/// An ordered list of path segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    segments: Vec<PathSegment>,
}

impl PathData {
    /// Starts a path at `(x, y)`.
    #[must_use]
    pub fn move_to(x: f64, y: f64) -> Self {
        Self {
            segments: vec![PathSegment::MoveTo(Point2D::new(x, y))],
        }
    }

    /// Starts a path at a point.
    #[must_use]
    pub fn starting_at(point: Point2D) -> Self {
        Self::move_to(point.x, point.y)
    }

    /// Appends a line.
    #[must_use]
    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.segments.push(PathSegment::LineTo(Point2D::new(x, y)));
        self
    }

    /// Appends a line to a point.
    #[must_use]
    pub fn line_to_point(self, point: Point2D) -> Self {
        self.line_to(point.x, point.y)
    }

    /// Appends a quadratic curve.
    #[must_use]
    pub fn quad_to(mut self, cx: f64, cy: f64, x: f64, y: f64) -> Self {
        self.segments.push(PathSegment::QuadTo {
            control: Point2D::new(cx, cy),
            to: Point2D::new(x, y),
        });
        self
    }

    /// Appends a circular arc.
    #[must_use]
    pub fn arc_to(mut self, radius: f64, large_arc: bool, sweep: bool, to: Point2D) -> Self {
        self.segments.push(PathSegment::ArcTo {
            radius,
            large_arc,
            sweep,
            to,
        });
        self
    }

    /// Closes the path.
    #[must_use]
    pub fn close(mut self) -> Self {
        self.segments.push(PathSegment::Close);
        self
    }

    /// The segments in order.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Point where the path starts, if it has any segment.
    #[must_use]
    pub fn start(&self) -> Option<Point2D> {
        match self.segments.first() {
            Some(PathSegment::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// Point where the last drawing segment ends.
    #[must_use]
    pub fn end(&self) -> Option<Point2D> {
        self.segments.iter().rev().find_map(|segment| match *segment {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(p),
            PathSegment::QuadTo { to, .. } | PathSegment::ArcTo { to, .. } => Some(to),
            PathSegment::Close => None,
        })
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *segment {
                PathSegment::MoveTo(p) => write!(f, "M{} {}", p.x, p.y)?,
                PathSegment::LineTo(p) => write!(f, "L{} {}", p.x, p.y)?,
                PathSegment::QuadTo { control, to } => {
                    write!(f, "Q{} {} {} {}", control.x, control.y, to.x, to.y)?;
                }
                PathSegment::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => write!(
                    f,
                    "A{radius} {radius} 0 {} {} {} {}",
                    u8::from(large_arc),
                    u8::from(sweep),
                    to.x,
                    to.y
                )?,
                PathSegment::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}
