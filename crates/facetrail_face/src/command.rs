//! Draw commands for one face.
//!
//! A [`FaceDrawing`](crate::FaceDrawing) is a flat list of these, drawn in
//! order.

use facetrail_core::Point2D;

use crate::color::Color;
use crate::path::PathData;

/// Line end style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Square cut at the endpoint.
    #[default]
    Butt,
    /// Half-disc past the endpoint.
    Round,
}

/// Corner style between joined segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    /// Sharp corner.
    #[default]
    Miter,
    /// Rounded corner.
    Round,
}

/// Outline style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width.
    pub width: f64,
    /// End style.
    pub cap: LineCap,
    /// Corner style.
    pub join: LineJoin,
}

impl Stroke {
    /// Round-capped stroke.
    #[must_use]
    pub const fn round(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Round,
            join: LineJoin::Miter,
        }
    }

    /// Round caps and round joins.
    #[must_use]
    pub const fn round_joined(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Round,
            join: LineJoin::Round,
        }
    }

    /// Plain stroke (butt caps, miter joins).
    #[must_use]
    pub const fn plain(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
        }
    }
}

/// Fill and stroke of a shape. Either may be absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    /// Interior color.
    pub fill: Option<Color>,
    /// Outline.
    pub stroke: Option<Stroke>,
}

impl Paint {
    /// Filled, no outline.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Outlined, no fill.
    #[must_use]
    pub const fn stroke(stroke: Stroke) -> Self {
        Self {
            fill: None,
            stroke: Some(stroke),
        }
    }
}

/// A single vector primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Circle.
    Circle {
        /// Center.
        center: Point2D,
        /// Radius.
        radius: f64,
        /// Paint.
        paint: Paint,
    },
    /// Straight line.
    Line {
        /// Start point.
        from: Point2D,
        /// End point.
        to: Point2D,
        /// Paint (stroke only is meaningful).
        paint: Paint,
    },
    /// Arbitrary path.
    Path {
        /// Geometry.
        data: PathData,
        /// Paint.
        paint: Paint,
    },
}

impl DrawCommand {
    /// Filled circle.
    #[must_use]
    pub fn filled_circle(x: f64, y: f64, radius: f64, color: Color) -> Self {
        Self::Circle {
            center: Point2D::new(x, y),
            radius,
            paint: Paint::fill(color),
        }
    }

    /// Stroked line.
    #[must_use]
    pub fn line(from: Point2D, to: Point2D, stroke: Stroke) -> Self {
        Self::Line {
            from,
            to,
            paint: Paint::stroke(stroke),
        }
    }

    /// Stroked path.
    #[must_use]
    pub fn stroked_path(data: PathData, stroke: Stroke) -> Self {
        Self::Path {
            data,
            paint: Paint::stroke(stroke),
        }
    }

    /// Filled path.
    #[must_use]
    pub fn filled_path(data: PathData, color: Color) -> Self {
        Self::Path {
            data,
            paint: Paint::fill(color),
        }
    }

    /// Paint of any command.
    #[must_use]
    pub fn paint(&self) -> &Paint {
        match self {
            Self::Circle { paint, .. } | Self::Line { paint, .. } | Self::Path { paint, .. } => {
                paint
            }
        }
    }
}
