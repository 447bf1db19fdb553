//! The eight expressions and the literal geometry of the fixed ones.

use facetrail_core::Point2D;

use crate::color::Color;
use crate::command::{DrawCommand, Paint, Stroke};
use crate::path::PathData;

/// Number of distinct expressions. Slots wrap around this.
pub const EXPRESSION_COUNT: i64 = 8;

/// Facial expression selected by a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expression {
    /// Slot 0: fully parametric, driven by `FaceConfig`.
    Primary,
    /// Slot 1.
    Happy,
    /// Slot 2.
    BigLaugh,
    /// Slot 3.
    Sad,
    /// Slot 4.
    Angry,
    /// Slot 5.
    Playful,
    /// Slot 6.
    Surprised,
    /// Slot 7.
    Speechless,
}

impl Expression {
    /// All expressions in slot order.
    pub const ALL: [Self; 8] = [
        Self::Primary,
        Self::Happy,
        Self::BigLaugh,
        Self::Sad,
        Self::Angry,
        Self::Playful,
        Self::Surprised,
        Self::Speechless,
    ];

    /// Maps any integer to an expression (Euclidean modulo 8, so `-1` is 7).
    #[must_use]
    pub fn from_slot(slot: i64) -> Self {
        let index = usize::try_from(slot.rem_euclid(EXPRESSION_COUNT)).unwrap_or_default();
        Self::ALL[index]
    }

    /// Slot in `0..8`.
    #[must_use]
    pub const fn slot(self) -> u8 {
        self as u8
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Happy => "Happy",
            Self::BigLaugh => "Big Laugh",
            Self::Sad => "Sad",
            Self::Angry => "Angry",
            Self::Playful => "Playful",
            Self::Surprised => "Surprised",
            Self::Speechless => "Speechless",
        }
    }
}

/// Literal geometry for the fixed expressions. `Primary` yields nothing here.
pub(crate) fn fixed_commands(expression: Expression, stroke_width: f64) -> Vec<DrawCommand> {
    let face = Color::FACE;
    let round = Stroke::round(face, stroke_width);
    let stroked = |path: PathData| DrawCommand::stroked_path(path, round);
    let line = |x1: f64, y1: f64, x2: f64, y2: f64| {
        DrawCommand::line(Point2D::new(x1, y1), Point2D::new(x2, y2), round)
    };

    match expression {
        Expression::Primary => Vec::new(),
        Expression::Happy => vec![
            stroked(PathData::move_to(20.0, 45.0).quad_to(30.0, 35.0, 40.0, 45.0)),
            stroked(PathData::move_to(60.0, 45.0).quad_to(70.0, 35.0, 80.0, 45.0)),
            stroked(PathData::move_to(30.0, 70.0).quad_to(50.0, 85.0, 70.0, 70.0)),
        ],
        Expression::BigLaugh => vec![
            stroked(PathData::move_to(22.0, 42.0).line_to(38.0, 42.0)),
            stroked(PathData::move_to(62.0, 42.0).line_to(78.0, 42.0)),
            DrawCommand::filled_path(
                PathData::move_to(30.0, 65.0).quad_to(50.0, 95.0, 70.0, 65.0).close(),
                face,
            ),
        ],
        Expression::Sad => vec![
            DrawCommand::filled_circle(30.0, 40.0, 8.0, face),
            DrawCommand::filled_circle(70.0, 40.0, 8.0, face),
            stroked(PathData::move_to(35.0, 80.0).quad_to(50.0, 65.0, 65.0, 80.0)),
        ],
        Expression::Angry => vec![
            stroked(PathData::move_to(20.0, 35.0).line_to(40.0, 45.0)),
            stroked(PathData::move_to(60.0, 45.0).line_to(80.0, 35.0)),
            stroked(PathData::move_to(40.0, 75.0).quad_to(50.0, 65.0, 60.0, 75.0)),
        ],
        Expression::Playful => vec![
            DrawCommand::filled_circle(30.0, 40.0, 9.0, face),
            stroked(PathData::move_to(60.0, 45.0).line_to(80.0, 45.0)),
            stroked(PathData::move_to(40.0, 70.0).quad_to(50.0, 75.0, 60.0, 70.0)),
            DrawCommand::filled_path(
                PathData::move_to(45.0, 72.0).quad_to(50.0, 85.0, 55.0, 72.0).close(),
                Color::TONGUE,
            ),
        ],
        Expression::Surprised => vec![
            DrawCommand::filled_circle(30.0, 35.0, 9.0, face),
            DrawCommand::filled_circle(70.0, 35.0, 9.0, face),
            DrawCommand::Circle {
                center: Point2D::new(50.0, 75.0),
                radius: 10.0,
                paint: Paint::stroke(Stroke::plain(face, stroke_width)),
            },
        ],
        Expression::Speechless => vec![
            line(20.0, 40.0, 40.0, 40.0),
            line(60.0, 40.0, 80.0, 40.0),
            line(35.0, 75.0, 65.0, 75.0),
        ],
    }
}
