//! Face renderer.
//!
//! [`render_face`] is a pure function: no state, no caching, no side effects.

use facetrail_core::Point2D;

use crate::color::Color;
use crate::command::{DrawCommand, Stroke};
use crate::config::{FaceConfig, WinkType};
use crate::expression::{fixed_commands, Expression};
use crate::geometry::{describe_arc, ray_end};
use crate::path::PathData;

/// Center X of the mouth arc.
const MOUTH_CENTER_X: f64 = 50.0;

/// Half-width of the chevron and dash winks before scaling.
const WINK_HALF_WIDTH: f64 = 10.0;

/// Half-height of the chevron wink before scaling.
const CHEVRON_HALF_HEIGHT: f64 = 5.0;

/// Draw commands for one face in the 100×100 space.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceDrawing {
    /// Expression that was drawn.
    pub expression: Expression,
    /// Commands in paint order.
    pub commands: Vec<DrawCommand>,
}

impl FaceDrawing {
    /// Side length of the drawing space.
    pub const VIEW_BOX: f64 = 100.0;
}

/// Renders the face for `slot`.
///
/// Any integer is accepted; slots wrap modulo 8 (negative ones included).
#[must_use]
pub fn render_face(slot: i64, cfg: &FaceConfig) -> FaceDrawing {
    let expression = Expression::from_slot(slot);
    let commands = match expression {
        Expression::Primary => primary_commands(cfg),
        fixed => fixed_commands(fixed, cfg.stroke_width),
    };
    FaceDrawing {
        expression,
        commands,
    }
}

/// Left eye, wink, mouth.
fn primary_commands(cfg: &FaceConfig) -> Vec<DrawCommand> {
    let left_eye = DrawCommand::filled_circle(cfg.left_eye_x, cfg.left_eye_y, cfg.eye_size, Color::FACE);

    let start_deg = 180.0 - cfg.mouth_sweep / 2.0 + cfg.mouth_rotation;
    let end_deg = 180.0 + cfg.mouth_sweep / 2.0 + cfg.mouth_rotation;
    let mouth = DrawCommand::stroked_path(
        describe_arc(
            Point2D::new(MOUTH_CENTER_X, cfg.smile_y),
            cfg.mouth_radius,
            start_deg,
            end_deg,
        ),
        Stroke::round(Color::FACE, cfg.stroke_width),
    );

    vec![left_eye, wink(cfg), mouth]
}

/// The right eye.
fn wink(cfg: &FaceConfig) -> DrawCommand {
    let at = Point2D::new(cfg.right_eye_x, cfg.right_eye_y);
    let s = cfg.wink_scale;

    match cfg.wink_type {
        WinkType::Chevron => {
            let path = PathData::move_to(at.x - WINK_HALF_WIDTH * s, at.y + CHEVRON_HALF_HEIGHT * s)
                .line_to(at.x, at.y - CHEVRON_HALF_HEIGHT * s)
                .line_to(at.x + WINK_HALF_WIDTH * s, at.y + CHEVRON_HALF_HEIGHT * s);
            DrawCommand::stroked_path(path, Stroke::round_joined(Color::FACE, cfg.stroke_width))
        }
        WinkType::Dash => DrawCommand::line(
            Point2D::new(at.x - WINK_HALF_WIDTH * s, at.y),
            Point2D::new(at.x + WINK_HALF_WIDTH * s, at.y),
            Stroke::round(Color::FACE, cfg.stroke_width),
        ),
        WinkType::Wedge => {
            let length = cfg.wink_line_length * s;
            let half_opening = cfg.wink_opening_angle / 2.0;
            let first = ray_end(at, length, cfg.wink_rotation - half_opening);
            let second = ray_end(at, length, cfg.wink_rotation + half_opening);

            let path = PathData::starting_at(first)
                .line_to_point(at)
                .line_to_point(second);
            DrawCommand::stroked_path(path, Stroke::round_joined(Color::FACE, cfg.stroke_width))
        }
    }
}
