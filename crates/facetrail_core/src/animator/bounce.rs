//! Constant-speed bounce physics for autonomous mode.

use serde::{Deserialize, Serialize};

use crate::math::Point2D;
use crate::viewport::Viewport;

/// Free-floating anchor used while no pointer is present.
///
/// The speed never changes after a reseed: reflections only flip the sign of
/// one velocity component, which keeps `|velocity|` intact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutonomousState {
    /// Current anchor position.
    pub position: Point2D,
    /// Displacement per tick.
    pub velocity: Point2D,
}

impl AutonomousState {
    /// Creates a state at `position` heading along `angle` (radians) at `speed`.
    #[must_use]
    pub fn heading(position: Point2D, angle: f64, speed: f64) -> Self {
        Self {
            position,
            velocity: Point2D::from_angle(angle) * speed,
        }
    }

    /// Current speed in pixels per tick.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Advances one tick and reflects off the viewport edges.
    ///
    /// Both axes are handled independently, so a corner hit reflects both.
    pub fn step(&mut self, viewport: &Viewport, radius: f64) {
        let moved = self.position + self.velocity;

        let (x, vx) = viewport.x_range(radius).reflect(moved.x, self.velocity.x);
        let (y, vy) = viewport.y_range(radius).reflect(moved.y, self.velocity.y);

        self.position = Point2D::new(x, y);
        self.velocity = Point2D::new(vx, vy);
    }

    /// Pulls the anchor back inside after the viewport shrank.
    pub fn clamp_to(&mut self, viewport: &Viewport, radius: f64) {
        self.position = viewport.clamp(self.position, radius);
    }
}
