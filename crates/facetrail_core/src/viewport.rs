//! Viewport bounds for the bouncing anchor.

use serde::{Deserialize, Serialize};

use crate::error::{TrailError, TrailResult};
use crate::math::Point2D;

/// The visible surface, `[0, width] × [0, height]` in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Creates a new viewport.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Point2D {
        Point2D::new(self.width * 0.5, self.height * 0.5)
    }

    /// Horizontal range a circle of `radius` may occupy without crossing an edge.
    #[must_use]
    pub fn x_range(&self, radius: f64) -> AxisRange {
        AxisRange::inset(self.width, radius)
    }

    /// Vertical range a circle of `radius` may occupy without crossing an edge.
    #[must_use]
    pub fn y_range(&self, radius: f64) -> AxisRange {
        AxisRange::inset(self.height, radius)
    }

    /// Clamps a center point so a circle of `radius` stays fully inside.
    #[must_use]
    pub fn clamp(&self, point: Point2D, radius: f64) -> Point2D {
        Point2D::new(
            self.x_range(radius).clamp(point.x),
            self.y_range(radius).clamp(point.y),
        )
    }

    /// True when a circle of `radius` at `point` lies fully inside.
    #[must_use]
    pub fn contains(&self, point: Point2D, radius: f64) -> bool {
        self.x_range(radius).contains(point.x) && self.y_range(radius).contains(point.y)
    }

    /// Checks that both dimensions are positive and finite.
    ///
    /// # Errors
    ///
    /// [`TrailError::InvalidConfig`] naming the first bad dimension.
    pub fn validate(&self) -> TrailResult<()> {
        for (field, value) in [("viewport.width", self.width), ("viewport.height", self.height)] {
            // NaN fails the comparison
            if !(value.is_finite() && value > 0.0) {
                return Err(TrailError::InvalidConfig {
                    field,
                    value,
                    reason: "must be positive and finite",
                });
            }
        }
        Ok(())
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(
            crate::constants::DEFAULT_VIEWPORT_WIDTH,
            crate::constants::DEFAULT_VIEWPORT_HEIGHT,
        )
    }
}

/// Allowed interval on one axis, `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    /// Lowest allowed coordinate.
    pub min: f64,
    /// Highest allowed coordinate.
    pub max: f64,
}

impl AxisRange {
    /// `[radius, bound - radius]`.
    ///
    /// A bound narrower than the icon collapses the range to its midpoint.
    #[must_use]
    pub fn inset(bound: f64, radius: f64) -> Self {
        let min = radius;
        let max = bound - radius;
        if max < min {
            let mid = bound * 0.5;
            Self { min: mid, max: mid }
        } else {
            Self { min, max }
        }
    }

    /// Clamps a coordinate into the range.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// True when `min <= value <= max`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Reflects a moving coordinate off the range edges.
    ///
    /// Forces the velocity sign to point inward instead of negating it, so a
    /// coordinate resting on an edge can never flip back outward and stick.
    #[must_use]
    pub fn reflect(&self, position: f64, velocity: f64) -> (f64, f64) {
        if position >= self.max {
            (self.max, -velocity.abs())
        } else if position <= self.min {
            (self.min, velocity.abs())
        } else {
            (position, velocity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dimensions() {
        assert!(Viewport::new(800.0, 600.0).validate().is_ok());
        assert!(Viewport::new(0.5, 0.5).validate().is_ok());
        for (width, height, field) in [
            (0.0, 600.0, "viewport.width"),
            (800.0, 0.0, "viewport.height"),
            (-5.0, 600.0, "viewport.width"),
            (f64::INFINITY, 600.0, "viewport.width"),
            (800.0, f64::NAN, "viewport.height"),
        ] {
            assert!(
                matches!(
                    Viewport::new(width, height).validate(),
                    Err(TrailError::InvalidConfig { field: f, .. }) if f == field
                ),
                "{width}x{height} should be rejected on {field}"
            );
        }
    }

    #[test]
    fn test_inset_range() {
        let range = Viewport::new(800.0, 600.0).x_range(60.0);
        assert_eq!(range, AxisRange { min: 60.0, max: 740.0 });
    }

    #[test]
    fn test_degenerate_range_collapses_to_midpoint() {
        let range = AxisRange::inset(100.0, 60.0);
        assert_eq!(range.min, 50.0);
        assert_eq!(range.max, 50.0);
        assert_eq!(range.clamp(0.0), 50.0);
        assert_eq!(range.clamp(500.0), 50.0);
    }

    #[test]
    fn test_reflect_forces_sign() {
        let range = AxisRange { min: 60.0, max: 740.0 };

        assert_eq!(range.reflect(745.0, 2.0), (740.0, -2.0));
        // Already heading inward at the edge: stays inward.
        assert_eq!(range.reflect(740.0, -2.0), (740.0, -2.0));
        assert_eq!(range.reflect(55.0, -1.5), (60.0, 1.5));
        assert_eq!(range.reflect(400.0, -1.5), (400.0, -1.5));
    }

    #[test]
    fn test_clamp_point() {
        let viewport = Viewport::new(800.0, 600.0);
        let clamped = viewport.clamp(Point2D::new(900.0, -20.0), 60.0);
        assert_eq!(clamped, Point2D::new(740.0, 60.0));
        assert!(viewport.contains(clamped, 60.0));
    }
}
