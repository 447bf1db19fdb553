//! Immutable per-tick output of the animator.

use std::sync::Arc;

use super::MotionMode;
use crate::math::Point2D;

/// The chain as it stood after one tick.
///
/// Cheap to clone; the points are shared, never copied.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainSnapshot {
    /// Tick counter at publication (first tick = 1).
    pub frame: u64,
    /// Mode the tick ran in.
    pub mode: MotionMode,
    points: Arc<[Point2D]>,
}

impl ChainSnapshot {
    pub(crate) fn new(frame: u64, mode: MotionMode, points: &[Point2D]) -> Self {
        Self {
            frame,
            mode,
            points: Arc::from(points),
        }
    }

    /// Segment positions, head first.
    #[must_use]
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Interleaved `x, y` coordinates, head first, for flat vertex uploads.
    #[must_use]
    pub fn coordinates(&self) -> &[f64] {
        bytemuck::cast_slice(&self.points)
    }

    /// Head position.
    #[must_use]
    pub fn head(&self) -> Point2D {
        self.points[0]
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a chain holds at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
