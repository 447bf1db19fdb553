//! Visual depth per segment.
//!
//! The head is drawn at full size and opacity on top; each trailing segment
//! is a little smaller, fainter and further back.

use facetrail_core::constants::{
    HEAD_STACK_ORDER, TRAIL_BASE_OPACITY, TRAIL_OPACITY_STEP, TRAIL_SCALE_STEP,
};
use facetrail_core::{ChainSnapshot, Point2D};

/// One face of the trail, ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentGlyph {
    /// Position in the chain, 0 = head.
    pub index: usize,
    /// Center in surface pixels.
    pub position: Point2D,
    /// 0..=1.
    pub opacity: f64,
    /// Size multiplier.
    pub scale: f64,
    /// Higher draws on top.
    pub stack_order: i32,
    /// Expression slot passed to the face renderer.
    pub expression_slot: i64,
}

impl SegmentGlyph {
    /// Glyph for segment `index` at `position`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn for_segment(index: usize, position: Point2D) -> Self {
        let (opacity, scale) = if index == 0 {
            (1.0, 1.0)
        } else {
            let i = index as f64;
            (
                (TRAIL_BASE_OPACITY - TRAIL_OPACITY_STEP * i).max(0.0),
                1.0 - TRAIL_SCALE_STEP * i,
            )
        };
        let offset = i32::try_from(index).unwrap_or(i32::MAX);

        Self {
            index,
            position,
            opacity,
            scale,
            stack_order: HEAD_STACK_ORDER.saturating_sub(offset),
            expression_slot: i64::try_from(index).unwrap_or(i64::MAX),
        }
    }

    /// Whether anything would be visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && self.scale > 0.0
    }
}

/// Glyphs for a snapshot in draw order: tail first, head last.
#[must_use]
pub fn present(snapshot: &ChainSnapshot) -> Vec<SegmentGlyph> {
    snapshot
        .points()
        .iter()
        .enumerate()
        .rev()
        .map(|(index, &position)| SegmentGlyph::for_segment(index, position))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_head_glyph() {
        let glyph = SegmentGlyph::for_segment(0, Point2D::new(3.0, 4.0));
        assert_eq!(glyph.opacity, 1.0);
        assert_eq!(glyph.scale, 1.0);
        assert_eq!(glyph.stack_order, 100);
        assert_eq!(glyph.expression_slot, 0);
    }

    #[test]
    fn test_trailing_glyphs() {
        let third = SegmentGlyph::for_segment(3, Point2D::ZERO);
        assert!((third.opacity - 0.5).abs() < EPS);
        assert!((third.scale - 0.76).abs() < EPS);
        assert_eq!(third.stack_order, 97);
        assert_eq!(third.expression_slot, 3);

        let first = SegmentGlyph::for_segment(1, Point2D::ZERO);
        assert!((first.opacity - 0.7).abs() < EPS);
    }

    #[test]
    fn test_opacity_floors_at_zero() {
        for index in 8..20 {
            let glyph = SegmentGlyph::for_segment(index, Point2D::ZERO);
            assert!(glyph.opacity >= 0.0);
            assert!(!glyph.is_visible());
        }
        assert_eq!(SegmentGlyph::for_segment(12, Point2D::ZERO).opacity, 0.0);
    }

    #[test]
    fn test_huge_index_saturates() {
        let glyph = SegmentGlyph::for_segment(usize::MAX, Point2D::ZERO);
        assert_eq!(glyph.stack_order, HEAD_STACK_ORDER - i32::MAX);
    }
}
