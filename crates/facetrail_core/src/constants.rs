//! # Trail Constants
//!
//! Canonical defaults shared by the animator and the face renderer.
//! Anything that needs one of these values reads it from here.

// =============================================================================
// CHAIN
// =============================================================================

/// Number of segments in the chain (head included).
pub const DEFAULT_SEGMENT_COUNT: usize = 8;

/// Fraction of the remaining distance closed per tick while following.
pub const DEFAULT_FOLLOW_GAIN: f64 = 0.08;

/// Head gain while bouncing. Tighter than the follow gain so the head
/// tracks the bounce point closely.
pub const DEFAULT_AUTONOMOUS_HEAD_GAIN: f64 = 0.2;

// =============================================================================
// BOUNCE
// =============================================================================

/// Pixels travelled per tick in autonomous mode.
pub const DEFAULT_BOUNCE_SPEED: f64 = 2.5;

/// Edge length of one icon in pixels. The collision radius is half of this.
pub const DEFAULT_ICON_SIZE: f64 = 120.0;

// =============================================================================
// VIEWPORT
// =============================================================================

/// Viewport width used when the host has not reported one yet.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

/// Viewport height used when the host has not reported one yet.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 720.0;

// =============================================================================
// PRESENTATION
// =============================================================================

/// Stack order of the head. Each segment behind it sits one lower.
pub const HEAD_STACK_ORDER: i32 = 100;

/// Opacity of the first trailing segment before the per-index falloff.
pub const TRAIL_BASE_OPACITY: f64 = 0.8;

/// Opacity lost per segment index.
pub const TRAIL_OPACITY_STEP: f64 = 0.1;

/// Scale lost per segment index.
pub const TRAIL_SCALE_STEP: f64 = 0.08;
