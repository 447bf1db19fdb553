//! # FACETRAIL Core
//!
//! The follow-chain physics behind the face trail.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                    CHAIN ANIMATOR                       │
//! ├────────────────────────────────────────────────────────┤
//! │  Pointer Move ─┐                                        │
//! │  Pointer Leave ┼─> Mode + Target ─> tick() ─> Snapshot │
//! │  Resize ───────┘        │             │                 │
//! │                   Bounce physics   Spring chain         │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! Two motion regimes, never both at once:
//! - **Following**: the head springs toward the live pointer position.
//! - **Autonomous**: a constant-speed point bounces inside the viewport and
//!   the head chases it with a tighter gain.
//!
//! Every trailing segment chases the segment in front of it, which gives the
//! chain its lag and stretch.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animator;
pub mod config;
pub mod constants;
pub mod error;
pub mod math;
pub mod viewport;

pub use animator::{AutonomousState, ChainAnimator, ChainSnapshot, MotionMode};
pub use config::AnimatorConfig;
pub use error::{TrailError, TrailResult};
pub use math::Point2D;
pub use viewport::{AxisRange, Viewport};
