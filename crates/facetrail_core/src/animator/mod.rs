//! The follow-chain animator.
//!
//! ## Tick
//!
//! ```text
//! Autonomous:  anchor += velocity ─> reflect ─> head += (anchor  - head) * 0.2
//! Following:                                    head += (pointer - head) * follow_gain
//! Both:        chain[i] += (chain[i-1] - chain[i]) * follow_gain     (i = 1..N)
//! ```
//!
//! Steps are per tick, not per second. A dropped frame means the trail moves
//! a little less that frame; nothing compensates for it.

mod bounce;
mod snapshot;

pub use bounce::AutonomousState;
pub use snapshot::ChainSnapshot;

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::AnimatorConfig;
use crate::error::TrailResult;
use crate::math::Point2D;
use crate::viewport::Viewport;

/// Which regime drives the head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MotionMode {
    /// Head tracks the live pointer.
    Following,
    /// Head tracks the bouncing anchor.
    #[default]
    Autonomous,
}

/// Owns the chain and all motion state.
///
/// Mutated only through the input handlers and [`tick`](Self::tick).
#[derive(Debug, Clone)]
pub struct ChainAnimator {
    /// Segment positions, head first. Length fixed at construction.
    chain: Box<[Point2D]>,
    /// Active regime.
    mode: MotionMode,
    /// Last reported pointer position.
    pointer_target: Point2D,
    /// Bounce anchor.
    autonomous: AutonomousState,
    /// Gain for the head while following and for every trailing segment.
    follow_gain: f64,
    /// Gain for the head while bouncing.
    autonomous_head_gain: f64,
    /// Anchor speed (pixels per tick).
    bounce_speed: f64,
    /// Half the icon size.
    icon_radius: f64,
    /// Current surface bounds.
    viewport: Viewport,
    /// Direction draws.
    rng: ChaCha8Rng,
    /// Ticks run so far.
    frame: u64,
}

impl ChainAnimator {
    /// Builds an animator with every segment at the start anchor.
    ///
    /// Starts in [`MotionMode::Autonomous`], heading in a random direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the config fails
    /// [`AnimatorConfig::validate`] or [`Viewport::validate`].
    pub fn new(config: &AnimatorConfig, viewport: Viewport) -> TrailResult<Self> {
        config.validate()?;
        viewport.validate()?;

        let start = config.start.unwrap_or_else(|| viewport.center());
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let angle = rng.gen_range(0.0..TAU);

        tracing::debug!(
            segments = config.segment_count,
            follow_gain = config.follow_gain,
            bounce_speed = config.bounce_speed,
            width = viewport.width,
            height = viewport.height,
            "chain animator created"
        );

        Ok(Self {
            chain: vec![start; config.segment_count].into_boxed_slice(),
            mode: MotionMode::Autonomous,
            pointer_target: start,
            autonomous: AutonomousState::heading(start, angle, config.bounce_speed),
            follow_gain: config.follow_gain,
            autonomous_head_gain: config.autonomous_head_gain,
            bounce_speed: config.bounce_speed,
            icon_radius: config.icon_radius(),
            viewport,
            rng,
            frame: 0,
        })
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Records the pointer position and switches to following.
    ///
    /// Nothing moves until the next tick.
    pub fn on_pointer_move(&mut self, position: Point2D) {
        self.pointer_target = position;
        if self.mode != MotionMode::Following {
            tracing::debug!(x = position.x, y = position.y, "pointer entered, following");
            self.mode = MotionMode::Following;
        }
    }

    /// Switches to bouncing from wherever the head is now.
    ///
    /// The anchor is placed on the head so the motion continues without a
    /// jump, and gets a fresh uniformly random heading at the bounce speed.
    pub fn on_pointer_leave(&mut self) {
        let head = self.chain[0];
        let angle = self.rng.gen_range(0.0..TAU);
        self.autonomous = AutonomousState::heading(head, angle, self.bounce_speed);
        self.mode = MotionMode::Autonomous;

        tracing::debug!(
            x = head.x,
            y = head.y,
            angle_deg = angle.to_degrees(),
            "pointer left, bouncing"
        );
    }

    /// Adopts new viewport bounds and pulls the anchor back inside.
    ///
    /// The chain and mode are untouched. Sizes rejected by
    /// [`Viewport::validate`] are ignored.
    pub fn on_viewport_resize(&mut self, width: f64, height: f64) {
        let viewport = Viewport::new(width, height);
        if viewport.validate().is_err() {
            tracing::warn!(width, height, "ignoring invalid viewport size");
            return;
        }
        self.viewport = viewport;
        self.autonomous.clamp_to(&self.viewport, self.icon_radius);

        tracing::debug!(width, height, "viewport resized");
    }

    // =========================================================================
    // Tick
    // =========================================================================

    /// Advances the chain by one frame and publishes the result.
    pub fn tick(&mut self) -> ChainSnapshot {
        let (target, head_gain) = match self.mode {
            MotionMode::Autonomous => {
                self.autonomous.step(&self.viewport, self.icon_radius);
                (self.autonomous.position, self.autonomous_head_gain)
            }
            MotionMode::Following => (self.pointer_target, self.follow_gain),
        };

        self.chain[0] = self.chain[0].lerp(target, head_gain);
        for i in 1..self.chain.len() {
            self.chain[i] = self.chain[i].lerp(self.chain[i - 1], self.follow_gain);
        }

        self.frame += 1;
        tracing::trace!(
            frame = self.frame,
            mode = ?self.mode,
            head_x = self.chain[0].x,
            head_y = self.chain[0].y,
            "tick"
        );

        self.snapshot()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current chain as a snapshot, without ticking.
    #[must_use]
    pub fn snapshot(&self) -> ChainSnapshot {
        ChainSnapshot::new(self.frame, self.mode, &self.chain)
    }

    /// Segment positions, head first.
    #[must_use]
    pub fn chain(&self) -> &[Point2D] {
        &self.chain
    }

    /// Head position.
    #[must_use]
    pub fn head(&self) -> Point2D {
        self.chain[0]
    }

    /// Active regime.
    #[must_use]
    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    /// Last pointer position.
    #[must_use]
    pub fn pointer_target(&self) -> Point2D {
        self.pointer_target
    }

    /// Bounce anchor state.
    #[must_use]
    pub fn autonomous(&self) -> &AutonomousState {
        &self.autonomous
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Follow gain.
    #[must_use]
    pub fn follow_gain(&self) -> f64 {
        self.follow_gain
    }

    /// Bounce speed.
    #[must_use]
    pub fn bounce_speed(&self) -> f64 {
        self.bounce_speed
    }

    /// Collision radius.
    #[must_use]
    pub fn icon_radius(&self) -> f64 {
        self.icon_radius
    }

    /// Ticks run so far.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
