//! # Trail Runtime
//!
//! One cycle per frame:
//!
//! ```text
//! token cancelled? ─yes─> stop
//!        │ no
//! request_frame ─Cancelled─> stop
//!        │ Ready
//! drain input (arrival order) ─> tick ─> present ─> sink
//! ```
//!
//! The runtime is the only writer of animator state. Dropping it releases
//! its input subscription.

use facetrail_core::{ChainAnimator, ChainSnapshot, Viewport};
use tracing::{debug, info};

use crate::config::TrailConfig;
use crate::error::AppResult;
use crate::events::{EventReceiver, InputHub, Subscription};
use crate::presentation::{present, SegmentGlyph};
use crate::scheduler::{CancelToken, FrameScheduler, FrameSignal};

/// Output of one cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Chain after the tick.
    pub snapshot: ChainSnapshot,
    /// Glyphs in draw order (tail first).
    pub glyphs: Vec<SegmentGlyph>,
}

/// Totals for one [`TrailRuntime::run`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames rendered.
    pub frames: u64,
    /// Input events applied.
    pub events: u64,
}

/// Drives a [`ChainAnimator`] from host input and a frame scheduler.
pub struct TrailRuntime {
    animator: ChainAnimator,
    receiver: EventReceiver,
    // Held for its Drop
    _subscription: Subscription,
}

impl TrailRuntime {
    /// Wraps an existing animator and subscribes to `hub`.
    #[must_use]
    pub fn new(animator: ChainAnimator, hub: &InputHub) -> Self {
        let (subscription, receiver) = hub.subscribe();
        Self {
            animator,
            receiver,
            _subscription: subscription,
        }
    }

    /// Builds the animator from a trail config.
    ///
    /// # Errors
    ///
    /// The animator settings fail validation.
    pub fn from_config(config: &TrailConfig, hub: &InputHub) -> AppResult<Self> {
        let animator = ChainAnimator::new(&config.animator_config(), config.viewport)?;
        Ok(Self::new(animator, hub))
    }

    /// Runs until the token is cancelled or the scheduler stops.
    ///
    /// The token is checked at the top of every cycle, so a sink that
    /// cancels it stops the loop before the next frame is requested.
    pub fn run<S, F>(&mut self, scheduler: &mut S, token: &CancelToken, mut sink: F) -> RunSummary
    where
        S: FrameScheduler + ?Sized,
        F: FnMut(&Frame),
    {
        let mut summary = RunSummary::default();
        info!(
            segments = self.animator.chain().len(),
            start_frame = self.animator.frame(),
            "trail runtime started"
        );

        loop {
            if token.is_cancelled() {
                debug!("cancel token set");
                break;
            }
            if scheduler.request_frame(token) == FrameSignal::Cancelled {
                debug!("scheduler stopped");
                break;
            }

            summary.events += self.pump_events();
            let frame = self.step();
            sink(&frame);
            summary.frames += 1;
        }

        info!(frames = summary.frames, events = summary.events, "trail runtime stopped");
        summary
    }

    /// Applies every pending input event. Returns how many were applied.
    pub fn pump_events(&mut self) -> u64 {
        let mut applied = 0;
        for event in self.receiver.drain() {
            event.apply(&mut self.animator);
            applied += 1;
        }
        applied
    }

    /// Ticks once and presents the result, without touching input.
    pub fn step(&mut self) -> Frame {
        let snapshot = self.animator.tick();
        let glyphs = present(&snapshot);
        Frame { snapshot, glyphs }
    }

    /// The animator.
    #[must_use]
    pub fn animator(&self) -> &ChainAnimator {
        &self.animator
    }

    /// Current surface bounds.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.animator.viewport()
    }

    /// Releases the input subscription and returns the animator.
    #[must_use]
    pub fn into_animator(self) -> ChainAnimator {
        self.animator
    }
}

impl std::fmt::Debug for TrailRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrailRuntime")
            .field("frame", &self.animator.frame())
            .field("mode", &self.animator.mode())
            .field("pending_events", &self.receiver.pending_count())
            .finish_non_exhaustive()
    }
}
