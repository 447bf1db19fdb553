//! # Frame Scheduling
//!
//! The runtime asks a [`FrameScheduler`] for each frame. Schedulers block
//! until the frame is due, or report that scheduling has stopped.
//!
//! - [`IntervalScheduler`]: fixed interval, 60 Hz by default
//! - [`ManualScheduler`]: a fixed budget of frames, no waiting

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Target frame time (60 Hz).
pub const TARGET_FRAME_TIME: Duration = Duration::from_micros(16_666);

/// Shared stop flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// New, not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a stop. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Whether a stop was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Answer to a frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameSignal {
    /// Run the frame now.
    Ready,
    /// No more frames will be scheduled.
    Cancelled,
}

/// Source of frame callbacks.
pub trait FrameScheduler {
    /// Blocks until the next frame is due.
    ///
    /// Returns [`FrameSignal::Cancelled`] once `token` is cancelled or the
    /// scheduler itself was cancelled.
    fn request_frame(&mut self, token: &CancelToken) -> FrameSignal;

    /// Stops scheduling. Later requests return [`FrameSignal::Cancelled`].
    fn cancel(&mut self);
}

/// Fixed-interval scheduler.
///
/// Sleeps most of the remaining interval and spin-waits the rest.
/// Late frames are not made up for.
#[derive(Debug)]
pub struct IntervalScheduler {
    interval: Duration,
    last_frame: Option<Instant>,
    frame_count: u64,
    late_frames: u64,
    cancelled: bool,
}

impl IntervalScheduler {
    /// Scheduler with the given interval between frames.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_frame: None,
            frame_count: 0,
            late_frames: 0,
            cancelled: false,
        }
    }

    /// Scheduler running at `fps` frames per second.
    #[must_use]
    pub fn with_rate(fps: u32) -> Self {
        Self::new(Duration::from_micros(1_000_000 / u64::from(fps.max(1))))
    }

    /// Interval between frames.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Frames granted so far.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Frames requested more than one interval after they were due.
    #[must_use]
    pub const fn late_frames(&self) -> u64 {
        self.late_frames
    }

    fn wait_until(&self, due: Instant, token: &CancelToken) {
        loop {
            let now = Instant::now();
            if now >= due || token.is_cancelled() {
                return;
            }
            let remaining = due - now;
            if remaining > Duration::from_micros(1000) {
                // Sleep in short slices so cancellation is noticed promptly
                std::thread::sleep((remaining - Duration::from_micros(500)).min(TARGET_FRAME_TIME));
            } else {
                std::hint::spin_loop();
            }
        }
    }
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new(TARGET_FRAME_TIME)
    }
}

impl FrameScheduler for IntervalScheduler {
    fn request_frame(&mut self, token: &CancelToken) -> FrameSignal {
        if self.cancelled || token.is_cancelled() {
            return FrameSignal::Cancelled;
        }

        if let Some(last) = self.last_frame {
            let due = last + self.interval;
            if Instant::now() > due + self.interval {
                self.late_frames += 1;
            }
            self.wait_until(due, token);
            if token.is_cancelled() {
                return FrameSignal::Cancelled;
            }
        }

        self.last_frame = Some(Instant::now());
        self.frame_count += 1;
        FrameSignal::Ready
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }
}

/// Grants a fixed number of frames immediately, then reports cancellation.
#[derive(Debug, Clone)]
pub struct ManualScheduler {
    remaining: u64,
    granted: u64,
}

impl ManualScheduler {
    /// Scheduler that grants `frames` frames.
    #[must_use]
    pub const fn new(frames: u64) -> Self {
        Self {
            remaining: frames,
            granted: 0,
        }
    }

    /// Frames left in the budget.
    #[must_use]
    pub const fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Frames granted so far.
    #[must_use]
    pub const fn granted(&self) -> u64 {
        self.granted
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self, token: &CancelToken) -> FrameSignal {
        if token.is_cancelled() || self.remaining == 0 {
            return FrameSignal::Cancelled;
        }
        self.remaining -= 1;
        self.granted += 1;
        FrameSignal::Ready
    }

    fn cancel(&mut self) {
        self.remaining = 0;
    }
}
