//! Mutex-guarded animator for hosts that deliver input on other threads.
//!
//! Input handlers and `tick` take the same lock, so a tick never observes a
//! half-applied event.

use std::sync::Arc;

use facetrail_core::{ChainAnimator, ChainSnapshot, MotionMode, Point2D};
use parking_lot::Mutex;

use crate::events::HostEvent;

/// Cloneable handle to one animator.
#[derive(Clone, Debug)]
pub struct SharedAnimator {
    inner: Arc<Mutex<ChainAnimator>>,
}

impl SharedAnimator {
    /// Takes ownership of `animator`.
    #[must_use]
    pub fn new(animator: ChainAnimator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(animator)),
        }
    }

    /// Applies one host event.
    pub fn apply(&self, event: HostEvent) {
        event.apply(&mut self.inner.lock());
    }

    /// Pointer moved.
    pub fn pointer_move(&self, position: Point2D) {
        self.inner.lock().on_pointer_move(position);
    }

    /// Pointer left.
    pub fn pointer_leave(&self) {
        self.inner.lock().on_pointer_leave();
    }

    /// Surface resized.
    pub fn resize(&self, width: f64, height: f64) {
        self.inner.lock().on_viewport_resize(width, height);
    }

    /// Advances one frame.
    pub fn tick(&self) -> ChainSnapshot {
        self.inner.lock().tick()
    }

    /// Current chain without ticking.
    #[must_use]
    pub fn snapshot(&self) -> ChainSnapshot {
        self.inner.lock().snapshot()
    }

    /// Current regime.
    #[must_use]
    pub fn mode(&self) -> MotionMode {
        self.inner.lock().mode()
    }

    /// Runs `f` with the lock held.
    pub fn with<R>(&self, f: impl FnOnce(&ChainAnimator) -> R) -> R {
        f(&self.inner.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facetrail_core::{AnimatorConfig, Viewport};

    fn shared() -> SharedAnimator {
        let config = AnimatorConfig::default().with_seed(11);
        SharedAnimator::new(
            ChainAnimator::new(&config, Viewport::new(800.0, 600.0)).expect("valid config"),
        )
    }

    #[test]
    fn test_clones_share_state() {
        let a = shared();
        let b = a.clone();
        a.pointer_move(Point2D::new(10.0, 10.0));
        assert_eq!(b.mode(), MotionMode::Following);
        b.tick();
        assert_eq!(a.with(ChainAnimator::frame), 1);
    }

    #[test]
    fn test_input_from_other_threads() {
        let animator = shared();
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let animator = animator.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        animator.pointer_move(Point2D::new(f64::from(t * 50 + i), 100.0));
                        animator.tick();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("input thread");
        }

        let snapshot = animator.snapshot();
        assert_eq!(snapshot.frame, 200);
        assert_eq!(snapshot.len(), 8);
        assert!(snapshot.points().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_apply_event() {
        let animator = shared();
        animator.apply(HostEvent::PointerMove(Point2D::new(1.0, 2.0)));
        animator.apply(HostEvent::PointerLeave);
        assert_eq!(animator.mode(), MotionMode::Autonomous);
        animator.resize(300.0, 200.0);
        assert_eq!(animator.with(ChainAnimator::viewport), Viewport::new(300.0, 200.0));
    }
}
