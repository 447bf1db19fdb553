//! # Host Input Events
//!
//! ```text
//! ┌──────────────┐ dispatch ┌──────────┐  try_send  ┌───────────────┐
//! │ pointer/size │─────────>│ InputHub │───────────>│ EventReceiver │──> runtime
//! │   sources    │          └──────────┘  (bounded) └───────────────┘
//! └──────────────┘               ▲
//!                                │ deregister on drop
//!                         ┌──────┴───────┐
//!                         │ Subscription │
//!                         └──────────────┘
//! ```
//!
//! Any thread may dispatch. Each subscriber owns one bounded queue; a full
//! queue drops the new event instead of blocking the source.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use facetrail_core::{ChainAnimator, Point2D};
use parking_lot::Mutex;
use tracing::warn;

/// Input delivered by the host surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    /// Pointer moved to a position in surface pixels.
    PointerMove(Point2D),
    /// Pointer left the surface.
    PointerLeave,
    /// Surface was resized.
    ViewportResize {
        /// New width in pixels.
        width: f64,
        /// New height in pixels.
        height: f64,
    },
}

impl HostEvent {
    /// Routes the event to the matching animator handler.
    pub fn apply(self, animator: &mut ChainAnimator) {
        match self {
            Self::PointerMove(position) => animator.on_pointer_move(position),
            Self::PointerLeave => animator.on_pointer_leave(),
            Self::ViewportResize { width, height } => animator.on_viewport_resize(width, height),
        }
    }
}

struct Listener {
    id: u64,
    sender: Sender<HostEvent>,
}

struct HubShared {
    listeners: Mutex<Vec<Listener>>,
    next_id: AtomicU64,
    capacity: usize,
}

/// Fan-out point for host input.
///
/// Cheap to clone; clones share the same listener set.
#[derive(Clone)]
pub struct InputHub {
    shared: Arc<HubShared>,
}

impl InputHub {
    /// Creates a hub whose subscribers each buffer up to `capacity` events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            shared: Arc::new(HubShared {
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
                capacity: capacity.max(1),
            }),
        }
    }

    /// Registers a listener.
    ///
    /// Events are delivered until the returned [`Subscription`] is dropped
    /// or cancelled.
    #[must_use]
    pub fn subscribe(&self) -> (Subscription, EventReceiver) {
        let (sender, receiver) = bounded(self.shared.capacity);
        let id = self.shared.next_id.fetch_add(1, Ordering::Relaxed);
        self.shared.listeners.lock().push(Listener { id, sender });

        let subscription = Subscription {
            id,
            hub: Arc::downgrade(&self.shared),
        };
        (subscription, EventReceiver { receiver })
    }

    /// Sends `event` to every listener without blocking.
    ///
    /// Returns how many listeners accepted it.
    pub fn dispatch(&self, event: HostEvent) -> usize {
        let listeners = self.shared.listeners.lock();
        let mut delivered = 0;
        for listener in listeners.iter() {
            match listener.sender.try_send(event) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Full(_)) => {
                    warn!(listener = listener.id, ?event, "input queue full, event dropped");
                }
                // Receiver gone but subscription still alive; nothing to deliver to
                Err(TrySendError::Disconnected(_)) => {}
            }
        }
        delivered
    }

    /// Pointer moved.
    pub fn pointer_move(&self, x: f64, y: f64) -> usize {
        self.dispatch(HostEvent::PointerMove(Point2D::new(x, y)))
    }

    /// Pointer left the surface.
    pub fn pointer_leave(&self) -> usize {
        self.dispatch(HostEvent::PointerLeave)
    }

    /// Surface resized.
    pub fn resize(&self, width: f64, height: f64) -> usize {
        self.dispatch(HostEvent::ViewportResize { width, height })
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.shared.listeners.lock().len()
    }
}

impl Default for InputHub {
    fn default() -> Self {
        Self::new(1024)
    }
}

/// Keeps a listener registered. Dropping it deregisters the listener.
#[must_use = "dropping a Subscription deregisters the listener immediately"]
pub struct Subscription {
    id: u64,
    hub: Weak<HubShared>,
}

impl Subscription {
    /// Deregisters now.
    pub fn cancel(self) {
        drop(self);
    }

    /// Whether the listener is still registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.hub
            .upgrade()
            .is_some_and(|hub| hub.listeners.lock().iter().any(|l| l.id == self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.listeners.lock().retain(|listener| listener.id != self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// Consumer end of one subscription.
#[derive(Debug)]
pub struct EventReceiver {
    receiver: Receiver<HostEvent>,
}

impl EventReceiver {
    /// Takes every pending event, oldest first (non-blocking).
    #[inline]
    pub fn drain(&self) -> Vec<HostEvent> {
        let mut events = Vec::with_capacity(64);
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }

    /// Takes one event if available.
    #[inline]
    pub fn try_recv(&self) -> Option<HostEvent> {
        self.receiver.try_recv().ok()
    }

    /// Number of pending events.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facetrail_core::{AnimatorConfig, MotionMode, Viewport};

    #[test]
    fn test_dispatch_reaches_all_listeners() {
        let hub = InputHub::new(8);
        let (_a, rx_a) = hub.subscribe();
        let (_b, rx_b) = hub.subscribe();

        assert_eq!(hub.pointer_move(10.0, 20.0), 2);
        assert_eq!(hub.pointer_leave(), 2);

        let expected = vec![
            HostEvent::PointerMove(Point2D::new(10.0, 20.0)),
            HostEvent::PointerLeave,
        ];
        assert_eq!(rx_a.drain(), expected);
        assert_eq!(rx_b.drain(), expected);
        assert!(rx_a.drain().is_empty());
    }

    #[test]
    fn test_drop_deregisters() {
        let hub = InputHub::new(8);
        let (subscription, rx) = hub.subscribe();
        assert_eq!(hub.listener_count(), 1);
        assert!(subscription.is_active());

        drop(subscription);
        assert_eq!(hub.listener_count(), 0);
        assert_eq!(hub.resize(100.0, 100.0), 0);
        assert_eq!(rx.pending_count(), 0);
    }

    #[test]
    fn test_cancel_only_removes_own_listener() {
        let hub = InputHub::new(8);
        let (first, _rx1) = hub.subscribe();
        let (second, _rx2) = hub.subscribe();

        first.cancel();
        assert_eq!(hub.listener_count(), 1);
        assert!(second.is_active());
    }

    #[test]
    fn test_subscription_outlives_hub() {
        let hub = InputHub::new(8);
        let (subscription, _rx) = hub.subscribe();
        drop(hub);
        assert!(!subscription.is_active());
        drop(subscription);
    }

    #[test]
    fn test_full_queue_drops_newest() {
        let hub = InputHub::new(2);
        let (_sub, rx) = hub.subscribe();

        assert_eq!(hub.pointer_move(1.0, 1.0), 1);
        assert_eq!(hub.pointer_move(2.0, 2.0), 1);
        assert_eq!(hub.pointer_move(3.0, 3.0), 0);

        let events = rx.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], HostEvent::PointerMove(Point2D::new(2.0, 2.0)));
    }

    #[test]
    fn test_apply_routes_to_handlers() {
        let config = AnimatorConfig::default().with_seed(1);
        let mut animator = ChainAnimator::new(&config, Viewport::new(800.0, 600.0))
            .expect("valid config");

        HostEvent::PointerMove(Point2D::new(5.0, 6.0)).apply(&mut animator);
        assert_eq!(animator.mode(), MotionMode::Following);
        assert_eq!(animator.pointer_target(), Point2D::new(5.0, 6.0));

        HostEvent::ViewportResize {
            width: 400.0,
            height: 300.0,
        }
        .apply(&mut animator);
        assert_eq!(animator.viewport(), Viewport::new(400.0, 300.0));

        HostEvent::PointerLeave.apply(&mut animator);
        assert_eq!(animator.mode(), MotionMode::Autonomous);
    }

    #[test]
    fn test_dispatch_from_other_thread() {
        let hub = InputHub::new(64);
        let (_sub, rx) = hub.subscribe();

        let producer = hub.clone();
        std::thread::spawn(move || {
            for i in 0..10 {
                producer.pointer_move(f64::from(i), 0.0);
            }
        })
        .join()
        .expect("producer thread");

        let events = rx.drain();
        assert_eq!(events.len(), 10);
        assert_eq!(events[9], HostEvent::PointerMove(Point2D::new(9.0, 0.0)));
    }
}
