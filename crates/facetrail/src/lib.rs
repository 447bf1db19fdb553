//! # FACETRAIL
//!
//! A trail of faces that follows the pointer and drifts around on its own
//! when the pointer leaves.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │ Host                                                                 │
//! │   pointer move / leave / resize ──> InputHub ──┐                     │
//! │   frame clock ──> FrameScheduler ─────────────┐│                     │
//! ├───────────────────────────────────────────────┼┼─────────────────────┤
//! │ TrailRuntime (one cycle per frame)            ▼▼                     │
//! │   CancelToken? ─> request_frame ─> drain events ─> ChainAnimator.tick │
//! │                                                        │             │
//! │                                   present() <──────────┘             │
//! │                                      │                               │
//! │                          SegmentGlyph[] (tail first) ─> sink         │
//! │                                      │                               │
//! │                          scene::render_scene (faces via render_face) │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `events`: host input events and disposable subscriptions
//! - `scheduler`: frame requests and cancellation
//! - `runtime`: the per-frame loop
//! - `presentation`: visual depth transform per segment
//! - `scene`: SVG composition of a whole frame
//! - `shared`: mutex-guarded animator for multi-threaded hosts
//! - `config`: the trail config file

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod events;
pub mod presentation;
pub mod runtime;
pub mod scene;
pub mod scheduler;
pub mod shared;

pub use config::{RuntimeConfig, TrailConfig};
pub use error::{AppError, AppResult};
pub use events::{EventReceiver, HostEvent, InputHub, Subscription};
pub use presentation::{present, SegmentGlyph};
pub use runtime::{Frame, RunSummary, TrailRuntime};
pub use scene::{render_scene, SceneOptions};
pub use scheduler::{CancelToken, FrameScheduler, FrameSignal, IntervalScheduler, ManualScheduler};
pub use shared::SharedAnimator;
