//! # FACETRAIL Face Renderer
//!
//! Deterministic vector drawings of a cartoon face, one per trail segment.
//!
//! ## Pipeline
//!
//! ```text
//! slot (any i64) ─> slot mod 8 ─> Expression ─┬─> Primary: FaceConfig geometry
//!                                             └─> Fixed:   literal geometry
//!                                                       │
//!                                                       ▼
//!                                        FaceDrawing (DrawCommand list)
//!                                                       │
//!                                                       ▼
//!                                               svg::face_document
//! ```
//!
//! All geometry lives in a 100×100 space. Scaling and positioning belong to
//! the caller.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod color;
pub mod command;
pub mod config;
pub mod expression;
pub mod geometry;
pub mod path;
pub mod renderer;
pub mod svg;

pub use color::Color;
pub use command::{DrawCommand, LineCap, LineJoin, Paint, Stroke};
pub use config::{FaceConfig, WinkType};
pub use expression::Expression;
pub use path::{PathData, PathSegment};
pub use renderer::{render_face, FaceDrawing};
