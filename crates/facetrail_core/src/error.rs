//! # Trail Error Types
//!
//! The animator has exactly one failure class: a configuration that would
//! produce broken or non-terminating motion. It is rejected at construction,
//! never clamped, and `tick()` itself cannot fail.

use thiserror::Error;

/// Errors that can occur when building an animator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrailError {
    /// A configuration value is outside its allowed range.
    #[error("invalid configuration: {field} = {value} ({reason})")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// What the value must satisfy.
        reason: &'static str,
    },

    /// The chain must hold at least the head segment.
    #[error("invalid configuration: segment_count must be at least 1")]
    EmptyChain,
}

/// Result type for animator construction.
pub type TrailResult<T> = Result<T, TrailError>;
