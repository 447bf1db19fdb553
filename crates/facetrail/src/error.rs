//! # Application Error Types

use std::path::PathBuf;

use facetrail_core::TrailError;
use thiserror::Error;

/// Errors from loading configuration and building the runtime.
#[derive(Error, Debug)]
pub enum AppError {
    /// Animator construction rejected the configuration.
    #[error(transparent)]
    Trail(#[from] TrailError),

    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the trail schema.
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Runtime settings out of range.
    #[error("invalid runtime setting: {0}")]
    Runtime(String),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
