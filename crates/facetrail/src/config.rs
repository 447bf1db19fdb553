//! # Trail Configuration
//!
//! One TOML file, every table optional:
//!
//! ```toml
//! [animator]
//! segment_count = 8
//! bounce_speed = 2.5
//! seed = 42
//!
//! [face]
//! tracking_speed = 0.08   # follow gain of the whole chain
//! wink_type = "^"
//!
//! [viewport]
//! width = 1280
//! height = 720
//!
//! [runtime]
//! target_fps = 60
//! event_capacity = 1024
//! ```

use std::path::Path;
use std::time::Duration;

use facetrail_core::constants::DEFAULT_FOLLOW_GAIN;
use facetrail_core::{AnimatorConfig, Viewport};
use facetrail_face::FaceConfig;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Host loop settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Frames per second for [`IntervalScheduler`](crate::IntervalScheduler).
    pub target_fps: u32,
    /// Pending input events held per subscriber before new ones are dropped.
    pub event_capacity: usize,
}

impl RuntimeConfig {
    /// Time between frames.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            event_capacity: 1024,
        }
    }
}

/// Everything the demo host reads at startup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Chain motion.
    pub animator: AnimatorConfig,
    /// Face geometry. `tracking_speed` is the chain's follow gain.
    pub face: FaceConfig,
    /// Initial surface size.
    pub viewport: Viewport,
    /// Host loop.
    pub runtime: RuntimeConfig,
}

impl TrailConfig {
    /// Reads and validates a config file.
    ///
    /// # Errors
    ///
    /// I/O failure, malformed TOML, or a value out of range.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded trail config");
        Ok(config)
    }

    /// Parses and validates TOML text.
    ///
    /// # Errors
    ///
    /// Malformed TOML or a value out of range.
    pub fn from_toml_str(text: &str) -> AppResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Animator settings with the follow gain taken from `face.tracking_speed`.
    ///
    /// A `follow_gain` written under `[animator]` is overridden.
    #[must_use]
    pub fn animator_config(&self) -> AnimatorConfig {
        AnimatorConfig {
            follow_gain: self.face.tracking_speed,
            ..self.animator.clone()
        }
    }

    /// A non-default `[animator] follow_gain` that `face.tracking_speed`
    /// overrides, if any.
    #[must_use]
    pub fn ignored_follow_gain(&self) -> Option<f64> {
        let gain = self.animator.follow_gain;
        #[allow(clippy::float_cmp)]
        let ignored = gain != DEFAULT_FOLLOW_GAIN && gain != self.face.tracking_speed;
        ignored.then_some(gain)
    }

    /// Checks the settings the animator and host loop depend on.
    ///
    /// Warns when `[animator] follow_gain` is overridden by the face's
    /// tracking speed.
    ///
    /// # Errors
    ///
    /// The first out-of-range value found.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(ignored) = self.ignored_follow_gain() {
            tracing::warn!(
                ignored,
                tracking_speed = self.face.tracking_speed,
                "[animator] follow_gain is overridden by [face] tracking_speed"
            );
        }
        self.animator_config().validate()?;
        self.viewport.validate()?;
        if self.runtime.target_fps == 0 {
            return Err(AppError::Runtime("target_fps must be at least 1".into()));
        }
        if self.runtime.event_capacity == 0 {
            return Err(AppError::Runtime("event_capacity must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facetrail_core::TrailError;
    use facetrail_face::WinkType;

    #[test]
    fn test_empty_file_is_default() {
        let config = TrailConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, TrailConfig::default());
        assert_eq!(config.animator_config(), AnimatorConfig::default());
    }

    #[test]
    fn test_tracking_speed_drives_follow_gain() {
        let config = TrailConfig::from_toml_str(
            "[animator]\nfollow_gain = 0.5\n\n[face]\ntracking_speed = 0.12\n",
        )
        .expect("valid config");
        assert_eq!(config.animator_config().follow_gain, 0.12);
    }

    #[test]
    fn test_sections_parse() {
        let config = TrailConfig::from_toml_str(
            r#"
            [animator]
            segment_count = 5
            seed = 9

            [face]
            wink_type = "-"
            eye_size = 14

            [viewport]
            width = 800
            height = 600

            [runtime]
            target_fps = 30
            "#,
        )
        .expect("valid config");

        assert_eq!(config.animator.segment_count, 5);
        assert_eq!(config.animator.seed, Some(9));
        assert_eq!(config.face.wink_type, WinkType::Dash);
        assert_eq!(config.face.eye_size, 14.0);
        assert_eq!(config.viewport, Viewport::new(800.0, 600.0));
        assert_eq!(config.runtime.target_fps, 30);
        assert_eq!(config.runtime.event_capacity, 1024);
    }

    #[test]
    fn test_overridden_follow_gain_reported() {
        let config = TrailConfig::from_toml_str("[animator]\nfollow_gain = 0.5\n")
            .expect("valid config");
        assert_eq!(config.ignored_follow_gain(), Some(0.5));
        assert_eq!(config.animator_config().follow_gain, DEFAULT_FOLLOW_GAIN);

        let matching = TrailConfig::from_toml_str(
            "[animator]\nfollow_gain = 0.3\n\n[face]\ntracking_speed = 0.3\n",
        )
        .expect("valid config");
        assert_eq!(matching.ignored_follow_gain(), None);

        let face_only = TrailConfig::from_toml_str("[face]\ntracking_speed = 0.3\n")
            .expect("valid config");
        assert_eq!(face_only.ignored_follow_gain(), None);
    }

    #[test]
    fn test_bad_viewport_rejected_on_load() {
        for text in ["[viewport]\nwidth = -5\n", "[viewport]\nheight = 0\n"] {
            let err = TrailConfig::from_toml_str(text).expect_err("bad viewport");
            assert!(
                matches!(err, AppError::Trail(TrailError::InvalidConfig { .. })),
                "{text:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_bad_tracking_speed_rejected() {
        let err = TrailConfig::from_toml_str("[face]\ntracking_speed = 1.5\n")
            .expect_err("gain out of range");
        assert!(matches!(
            err,
            AppError::Trail(TrailError::InvalidConfig { field: "follow_gain", .. })
        ));
    }

    #[test]
    fn test_zero_fps_rejected() {
        let err = TrailConfig::from_toml_str("[runtime]\ntarget_fps = 0\n").expect_err("zero fps");
        assert!(matches!(err, AppError::Runtime(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = TrailConfig::from_toml_str("[animator\n").expect_err("broken table header");
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = TrailConfig::load("/nonexistent/facetrail.toml").expect_err("no such file");
        assert!(matches!(err, AppError::Io { .. }));
    }

    #[test]
    fn test_frame_interval() {
        let runtime = RuntimeConfig {
            target_fps: 50,
            ..RuntimeConfig::default()
        };
        assert_eq!(runtime.frame_interval(), Duration::from_millis(20));
    }
}
