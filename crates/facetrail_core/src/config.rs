//! Animator configuration.
//!
//! Loaded once at startup (usually from the `[animator]` table of the trail
//! config file) and validated before any animator is built.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_AUTONOMOUS_HEAD_GAIN, DEFAULT_BOUNCE_SPEED, DEFAULT_FOLLOW_GAIN, DEFAULT_ICON_SIZE,
    DEFAULT_SEGMENT_COUNT,
};
use crate::error::{TrailError, TrailResult};
use crate::math::Point2D;

/// Configuration for a [`ChainAnimator`](crate::ChainAnimator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Number of segments, head included.
    pub segment_count: usize,
    /// Follow gain in `(0, 1)`. Drives the head while following and every
    /// trailing segment in both modes.
    pub follow_gain: f64,
    /// Head gain in `(0, 1)` while bouncing.
    pub autonomous_head_gain: f64,
    /// Bounce speed in pixels per tick.
    pub bounce_speed: f64,
    /// Icon edge length in pixels.
    pub icon_size: f64,
    /// Seed for the direction draw. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Initial anchor. `None` starts at the viewport center.
    pub start: Option<Point2D>,
}

impl AnimatorConfig {
    /// Collision radius (half the icon size).
    #[must_use]
    pub fn icon_radius(&self) -> f64 {
        self.icon_size * 0.5
    }

    /// Sets the follow gain.
    #[must_use]
    pub fn with_follow_gain(mut self, gain: f64) -> Self {
        self.follow_gain = gain;
        self
    }

    /// Sets the bounce speed.
    #[must_use]
    pub fn with_bounce_speed(mut self, speed: f64) -> Self {
        self.bounce_speed = speed;
        self
    }

    /// Sets the segment count.
    #[must_use]
    pub fn with_segment_count(mut self, count: usize) -> Self {
        self.segment_count = count;
        self
    }

    /// Fixes the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the initial anchor.
    #[must_use]
    pub fn with_start(mut self, start: Point2D) -> Self {
        self.start = Some(start);
        self
    }

    /// Checks every range constraint.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::InvalidConfig`] for a gain outside `(0, 1)`, a
    /// non-positive speed or icon size, or a non-finite start point, and
    /// [`TrailError::EmptyChain`] for zero segments.
    pub fn validate(&self) -> TrailResult<()> {
        if self.segment_count == 0 {
            return Err(TrailError::EmptyChain);
        }
        open_unit("follow_gain", self.follow_gain)?;
        open_unit("autonomous_head_gain", self.autonomous_head_gain)?;
        positive("bounce_speed", self.bounce_speed)?;
        positive("icon_size", self.icon_size)?;
        if let Some(start) = self.start {
            if !start.is_finite() {
                let value = if start.x.is_finite() { start.y } else { start.x };
                return Err(TrailError::InvalidConfig {
                    field: "start",
                    value,
                    reason: "must be finite",
                });
            }
        }
        Ok(())
    }
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            segment_count: DEFAULT_SEGMENT_COUNT,
            follow_gain: DEFAULT_FOLLOW_GAIN,
            autonomous_head_gain: DEFAULT_AUTONOMOUS_HEAD_GAIN,
            bounce_speed: DEFAULT_BOUNCE_SPEED,
            icon_size: DEFAULT_ICON_SIZE,
            seed: None,
            start: None,
        }
    }
}

fn open_unit(field: &'static str, value: f64) -> TrailResult<()> {
    // NaN fails both comparisons
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(TrailError::InvalidConfig {
            field,
            value,
            reason: "must be in the open interval (0, 1)",
        })
    }
}

fn positive(field: &'static str, value: f64) -> TrailResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(TrailError::InvalidConfig {
            field,
            value,
            reason: "must be positive and finite",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AnimatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.icon_radius(), 60.0);
    }

    #[test]
    fn test_gain_bounds_are_open() {
        for gain in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let config = AnimatorConfig::default().with_follow_gain(gain);
            assert!(
                matches!(
                    config.validate(),
                    Err(TrailError::InvalidConfig { field: "follow_gain", .. })
                ),
                "gain {gain} should be rejected"
            );
        }
    }

    #[test]
    fn test_autonomous_gain_checked() {
        let config = AnimatorConfig {
            autonomous_head_gain: 1.0,
            ..AnimatorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TrailError::InvalidConfig { field: "autonomous_head_gain", .. })
        ));
    }

    #[test]
    fn test_speed_and_size_must_be_positive() {
        let config = AnimatorConfig::default().with_bounce_speed(0.0);
        assert!(matches!(
            config.validate(),
            Err(TrailError::InvalidConfig { field: "bounce_speed", .. })
        ));

        let config = AnimatorConfig {
            icon_size: -120.0,
            ..AnimatorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TrailError::InvalidConfig { field: "icon_size", .. })
        ));
    }

    #[test]
    fn test_empty_chain_rejected() {
        let config = AnimatorConfig::default().with_segment_count(0);
        assert_eq!(config.validate(), Err(TrailError::EmptyChain));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AnimatorConfig = toml::from_str("bounce_speed = 4.0\nseed = 7\n")
            .expect("valid animator table");
        assert_eq!(config.bounce_speed, 4.0);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.segment_count, DEFAULT_SEGMENT_COUNT);
        assert_eq!(config.follow_gain, DEFAULT_FOLLOW_GAIN);
    }
}
