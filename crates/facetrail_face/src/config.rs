//! Face shape parameters.

use std::fmt;

use facetrail_core::constants::DEFAULT_FOLLOW_GAIN;
use serde::{Deserialize, Serialize};

/// Treatment of the right eye on the primary expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WinkType {
    /// `^`: a chevron.
    Chevron,
    /// `-`: a flat line.
    Dash,
    /// `<`: an opening wedge driven by rotation, angle and line length.
    #[default]
    Wedge,
}

impl WinkType {
    /// The single-character symbol used in config files.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Chevron => '^',
            Self::Dash => '-',
            Self::Wedge => '<',
        }
    }
}

/// Anything unrecognized falls back to the wedge.
impl From<&str> for WinkType {
    fn from(value: &str) -> Self {
        match value.trim() {
            "^" => Self::Chevron,
            "-" => Self::Dash,
            _ => Self::Wedge,
        }
    }
}

impl From<String> for WinkType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<WinkType> for String {
    fn from(value: WinkType) -> Self {
        value.symbol().to_string()
    }
}

impl fmt::Display for WinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Geometry of the parametric face.
///
/// Coordinates are in the 100×100 face space; angles are degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceConfig {
    /// Stroke width for every outlined feature.
    pub stroke_width: f64,
    /// Left eye center X.
    pub left_eye_x: f64,
    /// Left eye center Y.
    pub left_eye_y: f64,
    /// Left eye radius.
    pub eye_size: f64,
    /// Wink anchor X.
    pub right_eye_x: f64,
    /// Wink anchor Y.
    pub right_eye_y: f64,
    /// Wink scale factor.
    pub wink_scale: f64,
    /// Mouth arc center Y (center X is fixed at 50).
    pub smile_y: f64,
    /// Legacy curvature knob. Carried for config compatibility; the mouth is
    /// shaped by `mouth_radius` / `mouth_sweep` / `mouth_rotation`.
    pub smile_curve: f64,
    /// Wink variant.
    pub wink_type: WinkType,
    /// Follow gain for the trail animator.
    pub tracking_speed: f64,
    /// Mouth arc radius.
    pub mouth_radius: f64,
    /// Mouth arc sweep.
    pub mouth_sweep: f64,
    /// Mouth arc rotation, added to the 180° (bottom) center.
    pub mouth_rotation: f64,
    /// Angle between the two wedge lines.
    pub wink_opening_angle: f64,
    /// Direction the wedge opens toward (0° = +x).
    pub wink_rotation: f64,
    /// Length of each wedge line before scaling.
    pub wink_line_length: f64,
}

impl FaceConfig {
    /// The canonical face. Every default in the workspace reads from here.
    pub const DEFAULT: Self = Self {
        stroke_width: 10.0,
        left_eye_x: 25.0,
        left_eye_y: 40.0,
        eye_size: 11.0,
        right_eye_x: 68.0,
        right_eye_y: 40.0,
        wink_scale: 1.0,
        smile_y: 56.0,
        smile_curve: 12.0,
        wink_type: WinkType::Wedge,
        tracking_speed: DEFAULT_FOLLOW_GAIN,
        mouth_radius: 32.0,
        mouth_sweep: 96.0,
        mouth_rotation: -13.0,
        wink_opening_angle: 54.0,
        wink_rotation: 355.0,
        wink_line_length: 21.0,
    };
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wink_symbols() {
        assert_eq!(WinkType::from("^"), WinkType::Chevron);
        assert_eq!(WinkType::from("-"), WinkType::Dash);
        assert_eq!(WinkType::from("<"), WinkType::Wedge);
        assert_eq!(WinkType::from("?"), WinkType::Wedge);
        assert_eq!(WinkType::Dash.to_string(), "-");
    }

    #[test]
    fn test_toml_overrides_keep_defaults() {
        let cfg: FaceConfig =
            toml::from_str("wink_type = \"^\"\neye_size = 9.5\n").expect("valid face table");
        assert_eq!(cfg.wink_type, WinkType::Chevron);
        assert_eq!(cfg.eye_size, 9.5);
        assert_eq!(cfg.left_eye_x, FaceConfig::DEFAULT.left_eye_x);
        assert_eq!(cfg.tracking_speed, DEFAULT_FOLLOW_GAIN);
    }

    #[test]
    fn test_unknown_wink_in_toml_is_wedge() {
        let cfg: FaceConfig = toml::from_str("wink_type = \"o\"\n").expect("valid face table");
        assert_eq!(cfg.wink_type, WinkType::Wedge);
    }
}
