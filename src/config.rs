//! Configuration structures for the frame analysis pipeline.
//!
//! This module defines all tunable parameters for color classification,
//! sampling and throttling.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use colorguide::AnalyzerConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalyzerConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = AnalyzerConfig::default();
//! # Ok::<(), colorguide::AnalysisError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::naming::HueDistance;
use crate::constants::{analysis, thresholds};
use crate::error::{AnalysisError, Result};
use crate::frame::SamplePoint;

/// Complete analyzer configuration.
///
/// Can be serialized to/from JSON for reproducible behavior across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Which point of the frame is sampled
    #[serde(default)]
    pub sample_point: SamplePoint,

    /// How hue distance is measured in the nearest-hue search
    #[serde(default)]
    pub hue_distance: HueDistance,

    /// Maximum analyses per second; `None` disables throttling
    pub analyzer_fps: Option<f64>,

    /// Classification thresholds
    #[serde(default)]
    pub thresholds: ClassifierThresholds,
}

/// Thresholds applied to the HSL triple during classification.
///
/// Defaults match the reference palette behavior; see
/// [`crate::constants::thresholds`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierThresholds {
    /// Lightness above which a color is "White"
    pub white_lightness: f32,

    /// Lightness below which a color is "Black"
    pub black_lightness: f32,

    /// Saturation below which a mid-lightness color is "Grey"
    pub grey_saturation: f32,

    /// Saturation below which a named hue gets the "greyish" prefix
    pub greyish_saturation: f32,

    /// Lightness below which a named hue gets the "dark" prefix
    pub dark_lightness: f32,

    /// Lightness above which a named hue gets the "light" prefix
    pub light_lightness: f32,

    /// Lightness above which a named hue gets the "very light" prefix
    pub very_light_lightness: f32,

    /// Lightness window (exclusive bounds) in which Orange reads as "Brown"
    pub brown_min_lightness: f32,
    pub brown_max_lightness: f32,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            white_lightness: thresholds::WHITE_MIN_LIGHTNESS,
            black_lightness: thresholds::BLACK_MAX_LIGHTNESS,
            grey_saturation: thresholds::GREY_MAX_SATURATION,
            greyish_saturation: thresholds::GREYISH_MAX_SATURATION,
            dark_lightness: thresholds::DARK_MAX_LIGHTNESS,
            light_lightness: thresholds::LIGHT_MIN_LIGHTNESS,
            very_light_lightness: thresholds::VERY_LIGHT_MIN_LIGHTNESS,
            brown_min_lightness: thresholds::BROWN_MIN_LIGHTNESS,
            brown_max_lightness: thresholds::BROWN_MAX_LIGHTNESS,
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sample_point: SamplePoint::Center,
            hue_distance: HueDistance::Circular,
            analyzer_fps: Some(analysis::DEFAULT_ANALYZER_FPS),
            thresholds: ClassifierThresholds::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Configuration that analyzes every delivered frame
    pub fn unthrottled() -> Self {
        Self {
            analyzer_fps: None,
            ..Self::default()
        }
    }

    /// Validate parameter ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a non-positive or non-finite FPS.
    pub fn validate(&self) -> Result<()> {
        if let Some(fps) = self.analyzer_fps {
            if !fps.is_finite() || fps <= 0.0 {
                return Err(AnalysisError::InvalidParameter {
                    parameter: "analyzer_fps".to_string(),
                    value: fps.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AnalysisError::config(format!("cannot read {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| AnalysisError::config(format!("cannot parse {}", path.display()), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("cannot serialize configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| AnalysisError::config(format!("cannot write {}", path.display()), e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.sample_point, SamplePoint::Center);
        assert_eq!(config.hue_distance, HueDistance::Circular);
        assert_eq!(config.analyzer_fps, Some(1.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unthrottled_config() {
        let config = AnalyzerConfig::unthrottled();
        assert_eq!(config.analyzer_fps, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_fps() {
        for fps in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = AnalyzerConfig {
                analyzer_fps: Some(fps),
                ..AnalyzerConfig::default()
            };
            assert!(config.validate().is_err(), "fps {} should be rejected", fps);
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let config = AnalyzerConfig {
            sample_point: SamplePoint::FrameBounds,
            hue_distance: HueDistance::Linear,
            analyzer_fps: Some(2.5),
            thresholds: ClassifierThresholds {
                white_lightness: 0.75,
                ..ClassifierThresholds::default()
            },
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: AnalyzerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let back: AnalyzerConfig = serde_json::from_str(r#"{"analyzer_fps": null}"#).unwrap();
        assert_eq!(back.sample_point, SamplePoint::Center);
        assert_eq!(back.hue_distance, HueDistance::Circular);
        assert_eq!(back.thresholds, ClassifierThresholds::default());
        assert_eq!(back.analyzer_fps, None);
    }
}
