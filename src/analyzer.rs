//! Frame analysis pipeline
//!
//! Wires the sampling, conversion and naming stages together and owns the
//! throttle state that limits how often delivered frames are analyzed.
//!
//! Frame delivery is assumed sequential per analyzer instance (the usual
//! camera worker model), so the throttle is a single timestamp field with
//! no locking.

use std::time::{Duration, Instant};

use crate::color::{ColorClassifier, ColorConverter};
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::frame::FrameSample;
use crate::ColorReading;

/// Analyzer turning delivered camera frames into color readings
#[derive(Debug)]
pub struct FrameAnalyzer {
    config: AnalyzerConfig,
    converter: ColorConverter,
    classifier: ColorClassifier,
    min_interval: Option<Duration>,
    last_analyzed: Option<Instant>,
}

impl Default for FrameAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameAnalyzer {
    /// Create an analyzer with the default configuration
    /// (center sampling, circular hue distance, one analysis per second)
    pub fn new() -> Self {
        Self::build(AnalyzerConfig::default())
    }

    /// Create an analyzer with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation.
    pub fn with_config(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: AnalyzerConfig) -> Self {
        let classifier =
            ColorClassifier::with_settings(config.thresholds.clone(), config.hue_distance);
        let min_interval = config
            .analyzer_fps
            .map(|fps| Duration::from_secs_f64(1.0 / fps));
        Self {
            config,
            converter: ColorConverter::new(),
            classifier,
            min_interval,
            last_analyzed: None,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a delivered frame, honoring the throttle
    ///
    /// Returns `Ok(None)` when the frame arrives before the minimum
    /// inter-frame interval has elapsed; the frame is simply dropped, not
    /// queued. Accepting a frame resets the throttle timestamp.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSample` if the frame's planes cannot be read.
    pub fn analyze(&mut self, frame: &FrameSample) -> Result<Option<ColorReading>> {
        if let (Some(interval), Some(last)) = (self.min_interval, self.last_analyzed) {
            if last.elapsed() < interval {
                return Ok(None);
            }
        }

        let reading = self.classify(frame)?;
        self.last_analyzed = Some(Instant::now());
        Ok(Some(reading))
    }

    /// Classify a frame unconditionally, bypassing the throttle
    ///
    /// # Errors
    ///
    /// Returns `InvalidSample` if the frame's planes cannot be read.
    pub fn classify(&self, frame: &FrameSample) -> Result<ColorReading> {
        let sample = frame.sample(self.config.sample_point)?;
        let rgb = self.converter.yuv_to_rgb(sample);
        let hsv = self.converter.rgb_to_hsv(rgb);
        let hsl = self.converter.hsv_to_hsl(hsv);
        let name = self.classifier.classify(hsl);
        let hex = self.converter.srgb_to_hex(rgb);

        Ok(ColorReading {
            name,
            rgb,
            hsv,
            hsl,
            hex,
        })
    }
}
