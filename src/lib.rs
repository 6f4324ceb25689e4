//! # colorguide
//!
//! A Rust crate for naming the color at the center of a live camera frame.
//!
//! This library turns raw YUV 4:2:0 planar pixel data into a human-readable
//! color name by:
//! - Sampling a single representative pixel from the frame's planes
//! - Converting YUV to RGB (BT.601-style), then RGB to HSV, then HSV to HSL
//! - Classifying the HSL value against twelve named hues with
//!   lightness/saturation modifiers (black/white/grey, dark/light, brown,
//!   greyish)
//!
//! ## Example
//!
//! ```rust
//! use colorguide::{classify_frame, FrameSample, Plane};
//!
//! // An 8x8 neutral grey frame: luma 128, chroma at the 128 offset.
//! let luma = [128u8; 64];
//! let chroma = [128u8; 16];
//! let frame = FrameSample::new(
//!     8,
//!     8,
//!     Plane::new(&luma, 1, 8),
//!     Plane::new(&chroma, 1, 4),
//!     Plane::new(&chroma, 1, 4),
//! )?;
//!
//! let reading = classify_frame(&frame)?;
//! assert_eq!(reading.name, "Grey");
//! # Ok::<(), colorguide::AnalysisError>(())
//! ```
//!
//! For a live feed, hold a [`FrameAnalyzer`] instead: it throttles analysis
//! to a configured rate and drops the frames in between.

use palette::{Hsl, Hsv, Srgb};
use serde::{Deserialize, Serialize};

pub mod analyzer;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod frame;

pub use analyzer::FrameAnalyzer;
pub use color::{ColorClassifier, ColorConverter, HueDistance};
pub use config::{AnalyzerConfig, ClassifierThresholds};
pub use error::{AnalysisError, Result};
pub use frame::{FrameSample, Plane, SamplePoint, YuvSample};

/// Complete color reading for one analyzed frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorReading {
    /// Human-readable color name, e.g. "Red" or "dark greyish Blue"
    pub name: String,
    /// Sampled pixel as 8-bit sRGB
    pub rgb: Srgb<u8>,
    /// HSV representation, hue in degrees
    pub hsv: Hsv,
    /// HSL representation fed to the classifier
    pub hsl: Hsl,
    /// Hexadecimal color representation
    pub hex: String,
}

/// Classify a single frame with default settings and no throttling
///
/// This is the one-shot entry point: it samples the frame center, runs the
/// conversion chain and returns the classification. For streams of frames,
/// use [`FrameAnalyzer`] so the throttle state persists across calls.
///
/// # Arguments
///
/// * `frame` - a planar YUV 4:2:0 frame sample
///
/// # Returns
///
/// A `ColorReading` with the name and the intermediate color values
///
/// # Errors
///
/// Returns `AnalysisError::InvalidSample` if the frame's planes cannot
/// be read at the sample point.
pub fn classify_frame(frame: &FrameSample) -> Result<ColorReading> {
    FrameAnalyzer::new().classify(frame)
}
