//! Color conversion and naming module
//!
//! This module handles the color space conversion chain (YUV → RGB →
//! HSV → HSL) and the classification of HSL values into color names.

pub mod conversion;
pub mod naming;

pub use conversion::ColorConverter;
pub use naming::{ColorClassifier, HueDistance};
