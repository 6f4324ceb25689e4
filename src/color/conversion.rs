//! Color space conversion utilities
//!
//! Provides the conversions used by the frame analysis pipeline:
//! - YUV (BT.601-style, centered chroma) to RGB
//! - RGB to HSV, with hue kept in degrees end-to-end
//! - HSV to HSL and back
//! - Hex color representation
//!
//! Algorithm tag: `algo-bt601-single-pixel`

use palette::{Hsl, Hsv, Srgb};

use crate::constants::yuv;
use crate::frame::YuvSample;

/// Color converter for the YUV → RGB → HSV → HSL chain
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    /// Create a new color converter
    pub fn new() -> Self {
        Self
    }

    /// Convert a centered YUV sample to RGB
    ///
    /// Uses BT.601-style coefficients, rounds to the nearest integer and
    /// clamps each channel to [0, 255]. The source arithmetic can exceed
    /// the byte range for saturated chroma, so clamping is deliberate.
    ///
    /// # Arguments
    ///
    /// * `sample` - luma in [0, 255], chroma centered in [-128, 127]
    ///
    /// # Returns
    ///
    /// sRGB color with 8-bit channels
    pub fn yuv_to_rgb(&self, sample: YuvSample) -> Srgb<u8> {
        let y = sample.y as f64;
        let u = sample.u as f64;
        let v = sample.v as f64;

        let r = (y + yuv::R_FROM_V * v).round();
        let g = (y - yuv::G_FROM_V * v - yuv::G_FROM_U * u).round();
        let b = (y + yuv::B_FROM_U * u).round();

        Srgb::new(
            r.clamp(0.0, 255.0) as u8,
            g.clamp(0.0, 255.0) as u8,
            b.clamp(0.0, 255.0) as u8,
        )
    }

    /// Convert 8-bit RGB to HSV
    ///
    /// Standard max/min/chroma formula. Hue is reported in degrees
    /// [0, 360) to match the named-hue palette; saturation and value
    /// are in [0, 1].
    pub fn rgb_to_hsv(&self, rgb: Srgb<u8>) -> Hsv {
        let r = rgb.red as f32 / 255.0;
        let g = rgb.green as f32 / 255.0;
        let b = rgb.blue as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let value = max;
        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        Hsv::new(hue.rem_euclid(360.0), saturation, value)
    }

    /// Convert HSV to HSL
    ///
    /// Hue is carried over unchanged. Lightness is `(2 - S) * V / 2`;
    /// the saturation recompute guards the division for lightness 0
    /// (left at 0) and lightness 1 (defined as 0) before the general
    /// branches.
    pub fn hsv_to_hsl(&self, hsv: Hsv) -> Hsl {
        let s = hsv.saturation;
        let v = hsv.value;

        let lightness = (2.0 - s) * v / 2.0;

        let saturation = if lightness == 0.0 || lightness == 1.0 {
            0.0
        } else if lightness < 0.5 {
            s * v / (lightness * 2.0)
        } else {
            s * v / (2.0 - lightness * 2.0)
        };

        Hsl::new(hsv.hue, saturation, lightness)
    }

    /// Convert HSL back to HSV (inverse of [`hsv_to_hsl`](Self::hsv_to_hsl))
    ///
    /// Saturation is degenerate (0) when value is 0.
    pub fn hsl_to_hsv(&self, hsl: Hsl) -> Hsv {
        let s = hsl.saturation;
        let l = hsl.lightness;

        let value = l + s * l.min(1.0 - l);
        let saturation = if value == 0.0 { 0.0 } else { 2.0 - 2.0 * l / value };

        Hsv::new(hsl.hue, saturation, value)
    }

    /// Convert 8-bit RGB to hexadecimal color string (e.g., "#FF0000")
    pub fn srgb_to_hex(&self, rgb: Srgb<u8>) -> String {
        format!("#{:02X}{:02X}{:02X}", rgb.red, rgb.green, rgb.blue)
    }
}
