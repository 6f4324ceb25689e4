//! Conversion coefficients and classification thresholds
//!
//! This module contains compile-time constants for the YUV conversion
//! and the named-hue classification, grouped by concern.

/// YUV to RGB conversion coefficients
///
/// BT.601-style full-range coefficients as used by common camera
/// pipelines for 4:2:0 planar output. Chroma samples are stored with
/// a +128 offset and centered before conversion.
pub mod yuv {
    /// Red contribution of the V (red-difference) chroma channel
    pub const R_FROM_V: f64 = 1.370705;

    /// Green contribution of the V chroma channel (subtractive)
    pub const G_FROM_V: f64 = 0.698001;

    /// Green contribution of the U (blue-difference) chroma channel (subtractive)
    pub const G_FROM_U: f64 = 0.337633;

    /// Blue contribution of the U chroma channel
    pub const B_FROM_U: f64 = 1.732446;

    /// Offset added to chroma samples in storage
    pub const CHROMA_OFFSET: i32 = 128;
}

/// Named hue palette
///
/// Twelve reference hues at 30 degree increments covering the full hue
/// circle. The table is ordered by ascending hue so nearest-hue ties
/// resolve deterministically to the first entry encountered.
pub mod hues {
    /// Hue name reused by the Brown override
    pub const ORANGE: &str = "Orange";

    /// (display name, reference hue in degrees) pairs, ascending hue
    pub const NAMED_HUES: [(&str, f32); 12] = [
        ("Red", 0.0),
        (ORANGE, 30.0),
        ("Yellow", 60.0),
        ("Yellow Green", 90.0),
        ("Green", 120.0),
        ("Green Cyan", 150.0),
        ("Cyan", 180.0),
        ("Blue Cyan", 210.0),
        ("Blue", 240.0),
        ("Violet", 270.0),
        ("Magenta", 300.0),
        ("Rose", 330.0),
    ];

    /// Achromatic and override base names
    pub const WHITE: &str = "White";
    pub const BLACK: &str = "Black";
    pub const GREY: &str = "Grey";
    pub const BROWN: &str = "Brown";

    /// Modifier prefixes, applied in front of a base name
    pub const PREFIX_DARK: &str = "dark";
    pub const PREFIX_LIGHT: &str = "light";
    pub const PREFIX_VERY_LIGHT: &str = "very light";
    pub const PREFIX_GREYISH: &str = "greyish";
}

/// Classification thresholds on the HSL triple
pub mod thresholds {
    /// Lightness above which a color is plain "White"
    pub const WHITE_MIN_LIGHTNESS: f32 = 0.7;

    /// Lightness below which a color is plain "Black"
    pub const BLACK_MAX_LIGHTNESS: f32 = 0.1;

    /// Saturation below which a mid-lightness color is plain "Grey"
    pub const GREY_MAX_SATURATION: f32 = 0.1;

    /// Saturation below which a named hue gets the "greyish" prefix
    pub const GREYISH_MAX_SATURATION: f32 = 0.2;

    /// Lightness below which a named hue gets the "dark" prefix
    pub const DARK_MAX_LIGHTNESS: f32 = 0.2;

    /// Lightness above which a named hue gets the "light" prefix
    pub const LIGHT_MIN_LIGHTNESS: f32 = 0.7;

    /// Lightness above which a named hue gets the "very light" prefix
    pub const VERY_LIGHT_MIN_LIGHTNESS: f32 = 0.8;

    /// Lightness window (exclusive) in which Orange reads as "Brown"
    pub const BROWN_MIN_LIGHTNESS: f32 = 0.1;
    pub const BROWN_MAX_LIGHTNESS: f32 = 0.6;
}

/// Analysis scheduling defaults
pub mod analysis {
    /// Default analyzer rate: one classification per second
    pub const DEFAULT_ANALYZER_FPS: f64 = 1.0;
}
