//! Color naming from HSL values
//!
//! Classifies an HSL triple against a fixed palette of twelve named hues,
//! with lightness/saturation overrides:
//! - Achromatic tiers (White, Black, Grey) take precedence over hue names
//! - Nearest-hue search over the palette, deterministic tie-break
//! - Brown override for mid-lightness Orange
//! - "dark"/"light"/"very light" and "greyish" modifier prefixes

use log::debug;
use palette::Hsl;
use serde::{Deserialize, Serialize};

use crate::config::ClassifierThresholds;
use crate::constants::hues;

/// How distance between two hues is measured in the nearest-hue search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HueDistance {
    /// Shortest way around the hue circle, `min(d, 360 - d)`
    #[default]
    Circular,
    /// Bug-compatible plain absolute difference; hues near 360 degrees
    /// land on Rose instead of wrapping back to Red
    Linear,
}

/// Classifier mapping an HSL triple to a human-readable color name
#[derive(Debug, Clone, Default)]
pub struct ColorClassifier {
    thresholds: ClassifierThresholds,
    hue_distance: HueDistance,
}

impl ColorClassifier {
    /// Create a classifier with default thresholds and circular hue distance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with custom thresholds and hue distance mode
    pub fn with_settings(thresholds: ClassifierThresholds, hue_distance: HueDistance) -> Self {
        Self {
            thresholds,
            hue_distance,
        }
    }

    /// Classify an HSL triple into a color name
    ///
    /// Saturation and lightness are clamped to [0, 1] and hue is wrapped
    /// into [0, 360) before classification, so every input produces a name.
    ///
    /// # Arguments
    ///
    /// * `hsl` - hue in degrees, saturation and lightness in [0, 1]
    ///
    /// # Returns
    ///
    /// Zero or more prefixes followed by a base name, e.g. "Red",
    /// "dark Blue" or "dark greyish Violet".
    pub fn classify(&self, hsl: Hsl) -> String {
        let hue = hsl.hue.into_positive_degrees();
        let saturation = hsl.saturation.clamp(0.0, 1.0);
        let lightness = hsl.lightness.clamp(0.0, 1.0);
        let t = &self.thresholds;

        // Achromatic tiers are terminal; no prefixes apply.
        if lightness > t.white_lightness {
            return hues::WHITE.to_string();
        }
        if lightness < t.black_lightness {
            return hues::BLACK.to_string();
        }
        if saturation < t.grey_saturation {
            return hues::GREY.to_string();
        }

        let (nearest, distance) = self.nearest_hue(hue);
        debug!(
            "nearest hue: {} (distance {:.1} from hue {:.1})",
            nearest, distance, hue
        );

        let mut base = nearest;
        let mut prefixes: Vec<&str> = Vec::new();

        // The Brown override and the lightness prefixes are mutually
        // exclusive; at most one of these clauses fires.
        if nearest == hues::ORANGE
            && lightness > t.brown_min_lightness
            && lightness < t.brown_max_lightness
        {
            base = hues::BROWN;
        } else if lightness < t.dark_lightness {
            prefixes.push(hues::PREFIX_DARK);
        } else if lightness > t.very_light_lightness {
            prefixes.push(hues::PREFIX_VERY_LIGHT);
        } else if lightness > t.light_lightness {
            prefixes.push(hues::PREFIX_LIGHT);
        }

        // Low saturation adds "greyish" on top of any lightness prefix.
        if saturation < t.greyish_saturation {
            prefixes.push(hues::PREFIX_GREYISH);
        }

        let name = if prefixes.is_empty() {
            base.to_string()
        } else {
            format!("{} {}", prefixes.join(" "), base)
        };

        debug!(
            "classified hsl ({:.1}, {:.2}, {:.2}) as '{}'",
            hue, saturation, lightness, name
        );
        name
    }

    /// Find the palette entry nearest to a hue
    ///
    /// The palette is iterated in ascending hue order and ties keep the
    /// first entry, so results are deterministic.
    fn nearest_hue(&self, hue: f32) -> (&'static str, f32) {
        let mut nearest_name = hues::NAMED_HUES[0].0;
        let mut nearest_distance = f32::MAX;

        for (name, reference) in hues::NAMED_HUES {
            let distance = self.distance(reference, hue);
            if distance < nearest_distance {
                nearest_distance = distance;
                nearest_name = name;
            }
        }

        (nearest_name, nearest_distance)
    }

    fn distance(&self, a: f32, b: f32) -> f32 {
        let d = (a - b).abs();
        match self.hue_distance {
            HueDistance::Circular => d.min(360.0 - d),
            HueDistance::Linear => d,
        }
    }
}
