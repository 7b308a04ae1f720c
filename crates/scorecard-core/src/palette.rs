//! Theme palette derivation.
//!
//! A [`Palette`] is the full set of eleven named colors a scorecard theme uses.
//! [`Palette::derive`] expands a single primary color into a complete palette by
//! holding the primary's hue and re-rendering each dependent color at a fixed
//! lightness and a scaled saturation.
//!
//! The two paper tones, [`BACKGROUND`] and [`PAGE_BACKGROUND`], are constants and
//! never follow the primary hue.
//!
//! # Example
//!
//! ```
//! use scorecard_core::palette::{Palette, BACKGROUND};
//!
//! let palette = Palette::derive("#2e7d32").unwrap();
//! assert_eq!(palette.primary(), "#2e7d32");
//! assert_eq!(palette.background(), BACKGROUND);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorError, Hsl};

/// Card background, a warm off-white.
pub const BACKGROUND: &str = "#fdfdfd";

/// Surrounding page background, a warm neutral paper tone.
pub const PAGE_BACKGROUND: &str = "#e8e0d6";

/// Palette keys in their canonical order.
pub const PALETTE_KEYS: [&str; 11] = [
    "primary",
    "primaryLight",
    "primaryMuted",
    "primaryFaint",
    "ink",
    "background",
    "pageBackground",
    "border",
    "borderLight",
    "diamondFill",
    "diamondStroke",
];

/// A derived tone: saturation as a fraction of the primary's, and an absolute lightness.
struct Tone {
    saturation_scale: f64,
    lightness: f64,
}

impl Tone {
    const fn new(saturation_scale: f64, lightness: f64) -> Self {
        Self {
            saturation_scale,
            lightness,
        }
    }

    fn render(&self, base: Hsl) -> String {
        base.with_saturation(base.saturation() * self.saturation_scale)
            .with_lightness(self.lightness)
            .to_hex()
    }
}

const PRIMARY_LIGHT: Tone = Tone::new(0.9, 83.0);
const PRIMARY_MUTED: Tone = Tone::new(0.85, 90.0);
const PRIMARY_FAINT: Tone = Tone::new(0.8, 95.0);
const INK: Tone = Tone::new(0.35, 24.0);
const BORDER: Tone = Tone::new(0.75, 78.0);
const BORDER_LIGHT: Tone = Tone::new(0.7, 88.0);
const DIAMOND_FILL: Tone = Tone::new(0.7, 93.0);
const DIAMOND_STROKE: Tone = Tone::new(0.75, 78.0);

/// The eleven named colors of a scorecard theme.
///
/// Serializes with camelCase keys so it can be dropped directly into the
/// `theme.colors` branch of a configuration tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    primary: String,
    primary_light: String,
    primary_muted: String,
    primary_faint: String,
    ink: String,
    background: String,
    page_background: String,
    border: String,
    border_light: String,
    diamond_fill: String,
    diamond_stroke: String,
}

impl Palette {
    /// Derives a full palette from one primary color.
    ///
    /// The primary is normalized to lowercase `#rrggbb`; every other
    /// hue-bearing color is computed from its hue and saturation. Grayscale input yields a neutral
    /// gray palette.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] if `primary` is not a parseable color.
    pub fn derive(primary: &str) -> Result<Self, ColorError> {
        let color = Color::new(primary)?;
        let base = color.to_hsl();
        debug!(
            primary,
            hue = base.hue(),
            saturation = base.saturation();
            "Deriving palette"
        );

        Ok(Self {
            primary: color.to_hex(),
            primary_light: PRIMARY_LIGHT.render(base),
            primary_muted: PRIMARY_MUTED.render(base),
            primary_faint: PRIMARY_FAINT.render(base),
            ink: INK.render(base),
            background: BACKGROUND.to_string(),
            page_background: PAGE_BACKGROUND.to_string(),
            border: BORDER.render(base),
            border_light: BORDER_LIGHT.render(base),
            diamond_fill: DIAMOND_FILL.render(base),
            diamond_stroke: DIAMOND_STROKE.render(base),
        })
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn primary_light(&self) -> &str {
        &self.primary_light
    }

    pub fn primary_muted(&self) -> &str {
        &self.primary_muted
    }

    pub fn primary_faint(&self) -> &str {
        &self.primary_faint
    }

    pub fn ink(&self) -> &str {
        &self.ink
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn page_background(&self) -> &str {
        &self.page_background
    }

    pub fn border(&self) -> &str {
        &self.border
    }

    pub fn border_light(&self) -> &str {
        &self.border_light
    }

    pub fn diamond_fill(&self) -> &str {
        &self.diamond_fill
    }

    pub fn diamond_stroke(&self) -> &str {
        &self.diamond_stroke
    }

    /// Returns `(key, color)` pairs in [`PALETTE_KEYS`] order.
    pub fn entries(&self) -> [(&'static str, &str); 11] {
        [
            (PALETTE_KEYS[0], self.primary()),
            (PALETTE_KEYS[1], self.primary_light()),
            (PALETTE_KEYS[2], self.primary_muted()),
            (PALETTE_KEYS[3], self.primary_faint()),
            (PALETTE_KEYS[4], self.ink()),
            (PALETTE_KEYS[5], self.background()),
            (PALETTE_KEYS[6], self.page_background()),
            (PALETTE_KEYS[7], self.border()),
            (PALETTE_KEYS[8], self.border_light()),
            (PALETTE_KEYS[9], self.diamond_fill()),
            (PALETTE_KEYS[10], self.diamond_stroke()),
        ]
    }
}
