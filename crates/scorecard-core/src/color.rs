//! Color handling for scorecard themes
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, and the [`Hsl`] triple used to derive theme palettes.
//!
//! HSL values follow the CSS convention: hue in degrees `[0, 360)`, saturation
//! and lightness as percentages `[0, 100]`.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};
use thiserror::Error;

/// Errors produced while parsing a color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color `{input}`: {reason}")]
    Invalid { input: String, reason: String },
}

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_hex().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use scorecard_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, ColorError> {
        match DynamicColor::from_str(color_str.trim()) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(ColorError::Invalid {
                input: color_str.to_string(),
                reason: err.to_string(),
            }),
        }
    }

    /// Returns the 8-bit sRGB channels of this color, ignoring alpha.
    pub fn to_rgb8(self) -> [u8; 3] {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        [rgba.r, rgba.g, rgba.b]
    }

    /// Returns the color as a lowercase `#rrggbb` string.
    ///
    /// # Examples
    ///
    /// ```
    /// use scorecard_core::color::Color;
    ///
    /// assert_eq!(Color::new("red").unwrap().to_hex(), "#ff0000");
    /// ```
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        rgb8_to_hex(r, g, b)
    }

    /// Converts the color to hue/saturation/lightness.
    pub fn to_hsl(self) -> Hsl {
        let [r, g, b] = self.to_rgb8();
        Hsl::from_rgb8(r, g, b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// A color in hue/saturation/lightness form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    hue: f64,
    saturation: f64,
    lightness: f64,
}

impl Hsl {
    /// Creates a new HSL triple. Hue is wrapped into `[0, 360)`, saturation and
    /// lightness are clamped to `[0, 100]`.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation: saturation.clamp(0.0, 100.0),
            lightness: lightness.clamp(0.0, 100.0),
        }
    }

    /// Converts 8-bit sRGB channels to HSL.
    ///
    /// Achromatic input (all channels equal) has an undefined hue, which
    /// collapses to `0`.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        let r = f64::from(r) / 255.0;
        let g = f64::from(g) / 255.0;
        let b = f64::from(b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        if max == min {
            return Self::new(0.0, 0.0, lightness * 100.0);
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let sector = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        let hue = sector / 6.0;

        Self::new(hue * 360.0, saturation * 100.0, lightness * 100.0)
    }

    /// Returns the hue in degrees
    pub fn hue(self) -> f64 {
        self.hue
    }

    /// Returns the saturation as a percentage
    pub fn saturation(self) -> f64 {
        self.saturation
    }

    /// Returns the lightness as a percentage
    pub fn lightness(self) -> f64 {
        self.lightness
    }

    /// Returns a copy with the given saturation
    pub fn with_saturation(self, saturation: f64) -> Self {
        Self::new(self.hue, saturation, self.lightness)
    }

    /// Returns a copy with the given lightness
    pub fn with_lightness(self, lightness: f64) -> Self {
        Self::new(self.hue, self.saturation, lightness)
    }

    /// Converts to 8-bit sRGB channels, rounding each channel to the nearest integer.
    pub fn to_rgb8(self) -> [u8; 3] {
        let h = self.hue / 360.0;
        let s = self.saturation / 100.0;
        let l = self.lightness / 100.0;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        [to_u8(r), to_u8(g), to_u8(b)]
    }

    /// Converts to a lowercase `#rrggbb` string.
    ///
    /// # Examples
    ///
    /// ```
    /// use scorecard_core::color::Hsl;
    ///
    /// assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_hex(), "#ff0000");
    /// assert_eq!(Hsl::new(0.0, 0.0, 83.0).to_hex(), "#d4d4d4");
    /// ```
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        rgb8_to_hex(r, g, b)
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

fn to_u8(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

fn rgb8_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let red = Color::new("#ff0000");
        assert!(red.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_to_hex() {
        assert_eq!(Color::new("#3A9BD5").unwrap().to_hex(), "#3a9bd5");
        assert_eq!(Color::new("white").unwrap().to_hex(), "#ffffff");
    }

    #[test]
    fn test_color_error_message_names_input() {
        let err = Color::new("nope").unwrap_err();
        assert!(err.to_string().contains("`nope`"));
    }

    #[test]
    fn test_hsl_primary_colors() {
        let red = Hsl::from_rgb8(255, 0, 0);
        assert_eq!(red.hue(), 0.0);
        assert_eq!(red.saturation(), 100.0);
        assert_eq!(red.lightness(), 50.0);

        let green = Hsl::from_rgb8(0, 255, 0);
        assert_eq!(green.hue(), 120.0);

        let blue = Hsl::from_rgb8(0, 0, 255);
        assert_eq!(blue.hue(), 240.0);
    }

    #[test]
    fn test_hsl_grayscale_has_zero_hue() {
        let gray = Hsl::from_rgb8(128, 128, 128);
        assert_eq!(gray.hue(), 0.0);
        assert_eq!(gray.saturation(), 0.0);
        assert!(!gray.lightness().is_nan());
    }

    #[test]
    fn test_hsl_round_trips_through_rgb() {
        for rgb in [[58, 155, 213], [192, 57, 43], [46, 125, 50], [0, 0, 0], [255, 255, 255]] {
            let hsl = Hsl::from_rgb8(rgb[0], rgb[1], rgb[2]);
            assert_eq!(hsl.to_rgb8(), rgb);
        }
    }

    #[test]
    fn test_hsl_new_wraps_and_clamps() {
        let hsl = Hsl::new(-30.0, 140.0, -5.0);
        assert_eq!(hsl.hue(), 330.0);
        assert_eq!(hsl.saturation(), 100.0);
        assert_eq!(hsl.lightness(), 0.0);
    }

    #[test]
    fn test_color_hash_follows_hex() {
        use std::collections::HashSet;

        let color1 = Color::new("#ff0000").unwrap();
        let color2 = Color::new("#ff0000").unwrap();
        let color3 = Color::new("blue").unwrap();

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&color2));
        assert!(!set.contains(&color3));
    }
}
