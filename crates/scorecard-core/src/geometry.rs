//! Physical page geometry.
//!
//! This module resolves the configured page size, orientation and margins into
//! a [`PageGeometry`]: the physical page dimensions in inches, the CSS `@page`
//! size string, and the printable area left inside the margins in CSS pixels.
//!
//! # Overview
//!
//! - [`PageSize`] - A named paper size or an explicit `[width, height]` pair in inches
//! - [`Orientation`] - Landscape or portrait, applied to named sizes only
//! - [`Margins`] - Per-side page margins in CSS pixels
//! - [`PageSettings`] - The `page` branch of a scorecard configuration
//! - [`PageGeometry`] - The resolved result of [`resolve_page_size`]
//!
//! # Units
//!
//! Margins and printable area use CSS pixels at [`PX_PER_INCH`] pixels per inch.
//! Page dimensions are in inches.

use std::fmt;

use log::debug;
use serde::Deserialize;

use crate::lenient::LooseText;

/// CSS reference pixels per inch.
pub const PX_PER_INCH: f64 = 96.0;

/// Margin applied to any side left unset, in inches.
pub const DEFAULT_MARGIN_IN: f64 = 0.3;

/// Named physical page sizes as `(name, short side, long side)` in inches.
pub const NAMED_PAGE_SIZES: [(&str, f64, f64); 8] = [
    ("LETTER", 8.5, 11.0),
    ("A4", 8.27, 11.69),
    ("LEGAL", 8.5, 14.0),
    ("TABLOID", 11.0, 17.0),
    ("HALF_LETTER", 5.5, 8.5),
    ("A5", 5.83, 8.27),
    ("5X7", 5.0, 7.0),
    ("4X6", 4.0, 6.0),
];

/// The size used when a named size is absent or not in [`NAMED_PAGE_SIZES`].
pub const FALLBACK_PAGE_SIZE: &str = "LETTER";

/// A page size: either a named paper size or explicit dimensions in inches.
///
/// Deserializes from either a string (`"A4"`) or a two-element array (`[11, 17]`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PageSize {
    /// Explicit `width, height` in inches. Orientation does not apply.
    Dimensions(f64, f64),
    /// A name looked up case-insensitively in [`NAMED_PAGE_SIZES`].
    Named(String),
}

impl Default for PageSize {
    fn default() -> Self {
        Self::Named(FALLBACK_PAGE_SIZE.to_string())
    }
}

impl PageSize {
    /// Looks up a named size, returning its `(short, long)` sides in inches.
    ///
    /// # Examples
    ///
    /// ```
    /// use scorecard_core::geometry::PageSize;
    ///
    /// assert_eq!(PageSize::lookup("a4"), Some((8.27, 11.69)));
    /// assert_eq!(PageSize::lookup("postcard"), None);
    /// ```
    pub fn lookup(name: &str) -> Option<(f64, f64)> {
        NAMED_PAGE_SIZES
            .iter()
            .find(|(known, _, _)| known.eq_ignore_ascii_case(name))
            .map(|&(_, short, long)| (short, long))
    }
}

/// Page orientation for named sizes.
///
/// Only `"landscape"`, an empty string or `null` select landscape. Any other
/// value, including unknown names, selects portrait.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "LooseText")]
pub enum Orientation {
    /// Width is the longer side
    #[default]
    Landscape,
    /// Height is the longer side
    Portrait,
}

impl From<LooseText> for Orientation {
    fn from(value: LooseText) -> Self {
        match value {
            LooseText::Text(name) if name.is_empty() || name == "landscape" => Self::Landscape,
            LooseText::Null(()) => Self::Landscape,
            LooseText::Text(_) | LooseText::Other(_) => Self::Portrait,
        }
    }
}

/// Page margins in CSS pixels. Unset sides default to [`DEFAULT_MARGIN_IN`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize)]
pub struct Margins {
    #[serde(default)]
    top: Option<f64>,
    #[serde(default)]
    right: Option<f64>,
    #[serde(default)]
    bottom: Option<f64>,
    #[serde(default)]
    left: Option<f64>,
}

impl Margins {
    /// Creates margins with values for each side, in pixels
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top: Some(top),
            right: Some(right),
            bottom: Some(bottom),
            left: Some(left),
        }
    }

    /// Creates uniform margins with the same pixel value for all sides
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns the top margin in pixels
    pub fn top(self) -> f64 {
        self.top.unwrap_or(DEFAULT_MARGIN_IN * PX_PER_INCH)
    }

    /// Returns the right margin in pixels
    pub fn right(self) -> f64 {
        self.right.unwrap_or(DEFAULT_MARGIN_IN * PX_PER_INCH)
    }

    /// Returns the bottom margin in pixels
    pub fn bottom(self) -> f64 {
        self.bottom.unwrap_or(DEFAULT_MARGIN_IN * PX_PER_INCH)
    }

    /// Returns the left margin in pixels
    pub fn left(self) -> f64 {
        self.left.unwrap_or(DEFAULT_MARGIN_IN * PX_PER_INCH)
    }

    /// Returns the sum of left and right margins
    pub fn horizontal_sum(self) -> f64 {
        self.left() + self.right()
    }

    /// Returns the sum of top and bottom margins
    pub fn vertical_sum(self) -> f64 {
        self.top() + self.bottom()
    }

    /// Formats the margins as a CSS `margin` shorthand value.
    pub fn to_css(self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top(),
            self.right(),
            self.bottom(),
            self.left()
        )
    }
}

/// The `page` branch of a scorecard configuration.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct PageSettings {
    #[serde(default)]
    size: PageSize,
    #[serde(default)]
    orientation: Orientation,
    #[serde(default)]
    margins: Margins,
}

impl PageSettings {
    pub fn new(size: PageSize, orientation: Orientation, margins: Margins) -> Self {
        Self {
            size,
            orientation,
            margins,
        }
    }

    pub fn size(&self) -> &PageSize {
        &self.size
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }
}

/// Resolved physical page dimensions and printable area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    width_in: f64,
    height_in: f64,
    available_width_px: f64,
    available_height_px: f64,
}

impl PageGeometry {
    /// Page width in inches
    pub fn width_in(self) -> f64 {
        self.width_in
    }

    /// Page height in inches
    pub fn height_in(self) -> f64 {
        self.height_in
    }

    /// Printable width inside the margins, in pixels
    pub fn available_width_px(self) -> f64 {
        self.available_width_px
    }

    /// Printable height inside the margins, in pixels
    pub fn available_height_px(self) -> f64 {
        self.available_height_px
    }

    /// The CSS `@page { size }` value, e.g. `11in 8.5in`.
    pub fn css_size(self) -> String {
        format!("{}in {}in", self.width_in, self.height_in)
    }
}

impl fmt::Display for PageGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}x{}px printable)",
            self.css_size(),
            self.available_width_px,
            self.available_height_px
        )
    }
}

/// Resolves page settings into physical dimensions and printable area.
///
/// Explicit dimensions are used as given and ignore orientation. Named sizes
/// put the longer side horizontally in landscape and vertically in portrait;
/// unknown names resolve as [`FALLBACK_PAGE_SIZE`].
///
/// # Examples
///
/// ```
/// use scorecard_core::geometry::{resolve_page_size, Margins, Orientation, PageSettings, PageSize};
///
/// let page = PageSettings::new(
///     PageSize::Named("LETTER".to_string()),
///     Orientation::Landscape,
///     Margins::default(),
/// );
/// let geometry = resolve_page_size(&page);
/// assert_eq!(geometry.width_in(), 11.0);
/// assert_eq!(geometry.height_in(), 8.5);
/// assert_eq!(geometry.css_size(), "11in 8.5in");
/// ```
pub fn resolve_page_size(page: &PageSettings) -> PageGeometry {
    let (width_in, height_in) = match page.size() {
        PageSize::Dimensions(width, height) => (*width, *height),
        PageSize::Named(name) => {
            let (a, b) = PageSize::lookup(name)
                .or_else(|| PageSize::lookup(FALLBACK_PAGE_SIZE))
                .unwrap_or((8.5, 11.0));
            let (short, long) = (a.min(b), a.max(b));
            match page.orientation() {
                Orientation::Landscape => (long, short),
                Orientation::Portrait => (short, long),
            }
        }
    };

    let margins = page.margins();
    let geometry = PageGeometry {
        width_in,
        height_in,
        available_width_px: width_in * PX_PER_INCH - margins.horizontal_sum(),
        available_height_px: height_in * PX_PER_INCH - margins.vertical_sum(),
    };

    debug!(geometry:%; "Resolved page geometry");
    geometry
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn named(name: &str, orientation: Orientation) -> PageSettings {
        PageSettings::new(
            PageSize::Named(name.to_string()),
            orientation,
            Margins::default(),
        )
    }

    #[test]
    fn test_explicit_dimensions_ignore_orientation() {
        let page = PageSettings::new(
            PageSize::Dimensions(11.0, 17.0),
            Orientation::Landscape,
            Margins::default(),
        );
        let geometry = resolve_page_size(&page);
        assert_eq!(geometry.width_in(), 11.0);
        assert_eq!(geometry.height_in(), 17.0);
    }

    #[test]
    fn test_orientation_from_any_value() {
        let parse = |json: &str| serde_json::from_str::<Orientation>(json).unwrap();
        assert_eq!(parse(r#""landscape""#), Orientation::Landscape);
        assert_eq!(parse(r#""portrait""#), Orientation::Portrait);
        assert_eq!(parse(r#""sideways""#), Orientation::Portrait);
        assert_eq!(parse(r#""Landscape""#), Orientation::Portrait);
        assert_eq!(parse(r#""""#), Orientation::Landscape);
        assert_eq!(parse("null"), Orientation::Landscape);
        assert_eq!(parse("90"), Orientation::Portrait);
    }

    #[test]
    fn test_letter_landscape() {
        let geometry = resolve_page_size(&named("LETTER", Orientation::Landscape));
        assert_eq!(geometry.width_in(), 11.0);
        assert_eq!(geometry.height_in(), 8.5);
    }

    #[test]
    fn test_letter_portrait() {
        let geometry = resolve_page_size(&named("LETTER", Orientation::Portrait));
        assert_eq!(geometry.width_in(), 8.5);
        assert_eq!(geometry.height_in(), 11.0);
    }

    #[test]
    fn test_named_lookup_is_case_insensitive() {
        let geometry = resolve_page_size(&named("tabloid", Orientation::Portrait));
        assert_eq!(geometry.css_size(), "11in 17in");
    }

    #[test]
    fn test_small_page_landscape() {
        let geometry = resolve_page_size(&named("4X6", Orientation::Landscape));
        assert_eq!(geometry.css_size(), "6in 4in");
    }

    #[test]
    fn test_unknown_name_falls_back_to_letter() {
        let geometry = resolve_page_size(&named("POSTCARD", Orientation::Landscape));
        assert_eq!(geometry.css_size(), "11in 8.5in");
    }

    #[test]
    fn test_default_margins_are_three_tenths_inch() {
        let geometry = resolve_page_size(&named("LETTER", Orientation::Landscape));
        assert_approx_eq!(f64, geometry.available_width_px(), (11.0 - 0.6) * 96.0, epsilon = 1e-9);
        assert_approx_eq!(f64, geometry.available_height_px(), (8.5 - 0.6) * 96.0, epsilon = 1e-9);
    }

    #[test]
    fn test_explicit_margins_are_subtracted() {
        let page = PageSettings::new(
            PageSize::Dimensions(10.0, 5.0),
            Orientation::Portrait,
            Margins::new(10.0, 20.0, 30.0, 40.0),
        );
        let geometry = resolve_page_size(&page);
        assert_approx_eq!(f64, geometry.available_width_px(), 960.0 - 60.0);
        assert_approx_eq!(f64, geometry.available_height_px(), 480.0 - 40.0);
    }

    #[test]
    fn test_margins_css() {
        assert_eq!(Margins::uniform(12.0).to_css(), "12px 12px 12px 12px");
    }

    #[test]
    fn test_page_size_deserializes_from_name_or_pair() {
        let named: PageSize = serde_json::from_str("\"A4\"").unwrap();
        assert_eq!(named, PageSize::Named("A4".to_string()));

        let pair: PageSize = serde_json::from_str("[11, 17]").unwrap();
        assert_eq!(pair, PageSize::Dimensions(11.0, 17.0));
    }

    #[test]
    fn test_partial_margins_fill_defaults() {
        let margins: Margins = serde_json::from_str(r#"{"top": 0}"#).unwrap();
        assert_eq!(margins.top(), 0.0);
        assert_approx_eq!(f64, margins.left(), 28.8, epsilon = 1e-9);
    }
}
