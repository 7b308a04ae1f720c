//! HTML document rendering.
//!
//! [`generate_page`] turns an effective configuration into a complete,
//! self-contained HTML document: an embedded stylesheet driven by CSS custom
//! properties, an optional web-font link, and one print page per selected
//! half of the card.
//!
//! Rendering is total over any structurally valid configuration. Hidden
//! fragments are omitted and empty sequences produce empty table sections.
//! Every piece of user-supplied text passes through [`escape`] before it is
//! embedded.

mod cell;
mod escape;
mod footer;
mod grid;
mod section;
mod style;

use log::{debug, info};

use scorecard_core::{
    geometry::resolve_page_size,
    model::{ScorecardConfig, Side},
};

use crate::layout;

pub use escape::escape;
pub use style::fonts_url;

/// Suffix appended to the document name in the page title.
const TITLE_SUFFIX: &str = "Baseball Scorecard";

/// Renders the complete HTML document for a configuration.
///
/// The output depends only on `config`; rendering the same configuration
/// twice yields byte-identical documents.
pub fn generate_page(config: &ScorecardConfig) -> String {
    let geometry = resolve_page_size(config.page());
    let zoom = config
        .print()
        .fit_to_page()
        .then(|| layout::print_zoom(config));
    debug!(geometry:%, zoom:?; "Rendering scorecard");

    let font_link = style::fonts_url(config.theme().fonts())
        .map(|url| {
            format!(
                "  <link rel=\"preconnect\" href=\"https://fonts.googleapis.com\">\n  <link href=\"{}\" rel=\"stylesheet\">\n",
                escape(&url)
            )
        })
        .unwrap_or_default();

    let mut pages = String::new();
    let mut page_count = 0;
    for side in Side::ALL {
        if config.pages().includes(side) {
            pages.push_str(&section::print_page(config, side));
            page_count += 1;
        }
    }

    let document = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{name} - {TITLE_SUFFIX}</title>
{font_link}  <style>
{variables}
{base}
{print}  </style>
</head>
<body>

<div class="scorecard">
{pages}</div>

</body>
</html>
"#,
        name = escape(config.name()),
        variables = style::css_variables(config),
        base = style::BASE_RULES,
        print = style::print_rules(geometry, &config.page().margins().to_css(), zoom),
    );

    info!(pages = page_count, bytes = document.len(); "Rendered scorecard");
    document
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{compose::deep_merge, defaults::defaults};

    fn config_with(overrides: serde_json::Value) -> ScorecardConfig {
        serde_json::from_value(deep_merge(defaults(), &overrides)).unwrap()
    }

    #[test]
    fn test_document_skeleton() {
        let html = generate_page(&config_with(json!({ "name": "Opening Day" })));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Opening Day - Baseball Scorecard</title>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_font_link_omitted_without_fonts() {
        let html = generate_page(&config_with(json!({
            "theme": { "fonts": { "display": "", "body": "" } }
        })));
        assert!(!html.contains("fonts.googleapis.com"));
        assert!(html.contains("--font-display: sans-serif;"));
    }

    #[test]
    fn test_zoom_follows_fit_to_page() {
        let fitted = generate_page(&config_with(json!({})));
        assert!(fitted.contains("zoom: "));

        let unfitted = generate_page(&config_with(json!({ "print": { "fitToPage": false } })));
        assert!(!unfitted.contains("zoom: "));
    }

    #[test]
    fn test_page_rule_uses_geometry() {
        let html = generate_page(&config_with(json!({
            "page": { "size": "A4", "orientation": "portrait" }
        })));
        assert!(html.contains("size: 8.27in 11.69in;"));
    }
}
