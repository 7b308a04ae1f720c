//! Stylesheet generation.
//!
//! The stylesheet is a fixed set of rules parameterized by CSS custom
//! properties bound one-to-one to the theme, plus print rules that depend on
//! the page geometry and the optional fit-to-page zoom.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use scorecard_core::{
    geometry::PageGeometry,
    model::{Fonts, ScorecardConfig},
};

use super::escape::escape;

const FONTS_ENDPOINT: &str = "https://fonts.googleapis.com/css2";
const DISPLAY_WEIGHTS: &str = "400;500;600;700";
const BODY_WEIGHTS: &str = "400;500;600";

/// Bytes left as-is in a font family query value. Spaces are handled apart.
const FAMILY_QUERY: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Builds the external font stylesheet URL, or `None` when both families are empty.
///
/// When the body and display families are identical only one is requested.
pub fn fonts_url(fonts: &Fonts) -> Option<String> {
    let mut families = Vec::new();
    if !fonts.display().is_empty() {
        families.push(format!(
            "family={}:wght@{DISPLAY_WEIGHTS}",
            family_query(fonts.display())
        ));
    }
    if !fonts.body().is_empty() && fonts.body() != fonts.display() {
        families.push(format!(
            "family={}:wght@{BODY_WEIGHTS}",
            family_query(fonts.body())
        ));
    }

    if families.is_empty() {
        return None;
    }
    Some(format!("{FONTS_ENDPOINT}?{}&display=swap", families.join("&")))
}

/// Percent-encodes a family name with spaces written as `+`.
fn family_query(family: &str) -> String {
    family
        .split(' ')
        .map(|word| utf8_percent_encode(word, FAMILY_QUERY).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

fn font_stack(family: &str) -> String {
    if family.is_empty() {
        "sans-serif".to_string()
    } else {
        format!("'{}', sans-serif", css_string(family))
    }
}

/// Escapes text for a single-quoted CSS string inside a `<style>` element.
///
/// Angle brackets become hex escapes so the text cannot close the element.
fn css_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '<' => escaped.push_str("\\3c "),
            '>' => escaped.push_str("\\3e "),
            '\n' => escaped.push_str("\\a "),
            '\r' | '\0' => {}
            c => escaped.push(c),
        }
    }
    escaped
}

/// Emits the `:root` custom properties for the theme.
pub fn css_variables(config: &ScorecardConfig) -> String {
    let theme = config.theme();
    let colors = theme.colors();
    let sizing = theme.sizing();

    let vars = [
        ("primary", escape(colors.primary()).into_owned()),
        ("primary-light", escape(colors.primary_light()).into_owned()),
        ("primary-muted", escape(colors.primary_muted()).into_owned()),
        ("primary-faint", escape(colors.primary_faint()).into_owned()),
        ("ink", escape(colors.ink()).into_owned()),
        ("background", escape(colors.background()).into_owned()),
        ("page-bg", escape(colors.page_background()).into_owned()),
        ("border", escape(colors.border()).into_owned()),
        ("border-light", escape(colors.border_light()).into_owned()),
        ("diamond-fill", escape(colors.diamond_fill()).into_owned()),
        ("diamond-stroke", escape(colors.diamond_stroke()).into_owned()),
        ("font-display", font_stack(theme.fonts().display())),
        ("font-body", font_stack(theme.fonts().body())),
        ("cell-size", format!("{}px", sizing.inning_cell_width())),
        ("row-height", format!("{}px", sizing.row_height())),
        ("player-col", format!("{}px", sizing.player_col_width())),
        ("pos-col", format!("{}px", sizing.pos_col_width())),
        ("stat-col", format!("{}px", sizing.stat_col_width())),
        ("diamond-max", format!("{}px", config.cell().diamond().max_size())),
    ];

    let mut css = String::from("    :root {\n");
    for (name, value) in vars {
        css.push_str(&format!("      --{name}: {value};\n"));
    }
    css.push_str("    }\n");
    css
}

/// Emits the page and print-media rules.
///
/// `zoom` is applied to the body at print time only; a non-positive zoom is
/// omitted.
pub fn print_rules(geometry: PageGeometry, margins_css: &str, zoom: Option<f64>) -> String {
    let zoom_rule = zoom
        .filter(|zoom| *zoom > 0.0)
        .map(|zoom| format!("\n        zoom: {zoom};"))
        .unwrap_or_default();

    format!(
        r#"    @page {{
      size: {size};
      margin: {margins_css};
    }}

    @media print {{
      body {{
        background: white;
        padding: 0;
        margin: 0;{zoom_rule}
      }}

      .scorecard {{
        box-shadow: none;
        border-radius: 0;
        width: 100%;
        padding: 16px;
      }}

      .print-page:not(:first-child) .game-header,
      .print-page:not(:last-child) .card-footer {{
        display: block;
      }}

      .print-page:not(:first-child) .game-header {{
        display: flex;
      }}

      .print-page {{
        page-break-after: always;
        page-break-inside: avoid;
      }}

      .print-page:last-child {{
        page-break-after: auto;
      }}

      .half-inning {{
        margin-bottom: 0;
      }}

      .game-header {{
        margin-bottom: 12px;
        padding-bottom: 10px;
      }}

      .section-footer {{
        margin-top: 6px;
        gap: 10px;
      }}

      .card-footer {{
        margin-top: 8px;
      }}

      .diamond-wrap svg rect {{
        fill: white;
        stroke: #888;
      }}
    }}
"#,
        size = geometry.css_size(),
    )
}

/// Screen rules shared by every document.
pub const BASE_RULES: &str = r#"    * {
      margin: 0;
      padding: 0;
      box-sizing: border-box;
    }

    body {
      font-family: var(--font-body);
      background: var(--page-bg);
      color: var(--ink);
      display: flex;
      justify-content: center;
      padding: 40px 20px;
    }

    .scorecard {
      background: var(--background);
      width: fit-content;
      max-width: 100%;
      padding: 28px 32px;
      border-radius: 6px;
      box-shadow:
        0 2px 12px rgba(0,0,0,0.08),
        0 8px 40px rgba(0,0,0,0.06);
    }

    .game-header {
      display: flex;
      gap: 12px;
      margin-bottom: 20px;
      padding-bottom: 16px;
      border-bottom: 2px solid var(--primary);
    }

    .header-field {
      display: flex;
      flex-direction: column;
      gap: 4px;
    }

    .header-field label {
      font-family: var(--font-display);
      font-weight: 600;
      font-size: 10px;
      letter-spacing: 1px;
      text-transform: uppercase;
      color: var(--primary);
    }

    .header-field .header-input {
      height: 24px;
      border-bottom: 1.5px solid var(--border);
      font-family: var(--font-body);
      font-size: 13px;
      color: var(--ink);
    }

    .half-inning {
      margin-bottom: 24px;
    }

    .half-inning:last-of-type {
      margin-bottom: 0;
    }

    .section-header {
      font-family: var(--font-display);
      font-weight: 700;
      font-size: 13px;
      letter-spacing: 1.5px;
      text-transform: uppercase;
      color: var(--primary);
      margin-bottom: 6px;
      display: flex;
      gap: 6px;
    }

    .section-header span {
      font-weight: 400;
      color: var(--primary-light);
    }

    .section-divider {
      height: 2px;
      background: var(--primary);
      margin-bottom: 0;
      border-radius: 1px;
    }

    .section-body {
      display: flex;
      flex-direction: column;
    }

    .section-footer {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 16px;
      margin-top: 10px;
    }

    .scoring-grid {
      border-collapse: collapse;
      width: 100%;
      table-layout: fixed;
    }

    .scoring-grid th {
      font-family: var(--font-display);
      font-weight: 600;
      font-size: 11px;
      letter-spacing: 0.8px;
      text-transform: uppercase;
      color: var(--primary);
      padding: 6px 2px;
      text-align: center;
      border-bottom: 2px solid var(--primary);
    }

    .scoring-grid th.col-player {
      text-align: left;
      width: var(--player-col);
      padding-left: 4px;
    }

    .scoring-grid th.col-pos {
      width: var(--pos-col);
    }

    .scoring-grid th.col-inning {
      width: var(--cell-size);
    }

    .scoring-grid th.col-stat {
      width: var(--stat-col);
      background: var(--primary-faint);
      border-bottom-color: var(--primary);
    }

    .scoring-grid td {
      height: var(--row-height);
      border-bottom: 1px solid var(--border-light);
      text-align: center;
      font-size: 13px;
      font-weight: 500;
      vertical-align: middle;
    }

    .scoring-grid tr:last-child td {
      border-bottom: 2px solid var(--primary);
    }

    .scoring-grid td.cell-player {
      text-align: left;
      padding-left: 4px;
      font-weight: 500;
      font-size: 12px;
      color: var(--ink);
      border-right: 1px solid var(--border-light);
      position: relative;
    }

    .scoring-grid td.cell-pos {
      font-family: var(--font-display);
      font-size: 12px;
      color: var(--primary);
      border-right: 1px solid var(--border);
      position: relative;
    }

    .sub-line {
      position: absolute;
      left: 0;
      right: 0;
      top: 50%;
      border-top: 1px dashed var(--border-light);
    }

    .scoring-grid td.cell-inning {
      border-right: 1px solid var(--border-light);
      padding: 0;
      position: relative;
    }

    .scoring-grid td.cell-inning:last-of-type {
      border-right: 1px solid var(--border);
    }

    .scoring-grid td.cell-stat {
      background: var(--primary-faint);
      border-right: 1px solid var(--border-light);
      font-family: var(--font-display);
      font-weight: 600;
      font-size: 13px;
      color: var(--ink);
    }

    .scoring-grid td.cell-stat:last-child {
      border-right: none;
    }

    .at-bat-cell {
      display: flex;
      flex-direction: column;
      align-items: center;
      justify-content: flex-start;
      width: 100%;
      height: 100%;
      padding: 2px 0 2px;
    }

    .outcome-labels {
      display: flex;
      gap: 1px;
      justify-content: center;
      flex-shrink: 0;
      line-height: 1;
    }

    .outcome-labels span {
      font-family: var(--font-display);
      font-size: 7px;
      font-weight: 600;
      letter-spacing: 0;
      color: var(--primary-light);
      text-align: center;
      padding: 0 1px;
      line-height: 1;
    }

    .diamond-wrap {
      display: flex;
      align-items: center;
      justify-content: center;
      flex: 1;
      width: 100%;
    }

    .diamond-wrap svg {
      width: 100%;
      height: 100%;
      max-width: var(--diamond-max);
      max-height: var(--diamond-max);
    }

    .diamond-wrap svg rect {
      fill: var(--diamond-fill);
      stroke: var(--diamond-stroke);
      stroke-width: 1.2;
    }

    .count-tracker {
      position: absolute;
      bottom: 1px;
      right: 1px;
      display: flex;
      align-items: flex-end;
      gap: 0;
      line-height: 1;
    }

    .count-group {
      display: flex;
      flex-direction: column;
      align-items: center;
      gap: 0;
    }

    .count-group .count-label {
      font-family: var(--font-display);
      font-size: 5.5px;
      font-weight: 700;
      color: var(--primary-light);
      line-height: 1;
      margin-bottom: 0px;
    }

    .count-box {
      width: 7px;
      height: 7px;
      border: 1px solid var(--border);
      background: var(--background);
    }

    .count-box + .count-box {
      margin-top: -1px;
    }

    .count-group + .count-group .count-box {
      margin-left: -1px;
    }

    .sidebar-block {
      border: 1.5px solid var(--border);
      border-radius: 4px;
      overflow: hidden;
    }

    .sidebar-title {
      font-family: var(--font-display);
      font-weight: 700;
      font-size: 11px;
      letter-spacing: 1.2px;
      text-transform: uppercase;
      color: var(--background);
      background: var(--primary);
      padding: 5px 10px;
    }

    .pitcher-table {
      border-collapse: collapse;
      width: 100%;
      table-layout: fixed;
    }

    .pitcher-table th {
      font-family: var(--font-display);
      font-weight: 600;
      font-size: 10px;
      letter-spacing: 0.5px;
      color: var(--primary);
      padding: 4px 2px;
      text-align: center;
      border-bottom: 1px solid var(--border-light);
      background: var(--primary-faint);
    }

    .pitcher-table th:first-child {
      width: 40%;
      text-align: left;
      padding-left: 8px;
    }

    .pitcher-table td {
      height: 26px;
      border-bottom: 1px solid var(--border-light);
      text-align: center;
      font-size: 12px;
      font-weight: 500;
    }

    .pitcher-table td:first-child {
      text-align: left;
      padding-left: 8px;
      border-right: 1px solid var(--border-light);
    }

    .pitcher-table td:not(:first-child) {
      border-right: 1px solid var(--border-light);
    }

    .pitcher-table td:last-child {
      border-right: none;
    }

    .pitcher-table tr:last-child td {
      border-bottom: none;
    }

    .game-notes-area {
      padding: 8px 10px;
      min-height: 80px;
    }

    .game-notes-lines {
      display: flex;
      flex-direction: column;
      gap: 0;
    }

    .note-line {
      height: 22px;
      border-bottom: 1px solid var(--border-light);
    }

    .note-line:last-child {
      border-bottom: none;
    }

    .scoreboard-block {
      border: 2px solid var(--primary);
      border-radius: 6px;
      overflow: hidden;
    }

    .scoreboard-header {
      background: var(--primary);
      color: var(--background);
      font-family: var(--font-display);
      font-weight: 700;
      font-size: 14px;
      letter-spacing: 2px;
      text-transform: uppercase;
      text-align: center;
      padding: 6px 10px;
      display: flex;
      align-items: center;
      justify-content: center;
      gap: 8px;
    }

    .scoreboard-header .icon {
      width: 18px;
      height: 18px;
      opacity: 0.8;
    }

    .scoreboard-table {
      border-collapse: collapse;
      width: 100%;
      table-layout: fixed;
    }

    .scoreboard-table th,
    .scoreboard-table td {
      font-family: var(--font-display);
      font-size: 11px;
      font-weight: 600;
      text-align: center;
      padding: 4px 1px;
      border: 1px solid var(--border-light);
      color: var(--primary);
    }

    .scoreboard-table th {
      background: var(--primary-faint);
      font-size: 10px;
      letter-spacing: 0.5px;
    }

    .scoreboard-table th:first-child,
    .scoreboard-table td:first-child {
      text-align: left;
      padding-left: 8px;
      width: 50px;
      font-weight: 700;
    }

    .scoreboard-table td {
      height: 22px;
      color: var(--ink);
      font-weight: 500;
    }

    .scoreboard-totals th {
      background: var(--primary);
      color: var(--background);
      font-weight: 700;
    }

    .card-footer {
      margin-top: 12px;
      text-align: right;
      font-family: var(--font-display);
      font-size: 9px;
      letter-spacing: 1px;
      text-transform: uppercase;
      color: var(--primary-light);
    }

    .print-page:not(:first-child) .game-header,
    .print-page:not(:last-child) .card-footer {
      display: none;
    }
"#;

#[cfg(test)]
mod tests {
    use scorecard_core::geometry::{Margins, Orientation, PageSettings, PageSize, resolve_page_size};
    use serde_json::json;

    use super::*;

    fn fonts(display: &str, body: &str) -> Fonts {
        serde_json::from_value(json!({ "display": display, "body": body })).unwrap()
    }

    #[test]
    fn test_fonts_url_requests_both_families() {
        let url = fonts_url(&fonts("Roboto Slab", "Inter")).unwrap();
        assert_eq!(
            url,
            "https://fonts.googleapis.com/css2?family=Roboto+Slab:wght@400;500;600;700\
             &family=Inter:wght@400;500;600&display=swap"
        );
    }

    #[test]
    fn test_fonts_url_deduplicates_identical_families() {
        let url = fonts_url(&fonts("Inter", "Inter")).unwrap();
        assert_eq!(url.matches("family=").count(), 1);
    }

    #[test]
    fn test_fonts_url_absent_without_families() {
        assert_eq!(fonts_url(&fonts("", "")), None);
        let url = fonts_url(&fonts("", "Inter")).unwrap();
        assert!(url.contains("family=Inter:wght@400;500;600&"));
    }

    #[test]
    fn test_fonts_url_percent_encodes_families() {
        let url = fonts_url(&fonts("A&B #1", "Foo+Bar")).unwrap();
        assert!(url.contains("family=A%26B+%231:wght@"));
        assert!(url.contains("family=Foo%2BBar:wght@"));
        assert_eq!(url.matches('&').count(), 2);

        let url = fonts_url(&fonts("Noto Sans-JP", "")).unwrap();
        assert!(url.contains("family=Noto+Sans-JP:wght@"));
    }

    #[test]
    fn test_font_stack_fallback() {
        assert_eq!(font_stack(""), "sans-serif");
        assert_eq!(font_stack("Oswald"), "'Oswald', sans-serif");
    }

    #[test]
    fn test_font_stack_escapes_css_string() {
        assert_eq!(font_stack("Tom's Hand"), r"'Tom\'s Hand', sans-serif");
        assert_eq!(font_stack(r"Back\slash"), r"'Back\\slash', sans-serif");
        assert_eq!(font_stack("A&B"), "'A&B', sans-serif");

        let hostile = font_stack("</style><script>x</script>");
        assert!(!hostile.contains('<'));
        assert!(!hostile.contains('>'));
        assert!(hostile.starts_with(r"'\3c /style\3e "));
    }

    #[test]
    fn test_print_rules_zoom() {
        let page = PageSettings::new(
            PageSize::Named("LETTER".to_string()),
            Orientation::Landscape,
            Margins::default(),
        );
        let geometry = resolve_page_size(&page);
        let css = Margins::default().to_css();

        let with_zoom = print_rules(geometry, &css, Some(0.87));
        assert!(with_zoom.contains("size: 11in 8.5in;"));
        assert!(with_zoom.contains("zoom: 0.87;"));

        assert!(!print_rules(geometry, &css, None).contains("zoom:"));
        assert!(!print_rules(geometry, &css, Some(0.0)).contains("zoom:"));
    }
}
