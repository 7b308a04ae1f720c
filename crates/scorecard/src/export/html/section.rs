//! Page-level fragments: game header, half-inning sections and print pages.

use scorecard_core::model::{ScorecardConfig, Side};

use super::{escape::escape, footer::footer_block, grid::batting_grid};

/// Renders the game header, or nothing when the header is hidden.
pub fn game_header(config: &ScorecardConfig) -> String {
    let header = config.header();
    if !header.show() {
        return String::new();
    }

    let mut html = String::from(r#"<div class="game-header">"#);
    for field in header.fields() {
        html.push_str(&format!(
            r#"<div class="header-field" style="width:{}"><label>{}</label><div class="header-input"></div></div>"#,
            escape(field.width()),
            escape(field.label())
        ));
    }
    html.push_str("</div>");
    html
}

/// Formats a section label.
///
/// A label that splits on `" / "` into exactly two parts gets a styled
/// separator; anything else is emitted verbatim.
pub fn section_label(label: &str) -> String {
    let parts: Vec<&str> = label.split(" / ").collect();
    match parts.as_slice() {
        [first, second] => format!("{} <span>/</span> {}", escape(first), escape(second)),
        _ => escape(label).into_owned(),
    }
}

/// Renders one half-inning: label, divider, batting grid and footer blocks.
pub fn half_inning(config: &ScorecardConfig, side: Side) -> String {
    let section = config.sections().side(side);

    let mut html = String::from(r#"<div class="half-inning">"#);
    html.push_str(&format!(
        r#"<div class="section-header">{}</div>"#,
        section_label(section.label())
    ));
    html.push_str(r#"<div class="section-divider"></div>"#);
    html.push_str(r#"<div class="section-body">"#);
    html.push_str(&batting_grid(config));

    html.push_str(r#"<div class="section-footer">"#);
    for block in section.footer_blocks() {
        html.push_str(&footer_block(config, block));
    }
    html.push_str("</div>");

    html.push_str("</div></div>");
    html
}

/// Renders one print page for the given side.
pub fn print_page(config: &ScorecardConfig, side: Side) -> String {
    format!(
        r#"  <div class="print-page">
{header}
{section}
    <div class="card-footer">
      {name}
    </div>
  </div>
"#,
        header = game_header(config),
        section = half_inning(config, side),
        name = escape(config.name()),
    )
}
