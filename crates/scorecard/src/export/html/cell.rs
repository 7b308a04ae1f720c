//! The at-bat cell repeated in every inning column.

use scorecard_core::model::CellSettings;
use svg::{Document, node::element::Rectangle};

use super::escape::escape;

/// Renders one at-bat cell.
///
/// Every cell in a document is identical, so callers render it once and
/// repeat the markup.
pub fn at_bat_cell(cell: &CellSettings) -> String {
    let mut html = String::from(r#"<div class="at-bat-cell">"#);

    if cell.outcomes().show() {
        html.push_str(r#"<div class="outcome-labels">"#);
        for item in cell.outcomes().items() {
            html.push_str(&format!("<span>{}</span>", escape(item)));
        }
        html.push_str("</div>");
    }

    if cell.diamond().show() {
        html.push_str(r#"<div class="diamond-wrap">"#);
        html.push_str(&diamond().to_string());
        html.push_str("</div>");
    }

    if cell.count().show() {
        html.push_str(r#"<div class="count-tracker">"#);
        html.push_str(&count_group("S", cell.count().strikes()));
        html.push_str(&count_group("B", cell.count().balls()));
        html.push_str("</div>");
    }

    html.push_str("</div>");
    html
}

/// A square rotated 45 degrees about the center of a 20x20 view box.
fn diamond() -> Document {
    let base = Rectangle::new()
        .set("x", 3)
        .set("y", 3)
        .set("width", 14)
        .set("height", 14)
        .set("rx", 1)
        .set("transform", "rotate(45 10 10)");

    Document::new().set("viewBox", "0 0 20 20").add(base)
}

fn count_group(label: &str, boxes: u32) -> String {
    let mut html = format!(r#"<div class="count-group"><span class="count-label">{label}</span>"#);
    for _ in 0..boxes {
        html.push_str(r#"<div class="count-box"></div>"#);
    }
    html.push_str("</div>");
    html
}
