//! The batting grid: one row per lineup slot, one column per inning.

use scorecard_core::model::ScorecardConfig;

use super::{cell::at_bat_cell, escape::escape};

const SUB_LINE: &str = r#"<div class="sub-line"></div>"#;

/// Renders the batting grid table.
///
/// Zero rows yields an empty body; zero innings yields no inning columns.
pub fn batting_grid(config: &ScorecardConfig) -> String {
    let grid = config.grid();
    let at_bat = at_bat_cell(config.cell());

    let mut html = String::from(r#"<div class="grid-wrap"><table class="scoring-grid"><thead><tr>"#);
    html.push_str(r#"<th class="col-player">Player</th>"#);
    html.push_str(r#"<th class="col-pos">Pos</th>"#);
    for inning in 1..=grid.innings() {
        html.push_str(&format!(r#"<th class="col-inning">{inning}</th>"#));
    }
    for column in grid.stat_columns() {
        html.push_str(&format!(
            r#"<th class="col-stat">{}</th>"#,
            escape(column.label())
        ));
    }
    html.push_str("</tr></thead><tbody>");

    let sub_line = if grid.substitution_line() { SUB_LINE } else { "" };
    for _ in 0..grid.rows() {
        html.push_str("<tr>");
        html.push_str(&format!(r#"<td class="cell-player">{sub_line}</td>"#));
        html.push_str(&format!(r#"<td class="cell-pos">{sub_line}</td>"#));
        for _ in 0..grid.innings() {
            html.push_str(&format!(r#"<td class="cell-inning">{at_bat}</td>"#));
        }
        for _ in grid.stat_columns() {
            html.push_str(r#"<td class="cell-stat"></td>"#);
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table></div>");
    html
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
    fn test_inning_headers() {
        let html = batting_grid(&config_with(json!({})));
        assert!(html.contains(r#"<th class="col-inning">9</th>"#));
        assert!(!html.contains(r#"<th class="col-inning">10</th>"#));
        assert!(html.contains(r#"<th class="col-stat">RBI</th>"#));
    }

    #[test]
    fn test_row_count() {
        let html = batting_grid(&config_with(json!({ "grid": { "rows": 3 } })));
        assert_eq!(html.matches(r#"<td class="cell-player">"#).count(), 3);
        assert_eq!(html.matches(r#"<td class="cell-inning">"#).count(), 27);
    }

    #[test]
    fn test_substitution_line() {
        let without = batting_grid(&config_with(json!({})));
        assert!(!without.contains("sub-line"));

        let with = batting_grid(&config_with(json!({
            "grid": { "rows": 2, "substitutionLine": true }
        })));
        assert_eq!(with.matches(SUB_LINE).count(), 4);
    }

    #[test]
    fn test_empty_grid() {
        let html = batting_grid(&config_with(json!({
            "grid": { "rows": 0, "innings": 0, "statColumns": [] }
        })));
        assert!(html.contains("<tbody></tbody>"));
        assert!(!html.contains("col-inning"));
        assert!(!html.contains("col-stat"));
    }
}
