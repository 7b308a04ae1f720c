//! Blocks in the footer strip below each batting grid.

use scorecard_core::model::{FooterBlock, ScorecardConfig};
use svg::{
    Document,
    node::element::{Circle, Path},
};

use super::escape::escape;

/// Renders a footer block, or nothing when the block is hidden.
///
/// The pitcher log has no visibility toggle and always renders.
pub fn footer_block(config: &ScorecardConfig, block: FooterBlock) -> String {
    match block {
        FooterBlock::Pitchers => pitcher_log(config),
        FooterBlock::Notes if config.notes().show() => game_notes(config),
        FooterBlock::Scoreboard if config.scoreboard().show() => scoreboard(config),
        FooterBlock::Notes | FooterBlock::Scoreboard => String::new(),
    }
}

fn pitcher_log(config: &ScorecardConfig) -> String {
    let pitchers = config.pitchers();

    let mut html = String::from(r#"<div class="sidebar-block">"#);
    html.push_str(r#"<div class="sidebar-title">Pitcher</div>"#);
    html.push_str(r#"<table class="pitcher-table"><thead><tr>"#);
    html.push_str("<th>Name</th>");
    for stat in pitchers.stats() {
        html.push_str(&format!("<th>{}</th>", escape(stat.label())));
    }
    html.push_str("</tr></thead><tbody>");
    for _ in 0..pitchers.rows() {
        html.push_str("<tr><td></td>");
        for _ in pitchers.stats() {
            html.push_str("<td></td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table></div>");
    html
}

fn game_notes(config: &ScorecardConfig) -> String {
    let mut html = String::from(r#"<div class="sidebar-block">"#);
    html.push_str(r#"<div class="sidebar-title">Game Notes</div>"#);
    html.push_str(r#"<div class="game-notes-area"><div class="game-notes-lines">"#);
    for _ in 0..config.notes().lines() {
        html.push_str(r#"<div class="note-line"></div>"#);
    }
    html.push_str("</div></div></div>");
    html
}

/// Baseball outline used in the scoreboard title bar.
fn scoreboard_icon() -> Document {
    let ball = Circle::new().set("cx", 12).set("cy", 12).set("r", 10);
    let right_seam = Path::new().set("d", "M12 2 C12 2 14 8 18 12 C14 16 12 22 12 22");
    let left_seam = Path::new().set("d", "M12 2 C12 2 10 8 6 12 C10 16 12 22 12 22");

    Document::new()
        .set("class", "icon")
        .set("viewBox", "0 0 24 24")
        .set("fill", "none")
        .set("stroke", "currentColor")
        .set("stroke-width", 2)
        .add(ball)
        .add(right_seam)
        .add(left_seam)
}

fn blank_rows(rows: usize, columns: usize) -> String {
    let mut html = String::new();
    for _ in 0..rows {
        html.push_str("<tr><td></td>");
        for _ in 0..columns {
            html.push_str("<td></td>");
        }
        html.push_str("</tr>");
    }
    html
}

fn scoreboard(config: &ScorecardConfig) -> String {
    let innings = config.grid().innings();
    let totals = config.scoreboard().totals();

    let mut html = String::from(r#"<div class="scoreboard-block">"#);
    html.push_str(r#"<div class="scoreboard-header">"#);
    html.push_str(&scoreboard_icon().to_string());
    html.push_str("Scoreboard</div>");

    // Two team rows under the inning columns
    html.push_str(r#"<table class="scoreboard-table"><thead><tr><th>Team</th>"#);
    for inning in 1..=innings {
        html.push_str(&format!("<th>{inning}</th>"));
    }
    html.push_str("</tr></thead><tbody>");
    html.push_str(&blank_rows(2, innings as usize));
    html.push_str("</tbody></table>");

    html.push_str(r#"<table class="scoreboard-table"><thead class="scoreboard-totals"><tr><th></th>"#);
    for total in totals {
        html.push_str(&format!("<th>{}</th>", escape(total)));
    }
    html.push_str("</tr></thead><tbody>");
    html.push_str(&blank_rows(2, totals.len()));
    html.push_str("</tbody></table>");

    html.push_str("</div>");
    html
}
