//! Print-fit estimation.
//!
//! When `print.fitToPage` is enabled the rendered card carries a print-only
//! zoom factor chosen so each half fits on one physical sheet. The estimate
//! mirrors the stylesheet emitted by [`export::html`](crate::export::html):
//! fixed chrome heights plus the variable grid and footer blocks.
//!
//! Footer blocks sit side by side, so their heights combine by maximum.

use log::debug;

use scorecard_core::{
    geometry::resolve_page_size,
    model::{FooterBlock, ScorecardConfig, Side},
};

/// Card padding above the content.
const CARD_PADDING: f64 = 32.0;
/// Game header row including its bottom rule.
const HEADER_HEIGHT: f64 = 56.0;
/// Section label line.
const SECTION_HEADER_HEIGHT: f64 = 26.0;
/// Batting grid column-header row.
const GRID_HEADER_HEIGHT: f64 = 28.0;
/// Gap between the grid and the footer row.
const FOOTER_GAP: f64 = 10.0;
/// Name caption below the section.
const CAPTION_HEIGHT: f64 = 20.0;

/// Footer block title bar.
const BLOCK_TITLE_HEIGHT: f64 = 28.0;
/// Pitcher log column-header row.
const PITCHER_HEADER_HEIGHT: f64 = 24.0;
/// Pitcher log body row.
const PITCHER_ROW_HEIGHT: f64 = 26.0;
/// Notes area vertical padding.
const NOTES_PADDING: f64 = 16.0;
/// Notes ruled line.
const NOTES_LINE_HEIGHT: f64 = 22.0;
/// Scoreboard block, which has a fixed two-team layout.
const SCOREBOARD_HEIGHT: f64 = 170.0;

/// Horizontal card padding.
const HORIZONTAL_PADDING: f64 = 40.0;

/// Estimated rendered size of the widest and tallest half, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentEstimate {
    width: f64,
    height: f64,
}

impl ContentEstimate {
    pub fn width(self) -> f64 {
        self.width
    }

    pub fn height(self) -> f64 {
        self.height
    }
}

/// Estimates the height of one footer block, or zero when it is hidden.
pub fn footer_block_height(config: &ScorecardConfig, block: FooterBlock) -> f64 {
    match block {
        FooterBlock::Pitchers => {
            BLOCK_TITLE_HEIGHT
                + PITCHER_HEADER_HEIGHT
                + f64::from(config.pitchers().rows()) * PITCHER_ROW_HEIGHT
        }
        FooterBlock::Notes if config.notes().show() => {
            BLOCK_TITLE_HEIGHT + NOTES_PADDING + f64::from(config.notes().lines()) * NOTES_LINE_HEIGHT
        }
        FooterBlock::Scoreboard if config.scoreboard().show() => SCOREBOARD_HEIGHT,
        FooterBlock::Notes | FooterBlock::Scoreboard => 0.0,
    }
}

/// Estimates the rendered height of one half of the card.
pub fn section_height(config: &ScorecardConfig, side: Side) -> f64 {
    let grid = config.grid();
    let sizing = config.theme().sizing();

    let header = if config.header().show() {
        HEADER_HEIGHT
    } else {
        0.0
    };

    let footer = config
        .sections()
        .side(side)
        .footer_blocks()
        .map(|block| footer_block_height(config, block))
        .fold(0.0, f64::max);

    CARD_PADDING
        + header
        + SECTION_HEADER_HEIGHT
        + GRID_HEADER_HEIGHT
        + f64::from(grid.rows()) * sizing.row_height()
        + FOOTER_GAP
        + footer
        + CAPTION_HEIGHT
}

/// Estimates the rendered width of the batting grid.
pub fn content_width(config: &ScorecardConfig) -> f64 {
    let grid = config.grid();
    let sizing = config.theme().sizing();

    sizing.player_col_width()
        + sizing.pos_col_width()
        + f64::from(grid.innings()) * sizing.inning_cell_width()
        + grid.stat_columns().len() as f64 * sizing.stat_col_width()
        + HORIZONTAL_PADDING
}

/// Estimates the size of the larger half of the card.
///
/// Both halves are measured even when only one is emitted, so the zoom does
/// not change with the page selection.
pub fn estimate_content(config: &ScorecardConfig) -> ContentEstimate {
    let height = Side::ALL
        .iter()
        .map(|&side| section_height(config, side))
        .fold(0.0, f64::max);

    ContentEstimate {
        width: content_width(config),
        height,
    }
}

/// Computes the print zoom that fits the card on one page.
///
/// The result is the smaller of the horizontal and vertical fit ratios, capped
/// at `1` (content is never enlarged) and floored to two decimal places so the
/// fit is never exceeded.
pub fn print_zoom(config: &ScorecardConfig) -> f64 {
    let geometry = resolve_page_size(config.page());
    let estimate = estimate_content(config);

    let zoom_w = geometry.available_width_px() / estimate.width();
    let zoom_h = geometry.available_height_px() / estimate.height();
    let zoom = (zoom_w.min(zoom_h).min(1.0) * 100.0).floor() / 100.0;

    debug!(
        estimated_width = estimate.width(),
        estimated_height = estimate.height(),
        zoom;
        "Calculated print zoom"
    );
    zoom
}
