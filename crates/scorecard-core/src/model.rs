//! Typed scorecard configuration.
//!
//! [`ScorecardConfig`] is the strongly-typed view of an *effective*
//! configuration tree: defaults with overrides merged on top. Every leaf is
//! required except the handful the renderer treats as optional
//! (`theme.colors.primaryMuted`, `theme.colors.diamondStroke`, page margins,
//! `print`, and `pages`).
//!
//! All types deserialize from the camelCase JSON shape used by configuration
//! trees, so a merged [`serde_json::Value`]-style tree converts directly.

use serde::Deserialize;

use crate::{geometry::PageSettings, lenient::{self, LooseText}};

/// The complete, fully-populated scorecard configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardConfig {
    name: String,
    page: PageSettings,
    header: HeaderSettings,
    sections: Sections,
    grid: GridSettings,
    cell: CellSettings,
    pitchers: PitcherSettings,
    notes: NotesSettings,
    scoreboard: ScoreboardSettings,
    theme: Theme,
    #[serde(default)]
    print: PrintSettings,
    #[serde(default)]
    pages: PageSelection,
}

impl ScorecardConfig {
    /// Document name, used for the title and the footer caption
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn page(&self) -> &PageSettings {
        &self.page
    }

    pub fn header(&self) -> &HeaderSettings {
        &self.header
    }

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    pub fn grid(&self) -> &GridSettings {
        &self.grid
    }

    pub fn cell(&self) -> &CellSettings {
        &self.cell
    }

    pub fn pitchers(&self) -> &PitcherSettings {
        &self.pitchers
    }

    pub fn notes(&self) -> &NotesSettings {
        &self.notes
    }

    pub fn scoreboard(&self) -> &ScoreboardSettings {
        &self.scoreboard
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn print(&self) -> &PrintSettings {
        &self.print
    }

    /// Which halves of the card to emit
    pub fn pages(&self) -> PageSelection {
        self.pages
    }
}

/// The game header: a row of labeled blank fields above each half.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeaderSettings {
    show: bool,
    fields: Vec<HeaderField>,
}

impl HeaderSettings {
    pub fn show(&self) -> bool {
        self.show
    }

    pub fn fields(&self) -> &[HeaderField] {
        &self.fields
    }
}

/// A single header field. `width` is a CSS length such as `"15%"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeaderField {
    #[serde(default)]
    key: String,
    label: String,
    width: String,
}

impl HeaderField {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn width(&self) -> &str {
        &self.width
    }
}

/// One half of the game: the visiting team bats in the top, the home team in the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Away,
    Home,
}

impl Side {
    /// Both sides in print order
    pub const ALL: [Side; 2] = [Side::Away, Side::Home];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Away => "away",
            Self::Home => "home",
        }
    }
}

/// Per-half section settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sections {
    away: SectionSettings,
    home: SectionSettings,
}

impl Sections {
    pub fn side(&self, side: Side) -> &SectionSettings {
        match side {
            Side::Away => &self.away,
            Side::Home => &self.home,
        }
    }
}

/// Label and footer layout for one half.
///
/// `footer` holds footer-block identifiers; see [`FooterBlock`]. Unknown
/// identifiers are kept so they round-trip, and are skipped when rendering.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionSettings {
    label: String,
    footer: Vec<String>,
}

impl SectionSettings {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn footer(&self) -> &[String] {
        &self.footer
    }

    /// The recognized footer blocks, in configured order.
    pub fn footer_blocks(&self) -> impl Iterator<Item = FooterBlock> + '_ {
        self.footer.iter().filter_map(|id| FooterBlock::from_id(id))
    }
}

/// A block that can appear in a section footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterBlock {
    Pitchers,
    Notes,
    Scoreboard,
}

impl FooterBlock {
    /// Parses a footer-block identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "pitchers" => Some(Self::Pitchers),
            "notes" => Some(Self::Notes),
            "scoreboard" => Some(Self::Scoreboard),
            _ => None,
        }
    }
}

/// A keyed, labeled statistic column.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatColumn {
    #[serde(default)]
    key: String,
    label: String,
}

impl StatColumn {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The batting grid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSettings {
    #[serde(deserialize_with = "lenient::count")]
    rows: u32,
    #[serde(deserialize_with = "lenient::count")]
    innings: u32,
    #[serde(default)]
    substitution_line: bool,
    stat_columns: Vec<StatColumn>,
}

impl GridSettings {
    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn innings(&self) -> u32 {
        self.innings
    }

    /// Whether player and position cells carry a second line for substitutes
    pub fn substitution_line(&self) -> bool {
        self.substitution_line
    }

    pub fn stat_columns(&self) -> &[StatColumn] {
        &self.stat_columns
    }
}

/// Contents of each at-bat cell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CellSettings {
    outcomes: OutcomeSettings,
    diamond: DiamondSettings,
    count: CountSettings,
}

impl CellSettings {
    pub fn outcomes(&self) -> &OutcomeSettings {
        &self.outcomes
    }

    pub fn diamond(&self) -> &DiamondSettings {
        &self.diamond
    }

    pub fn count(&self) -> &CountSettings {
        &self.count
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutcomeSettings {
    show: bool,
    items: Vec<String>,
}

impl OutcomeSettings {
    pub fn show(&self) -> bool {
        self.show
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiamondSettings {
    show: bool,
    max_size: f64,
}

impl DiamondSettings {
    pub fn show(&self) -> bool {
        self.show
    }

    /// Maximum rendered diamond edge, in pixels
    pub fn max_size(&self) -> f64 {
        self.max_size
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountSettings {
    show: bool,
    #[serde(deserialize_with = "lenient::count")]
    balls: u32,
    #[serde(deserialize_with = "lenient::count")]
    strikes: u32,
}

impl CountSettings {
    pub fn show(&self) -> bool {
        self.show
    }

    pub fn balls(&self) -> u32 {
        self.balls
    }

    pub fn strikes(&self) -> u32 {
        self.strikes
    }
}

/// The pitcher log footer block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PitcherSettings {
    #[serde(deserialize_with = "lenient::count")]
    rows: u32,
    stats: Vec<StatColumn>,
}

impl PitcherSettings {
    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn stats(&self) -> &[StatColumn] {
        &self.stats
    }
}

/// The game-notes footer block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NotesSettings {
    show: bool,
    #[serde(deserialize_with = "lenient::count")]
    lines: u32,
}

impl NotesSettings {
    pub fn show(&self) -> bool {
        self.show
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }
}

/// The line-score footer block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoreboardSettings {
    show: bool,
    totals: Vec<String>,
}

impl ScoreboardSettings {
    pub fn show(&self) -> bool {
        self.show
    }

    /// Labels of the totals columns, e.g. `R`, `H`, `E`
    pub fn totals(&self) -> &[String] {
        &self.totals
    }
}

/// Colors, fonts and sizing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Theme {
    colors: ThemeColors,
    fonts: Fonts,
    sizing: Sizing,
}

impl Theme {
    pub fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    pub fn fonts(&self) -> &Fonts {
        &self.fonts
    }

    pub fn sizing(&self) -> &Sizing {
        &self.sizing
    }
}

/// The theme's eleven colors, as CSS color strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    primary: String,
    primary_light: String,
    #[serde(default)]
    primary_muted: Option<String>,
    primary_faint: String,
    ink: String,
    background: String,
    page_background: String,
    border: String,
    border_light: String,
    diamond_fill: String,
    #[serde(default)]
    diamond_stroke: Option<String>,
}

impl ThemeColors {
    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn primary_light(&self) -> &str {
        &self.primary_light
    }

    /// Muted primary, falling back to [`primary_light`](Self::primary_light) when unset or empty
    pub fn primary_muted(&self) -> &str {
        non_empty(self.primary_muted.as_deref()).unwrap_or(&self.primary_light)
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

    /// Diamond outline, falling back to [`border`](Self::border) when unset or empty
    pub fn diamond_stroke(&self) -> &str {
        non_empty(self.diamond_stroke.as_deref()).unwrap_or(&self.border)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Font family names. An empty string means "use the fallback stack".
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Fonts {
    display: String,
    body: String,
}

impl Fonts {
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Column and row sizes in pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sizing {
    inning_cell_width: f64,
    row_height: f64,
    player_col_width: f64,
    pos_col_width: f64,
    stat_col_width: f64,
}

impl Sizing {
    pub fn inning_cell_width(&self) -> f64 {
        self.inning_cell_width
    }

    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    pub fn player_col_width(&self) -> f64 {
        self.player_col_width
    }

    pub fn pos_col_width(&self) -> f64 {
        self.pos_col_width
    }

    pub fn stat_col_width(&self) -> f64 {
        self.stat_col_width
    }
}

/// Print behavior.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintSettings {
    #[serde(default)]
    fit_to_page: bool,
}

impl PrintSettings {
    /// Whether a print-time zoom is computed so each half fits one sheet
    pub fn fit_to_page(&self) -> bool {
        self.fit_to_page
    }
}

/// Which halves of the card to emit.
///
/// Deserializes from any value: the strings `"away"` and `"home"` select one
/// half, anything else selects both.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "LooseText")]
pub enum PageSelection {
    Away,
    Home,
    #[default]
    Both,
}

impl PageSelection {
    /// Whether the given side is emitted
    pub fn includes(self, side: Side) -> bool {
        match self {
            Self::Away => side == Side::Away,
            Self::Home => side == Side::Home,
            Self::Both => true,
        }
    }
}

impl From<Option<String>> for PageSelection {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("away") => Self::Away,
            Some("home") => Self::Home,
            _ => Self::Both,
        }
    }
}

impl From<LooseText> for PageSelection {
    fn from(value: LooseText) -> Self {
        match value {
            LooseText::Text(side) => Self::from(Some(side)),
            LooseText::Null(()) | LooseText::Other(_) => Self::Both,
        }
    }
}
