//! Built-in presets.
//!
//! A preset is a named overrides tree offered as a one-step starting point.
//! Applying a preset replaces the live overrides rather than merging into them.

use std::sync::LazyLock;

use indexmap::IndexMap;
use serde_json::{Value, json};

use scorecard_core::palette::Palette;

const RETRO_GREEN_PRIMARY: &str = "#2e7d32";

/// A named, immutable overrides bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    slug: &'static str,
    name: &'static str,
    description: &'static str,
    overrides: Value,
}

impl Preset {
    /// Stable identifier, e.g. `retro-green`
    pub fn slug(&self) -> &'static str {
        self.slug
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn overrides(&self) -> &Value {
        &self.overrides
    }
}

static CATALOG: LazyLock<IndexMap<&'static str, Preset>> = LazyLock::new(|| {
    let retro_green = Palette::derive(RETRO_GREEN_PRIMARY)
        .ok()
        .and_then(|palette| serde_json::to_value(palette).ok())
        .unwrap_or_else(|| json!({ "primary": RETRO_GREEN_PRIMARY }));

    [
        Preset {
            slug: "classic-blue",
            name: "Classic Blue",
            description: "The default scorecard theme",
            overrides: json!({}),
        },
        Preset {
            slug: "minimal-bw",
            name: "Minimal B&W",
            description: "Clean black and white for easy printing",
            overrides: json!({
                "theme": {
                    "colors": {
                        "primary": "#444444",
                        "primaryLight": "#d0d0d0",
                        "primaryMuted": "#e4e4e4",
                        "primaryFaint": "#f3f3f3",
                        "ink": "#1a1a1a",
                        "background": "#ffffff",
                        "pageBackground": "#e0e0e0",
                        "border": "#bbbbbb",
                        "borderLight": "#d8d8d8",
                        "diamondFill": "#f0f0f0",
                        "diamondStroke": "#bbbbbb"
                    }
                }
            }),
        },
        Preset {
            slug: "retro-green",
            name: "Retro Green",
            description: "Vintage field-green scorecard",
            overrides: json!({ "theme": { "colors": retro_green } }),
        },
        Preset {
            slug: "dark-mode",
            name: "Dark Mode",
            description: "Easy on the eyes, dark background",
            overrides: json!({
                "theme": {
                    "colors": {
                        "primary": "#60a5fa",
                        "primaryLight": "#1e3a5f",
                        "primaryMuted": "#172d4a",
                        "primaryFaint": "#111f33",
                        "ink": "#e2e8f0",
                        "background": "#0f172a",
                        "pageBackground": "#020617",
                        "border": "#334155",
                        "borderLight": "#1e293b",
                        "diamondFill": "#1e293b",
                        "diamondStroke": "#475569"
                    }
                }
            }),
        },
    ]
    .into_iter()
    .map(|preset| (preset.slug, preset))
    .collect()
});

/// Iterates the catalog in display order.
pub fn presets() -> impl Iterator<Item = &'static Preset> {
    CATALOG.values()
}

/// Looks up a preset by slug, or by display name ignoring case.
pub fn find(query: &str) -> Option<&'static Preset> {
    CATALOG.get(query).or_else(|| {
        CATALOG.values().find(|preset| {
            preset.name.eq_ignore_ascii_case(query) || preset.slug.eq_ignore_ascii_case(query)
        })
    })
}
