//! Construction settings
//!
//! Fixed at start-up; nothing here changes while the animation runs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{GRAPH_BAR_HEIGHT, LINE_WIDTH, MARGIN, MAX_LEVEL, MAX_LEVEL_LIMIT, SIDE_LENGTH};
use crate::renderer::vertex::colors;
use crate::sim::{Color, CyclingPalette, SeededPalette, StyleSequence};

/// How fresh styles are picked for new peak segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PaletteMode {
    /// Step through the palette in order
    #[default]
    Cycle,
    /// Pick palette entries from a seeded random stream
    Seeded { seed: u64 },
}

impl PaletteMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteMode::Cycle => "Cycle",
            PaletteMode::Seeded { .. } => "Seeded",
        }
    }
}

/// Snowflake settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Levels per cycle (recursion cap)
    pub max_level: u32,
    /// Seed triangle side length (pixels)
    pub side_length: f64,
    /// Offset of the seed edge from the origin (pixels)
    pub margin: f64,
    /// Stroke colors, cycled by the style rule
    pub palette: Vec<Color>,
    pub palette_mode: PaletteMode,

    // === Rendering ===
    /// Segment stroke width (pixels)
    pub line_width: f32,
    /// Full height of the stat bar graphs (pixels)
    pub graph_bar_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_level: MAX_LEVEL,
            side_length: SIDE_LENGTH,
            margin: MARGIN,
            palette: colors::PALETTE.to_vec(),
            palette_mode: PaletteMode::Cycle,

            line_width: LINE_WIDTH,
            graph_bar_height: GRAPH_BAR_HEIGHT,
        }
    }
}

impl Settings {
    /// Parse settings from JSON (missing fields take their defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults when the file
    /// can't be read or parsed. The result is always sanitized.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let settings = match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        };
        settings.sanitized()
    }

    /// Clamp values into the ranges the construction supports
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if self.max_level == 0 || self.max_level > MAX_LEVEL_LIMIT {
            let clamped = self.max_level.clamp(1, MAX_LEVEL_LIMIT);
            log::warn!("max_level {} out of range, using {}", self.max_level, clamped);
            self.max_level = clamped;
        }
        if !(self.side_length.is_finite() && self.side_length > 0.0) {
            log::warn!("side_length {} is not positive, using {}", self.side_length, defaults.side_length);
            self.side_length = defaults.side_length;
        }
        if !self.margin.is_finite() {
            log::warn!("margin {} is not finite, using {}", self.margin, defaults.margin);
            self.margin = defaults.margin;
        }
        if self.palette.is_empty() {
            log::warn!("Empty palette, using defaults");
            self.palette = defaults.palette;
        }
        if !(self.line_width > 0.0) {
            self.line_width = defaults.line_width;
        }
        if !(self.graph_bar_height > 0.0) {
            self.graph_bar_height = defaults.graph_bar_height;
        }
        self
    }

    /// Palette used to resolve styles to colors
    pub fn palette(&self) -> CyclingPalette {
        CyclingPalette::new(self.palette.clone())
    }

    /// Style source for the subdivision engine
    pub fn style_sequence(&self) -> Box<dyn StyleSequence> {
        match self.palette_mode {
            PaletteMode::Cycle => Box::new(self.palette()),
            PaletteMode::Seeded { seed } => Box::new(SeededPalette::new(self.palette.len(), seed)),
        }
    }
}
