//! Style sequences for newly created segments
//!
//! The subdivision engine asks for one fresh style per subdivided segment.
//! Sequences are passed in explicitly so the construction stays deterministic.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::segment::Style;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Source of fresh styles for the subdivision engine
pub trait StyleSequence {
    /// Next style in the sequence
    fn next_style(&mut self) -> Style;

    /// Remember the current position as the restart point
    fn mark(&mut self) {}

    /// Return to the last marked position (or the start if never marked).
    /// Sequences without a restart point keep going.
    fn rewind(&mut self) {}
}

/// Ordered list of colors, cycled one step per request.
///
/// The cursor advances before it is read, so a fresh palette hands out index 1
/// first.
#[derive(Debug, Clone)]
pub struct CyclingPalette {
    colors: Vec<Color>,
    cursor: usize,
    anchor: usize,
}

impl CyclingPalette {
    /// Create a palette. An empty color list falls back to a single white entry.
    pub fn new(colors: Vec<Color>) -> Self {
        let colors = if colors.is_empty() {
            vec![[1.0, 1.0, 1.0, 1.0]]
        } else {
            colors
        };
        Self {
            colors,
            cursor: 0,
            anchor: 0,
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Resolve a style to its color (index wraps around the palette)
    pub fn color(&self, style: Style) -> Color {
        self.colors[style.0 as usize % self.colors.len()]
    }
}

impl StyleSequence for CyclingPalette {
    fn next_style(&mut self) -> Style {
        self.cursor = (self.cursor + 1) % self.colors.len();
        Style(self.cursor as u32)
    }

    fn mark(&mut self) {
        self.anchor = self.cursor;
    }

    fn rewind(&mut self) {
        self.cursor = self.anchor;
    }
}

/// Palette that draws indices at random from a seeded PCG stream
#[derive(Debug, Clone)]
pub struct SeededPalette {
    len: u32,
    seed: u64,
    rng: Pcg32,
    anchor: Pcg32,
}

impl SeededPalette {
    pub fn new(len: usize, seed: u64) -> Self {
        let rng = Pcg32::seed_from_u64(seed);
        Self {
            len: len.max(1) as u32,
            seed,
            anchor: rng.clone(),
            rng,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl StyleSequence for SeededPalette {
    fn next_style(&mut self) -> Style {
        Style(self.rng.random_range(0..self.len))
    }

    fn mark(&mut self) {
        self.anchor = self.rng.clone();
    }

    fn rewind(&mut self) {
        self.rng = self.anchor.clone();
    }
}
