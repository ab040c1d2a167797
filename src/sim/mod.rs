//! Deterministic fractal construction
//!
//! All geometry lives here. This module must stay pure and deterministic:
//! - Styles come from an injected sequence, never global state
//! - Segment lists are replaced wholesale on each level change
//! - No rendering or platform dependencies

pub mod advance;
pub mod palette;
pub mod segment;
pub mod state;
pub mod stats;
pub mod subdivide;

pub use advance::{advance, reset};
pub use palette::{Color, CyclingPalette, SeededPalette, StyleSequence};
pub use segment::{Segment, Style};
pub use state::FractalState;
pub use stats::StatHistory;
pub use subdivide::{subdivide, subdivide_all};
