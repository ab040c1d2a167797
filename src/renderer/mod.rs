//! Vertex generation for the snowflake and its stat graphs
//!
//! Produces triangle lists in canvas pixel space; uploading and drawing them is
//! up to the host.

pub mod hud;
pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

use crate::Settings;
use crate::sim::{CyclingPalette, FractalState};

/// Everything drawn in one frame, back to front
pub fn frame(
    state: &FractalState,
    palette: &CyclingPalette,
    settings: &Settings,
    canvas: (f32, f32),
) -> Vec<Vertex> {
    let (width, height) = canvas;
    let mut vertices = Vec::new();
    vertices.extend(shapes::background(width, height));
    vertices.extend(shapes::snowflake(state, palette, settings.line_width));
    vertices.extend(hud::stat_graphs(state, height, settings.graph_bar_height));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_layers() {
        let settings = Settings::default();
        let palette = settings.palette();
        let mut styles = settings.style_sequence();
        let state = FractalState::from_settings(&settings, styles.as_mut());
        let v = frame(&state, &palette, &settings, (400.0, 400.0));
        // Background, three sides, two graphs with one bar each
        assert_eq!(v.len(), 6 + 3 * 6 + 4 * 6);
        assert_eq!(v[0].color, vertex::colors::BACKGROUND);
    }
}
