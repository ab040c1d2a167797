//! Stat readout and graph placement
//!
//! Text rasterization belongs to the host; this module only decides what the
//! readout says and where the graphs go.

use super::shapes::bar_graph;
use super::vertex::{Vertex, colors};
use crate::sim::FractalState;

/// Left edge of the readout text
pub const TEXT_X: f32 = 10.0;
/// Offset from the text column to the graphs
pub const GRAPH_OFFSET_X: f32 = 130.0;
/// Baseline of the perimeter line, measured up from the canvas bottom
pub const PERIMETER_FROM_BOTTOM: f32 = 10.0;
/// Baseline of the area line, measured up from the canvas bottom
pub const AREA_FROM_BOTTOM: f32 = 30.0;
/// Baseline of the instructions line, measured down from the canvas top
pub const INSTRUCTIONS_FROM_TOP: f32 = 20.0;

pub const INSTRUCTIONS: &str = "Try clicking! Try playing with the code!";

pub fn perimeter_label(perimeter: f64) -> String {
    format!("Perimeter: {} pixels", perimeter.round())
}

pub fn area_label(area: f64) -> String {
    format!("Area: {} sq. pixels", area.round())
}

/// A line of readout text, its baseline position and fill color
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub color: [f32; 4],
}

/// Static hint shown at the top of the canvas
pub fn instructions() -> TextLine {
    TextLine {
        text: INSTRUCTIONS.to_string(),
        x: TEXT_X,
        y: INSTRUCTIONS_FROM_TOP,
        color: colors::INSTRUCTION_TEXT,
    }
}

/// Readout text for the current state on a canvas `canvas_height` tall
pub fn readout(state: &FractalState, canvas_height: f32) -> [TextLine; 2] {
    [
        TextLine {
            text: area_label(state.area()),
            x: TEXT_X,
            y: canvas_height - AREA_FROM_BOTTOM,
            color: colors::STAT_TEXT,
        },
        TextLine {
            text: perimeter_label(state.perimeter()),
            x: TEXT_X,
            y: canvas_height - PERIMETER_FROM_BOTTOM,
            color: colors::STAT_TEXT,
        },
    ]
}

/// Bar graphs for the area and perimeter histories, next to the readout
pub fn stat_graphs(state: &FractalState, canvas_height: f32, bar_height: f32) -> Vec<Vertex> {
    let x = TEXT_X + GRAPH_OFFSET_X;
    let mut vertices = bar_graph(
        x,
        canvas_height - AREA_FROM_BOTTOM,
        state.area_history(),
        state.max_area(),
        bar_height,
    );
    vertices.extend(bar_graph(
        x,
        canvas_height - PERIMETER_FROM_BOTTOM,
        state.perimeter_history(),
        state.max_perimeter(),
        bar_height,
    ));
    vertices
}
