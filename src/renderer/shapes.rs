//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::consts::{GRAPH_BAR_STRIDE, GRAPH_BAR_WIDTH};
use crate::sim::{CyclingPalette, FractalState, Segment, StatHistory};

/// Generate vertices for a stroked line (a quad, two triangles)
pub fn line(start: Vec2, end: Vec2, width: f32, color: [f32; 4]) -> [Vertex; 6] {
    let dir = (end - start).normalize_or_zero();
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = start + perp;
    let b = start - perp;
    let c = end + perp;
    let d = end - perp;

    [
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Generate vertices for an axis-aligned filled rectangle (top-left origin)
pub fn rect(x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) -> [Vertex; 6] {
    let (x1, y1) = (x + width, y + height);
    [
        Vertex::new(x, y, color),
        Vertex::new(x, y1, color),
        Vertex::new(x1, y, color),
        Vertex::new(x1, y, color),
        Vertex::new(x, y1, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Full-canvas background fill
pub fn background(width: f32, height: f32) -> [Vertex; 6] {
    rect(0.0, 0.0, width, height, colors::BACKGROUND)
}

/// Stroke a single segment with its palette color
pub fn segment(segment: &Segment, palette: &CyclingPalette, width: f32) -> [Vertex; 6] {
    line(
        segment.start.as_vec2(),
        segment.end.as_vec2(),
        width,
        palette.color(segment.style),
    )
}

/// Generate vertices for the whole snowflake: the stored third plus its two
/// rotated copies about the centroid
pub fn snowflake(state: &FractalState, palette: &CyclingPalette, width: f32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(state.segments().len() * 3 * 6);
    for s in state.all_sides() {
        vertices.extend(segment(&s, palette, width));
    }
    vertices
}

/// Generate vertices for a bar graph of `history`.
///
/// `(x, y)` is the bottom-left of the first bar; `max` maps to `bar_height`.
pub fn bar_graph(x: f32, y: f32, history: &StatHistory, max: f64, bar_height: f32) -> Vec<Vertex> {
    let heights = history.bar_heights(max, bar_height);
    let mut vertices = Vec::with_capacity((heights.len() + 1) * 6);

    // Backdrop
    vertices.extend(rect(
        x - 3.0,
        y - bar_height,
        GRAPH_BAR_STRIDE * heights.len() as f32,
        bar_height,
        colors::GRAPH_BACKGROUND,
    ));

    let mut bar_x = x;
    for h in heights {
        vertices.extend(rect(bar_x, y - h, GRAPH_BAR_WIDTH, h, colors::GRAPH_BAR));
        bar_x += GRAPH_BAR_STRIDE;
    }

    vertices
}
