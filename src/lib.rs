//! Koch Snowflake - step-by-step fractal construction
//!
//! Core modules:
//! - `sim`: Deterministic construction (segments, subdivision, level driver, stats)
//! - `renderer`: Vertex generation for the snowflake and stat graphs
//! - `settings`: Start-up configuration
//!
//! Only one third of the boundary (the top side) is ever computed. The renderer
//! draws the other two sides by rotating it about the triangle's centroid.

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{PaletteMode, Settings};

use glam::DVec2;

/// A 2D point in screen space (y grows downward)
pub type Point = DVec2;

/// Construction defaults
pub mod consts {
    /// Recursion cap; levels run 0..MAX_LEVEL
    pub const MAX_LEVEL: u32 = 6;
    /// Upper bound accepted from configuration (4^9 segments per side)
    pub const MAX_LEVEL_LIMIT: u32 = 10;
    /// Side length of the seed triangle (pixels)
    pub const SIDE_LENGTH: f64 = 200.0;
    /// Offset of the seed edge from the canvas origin (pixels)
    pub const MARGIN: f64 = 100.0;
    /// Stroke width for segments (pixels)
    pub const LINE_WIDTH: f32 = 1.0;
    /// Full height of a stat bar graph (pixels)
    pub const GRAPH_BAR_HEIGHT: f32 = 15.0;
    /// Width of a single bar
    pub const GRAPH_BAR_WIDTH: f32 = 5.0;
    /// Horizontal distance between bar origins
    pub const GRAPH_BAR_STRIDE: f32 = 11.0;
    /// Angle between the three sides of the triangle (degrees)
    pub const SIDE_ROTATION_DEG: f64 = 120.0;
}

/// Rotate `p` about `center` by `degrees`.
///
/// Uses the standard rotation matrix, so in y-down screen space a positive
/// angle turns clockwise on screen.
#[inline]
pub fn rotate_about_point(p: Point, center: Point, degrees: f64) -> Point {
    center + rotate_vector(p - center, degrees)
}

/// Rotate a free vector by `degrees`
#[inline]
pub fn rotate_vector(v: DVec2, degrees: f64) -> DVec2 {
    DVec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Point halfway between `a` and `b`
#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    (a + b) / 2.0
}

/// Height of an equilateral triangle with the given side length
#[inline]
pub fn equilateral_height(side: f64) -> f64 {
    side * 3.0_f64.sqrt() / 2.0
}

/// Centroid of the equilateral triangle hanging below the edge that starts at
/// `edge_start` and runs `side` pixels to the right.
pub fn triangle_centroid(edge_start: Point, side: f64) -> Point {
    DVec2::new(
        edge_start.x + side / 2.0,
        edge_start.y + side * 3.0_f64.sqrt() / 6.0,
    )
}
