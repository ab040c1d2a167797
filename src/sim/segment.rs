//! Segment geometry for the Koch boundary
//!
//! A segment is one directed edge of the current level plus the apex it would
//! grow toward if subdivided again:
//! - start, end: endpoints (direction matters)
//! - bulge: apex of the equilateral triangle on the middle third, outside the shape
//! - style: palette index used to stroke it

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::{Point, equilateral_height, midpoint, rotate_about_point};

/// Opaque appearance tag (palette index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Style(pub u32);

/// One edge of the fractal boundary at a given level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    /// Apex this edge bulges toward when subdivided
    pub bulge: Point,
    pub style: Style,
}

impl Segment {
    pub fn new(start: Point, end: Point, bulge: Point, style: Style) -> Self {
        Self {
            start,
            end,
            bulge,
            style,
        }
    }

    /// Top edge of the seed triangle: `side` pixels long, starting at
    /// (`margin`, `margin`) and bulging upward.
    pub fn seed(side: f64, margin: f64, style: Style) -> Self {
        let start = DVec2::new(margin, margin);
        let end = DVec2::new(margin + side, margin);
        let bulge = DVec2::new(margin + side / 2.0, margin - equilateral_height(side / 3.0));
        Self::new(start, end, bulge, style)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        midpoint(self.start, self.end)
    }

    /// Direction of travel (not normalized)
    #[inline]
    pub fn direction(&self) -> DVec2 {
        self.end - self.start
    }

    /// Signed side of `p` relative to the directed line start→end.
    ///
    /// Negative on the bulge side for the boundary's traversal orientation.
    #[inline]
    pub fn side_of(&self, p: Point) -> f64 {
        self.direction().perp_dot(p - self.start)
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Copy of this segment rotated about `center` (style is kept)
    pub fn rotated_about(&self, center: Point, degrees: f64) -> Self {
        Self {
            start: rotate_about_point(self.start, center, degrees),
            end: rotate_about_point(self.end, center, degrees),
            bulge: rotate_about_point(self.bulge, center, degrees),
            style: self.style,
        }
    }
}
