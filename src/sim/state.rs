//! Fractal state and core construction types
//!
//! Everything the renderer reads lives here. Only the level driver in
//! `advance` writes it.

use serde::{Deserialize, Serialize};

use super::palette::StyleSequence;
use super::segment::Segment;
use super::stats::{self, StatHistory};
use crate::consts::{MARGIN, MAX_LEVEL_LIMIT, SIDE_LENGTH, SIDE_ROTATION_DEG};
use crate::settings::Settings;
use crate::{Point, triangle_centroid};

/// Complete construction state for one running animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FractalStateRecord")]
pub struct FractalState {
    /// Current recursion depth, in [0, max_level)
    pub(super) level: u32,
    /// Levels per cycle; advancing past max_level - 1 wraps to 0
    pub(super) max_level: u32,
    /// One third of the boundary, in traversal order (4^level segments)
    pub(super) segments: Vec<Segment>,
    /// Perimeter of the whole snowflake
    pub(super) perimeter: f64,
    /// Area of the whole snowflake
    pub(super) area: f64,
    /// Canonical level-0 segment
    pub(super) seed: Segment,
    pub(super) side_length: f64,
    pub(super) base_perimeter: f64,
    pub(super) base_area: f64,
    /// Pivot for drawing the other two sides
    pub(super) centroid: Point,
    /// Perimeter at each level of the current cycle
    pub(super) perimeter_history: StatHistory,
    /// Area at each level of the current cycle
    pub(super) area_history: StatHistory,
}

impl FractalState {
    /// Create the level-0 state for a triangle of side `side_length` whose top
    /// edge starts at (`margin`, `margin`). The seed's style is drawn from
    /// `styles`, which is then marked so every level restarts right after it.
    ///
    /// A side that is not a positive finite number (or a non-finite margin)
    /// is replaced by the default so the seed is never degenerate.
    pub fn new(
        side_length: f64,
        margin: f64,
        max_level: u32,
        styles: &mut dyn StyleSequence,
    ) -> Self {
        let side_length = if side_length.is_finite() && side_length > 0.0 {
            side_length
        } else {
            log::warn!("side_length {} is not positive, using {}", side_length, SIDE_LENGTH);
            SIDE_LENGTH
        };
        let margin = if margin.is_finite() {
            margin
        } else {
            log::warn!("margin {} is not finite, using {}", margin, MARGIN);
            MARGIN
        };

        let seed = Segment::seed(side_length, margin, styles.next_style());
        styles.mark();

        let base_perimeter = stats::perimeter_at(side_length, 0);
        let base_area = stats::base_area(side_length);

        Self {
            level: 0,
            max_level: max_level.max(1),
            segments: vec![seed],
            perimeter: base_perimeter,
            area: base_area,
            seed,
            side_length,
            base_perimeter,
            base_area,
            centroid: triangle_centroid(seed.start, side_length),
            perimeter_history: StatHistory::new(base_perimeter),
            area_history: StatHistory::new(base_area),
        }
    }

    /// Create the level-0 state described by `settings` (sanitized first)
    pub fn from_settings(settings: &Settings, styles: &mut dyn StyleSequence) -> Self {
        let settings = settings.clone().sanitized();
        Self::new(
            settings.side_length,
            settings.margin,
            settings.max_level,
            styles,
        )
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn seed(&self) -> &Segment {
        &self.seed
    }

    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    pub fn base_perimeter(&self) -> f64 {
        self.base_perimeter
    }

    pub fn base_area(&self) -> f64 {
        self.base_area
    }

    pub fn centroid(&self) -> Point {
        self.centroid
    }

    pub fn perimeter_history(&self) -> &StatHistory {
        &self.perimeter_history
    }

    pub fn area_history(&self) -> &StatHistory {
        &self.area_history
    }

    /// Largest perimeter this cycle will reach (graph normalizer)
    pub fn max_perimeter(&self) -> f64 {
        stats::max_perimeter(self.side_length, self.max_level)
    }

    /// Largest area this cycle will reach (graph normalizer)
    pub fn max_area(&self) -> f64 {
        stats::max_area(self.base_area, self.max_level)
    }

    /// All three sides: the stored third followed by its 120° and 240° copies.
    ///
    /// Consecutive sides join end to start, so the result walks the whole
    /// boundary once.
    pub fn all_sides(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..3u32).flat_map(move |k| {
            let degrees = SIDE_ROTATION_DEG * f64::from(k);
            self.segments.iter().map(move |s| {
                if k == 0 {
                    *s
                } else {
                    s.rotated_about(self.centroid, degrees)
                }
            })
        })
    }

    /// Closed boundary polygon (each vertex once, no repeated first point)
    pub fn outline(&self) -> Vec<Point> {
        self.all_sides().map(|s| s.start).collect()
    }
}

/// Wire form of `FractalState`, checked before it becomes one
#[derive(Deserialize)]
struct FractalStateRecord {
    level: u32,
    max_level: u32,
    segments: Vec<Segment>,
    perimeter: f64,
    area: f64,
    seed: Segment,
    side_length: f64,
    base_perimeter: f64,
    base_area: f64,
    centroid: Point,
    perimeter_history: StatHistory,
    area_history: StatHistory,
}

impl TryFrom<FractalStateRecord> for FractalState {
    type Error = String;

    fn try_from(r: FractalStateRecord) -> Result<Self, Self::Error> {
        if r.max_level == 0 || r.max_level > MAX_LEVEL_LIMIT {
            return Err(format!("max_level {} out of range 1..={}", r.max_level, MAX_LEVEL_LIMIT));
        }
        if r.level >= r.max_level {
            return Err(format!("level {} not below max_level {}", r.level, r.max_level));
        }
        if !(r.side_length.is_finite() && r.side_length > 0.0) {
            return Err(format!("side_length {} is not positive", r.side_length));
        }
        let expected = 4usize.pow(r.level);
        if r.segments.len() != expected {
            return Err(format!(
                "level {} needs {} segments, found {}",
                r.level,
                expected,
                r.segments.len()
            ));
        }
        if r.seed.is_degenerate() || r.segments.iter().any(Segment::is_degenerate) {
            return Err("degenerate segment".to_string());
        }
        let entries = r.level as usize + 1;
        if r.perimeter_history.len() != entries || r.area_history.len() != entries {
            return Err(format!("stat histories must hold {} entries", entries));
        }

        Ok(Self {
            level: r.level,
            max_level: r.max_level,
            segments: r.segments,
            perimeter: r.perimeter,
            area: r.area,
            seed: r.seed,
            side_length: r.side_length,
            base_perimeter: r.base_perimeter,
            base_area: r.base_area,
            centroid: r.centroid,
            perimeter_history: r.perimeter_history,
            area_history: r.area_history,
        })
    }
}
