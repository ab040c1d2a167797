//! Perimeter and area of the snowflake
//!
//! Each level multiplies the perimeter by 4/3 and adds `3 * 4^(level-1)` new
//! triangles, each 1/9 the area of the previous level's additions. Summed, the
//! area added at `level` is `3/4 * (4/9)^level * base`.

use serde::{Deserialize, Serialize};

use crate::equilateral_height;

/// Area of the seed equilateral triangle
pub fn base_area(side: f64) -> f64 {
    0.5 * side * equilateral_height(side)
}

/// Perimeter of the whole snowflake at `level`
pub fn perimeter_at(side: f64, level: u32) -> f64 {
    3.0 * side * (4.0_f64 / 3.0).powi(level as i32)
}

/// Area of the whole snowflake at `level`
pub fn area_at(base: f64, level: u32) -> f64 {
    base * (1.0 + 0.6 * (1.0 - (4.0_f64 / 9.0).powi(level as i32)))
}

/// Area added by the transition into `level` (level >= 1)
#[inline]
pub fn area_increment(base: f64, level: u32) -> f64 {
    3.0 * (4.0_f64 / 9.0).powi(level as i32) * base / 4.0
}

/// Area of the infinite snowflake
pub fn limit_area(base: f64) -> f64 {
    8.0 / 5.0 * base
}

/// Largest perimeter reached within a cycle of `max_level` levels
pub fn max_perimeter(side: f64, max_level: u32) -> f64 {
    perimeter_at(side, max_level.saturating_sub(1))
}

/// Largest area reached within a cycle of `max_level` levels
pub fn max_area(base: f64, max_level: u32) -> f64 {
    area_at(base, max_level.saturating_sub(1))
}

/// Values of one statistic recorded at each level of the current cycle
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatHistory {
    values: Vec<f64>,
}

impl StatHistory {
    /// History holding only the level-0 value
    pub fn new(base: f64) -> Self {
        Self { values: vec![base] }
    }

    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Drop everything but a fresh level-0 value
    pub fn reset(&mut self, base: f64) {
        self.values.clear();
        self.values.push(base);
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Bar heights scaled so that `max` fills `full_height`
    pub fn bar_heights(&self, max: f64, full_height: f32) -> Vec<f32> {
        if max <= 0.0 {
            return vec![0.0; self.values.len()];
        }
        self.values
            .iter()
            .map(|v| (f64::from(full_height) * v / max) as f32)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs())
    }

    #[test]
    fn test_base_area_side_200() {
        assert!((base_area(200.0) - 17_320.508_075_688_77).abs() < 1e-6);
    }

    #[test]
    fn test_perimeter_closed_form() {
        assert_eq!(perimeter_at(200.0, 0), 600.0);
        assert!(rel_eq(perimeter_at(200.0, 1), 800.0));
        assert!(rel_eq(perimeter_at(200.0, 2), 600.0 * 16.0 / 9.0));
    }

    #[test]
    fn test_area_increments_sum_to_closed_form() {
        let base = base_area(200.0);
        let mut area = base;
        for level in 1..=8 {
            area += area_increment(base, level);
            assert!(rel_eq(area, area_at(base, level)), "level {level}");
        }
    }

    #[test]
    fn test_first_increment_is_a_third() {
        // Three triangles of 1/9 the base area
        let base = base_area(90.0);
        assert!(rel_eq(area_increment(base, 1), base / 3.0));
    }

    #[test]
    fn test_area_bounded_by_limit() {
        let base = base_area(200.0);
        let mut prev = area_at(base, 0);
        for level in 1..30 {
            let a = area_at(base, level);
            assert!(a > prev);
            assert!(a < limit_area(base));
            prev = a;
        }
        assert!((limit_area(base) - area_at(base, 200)).abs() < 1e-6);
    }

    #[test]
    fn test_cycle_maxima() {
        let base = base_area(200.0);
        assert!(rel_eq(max_perimeter(200.0, 6), 600.0 * (4.0_f64 / 3.0).powi(5)));
        assert!(rel_eq(max_area(base, 6), area_at(base, 5)));
        assert_eq!(max_perimeter(200.0, 0), 600.0);
    }

    #[test]
    fn test_history_reset_and_bars() {
        let mut h = StatHistory::new(10.0);
        h.push(20.0);
        h.push(40.0);
        assert_eq!(h.values(), &[10.0, 20.0, 40.0]);
        assert_eq!(h.bar_heights(40.0, 16.0), vec![4.0, 8.0, 16.0]);
        assert_eq!(h.latest(), Some(40.0));

        h.reset(10.0);
        assert_eq!(h.values(), &[10.0]);
        assert_eq!(h.bar_heights(0.0, 16.0), vec![0.0]);
    }
}
