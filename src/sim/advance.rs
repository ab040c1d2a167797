//! Level driver
//!
//! One call to `advance` is one click: the level steps forward, wrapping back
//! to the seed triangle after `max_level - 1`.

use super::palette::StyleSequence;
use super::state::FractalState;
use super::stats;
use super::subdivide::subdivide_all;

/// Advance the construction by one level (wrapping to 0 past the cap)
pub fn advance(state: &mut FractalState, styles: &mut dyn StyleSequence) {
    styles.rewind();

    state.level = (state.level + 1) % state.max_level.max(1);
    if state.level == 0 {
        reset(state);
        return;
    }

    state.segments = subdivide_all(&state.segments, styles);
    state.perimeter = state.perimeter * 4.0 / 3.0;
    state.area += stats::area_increment(state.base_area, state.level);

    state.perimeter_history.push(state.perimeter);
    state.area_history.push(state.area);

    log::debug!(
        "Level {}: {} segments, perimeter={:.2}, area={:.2}",
        state.level,
        state.segments.len(),
        state.perimeter,
        state.area
    );
}

/// Return to the seed triangle
pub fn reset(state: &mut FractalState) {
    state.level = 0;
    state.segments = vec![state.seed];
    state.perimeter = state.base_perimeter;
    state.area = state.base_area;
    state.perimeter_history.reset(state.base_perimeter);
    state.area_history.reset(state.base_area);

    log::info!(
        "Reset to seed triangle: perimeter={:.2}, area={:.2}",
        state.perimeter,
        state.area
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::palette::{CyclingPalette, SeededPalette};
    use crate::sim::segment::Segment;
    use crate::sim::stats::{area_at, limit_area, perimeter_at};
    use crate::Point;

    const MAX_LEVEL: u32 = 6;

    fn setup() -> (FractalState, CyclingPalette) {
        let mut palette = CyclingPalette::new(vec![[1.0; 4]; 5]);
        let state = FractalState::new(200.0, 100.0, MAX_LEVEL, &mut palette);
        (state, palette)
    }

    fn rel_close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * a.abs().max(b.abs())
    }

    fn shoelace(points: &[Point]) -> f64 {
        let n = points.len();
        let twice: f64 = (0..n)
            .map(|i| points[i].perp_dot(points[(i + 1) % n]))
            .sum();
        twice.abs() / 2.0
    }

    #[test]
    fn test_concrete_scenario() {
        let (mut state, mut palette) = setup();
        assert!((state.base_area() - 17_320.5).abs() < 0.01);

        advance(&mut state, &mut palette);
        assert_eq!(state.level(), 1);
        assert_eq!(state.segments().len(), 4);
        assert!((state.perimeter() - 800.0).abs() < 1e-9);
        // One side is 4 segments of 200/3
        let third: f64 = state.segments().iter().map(Segment::length).sum();
        assert!((third - 266.67).abs() < 0.01);

        for _ in 1..MAX_LEVEL {
            advance(&mut state, &mut palette);
        }
        assert_eq!(state.level(), 0);
        assert_eq!(state.segments().len(), 1);
        assert_eq!(state.perimeter(), 600.0);
        assert_eq!(state.area(), state.base_area());
    }

    #[test]
    fn test_segment_count_per_level() {
        let (mut state, mut palette) = setup();
        for level in 0..MAX_LEVEL {
            assert_eq!(state.level(), level);
            assert_eq!(state.segments().len(), 4usize.pow(level));
            advance(&mut state, &mut palette);
        }
    }

    #[test]
    fn test_path_continuity() {
        let (mut state, mut palette) = setup();
        let seed = *state.seed();
        for _ in 0..MAX_LEVEL {
            let segs = state.segments();
            assert_eq!(segs[0].start, seed.start);
            assert_eq!(segs[segs.len() - 1].end, seed.end);
            for pair in segs.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
                assert!(!pair[0].is_degenerate());
            }
            advance(&mut state, &mut palette);
        }
    }

    #[test]
    fn test_perimeter_matches_closed_form_and_segments() {
        let (mut state, mut palette) = setup();
        for level in 0..MAX_LEVEL {
            let expected = perimeter_at(200.0, level);
            assert!(rel_close(state.perimeter(), expected, 1e-6));

            let measured: f64 = 3.0 * state.segments().iter().map(Segment::length).sum::<f64>();
            assert!(rel_close(measured, expected, 1e-6), "level {level}");

            let side = 200.0 / 3.0_f64.powi(level as i32);
            assert!(state
                .segments()
                .iter()
                .all(|s| rel_close(s.length(), side, 1e-9)));
            advance(&mut state, &mut palette);
        }
    }

    #[test]
    fn test_area_matches_closed_form_and_polygon() {
        let (mut state, mut palette) = setup();
        let base = state.base_area();
        let mut prev = 0.0;
        for level in 0..MAX_LEVEL {
            assert!(state.area() > prev);
            assert!(state.area() < limit_area(base));
            assert!(rel_close(state.area(), area_at(base, level), 1e-9));
            assert!(rel_close(shoelace(&state.outline()), state.area(), 1e-6), "level {level}");
            prev = state.area();
            advance(&mut state, &mut palette);
        }
    }

    #[test]
    fn test_bulges_stay_outward() {
        let (mut state, mut palette) = setup();
        for _ in 0..MAX_LEVEL {
            for s in state.segments() {
                assert!(s.side_of(s.bulge) < 0.0);
            }
            advance(&mut state, &mut palette);
        }
    }

    #[test]
    fn test_full_cycle_restores_initial_state() {
        let (mut state, mut palette) = setup();
        let initial = state.clone();
        for _ in 0..MAX_LEVEL {
            advance(&mut state, &mut palette);
        }
        assert_eq!(state, initial);
    }

    #[test]
    fn test_cycles_are_identical() {
        let (mut state, mut palette) = setup();
        let mut first = Vec::new();
        for _ in 0..MAX_LEVEL {
            advance(&mut state, &mut palette);
            first.push(state.clone());
        }
        for expected in &first {
            advance(&mut state, &mut palette);
            assert_eq!(&state, expected);
        }
    }

    #[test]
    fn test_seeded_palette_cycles_identically() {
        let mut styles = SeededPalette::new(5, 7);
        let mut state = FractalState::new(90.0, 10.0, 4, &mut styles);
        for _ in 0..3 {
            advance(&mut state, &mut styles);
        }
        let deepest = state.clone();
        for _ in 0..4 {
            advance(&mut state, &mut styles);
        }
        assert_eq!(state, deepest);
    }

    #[test]
    fn test_history_tracks_cycle() {
        let (mut state, mut palette) = setup();
        advance(&mut state, &mut palette);
        advance(&mut state, &mut palette);
        assert_eq!(state.perimeter_history().len(), 3);
        assert_eq!(state.area_history().latest(), Some(state.area()));

        reset(&mut state);
        assert_eq!(state.level(), 0);
        assert_eq!(state.perimeter_history().values(), &[600.0]);
        assert_eq!(state.segments(), &[*state.seed()]);
    }

    #[test]
    fn test_zero_cap_stays_at_seed() {
        let (mut state, mut palette) = setup();
        state.max_level = 0;
        advance(&mut state, &mut palette);
        assert_eq!(state.level(), 0);
        assert_eq!(state.segments(), &[*state.seed()]);
    }

    #[test]
    fn test_single_level_never_subdivides() {
        let mut palette = CyclingPalette::new(vec![[1.0; 4]; 2]);
        let mut state = FractalState::new(50.0, 0.0, 1, &mut palette);
        let initial = state.clone();
        for _ in 0..3 {
            advance(&mut state, &mut palette);
            assert_eq!(state, initial);
        }
    }
}
