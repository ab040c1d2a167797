//! Koch subdivision: one segment ____ becomes four _/\_
//!
//! Every child's bulge is derived locally from the parent's. `outward` (the
//! vector from the parent's midpoint to its bulge, scaled down one level) is the
//! bulge offset for the two end children. The two peak children use it rotated
//! by -60° and +60°.

use super::palette::StyleSequence;
use super::segment::Segment;
use crate::{midpoint, rotate_vector};

/// Split `segment` into the four segments of the next Koch level.
///
/// Output order follows the path start → p1 → bulge → p3 → end. The end pieces
/// keep the parent's style; the two peak pieces share one fresh style drawn
/// from `styles`.
pub fn subdivide(segment: &Segment, styles: &mut dyn StyleSequence) -> [Segment; 4] {
    let Segment {
        start,
        end,
        bulge,
        style,
    } = *segment;

    let step = (end - start) / 3.0;
    let p1 = start + step;
    let p3 = start + step * 2.0;

    let outward = (bulge - midpoint(start, end)) / 3.0;
    let left = rotate_vector(outward, -60.0);
    let right = rotate_vector(left, 120.0);

    let peak_style = styles.next_style();

    [
        Segment::new(start, p1, midpoint(start, p1) + outward, style),
        Segment::new(p1, bulge, midpoint(p1, bulge) + left, peak_style),
        Segment::new(bulge, p3, midpoint(bulge, p3) + right, peak_style),
        Segment::new(p3, end, midpoint(p3, end) + outward, style),
    ]
}

/// Subdivide every segment in order, concatenating the children
pub fn subdivide_all(segments: &[Segment], styles: &mut dyn StyleSequence) -> Vec<Segment> {
    let mut next = Vec::with_capacity(segments.len() * 4);
    for segment in segments {
        next.extend(subdivide(segment, styles));
    }
    next
}
