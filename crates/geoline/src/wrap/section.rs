//! The eight regions outside a bound and their perimeter anchors.
//!
//! Bit layout (same as Cohen–Sutherland outcodes): left 1, right 2,
//! bottom 4, top 8. Points on an edge belong to that edge's region, so only
//! points strictly inside the bound have no section.

use crate::geom::{Bound, Orientation, Point};

const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

/// One of the eight exterior regions of a bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Section(u8);

/// Counter-clockwise cycle (y-up), starting at the left band.
const CCW_CYCLE: [Section; 8] = [
    Section(LEFT),
    Section(LEFT | BOTTOM),
    Section(BOTTOM),
    Section(RIGHT | BOTTOM),
    Section(RIGHT),
    Section(RIGHT | TOP),
    Section(TOP),
    Section(LEFT | TOP),
];

impl Section {
    /// Region of `p`; `None` if `p` is strictly inside `b`.
    pub(super) fn of(b: &Bound, p: Point) -> Option<Self> {
        let mut code = 0u8;
        if p.x <= b.min.x {
            code |= LEFT;
        } else if p.x >= b.max.x {
            code |= RIGHT;
        }
        if p.y <= b.min.y {
            code |= BOTTOM;
        } else if p.y >= b.max.y {
            code |= TOP;
        }
        if code == 0 {
            None
        } else {
            Some(Section(code))
        }
    }

    fn cycle_index(self) -> usize {
        // Every non-zero code produced by `of` is in the cycle.
        CCW_CYCLE.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Neighbouring section in the rotational direction `o`.
    pub(super) fn next(self, o: Orientation) -> Self {
        let k = self.cycle_index();
        match o {
            Orientation::Ccw => CCW_CYCLE[(k + 1) % 8],
            Orientation::Cw => CCW_CYCLE[(k + 7) % 8],
        }
    }

    /// Perimeter point standing in for this section: the corner for corner
    /// sections, the edge midpoint for edge bands.
    pub(super) fn anchor(self, b: &Bound) -> Point {
        let c = b.center();
        let x = if self.0 & LEFT != 0 {
            b.min.x
        } else if self.0 & RIGHT != 0 {
            b.max.x
        } else {
            c.x
        };
        let y = if self.0 & BOTTOM != 0 {
            b.min.y
        } else if self.0 & TOP != 0 {
            b.max.y
        } else {
            c.y
        };
        Point::new(x, y)
    }
}
