//! Boundary-wrap stitcher: close a ring against a rectangular bound.
//!
//! Purpose
//! - A ring clipped out of a repeating coordinate window (e.g. a polygon that
//!   crossed the antimeridian) arrives open, with both ends outside the
//!   window. Closing it with a straight chord would cut through the interior;
//!   instead the closure follows the bound's perimeter in the requested
//!   rotational direction.
//!
//! Model
//! - The exterior of the bound is split into eight sections (`section`). The
//!   walk starts at the section after the last point's section and stops at
//!   the first point's section, emitting each section's perimeter anchor.
//! - If both ends share a section and the directly closed ring already has the
//!   requested winding, no perimeter is inserted; otherwise the walk goes all
//!   the way around.
//!
//! Code cross-refs: `geom::{Bound, Ring, orientation_of}`

mod error;
mod section;

pub use error::WrapError;

use crate::geom::cfg::points_coincide;
use crate::geom::{orientation_of, Bound, Orientation, Point, Ring};
use section::Section;

/// Close `ring` against `bound` so the result winds in `orientation`.
///
/// Output order: input points, perimeter anchors (possibly none), first
/// point again. The result is always explicitly closed.
///
/// Pre: `bound` is non-degenerate, `ring` is non-empty, and unless the ring
/// is already closed its first and last points lie outside or on `bound`.
pub fn wrap_ring(
    bound: &Bound,
    ring: &[Point],
    orientation: Orientation,
) -> Result<Ring, WrapError> {
    if bound.is_degenerate() {
        return Err(WrapError::DegenerateBound { bound: *bound });
    }
    let (&first, _) = ring.split_first().ok_or(WrapError::EmptyRing)?;
    let last_index = ring.len() - 1;
    let last = ring[last_index];

    // Eight sections: at most seven anchors plus the closing point.
    let mut out: Vec<Point> = Vec::with_capacity(ring.len() + 8);
    out.extend_from_slice(ring);

    if points_coincide(first, last) {
        out.push(first);
        return Ok(Ring { points: out });
    }

    let target = Section::of(bound, first).ok_or(WrapError::EndpointInsideBound {
        index: 0,
        point: first,
    })?;
    let mut current = Section::of(bound, last).ok_or(WrapError::EndpointInsideBound {
        index: last_index,
        point: last,
    })?;

    if current == target {
        out.push(first);
        if orientation_of(&out) == Some(orientation) {
            return Ok(Ring { points: out });
        }
        out.pop();
    }

    current = current.next(orientation);
    while current != target {
        out.push(current.anchor(bound));
        current = current.next(orientation);
    }
    out.push(first);
    Ok(Ring { points: out })
}

impl Ring {
    /// Method form of [`wrap_ring`] over this ring's points.
    #[inline]
    pub fn wrap_around(&self, bound: &Bound, orientation: Orientation) -> Result<Ring, WrapError> {
        wrap_ring(bound, &self.points, orientation)
    }
}
