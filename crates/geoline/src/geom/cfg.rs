//! Tolerance defaults for the primitive model (internal).
//!
//! Policy
//! - Fixed constants, no tolerance juggling at call sites. Point equality on
//!   the public types stays exact; this epsilon is only used where an
//!   algorithm has to decide whether two endpoints "coincide".

/// Max per-axis distance at which two points count as the same vertex.
pub(crate) const POINT_EQ_EPS: f64 = 1e-12;

/// Per-axis comparison under `POINT_EQ_EPS`.
#[inline]
pub(crate) fn points_coincide(a: super::Point, b: super::Point) -> bool {
    (a.x - b.x).abs() <= POINT_EQ_EPS && (a.y - b.y).abs() <= POINT_EQ_EPS
}
