use std::fmt;

use crate::geom::{Bound, Point};

/// Geometry preconditions of the wrap stitcher that were not met.
#[derive(Clone, Debug, PartialEq)]
pub enum WrapError {
    /// The bound has zero (or negative) extent on some axis.
    DegenerateBound { bound: Bound },
    /// The ring has no points.
    EmptyRing,
    /// An open endpoint lies strictly inside the bound, so there is no
    /// perimeter section to route the closure through.
    EndpointInsideBound { index: usize, point: Point },
}

impl fmt::Display for WrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WrapError::DegenerateBound { bound } => write!(
                f,
                "degenerate bound [{}, {}]x[{}, {}] (needs min < max on both axes)",
                bound.min.x, bound.max.x, bound.min.y, bound.max.y
            ),
            WrapError::EmptyRing => write!(f, "cannot wrap an empty ring"),
            WrapError::EndpointInsideBound { index, point } => write!(
                f,
                "ring endpoint {} at ({}, {}) lies strictly inside the bound",
                index, point.x, point.y
            ),
        }
    }
}

impl std::error::Error for WrapError {}
