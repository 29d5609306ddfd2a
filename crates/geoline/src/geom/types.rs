//! Value types of the primitive model.
//!
//! - `Point`: a plain `Vector2<f64>` (x, y), compared by exact value.
//! - `Bound`: axis-aligned rectangle given by its min and max corner.
//! - `Orientation`: winding label derived from the shoelace sum.
//!
//! Code cross-refs: `line::{LineString, Ring}`, `crate::wrap::wrap_ring`

use std::fmt;

use nalgebra::Vector2;

/// A 2-D position `(x, y)`.
pub type Point = Vector2<f64>;

/// Axis-aligned rectangle.
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bound {
    pub min: Point,
    pub max: Point,
}

impl Bound {
    /// Bound spanned by two arbitrary corners (normalized per axis).
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Zero-area bound around a single point.
    #[inline]
    pub fn from_point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// Smallest bound containing every point; `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut b = Self::from_point(*first);
        for p in rest {
            b.extend(*p);
        }
        Some(b)
    }

    /// Grow to include `p`.
    #[inline]
    pub fn extend(&mut self, p: Point) {
        self.min = self.min.inf(&p);
        self.max = self.max.sup(&p);
    }

    /// Closed containment test (edges count as inside).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    #[inline]
    pub fn center(&self) -> Point {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// True if either axis has no extent (or the corners are unordered/NaN).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.min.x < self.max.x && self.min.y < self.max.y)
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.min.x
    }
    #[inline]
    pub fn right(&self) -> f64 {
        self.max.x
    }
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.min.y
    }
    #[inline]
    pub fn top(&self) -> f64 {
        self.max.y
    }

    /// The perimeter as a closed counter-clockwise ring starting at `min`.
    pub fn to_ring(&self) -> super::Ring {
        super::Ring {
            points: vec![
                self.min,
                Point::new(self.max.x, self.min.y),
                self.max,
                Point::new(self.min.x, self.max.y),
                self.min,
            ],
        }
    }
}

/// Winding order of a ring in a y-up frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Counter-clockwise; positive shoelace sum.
    Ccw,
    /// Clockwise; negative shoelace sum.
    Cw,
}

impl Orientation {
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Ccw => Orientation::Cw,
            Orientation::Cw => Orientation::Ccw,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Ccw => f.write_str("ccw"),
            Orientation::Cw => f.write_str("cw"),
        }
    }
}

/// Twice the signed area of the polygon through `points`.
///
/// The closing edge last → first is included in the sum, so open and
/// explicitly closed rings give the same value.
pub fn signed_area2(points: &[Point]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for k in 0..n {
        let p = points[k];
        let q = points[(k + 1) % n];
        sum += p.x * q.y - q.x * p.y;
    }
    sum
}

/// Winding of `points`; `None` when the shoelace sum is exactly zero
/// (collinear, fewer than three points, or self-cancelling).
pub fn orientation_of(points: &[Point]) -> Option<Orientation> {
    let a = signed_area2(points);
    if a > 0.0 {
        Some(Orientation::Ccw)
    } else if a < 0.0 {
        Some(Orientation::Cw)
    } else {
        None
    }
}
