//! Point sequences: open `LineString` and polygon-boundary `Ring`.
//!
//! Both are thin owned wrappers around `Vec<Point>`; the field is public so
//! callers can build and mutate sequences directly, the same way `Poly2`
//! exposes its half-spaces.

use super::cfg::points_coincide;
use super::types::{orientation_of, Bound, Orientation, Point};

/// Ordered sequence of points with no implicit closure. May be empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineString {
    pub points: Vec<Point>,
}

impl LineString {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            points: Vec::with_capacity(cap),
        }
    }

    /// `len` origin points with room for at least `cap`.
    pub fn preallocate(len: usize, cap: usize) -> Self {
        let mut points = Vec::with_capacity(cap.max(len));
        points.resize(len, Point::zeros());
        Self { points }
    }

    /// From `[x, y]` pairs.
    pub fn from_xy_data(data: &[[f64; 2]]) -> Self {
        Self {
            points: data.iter().map(|d| Point::new(d[0], d[1])).collect(),
        }
    }

    /// From `[y, x]` pairs (lat/lng ordered input).
    pub fn from_yx_data(data: &[[f64; 2]]) -> Self {
        Self {
            points: data.iter().map(|d| Point::new(d[1], d[0])).collect(),
        }
    }

    /// From ragged `[x, y, ...]` slices. Slices with fewer than two values
    /// are skipped, extra values are ignored.
    pub fn from_xy_slices<S: AsRef<[f64]>>(data: &[S]) -> Self {
        Self {
            points: data
                .iter()
                .filter_map(|s| match s.as_ref() {
                    [x, y, ..] => Some(Point::new(*x, *y)),
                    _ => None,
                })
                .collect(),
        }
    }

    /// Like `from_xy_slices` with each slice read as `[y, x, ...]`.
    pub fn from_yx_slices<S: AsRef<[f64]>>(data: &[S]) -> Self {
        Self {
            points: data
                .iter()
                .filter_map(|s| match s.as_ref() {
                    [y, x, ..] => Some(Point::new(*x, *y)),
                    _ => None,
                })
                .collect(),
        }
    }

    #[inline]
    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Reverse point order in place.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Bounding box; `None` when empty.
    pub fn bound(&self) -> Option<Bound> {
        Bound::from_points(&self.points)
    }
}

impl From<Vec<Point>> for LineString {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for LineString {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Polygon boundary. Closed (first == last) once produced by
/// `crate::wrap::wrap_ring`; other constructors do not enforce closure.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ring {
    pub points: Vec<Point>,
}

impl Ring {
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// First and last point are the same vertex (a one-point ring counts).
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(f), Some(l)) => points_coincide(*f, *l),
            _ => false,
        }
    }

    /// Append the first point if the ring is not closed yet.
    pub fn close(&mut self) {
        if let Some(&f) = self.points.first() {
            if !self.is_closed() {
                self.points.push(f);
            }
        }
    }

    /// Winding by the shoelace sum; `None` for zero area.
    #[inline]
    pub fn orientation(&self) -> Option<Orientation> {
        orientation_of(&self.points)
    }

    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    #[inline]
    pub fn into_line_string(self) -> LineString {
        LineString {
            points: self.points,
        }
    }
}

impl From<Vec<Point>> for Ring {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl From<LineString> for Ring {
    fn from(ls: LineString) -> Self {
        Self { points: ls.points }
    }
}
