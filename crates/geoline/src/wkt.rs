//! Well-Known Text writer.
//!
//! Coordinates print with `f64`'s shortest round-trip `Display` (`1`, `0.5`,
//! `-120.95`). Empty sequences print as `EMPTY`.

use std::fmt::Write;

use crate::geom::{Bound, LineString, Point, Ring};

/// Render as WKT.
pub trait ToWkt {
    fn to_wkt(&self) -> String;
}

fn write_coords(out: &mut String, points: &[Point]) {
    for (k, p) in points.iter().enumerate() {
        if k > 0 {
            out.push(',');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{} {}", p.x, p.y);
    }
}

impl ToWkt for Point {
    fn to_wkt(&self) -> String {
        format!("POINT({} {})", self.x, self.y)
    }
}

impl ToWkt for LineString {
    fn to_wkt(&self) -> String {
        if self.is_empty() {
            return "EMPTY".to_owned();
        }
        let mut out = String::from("LINESTRING(");
        write_coords(&mut out, &self.points);
        out.push(')');
        out
    }
}

impl ToWkt for Ring {
    fn to_wkt(&self) -> String {
        if self.is_empty() {
            return "EMPTY".to_owned();
        }
        let mut out = String::from("POLYGON((");
        write_coords(&mut out, &self.points);
        out.push_str("))");
        out
    }
}

impl ToWkt for Bound {
    fn to_wkt(&self) -> String {
        self.to_ring().to_wkt()
    }
}
