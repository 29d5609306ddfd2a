//! Primitive model: points, bounds, line strings, rings and orientation.
//!
//! Purpose
//! - Plain value types shared by the codec and the wrap stitcher. Everything
//!   is owned and `Clone`; nothing here holds shared mutable state.
//!
//! Code cross-refs: `crate::codec`, `crate::wrap`, `crate::wkt`, `crate::geojson`

pub(crate) mod cfg;
mod line;
pub mod rand;
mod types;

pub use line::{LineString, Ring};
pub use types::{orientation_of, signed_area2, Bound, Orientation, Point};

#[cfg(test)]
mod tests;
