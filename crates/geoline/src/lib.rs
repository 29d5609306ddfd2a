//! Coordinate sequences for mapping: primitives, the encoded-polyline codec,
//! and ring closure against a rectangular bound.
//!
//! Layout
//! - `geom`: `Point`, `Bound`, `LineString`, `Ring`, `Orientation`.
//! - `codec`: lossy, reversible point sequence ⇄ printable text.
//! - `wrap`: close a ring along a bound's perimeter with a given winding.
//! - `props`, `geojson`, `wkt`: property bag and text interchange.
//!
//! Everything here is a pure function over owned values; no global state.

pub mod codec;
pub mod geojson;
pub mod geom;
pub mod props;
pub mod wkt;
pub mod wrap;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::codec::{decode, encode, CodecError, Precision, DEFAULT_PRECISION};
    pub use crate::geojson::{Feature, Geometry};
    pub use crate::geom::rand::{draw_line_string, ReplayToken, WalkCfg};
    pub use crate::geom::{orientation_of, Bound, LineString, Orientation, Point, Ring};
    pub use crate::props::{Properties, Value};
    pub use crate::wkt::ToWkt;
    pub use crate::wrap::{wrap_ring, WrapError};
}
