//! Encoded-polyline codec: coordinate sequence ⇄ printable text.
//!
//! Purpose
//! - Pack a point sequence into a compact string that is safe to embed in
//!   URLs and plain-text fields, and unpack it again with bounded loss.
//!
//! Wire format
//! - Quantize each coordinate as `floor(v * factor + 0.5)`.
//! - Delta against the previous quantized point (origin before the first),
//!   components in the order **y, x**.
//! - Zig-zag each delta to an unsigned value, then emit it in 5-bit
//!   little-endian chunks. Every chunk but the last carries `CONTINUE`;
//!   every chunk is offset by `BIAS`, so all bytes fall in `[63, 127]`.
//!
//! Code cross-refs: `geom::{LineString, Point}`

mod bits;
mod error;

pub use error::CodecError;

use crate::geom::{LineString, Point};
use bits::{push_varint, read_varint, unzigzag, zigzag};

/// Offset added to every emitted 5-bit chunk.
pub const BIAS: u8 = 63;
/// Continuation flag on all but the last chunk of a value.
pub const CONTINUE: u8 = 0x20;
/// Payload mask of a chunk.
pub const CHUNK_MASK: u8 = 0x1f;

/// Quantization grain: coordinates are stored as multiples of `1/factor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Precision(u32);

/// The conventional five decimal places.
pub const DEFAULT_PRECISION: Precision = Precision(100_000);

impl Precision {
    /// Six decimal places.
    pub const E6: Precision = Precision(1_000_000);

    /// `None` for a zero factor.
    #[inline]
    pub const fn new(factor: u32) -> Option<Self> {
        if factor == 0 {
            None
        } else {
            Some(Self(factor))
        }
    }

    /// `10^decimals`; `None` if it does not fit a `u32`.
    pub fn from_decimals(decimals: u32) -> Option<Self> {
        10u32.checked_pow(decimals).map(Self)
    }

    #[inline]
    pub const fn factor(self) -> u32 {
        self.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        DEFAULT_PRECISION
    }
}

#[inline]
fn quantize(v: f64, f: f64) -> i64 {
    // Saturating cast: non-finite input has no meaningful encoding.
    (v * f + 0.5).floor() as i64
}

/// Encode `points` at the given precision. Empty input gives an empty string.
pub fn encode(points: &[Point], precision: Precision) -> String {
    let f = f64::from(precision.factor());
    // Typical deltas take 3-5 chunks per component.
    let mut out: Vec<u8> = Vec::with_capacity(points.len() * 8);
    let (mut prev_y, mut prev_x) = (0i64, 0i64);
    for p in points {
        let y = quantize(p.y, f);
        let x = quantize(p.x, f);
        push_varint(&mut out, zigzag(y.wrapping_sub(prev_y)));
        push_varint(&mut out, zigzag(x.wrapping_sub(prev_x)));
        prev_y = y;
        prev_x = x;
    }
    // All bytes are in [63, 127], which is ASCII.
    out.into_iter().map(char::from).collect()
}

/// Decode text produced by `encode` with the same precision.
///
/// Fails instead of truncating: a dangling continuation chunk, a lone
/// y-component without its x, and bytes outside the band are all errors.
pub fn decode(text: &str, precision: Precision) -> Result<LineString, CodecError> {
    let f = f64::from(precision.factor());
    let bytes = text.as_bytes();
    let mut out = LineString::with_capacity(bytes.len() / 4);
    let (mut y, mut x) = (0i64, 0i64);
    let mut pos = 0usize;
    while pos < bytes.len() {
        let dy = unzigzag(read_varint(bytes, &mut pos)?);
        if pos >= bytes.len() {
            return Err(CodecError::IncompletePair { offset: pos });
        }
        let dx = unzigzag(read_varint(bytes, &mut pos)?);
        y = y.wrapping_add(dy);
        x = x.wrapping_add(dx);
        out.push(Point::new(x as f64 / f, y as f64 / f));
    }
    Ok(out)
}

impl LineString {
    /// See [`encode`].
    #[inline]
    pub fn encode(&self, precision: Precision) -> String {
        encode(&self.points, precision)
    }

    /// See [`decode`].
    #[inline]
    pub fn from_encoding(text: &str, precision: Precision) -> Result<Self, CodecError> {
        decode(text, precision)
    }
}
