//! Integer framing: zig-zag mapping and biased 5-bit chunks.

use super::{CodecError, BIAS, CHUNK_MASK, CONTINUE};

/// `v >= 0 → 2v`, `v < 0 → -2v - 1`, over the full `i64` range.
#[inline]
pub(super) fn zigzag(v: i64) -> u64 {
    ((v << 1) ^ (v >> 63)) as u64
}

#[inline]
pub(super) fn unzigzag(u: u64) -> i64 {
    ((u >> 1) as i64) ^ -((u & 1) as i64)
}

/// Append `v` as biased 5-bit chunks, least significant first.
pub(super) fn push_varint(out: &mut Vec<u8>, mut v: u64) {
    while v >= u64::from(CONTINUE) {
        out.push(((v as u8) & CHUNK_MASK | CONTINUE) + BIAS);
        v >>= 5;
    }
    out.push(v as u8 + BIAS);
}

/// Read one value starting at `*pos`, advancing past its last chunk.
pub(super) fn read_varint(bytes: &[u8], pos: &mut usize) -> Result<u64, CodecError> {
    let mut value = 0u64;
    let mut shift = 0u32;
    loop {
        let offset = *pos;
        let byte = *bytes.get(offset).ok_or(CodecError::Truncated { offset })?;
        if !(BIAS..=127).contains(&byte) {
            return Err(CodecError::InvalidChar { offset, byte });
        }
        let chunk = byte - BIAS;
        let payload = u64::from(chunk & CHUNK_MASK);
        // 12 full chunks carry 60 bits; the 13th may only add the top 4.
        if shift >= 64 || (shift == 60 && payload > 0xf) {
            return Err(CodecError::Overflow { offset });
        }
        value |= payload << shift;
        *pos += 1;
        if chunk & CONTINUE == 0 {
            return Ok(value);
        }
        shift += 5;
    }
}
