use std::fmt;

/// Malformed or truncated encoded text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// A byte outside the printable band `[63, 127]`.
    InvalidChar { offset: usize, byte: u8 },
    /// Text ended while a value still expected continuation chunks.
    Truncated { offset: usize },
    /// Text ended after a y-component with no matching x-component.
    IncompletePair { offset: usize },
    /// A value needs more than 64 bits.
    Overflow { offset: usize },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidChar { offset, byte } => write!(
                f,
                "invalid byte 0x{byte:02x} at offset {offset} (expected 63..=127)"
            ),
            CodecError::Truncated { offset } => {
                write!(f, "encoded text ends mid-value at offset {offset}")
            }
            CodecError::IncompletePair { offset } => write!(
                f,
                "encoded text ends mid-coordinate at offset {offset} (missing x component)"
            ),
            CodecError::Overflow { offset } => {
                write!(f, "value starting before offset {offset} exceeds 64 bits")
            }
        }
    }
}

impl std::error::Error for CodecError {}
