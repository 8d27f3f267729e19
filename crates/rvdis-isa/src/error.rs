//! Decode error types.

use thiserror::Error;

/// Error type for the decode loop.
///
/// Unrecognized encodings and unknown CSRs are not errors; they decode to
/// an empty listing line and `(unknown)` respectively.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The last instruction needs more bytes than the buffer holds.
    #[error("truncated instruction at offset {offset:#x}: need {needed} bytes, have {available}")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

impl DecodeError {
    /// Creates a new Truncated error.
    #[must_use]
    pub const fn truncated(offset: usize, needed: usize, available: usize) -> Self {
        Self::Truncated {
            offset,
            needed,
            available,
        }
    }
}
