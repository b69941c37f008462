// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type shared by the encoding and digest layers.

/// Errors raised by checked puts, charset lookup and hash-code parsing.
///
/// Every error is reported before any byte reaches the sink.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HashError {
    /// A byte range did not fit inside its source slice.
    #[error("range [{off}, {off}+{len}) out of bounds for slice of length {size}")]
    OutOfRange {
        /// Requested start offset.
        off: usize,
        /// Requested length.
        len: usize,
        /// Length of the source slice.
        size: usize,
    },
    /// No [`Charset`](crate::Charset) is known by this name.
    #[error("unsupported charset: {0}")]
    UnsupportedCharset(String),
    /// A hash code string was not valid hexadecimal.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    /// A hash code was too short for the requested view.
    #[error("hash code has {actual} bytes, need at least {needed}")]
    TooShort {
        /// Minimum number of bytes required.
        needed: usize,
        /// Number of bytes present.
        actual: usize,
    },
    /// Digest output length outside `1..=64` bytes.
    #[error("output length {0} not in 1..=64 bytes")]
    InvalidOutputLength(usize),
    /// Keyed-mode key was not exactly 32 bytes.
    #[error("key must be 32 bytes, got {0}")]
    InvalidKeyLength(usize),
}
