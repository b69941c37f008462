// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Digest output.

use std::fmt;
use std::str::FromStr;

use crate::HashError;

/// An immutable, non-empty digest.
///
/// `Display` renders lowercase hex, which [`HashCode::from_hex`] parses back.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct HashCode(Box<[u8]>);

impl HashCode {
    /// Wrap digest bytes. Fails on an empty slice.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, HashError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(HashError::TooShort {
                needed: 1,
                actual: 0,
            });
        }
        Ok(Self(bytes.into_boxed_slice()))
    }

    /// Wrap digest output whose width was validated upstream.
    pub(crate) fn from_digest(bytes: Vec<u8>) -> Self {
        debug_assert!(!bytes.is_empty());
        Self(bytes.into_boxed_slice())
    }

    /// Parse lowercase or uppercase hex.
    pub fn from_hex(text: &str) -> Result<Self, HashError> {
        Self::from_bytes(hex::decode(text)?)
    }

    /// View the digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bits in the digest.
    pub fn bits(&self) -> usize {
        self.0.len() * 8
    }

    /// The first four bytes, read little-endian.
    pub fn as_u32(&self) -> Result<u32, HashError> {
        Ok(u32::from_le_bytes(self.prefix::<4>()?))
    }

    /// The first eight bytes, read little-endian.
    pub fn as_u64(&self) -> Result<u64, HashError> {
        Ok(u64::from_le_bytes(self.prefix::<8>()?))
    }

    fn prefix<const N: usize>(&self) -> Result<[u8; N], HashError> {
        self.0
            .get(..N)
            .and_then(|head| <[u8; N]>::try_from(head).ok())
            .ok_or(HashError::TooShort {
                needed: N,
                actual: self.0.len(),
            })
    }
}

impl fmt::Display for HashCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &*self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for HashCode {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for HashCode {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
