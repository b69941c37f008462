// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! BLAKE3 digest over the canonical stream.

use tracing::{debug, trace};

use crate::{HashCode, HashError, HashFunction, Hasher, PrimitiveSink};

/// Default digest width in bytes (the native BLAKE3 output).
pub const DEFAULT_OUTPUT_LEN: usize = blake3::OUT_LEN;

/// Largest digest width accepted, in bytes.
pub const MAX_OUTPUT_LEN: usize = 64;

/// How a [`Blake3Function`] initializes each hasher.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Blake3Mode {
    /// Unkeyed BLAKE3.
    Plain,
    /// BLAKE3 keyed with a 32-byte key (MAC mode).
    Keyed([u8; blake3::KEY_LEN]),
    /// BLAKE3 key derivation with a context string.
    DeriveKey(String),
}

impl Blake3Mode {
    fn label(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Keyed(_) => "keyed",
            Self::DeriveKey(_) => "derive_key",
        }
    }
}

/// A [`HashFunction`] that digests the canonical stream with BLAKE3.
///
/// Output wider or narrower than 32 bytes is read from the extendable output,
/// so a 32-byte function and a 64-byte function agree on their first 32 bytes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Blake3Function {
    mode: Blake3Mode,
    output_len: usize,
}

impl Blake3Function {
    /// Unkeyed BLAKE3 with 32-byte output.
    pub fn new() -> Self {
        Self {
            mode: Blake3Mode::Plain,
            output_len: DEFAULT_OUTPUT_LEN,
        }
    }

    /// Keyed BLAKE3 with 32-byte output.
    pub fn keyed(key: [u8; blake3::KEY_LEN]) -> Self {
        Self {
            mode: Blake3Mode::Keyed(key),
            output_len: DEFAULT_OUTPUT_LEN,
        }
    }

    /// BLAKE3 in key-derivation mode for `context`, 32-byte output.
    pub fn derive_key(context: impl Into<String>) -> Self {
        Self {
            mode: Blake3Mode::DeriveKey(context.into()),
            output_len: DEFAULT_OUTPUT_LEN,
        }
    }

    /// Build from an explicit mode and output width in bytes.
    pub fn with_mode(mode: Blake3Mode, output_len: usize) -> Result<Self, HashError> {
        if output_len == 0 || output_len > MAX_OUTPUT_LEN {
            return Err(HashError::InvalidOutputLength(output_len));
        }
        debug!(
            mode = mode.label(),
            output_len,
            "blake3 hash function configured"
        );
        Ok(Self { mode, output_len })
    }

    /// Initialization mode.
    pub fn mode(&self) -> &Blake3Mode {
        &self.mode
    }

    /// Digest width in bytes.
    pub fn output_len(&self) -> usize {
        self.output_len
    }
}

impl Default for Blake3Function {
    fn default() -> Self {
        Self::new()
    }
}

impl HashFunction for Blake3Function {
    type Hasher = Blake3Hasher;

    fn new_hasher(&self) -> Blake3Hasher {
        let inner = match &self.mode {
            Blake3Mode::Plain => blake3::Hasher::new(),
            Blake3Mode::Keyed(key) => blake3::Hasher::new_keyed(key),
            Blake3Mode::DeriveKey(context) => blake3::Hasher::new_derive_key(context),
        };
        Blake3Hasher {
            inner,
            output_len: self.output_len,
            written: 0,
        }
    }

    fn bits(&self) -> usize {
        self.output_len * 8
    }
}

/// One BLAKE3 encoding session. Produced by [`Blake3Function::new_hasher`].
///
/// Overrides the byte-slice and fixed-width puts to feed BLAKE3 in chunks;
/// the stream is identical to the byte-at-a-time defaults.
#[derive(Clone, Debug)]
pub struct Blake3Hasher {
    inner: blake3::Hasher,
    output_len: usize,
    written: u64,
}

impl Blake3Hasher {
    fn update(&mut self, bytes: &[u8]) -> &mut Self {
        self.inner.update(bytes);
        self.written += bytes.len() as u64;
        self
    }

    /// Bytes fed so far.
    pub fn written(&self) -> u64 {
        self.written
    }
}

impl PrimitiveSink for Blake3Hasher {
    fn put_byte(&mut self, b: u8) -> &mut Self {
        self.update(&[b])
    }

    fn put_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.update(bytes)
    }

    fn put_i16(&mut self, value: i16) -> &mut Self {
        self.update(&value.to_le_bytes())
    }

    fn put_char(&mut self, unit: u16) -> &mut Self {
        self.update(&unit.to_le_bytes())
    }

    fn put_i32(&mut self, value: i32) -> &mut Self {
        self.update(&value.to_le_bytes())
    }

    fn put_i64(&mut self, value: i64) -> &mut Self {
        self.update(&value.to_le_bytes())
    }
}

impl Hasher for Blake3Hasher {
    fn hash(self) -> HashCode {
        let mut out = vec![0u8; self.output_len];
        self.inner.finalize_xof().fill(&mut out);
        trace!(
            written = self.written,
            bits = out.len() * 8,
            "blake3 hasher finalized"
        );
        HashCode::from_digest(out)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_matches_reference_blake3() {
        let code = Blake3Function::new().hash_bytes(b"abc");
        assert_eq!(code.as_bytes(), blake3::hash(b"abc").as_bytes());
        assert_eq!(code.bits(), 256);
    }

    #[test]
    fn keyed_and_derive_modes_match_reference() {
        let key = [7u8; 32];
        let keyed = Blake3Function::keyed(key).hash_bytes(b"msg");
        let reference = blake3::keyed_hash(&key, b"msg");
        assert_eq!(keyed.as_bytes(), reference.as_bytes());

        let context = "canon 2026 test";
        let derived = Blake3Function::derive_key(context).hash_bytes(b"ikm");
        assert_eq!(derived.as_bytes(), blake3::derive_key(context, b"ikm"));
    }

    #[test]
    fn numeric_overrides_keep_the_stream() {
        let f = Blake3Function::new();
        assert_eq!(f.hash_i32(0x0102_0304), f.hash_bytes(&[4, 3, 2, 1]));
        assert_eq!(f.hash_i64(1), f.hash_bytes(&[1, 0, 0, 0, 0, 0, 0, 0]));
        assert_eq!(f.hash_unencoded_chars("A"), f.hash_bytes(&[0x41, 0x00]));
    }

    #[test]
    fn wide_output_extends_narrow_output() {
        let narrow = Blake3Function::with_mode(Blake3Mode::Plain, 16).unwrap();
        let wide = Blake3Function::with_mode(Blake3Mode::Plain, 64).unwrap();
        let a = narrow.hash_bytes(b"xof");
        let b = wide.hash_bytes(b"xof");
        assert_eq!(a.bits(), 128);
        assert_eq!(b.bits(), 512);
        assert_eq!(a.as_bytes(), &b.as_bytes()[..16]);
    }

    #[test]
    fn output_length_is_bounded() {
        for len in [0, MAX_OUTPUT_LEN + 1] {
            let built = Blake3Function::with_mode(Blake3Mode::Plain, len);
            assert_eq!(built.unwrap_err(), HashError::InvalidOutputLength(len));
        }
    }

    #[test]
    fn hasher_counts_written_bytes() {
        let mut hasher = Blake3Function::new().new_hasher();
        hasher.put_bool(true).put_i32(5).put_bytes(b"xyz");
        assert_eq!(hasher.written(), 8);
    }
}
