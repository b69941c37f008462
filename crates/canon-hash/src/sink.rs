// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The canonical encoding protocol and a recording sink.

use bytes::Buf;

use crate::{Charset, Funnel, HashError};

/// Accepts primitive values and appends their canonical bytes to a stream.
///
/// Implementers supply [`put_byte`](PrimitiveSink::put_byte); every other
/// method has a default expressed in terms of it. Overrides are allowed for
/// speed as long as the resulting byte stream is unchanged.
///
/// | method | bytes appended |
/// |---|---|
/// | `put_bool` | `1` or `0` |
/// | `put_i16`, `put_u16`, `put_char` | 2, little-endian |
/// | `put_i32`, `put_u32` | 4, little-endian |
/// | `put_f32` | `put_i32` of the raw bits |
/// | `put_i64`, `put_u64` | 8, little-endian |
/// | `put_f64` | `put_i64` of the raw bits |
/// | `put_bytes`, `put_bytes_range`, `put_buf` | the bytes, in order |
/// | `put_unencoded_chars` | `put_char` per UTF-16 code unit |
/// | `put_string` | `put_bytes` of the charset encoding |
/// | `put_object` | whatever the funnel issues |
///
/// Every put returns `&mut Self`, so calls chain; call order is byte order.
/// A sink is single-writer: puts take `&mut self` and no sink synchronizes
/// internally.
pub trait PrimitiveSink {
    /// Append one byte.
    fn put_byte(&mut self, b: u8) -> &mut Self;

    /// Append every byte of `bytes`.
    fn put_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        for &b in bytes {
            self.put_byte(b);
        }
        self
    }

    /// Append `bytes[off..off + len]`.
    ///
    /// The range is validated first; on error nothing is appended.
    fn put_bytes_range(
        &mut self,
        bytes: &[u8],
        off: usize,
        len: usize,
    ) -> Result<&mut Self, HashError> {
        let range = off
            .checked_add(len)
            .and_then(|end| bytes.get(off..end))
            .ok_or(HashError::OutOfRange {
                off,
                len,
                size: bytes.len(),
            })?;
        Ok(self.put_bytes(range))
    }

    /// Drain `buf` into the stream.
    ///
    /// When the remaining bytes sit in one contiguous chunk they are appended
    /// with a single [`put_bytes`](PrimitiveSink::put_bytes) and the buffer is
    /// advanced to its end; otherwise the buffer is drained byte by byte.
    fn put_buf<B: Buf>(&mut self, buf: &mut B) -> &mut Self {
        let remaining = buf.remaining();
        if buf.chunk().len() == remaining {
            self.put_bytes(buf.chunk());
            buf.advance(remaining);
        } else {
            while buf.has_remaining() {
                self.put_byte(buf.get_u8());
            }
        }
        self
    }

    /// Append `1` for `true`, `0` for `false`.
    fn put_bool(&mut self, value: bool) -> &mut Self {
        self.put_byte(u8::from(value))
    }

    /// Append a 16-bit signed integer, least-significant byte first.
    fn put_i16(&mut self, value: i16) -> &mut Self {
        for b in value.to_le_bytes() {
            self.put_byte(b);
        }
        self
    }

    /// Append a 16-bit unsigned integer, least-significant byte first.
    fn put_u16(&mut self, value: u16) -> &mut Self {
        self.put_i16(value.cast_signed())
    }

    /// Append one UTF-16 code unit, least-significant byte first.
    fn put_char(&mut self, unit: u16) -> &mut Self {
        for b in unit.to_le_bytes() {
            self.put_byte(b);
        }
        self
    }

    /// Append a 32-bit signed integer, least-significant byte first.
    fn put_i32(&mut self, value: i32) -> &mut Self {
        for b in value.to_le_bytes() {
            self.put_byte(b);
        }
        self
    }

    /// Append a 32-bit unsigned integer, least-significant byte first.
    fn put_u32(&mut self, value: u32) -> &mut Self {
        self.put_i32(value.cast_signed())
    }

    /// Append a 64-bit signed integer, least-significant byte first.
    fn put_i64(&mut self, value: i64) -> &mut Self {
        for b in value.to_le_bytes() {
            self.put_byte(b);
        }
        self
    }

    /// Append a 64-bit unsigned integer, least-significant byte first.
    fn put_u64(&mut self, value: u64) -> &mut Self {
        self.put_i64(value.cast_signed())
    }

    /// Append the raw IEEE-754 bits of `value` as a 32-bit integer.
    ///
    /// NaN payloads are preserved; no canonicalization happens.
    fn put_f32(&mut self, value: f32) -> &mut Self {
        self.put_i32(value.to_bits().cast_signed())
    }

    /// Append the raw IEEE-754 bits of `value` as a 64-bit integer.
    fn put_f64(&mut self, value: f64) -> &mut Self {
        self.put_i64(value.to_bits().cast_signed())
    }

    /// Append each UTF-16 code unit of `text` via
    /// [`put_char`](PrimitiveSink::put_char).
    ///
    /// Characters outside the basic multilingual plane contribute both
    /// surrogates, high first.
    fn put_unencoded_chars(&mut self, text: &str) -> &mut Self {
        for unit in text.encode_utf16() {
            self.put_char(unit);
        }
        self
    }

    /// Encode `text` with `charset`, then append the encoded bytes.
    fn put_string(&mut self, text: &str, charset: Charset) -> &mut Self {
        let encoded = charset.encode(text);
        self.put_bytes(&encoded)
    }

    /// Let `funnel` decompose `instance` into puts against this sink.
    fn put_object<T, F>(&mut self, instance: &T, funnel: &F) -> &mut Self
    where
        Self: Sized,
        T: ?Sized,
        F: Funnel<T> + ?Sized,
    {
        funnel.funnel(instance, self);
        self
    }
}

/// A sink that records the canonical stream verbatim.
///
/// Useful for inspecting exactly what a digest would consume.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ByteSink {
    bytes: Vec<u8>,
}

impl ByteSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sink with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Bytes recorded so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the sink and return the recorded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of bytes recorded.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl PrimitiveSink for ByteSink {
    fn put_byte(&mut self, b: u8) -> &mut Self {
        self.bytes.push(b);
        self
    }

    fn put_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.bytes.extend_from_slice(bytes);
        self
    }
}
