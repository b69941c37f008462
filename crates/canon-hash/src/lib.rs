// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Canonical byte encoding of primitive values for hash functions.
//!
//! `canon-hash` turns typed values into a deterministic byte stream that a
//! digest consumes. The stream is the contract: two sinks fed logically equal
//! sequences of values see byte-identical input, so any digest computed over
//! the stream is reproducible across processes and implementations.
//!
//! # Encoding Rules
//!
//! All multi-byte numerics are little-endian. Floats are encoded through their
//! raw IEEE-754 bit pattern. Text is either a sequence of UTF-16 code units
//! ([`PrimitiveSink::put_unencoded_chars`]) or bytes in a named [`Charset`]
//! ([`PrimitiveSink::put_string`]). The full table lives on [`PrimitiveSink`].
//!
//! # Layers
//!
//! - [`PrimitiveSink`]: one required method (`put_byte`), everything else
//!   derived from it.
//! - [`Funnel`]: describes how a composite value decomposes into puts.
//! - [`Hasher`] / [`HashFunction`]: a sink that finalizes into a [`HashCode`].
//!   [`Blake3Function`] is the stock implementation.
//! - [`config`]: serde-backed settings for building a hash function.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self,
    clippy::cognitive_complexity,
    clippy::option_if_let_else,
    clippy::significant_drop_tightening,
    clippy::doc_markdown,
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::needless_collect,
    clippy::too_long_first_doc_paragraph,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::similar_names,
    clippy::trivially_copy_pass_by_ref,
    clippy::manual_let_else,
    clippy::needless_pass_by_value
)]

mod charset;
pub mod config;
mod digest;
mod error;
mod funnel;
pub mod funnels;
mod hash_code;
mod sink;

pub use charset::Charset;
pub use digest::{Blake3Function, Blake3Hasher, Blake3Mode, DEFAULT_OUTPUT_LEN, MAX_OUTPUT_LEN};
pub use error::HashError;
pub use funnel::Funnel;
pub use hash_code::HashCode;
pub use sink::{ByteSink, PrimitiveSink};

/// A [`PrimitiveSink`] that can be finalized into a [`HashCode`].
///
/// Finalization consumes the hasher, so a hasher cannot be fed after its
/// digest has been taken.
pub trait Hasher: PrimitiveSink {
    /// Consume the accumulated stream and produce its digest.
    fn hash(self) -> HashCode
    where
        Self: Sized;
}

/// Factory for [`Hasher`]s plus one-shot conveniences.
///
/// Each convenience is exactly "new hasher, one put, finalize", so
/// `hash_i32(x)` equals hashing the four little-endian bytes of `x`.
pub trait HashFunction {
    /// Hasher produced by this function.
    type Hasher: Hasher;

    /// Start a fresh encoding session.
    fn new_hasher(&self) -> Self::Hasher;

    /// Number of bits in every [`HashCode`] this function produces.
    fn bits(&self) -> usize;

    /// Hash a byte slice.
    fn hash_bytes(&self, bytes: &[u8]) -> HashCode {
        let mut hasher = self.new_hasher();
        hasher.put_bytes(bytes);
        hasher.hash()
    }

    /// Hash a 32-bit integer.
    fn hash_i32(&self, value: i32) -> HashCode {
        let mut hasher = self.new_hasher();
        hasher.put_i32(value);
        hasher.hash()
    }

    /// Hash a 64-bit integer.
    fn hash_i64(&self, value: i64) -> HashCode {
        let mut hasher = self.new_hasher();
        hasher.put_i64(value);
        hasher.hash()
    }

    /// Hash the UTF-16 code units of `text`.
    fn hash_unencoded_chars(&self, text: &str) -> HashCode {
        let mut hasher = self.new_hasher();
        hasher.put_unencoded_chars(text);
        hasher.hash()
    }

    /// Hash `text` encoded with `charset`.
    fn hash_string(&self, text: &str, charset: Charset) -> HashCode {
        let mut hasher = self.new_hasher();
        hasher.put_string(text, charset);
        hasher.hash()
    }

    /// Hash `instance` as decomposed by `funnel`.
    fn hash_object<T, F>(&self, instance: &T, funnel: &F) -> HashCode
    where
        T: ?Sized,
        F: Funnel<T> + ?Sized,
    {
        let mut hasher = self.new_hasher();
        hasher.put_object(instance, funnel);
        hasher.hash()
    }
}
