// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Stock [`Funnel`]s for common value shapes.

use crate::{Charset, Funnel, PrimitiveSink};

/// Funnels a byte slice with [`PrimitiveSink::put_bytes`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ByteArrayFunnel;

impl Funnel<[u8]> for ByteArrayFunnel {
    fn funnel<S: PrimitiveSink>(&self, from: &[u8], into: &mut S) {
        into.put_bytes(from);
    }
}

/// Funnels a string as UTF-16 code units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnencodedCharsFunnel;

impl Funnel<str> for UnencodedCharsFunnel {
    fn funnel<S: PrimitiveSink>(&self, from: &str, into: &mut S) {
        into.put_unencoded_chars(from);
    }
}

/// Funnels a string through a fixed [`Charset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringFunnel(pub Charset);

impl Funnel<str> for StringFunnel {
    fn funnel<S: PrimitiveSink>(&self, from: &str, into: &mut S) {
        into.put_string(from, self.0);
    }
}

/// Funnels an `i32` with [`PrimitiveSink::put_i32`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct I32Funnel;

impl Funnel<i32> for I32Funnel {
    fn funnel<S: PrimitiveSink>(&self, from: &i32, into: &mut S) {
        into.put_i32(*from);
    }
}

/// Funnels an `i64` with [`PrimitiveSink::put_i64`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct I64Funnel;

impl Funnel<i64> for I64Funnel {
    fn funnel<S: PrimitiveSink>(&self, from: &i64, into: &mut S) {
        into.put_i64(*from);
    }
}

/// Funnels every element of a slice, in order, with the inner funnel.
///
/// No length prefix is written, so `[[1], [2]]` and `[[1, 2]]` funnel to the
/// same bytes when the inner funnel is itself sequential. Callers that need
/// to tell such values apart should put a length first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SequentialFunnel<F>(pub F);

impl<T, F> Funnel<[T]> for SequentialFunnel<F>
where
    F: Funnel<T>,
{
    fn funnel<S: PrimitiveSink>(&self, from: &[T], into: &mut S) {
        for item in from {
            self.0.funnel(item, into);
        }
    }
}
