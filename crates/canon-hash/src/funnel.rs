// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Decomposition of composite values into primitive puts.

use crate::PrimitiveSink;

/// Describes how a `T` breaks down into a sequence of primitive puts.
///
/// A funnel must be deterministic: logically equal inputs issue identical put
/// sequences. Funnels carry no per-call state and may be reused freely.
///
/// ```
/// use canon_hash::{ByteSink, Funnel, PrimitiveSink};
///
/// struct Point { x: i32, y: i32 }
///
/// struct PointFunnel;
///
/// impl Funnel<Point> for PointFunnel {
///     fn funnel<S: PrimitiveSink>(&self, from: &Point, into: &mut S) {
///         into.put_i32(from.x).put_i32(from.y);
///     }
/// }
///
/// let mut sink = ByteSink::new();
/// sink.put_object(&Point { x: 1, y: 2 }, &PointFunnel);
/// assert_eq!(sink.as_bytes(), [1, 0, 0, 0, 2, 0, 0, 0]);
/// ```
pub trait Funnel<T: ?Sized> {
    /// Issue the puts for `from` against `into`.
    fn funnel<S: PrimitiveSink>(&self, from: &T, into: &mut S);
}

impl<T, F> Funnel<T> for &F
where
    T: ?Sized,
    F: Funnel<T> + ?Sized,
{
    fn funnel<S: PrimitiveSink>(&self, from: &T, into: &mut S) {
        (**self).funnel(from, into);
    }
}
