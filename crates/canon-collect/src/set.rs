// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The immutable-set capability.

use crate::CollectError;

/// Read-only set operations shared by immutable set implementations.
///
/// Implementations never change after construction. Iteration is finite and
/// restartable: every call to [`iter`](ImmutableSet::iter) starts over.
pub trait ImmutableSet<E> {
    /// Iterator returned by [`iter`](ImmutableSet::iter).
    type Iter<'a>: Iterator<Item = &'a E>
    where
        Self: 'a,
        E: 'a;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the set has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if some element equals `value`.
    fn contains(&self, value: &E) -> bool;

    /// Fresh traversal over the elements.
    fn iter(&self) -> Self::Iter<'_>;

    /// Elements as an ordered list view.
    fn as_list(&self) -> &[E];

    /// Write the elements into `dst` starting at `offset`; returns the offset
    /// just past the last element written.
    ///
    /// Fails without writing when the elements do not fit.
    fn copy_into(&self, dst: &mut [Option<E>], offset: usize) -> Result<usize, CollectError>
    where
        E: Clone;

    /// Returns `true` if the set is a view over larger backing storage.
    fn is_partial_view(&self) -> bool;

    /// Set equality: same size and every element of `self` is in `other`.
    fn set_eq<S>(&self, other: &S) -> bool
    where
        S: ImmutableSet<E> + ?Sized,
    {
        self.len() == other.len() && self.iter().all(|e| other.contains(e))
    }

    /// Clone the elements into a vector, in iteration order.
    fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.iter().cloned().collect()
    }
}
