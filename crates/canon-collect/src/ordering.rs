// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Total orders defined by an explicit list of values.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;

use rustc_hash::{FxHashMap, FxHasher};
use tracing::debug;

use crate::IncomparableValueError;

type Result<T, V> = std::result::Result<T, IncomparableValueError<V>>;

/// Orders values by their position in an explicit list.
///
/// Each known value has a rank (`0..len` when built with
/// [`ExplicitOrdering::new`]); comparing two values compares their ranks.
/// Comparing a value the ordering does not know is an error, never a silent
/// default.
///
/// # Duplicates
///
/// When the input list repeats a value, the **first** occurrence decides its
/// rank and later occurrences are dropped. Ranks stay dense, so the sign of a
/// comparison always agrees with the first-occurrence positions in the input.
///
/// # Equality
///
/// Two orderings are equal when they map the same values to the same ranks,
/// however they were built. `Hash` agrees with `Eq` and does not depend on
/// map iteration order.
///
/// ```
/// use std::cmp::Ordering;
/// use canon_collect::ExplicitOrdering;
///
/// let sizes = ExplicitOrdering::new(["small", "medium", "large"]);
/// assert_eq!(sizes.compare(&"small", &"large").unwrap(), Ordering::Less);
/// assert!(sizes.compare(&"huge", &"small").is_err());
/// ```
#[derive(Clone)]
pub struct ExplicitOrdering<T> {
    ranks: FxHashMap<T, usize>,
    // known values sorted by rank
    values: Vec<T>,
}

impl<T> ExplicitOrdering<T>
where
    T: Eq + Hash + Clone + fmt::Debug,
{
    /// Rank `values_in_order` by position; the first occurrence of a repeated
    /// value wins.
    pub fn new<I>(values_in_order: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut ranks = FxHashMap::default();
        let mut values = Vec::new();
        let mut duplicates = 0usize;
        for value in values_in_order {
            if ranks.contains_key(&value) {
                duplicates += 1;
                continue;
            }
            ranks.insert(value.clone(), values.len());
            values.push(value);
        }
        debug!(
            distinct = values.len(),
            duplicates,
            "explicit ordering built"
        );
        Self { ranks, values }
    }

    /// Rank `first` then `rest`.
    pub fn of<I>(first: T, rest: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(iter::once(first).chain(rest))
    }

    /// Use a prebuilt `value -> rank` mapping as-is.
    ///
    /// Ranks need not be dense. A value listed twice keeps its last rank.
    /// Values sharing a rank compare equal.
    pub fn from_rank_map<I>(ranks: I) -> Self
    where
        I: IntoIterator<Item = (T, usize)>,
    {
        let ranks: FxHashMap<T, usize> = ranks.into_iter().collect();
        let mut values: Vec<T> = ranks.keys().cloned().collect();
        values.sort_by_key(|value| ranks.get(value).copied());
        debug!(
            distinct = values.len(),
            "explicit ordering adopted rank map"
        );
        Self { ranks, values }
    }

    /// Rank of `value`.
    pub fn rank(&self, value: &T) -> Result<usize, T> {
        self.ranks
            .get(value)
            .copied()
            .ok_or_else(|| IncomparableValueError::new(value.clone()))
    }

    /// Compare by rank. `left` is checked first when both are unknown.
    pub fn compare(&self, left: &T, right: &T) -> Result<Ordering, T> {
        let l = self.rank(left)?;
        let r = self.rank(right)?;
        Ok(l.cmp(&r))
    }

    /// Returns `true` if `value` has a rank.
    pub fn contains(&self, value: &T) -> bool {
        self.ranks.contains_key(value)
    }

    /// Number of ranked values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no value is ranked.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Ranked values, least first.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// The underlying rank mapping.
    pub fn rank_map(&self) -> &FxHashMap<T, usize> {
        &self.ranks
    }

    /// Sort `values` in place, least first. Stable.
    ///
    /// Every element is ranked before anything moves; on error the slice is
    /// untouched.
    pub fn sort(&self, values: &mut [T]) -> Result<(), T> {
        for value in values.iter() {
            self.rank(value)?;
        }
        values.sort_by_key(|value| self.ranks.get(value).copied());
        Ok(())
    }

    /// Collect `values` into a new vector sorted least first. Stable.
    pub fn sorted<I>(&self, values: I) -> Result<Vec<T>, T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut ranked = Vec::new();
        for value in values {
            ranked.push((self.rank(&value)?, value));
        }
        ranked.sort_by_key(|(rank, _)| *rank);
        Ok(ranked.into_iter().map(|(_, value)| value).collect())
    }

    /// Least of `values`; the first one wins ties. `None` when empty.
    pub fn min<I>(&self, values: I) -> Result<Option<T>, T>
    where
        I: IntoIterator<Item = T>,
    {
        self.extreme(values, |candidate, best| candidate < best)
    }

    /// Greatest of `values`; the first one wins ties. `None` when empty.
    pub fn max<I>(&self, values: I) -> Result<Option<T>, T>
    where
        I: IntoIterator<Item = T>,
    {
        self.extreme(values, |candidate, best| candidate > best)
    }

    fn extreme<I>(&self, values: I, better: impl Fn(usize, usize) -> bool) -> Result<Option<T>, T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut best: Option<(usize, T)> = None;
        for value in values {
            let rank = self.rank(&value)?;
            if best.as_ref().is_none_or(|(top, _)| better(rank, *top)) {
                best = Some((rank, value));
            }
        }
        Ok(best.map(|(_, value)| value))
    }

    /// Returns `true` if each element is no less than the one before.
    ///
    /// Stops at the first out-of-order pair; elements after it are not
    /// checked for rank.
    pub fn is_ordered<'a, I>(&self, values: I) -> Result<bool, T>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.scan_pairs(values, |prev, next| prev <= next)
    }

    /// Returns `true` if each element is strictly greater than the one before.
    pub fn is_strictly_ordered<'a, I>(&self, values: I) -> Result<bool, T>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.scan_pairs(values, |prev, next| prev < next)
    }

    fn scan_pairs<'a, I>(
        &self,
        values: I,
        in_order: impl Fn(usize, usize) -> bool,
    ) -> Result<bool, T>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut prev: Option<usize> = None;
        for value in values {
            let rank = self.rank(value)?;
            if prev.is_some_and(|p| !in_order(p, rank)) {
                return Ok(false);
            }
            prev = Some(rank);
        }
        Ok(true)
    }

    /// View of this ordering with every comparison flipped.
    pub fn reverse(&self) -> ReverseOrdering<'_, T> {
        ReverseOrdering { forward: self }
    }
}

impl<T: Eq + Hash> PartialEq for ExplicitOrdering<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ranks == other.ranks
    }
}

impl<T: Eq + Hash> Eq for ExplicitOrdering<T> {}

impl<T: Hash> Hash for ExplicitOrdering<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Entry hashes are summed so the result ignores map iteration order.
        let mut sum = 0u64;
        for (value, rank) in &self.ranks {
            let mut entry = FxHasher::default();
            value.hash(&mut entry);
            rank.hash(&mut entry);
            sum = sum.wrapping_add(entry.finish());
        }
        state.write_usize(self.ranks.len());
        state.write_u64(sum);
    }
}

impl<T: fmt::Debug> fmt::Debug for ExplicitOrdering<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ExplicitOrdering")
            .field(&self.values)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for ExplicitOrdering<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ordering.explicit([")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("])")
    }
}

/// An [`ExplicitOrdering`] read backwards. Made by [`ExplicitOrdering::reverse`].
pub struct ReverseOrdering<'a, T> {
    forward: &'a ExplicitOrdering<T>,
}

impl<T> Clone for ReverseOrdering<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReverseOrdering<'_, T> {}

impl<'a, T> ReverseOrdering<'a, T>
where
    T: Eq + Hash + Clone + fmt::Debug,
{
    /// Compare with the forward result flipped. `left` is checked first.
    pub fn compare(&self, left: &T, right: &T) -> Result<Ordering, T> {
        self.forward.compare(left, right).map(Ordering::reverse)
    }

    /// Sort `values` greatest-forward-rank first. Stable.
    pub fn sort(&self, values: &mut [T]) -> Result<(), T> {
        for value in values.iter() {
            self.forward.rank(value)?;
        }
        let rank = |value: &T| self.forward.ranks.get(value).copied();
        values.sort_by_key(|value| std::cmp::Reverse(rank(value)));
        Ok(())
    }

    /// The ordering this view reverses.
    pub fn reverse(&self) -> &'a ExplicitOrdering<T> {
        self.forward
    }
}

impl<T: fmt::Debug> fmt::Debug for ReverseOrdering<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReverseOrdering")
            .field(self.forward)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for ReverseOrdering<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.reverse()", self.forward)
    }
}
