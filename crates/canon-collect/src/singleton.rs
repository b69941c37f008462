// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! One-element immutable set.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter;
use std::slice;

use crate::{CollectError, ImmutableSet};

/// An [`ImmutableSet`] holding exactly one element.
///
/// Membership is plain equality with the element, and the set's `Hash` is the
/// element's `Hash`. Nothing is cached beside the element itself.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SingletonSet<E> {
    element: E,
}

impl<E> SingletonSet<E> {
    /// Wrap `element`.
    pub const fn new(element: E) -> Self {
        Self { element }
    }

    /// The sole element.
    pub const fn element(&self) -> &E {
        &self.element
    }

    /// Consume the set, returning its element.
    pub fn into_element(self) -> E {
        self.element
    }
}

impl<E> TryFrom<Option<E>> for SingletonSet<E> {
    type Error = CollectError;

    fn try_from(element: Option<E>) -> Result<Self, Self::Error> {
        element.map(Self::new).ok_or(CollectError::MissingElement)
    }
}

impl<E: PartialEq> ImmutableSet<E> for SingletonSet<E> {
    type Iter<'a>
        = iter::Once<&'a E>
    where
        E: 'a;

    fn len(&self) -> usize {
        1
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn contains(&self, value: &E) -> bool {
        self.element == *value
    }

    fn iter(&self) -> Self::Iter<'_> {
        iter::once(&self.element)
    }

    fn as_list(&self) -> &[E] {
        slice::from_ref(&self.element)
    }

    fn copy_into(&self, dst: &mut [Option<E>], offset: usize) -> Result<usize, CollectError>
    where
        E: Clone,
    {
        let len = dst.len();
        let slot = dst
            .get_mut(offset)
            .ok_or(CollectError::OutOfRange { offset, len })?;
        *slot = Some(self.element.clone());
        Ok(offset + 1)
    }

    fn is_partial_view(&self) -> bool {
        false
    }
}

impl<E> IntoIterator for SingletonSet<E> {
    type Item = E;
    type IntoIter = iter::Once<E>;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(self.element)
    }
}

impl<'a, E> IntoIterator for &'a SingletonSet<E> {
    type Item = &'a E;
    type IntoIter = iter::Once<&'a E>;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(&self.element)
    }
}

impl<E: Eq + Hash, S: BuildHasher> PartialEq<HashSet<E, S>> for SingletonSet<E> {
    fn eq(&self, other: &HashSet<E, S>) -> bool {
        other.len() == 1 && other.contains(&self.element)
    }
}

impl<E: Ord> PartialEq<BTreeSet<E>> for SingletonSet<E> {
    fn eq(&self, other: &BTreeSet<E>) -> bool {
        other.len() == 1 && other.contains(&self.element)
    }
}

impl<E: fmt::Display> fmt::Display for SingletonSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.element)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher;

    fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
        let mut h = DefaultHasher::new();
        value.hash(&mut h);
        h.finish()
    }

    /// Two-element set used to check cross-implementation equality.
    struct Pair([i32; 2]);

    impl ImmutableSet<i32> for Pair {
        type Iter<'a> = slice::Iter<'a, i32>;

        fn len(&self) -> usize {
            2
        }

        fn contains(&self, value: &i32) -> bool {
            self.0.contains(value)
        }

        fn iter(&self) -> Self::Iter<'_> {
            self.0.iter()
        }

        fn as_list(&self) -> &[i32] {
            &self.0
        }

        fn copy_into(
            &self,
            _dst: &mut [Option<i32>],
            offset: usize,
        ) -> Result<usize, CollectError> {
            Ok(offset)
        }

        fn is_partial_view(&self) -> bool {
            false
        }
    }

    #[test]
    fn basic_contract() {
        let set = SingletonSet::new("x");
        assert_eq!(set.len(), 1);
        assert!(!ImmutableSet::is_empty(&set));
        assert!(set.contains(&"x"));
        assert!(!set.contains(&"y"));
        assert!(!set.is_partial_view());
        assert_eq!(set.as_list(), ["x"]);
        assert_eq!(set.to_vec(), vec!["x"]);
    }

    #[test]
    fn iteration_restarts_and_yields_once() {
        let set = SingletonSet::new(7);
        for _ in 0..2 {
            let items: Vec<_> = set.iter().collect();
            assert_eq!(items, [&7]);
        }
        assert_eq!((&set).into_iter().count(), 1);
        assert_eq!(set.into_iter().collect::<Vec<_>>(), [7]);
    }

    #[test]
    fn copy_into_writes_at_offset() {
        let set = SingletonSet::new(String::from("e"));
        let mut dst = vec![None, None, None];
        assert_eq!(set.copy_into(&mut dst, 1).unwrap(), 2);
        assert_eq!(dst, [None, Some("e".to_owned()), None]);
    }

    #[test]
    fn copy_into_rejects_full_destination() {
        let set = SingletonSet::new(1u8);
        let mut dst = [Some(9u8)];
        assert_eq!(
            set.copy_into(&mut dst, 1).unwrap_err(),
            CollectError::OutOfRange { offset: 1, len: 1 }
        );
        assert_eq!(dst, [Some(9)]);
    }

    #[test]
    fn absent_element_is_rejected() {
        assert_eq!(
            SingletonSet::<u8>::try_from(None).unwrap_err(),
            CollectError::MissingElement
        );
        assert_eq!(SingletonSet::try_from(Some(3)).unwrap().into_element(), 3);
    }

    #[test]
    fn hash_is_element_hash() {
        assert_eq!(hash_of(&SingletonSet::new("abc")), hash_of(&"abc"));
    }

    #[test]
    fn set_semantics_equality() {
        let set = SingletonSet::new(4);
        assert_eq!(set, HashSet::from([4]));
        assert_ne!(set, HashSet::from([4, 5]));
        assert_eq!(set, BTreeSet::from([4]));
        assert!(set.set_eq(&SingletonSet::new(4)));
        assert!(!set.set_eq(&Pair([4, 5])));
        assert!(!Pair([4, 5]).set_eq(&set));
    }

    #[test]
    fn display_brackets_element() {
        assert_eq!(SingletonSet::new(42).to_string(), "[42]");
    }
}
