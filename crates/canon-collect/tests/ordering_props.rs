// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]
//! Property tests for rank orderings and singleton sets.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use canon_collect::{ExplicitOrdering, ImmutableSet, SingletonSet};
use proptest::prelude::*;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut h = DefaultHasher::new();
    value.hash(&mut h);
    h.finish()
}

fn first_position(list: &[u16], value: u16) -> usize {
    list.iter().position(|v| *v == value).unwrap()
}

proptest! {
    #[test]
    fn known_values_compare_equal_to_themselves(
        list in prop::collection::vec(any::<u16>(), 1..32),
    ) {
        let ordering = ExplicitOrdering::new(list.clone());
        for value in &list {
            prop_assert_eq!(ordering.compare(value, value).unwrap(), Ordering::Equal);
        }
    }

    #[test]
    fn comparison_follows_first_occurrence(
        list in prop::collection::vec(0u16..64, 1..32),
        i in any::<prop::sample::Index>(),
        j in any::<prop::sample::Index>(),
    ) {
        let ordering = ExplicitOrdering::new(list.clone());
        let a = list[i.index(list.len())];
        let b = list[j.index(list.len())];
        let expected = first_position(&list, a).cmp(&first_position(&list, b));
        prop_assert_eq!(ordering.compare(&a, &b).unwrap(), expected);
        let reversed = ordering.reverse().compare(&a, &b).unwrap();
        prop_assert_eq!(reversed, expected.reverse());
    }

    #[test]
    fn unknown_values_are_rejected(
        list in prop::collection::vec(0u16..100, 0..16),
        stray in 100u16..200,
    ) {
        let ordering = ExplicitOrdering::new(list.clone());
        let err = ordering.compare(&stray, &stray).unwrap_err();
        prop_assert_eq!(*err.value(), stray);
        if let Some(known) = list.first() {
            let right = ordering.compare(known, &stray).unwrap_err();
            let left = ordering.compare(&stray, known).unwrap_err();
            prop_assert_eq!(right.into_value(), stray);
            prop_assert_eq!(left.into_value(), stray);
        }
    }

    #[test]
    fn equal_rank_maps_are_equal_and_hash_alike(
        list in prop::collection::vec(any::<u16>(), 0..32),
    ) {
        let built = ExplicitOrdering::new(list);
        let mut entries: Vec<(u16, usize)> =
            built.rank_map().iter().map(|(v, r)| (*v, *r)).collect();
        entries.reverse();
        let adopted = ExplicitOrdering::from_rank_map(entries);
        prop_assert_eq!(&built, &adopted);
        prop_assert_eq!(hash_of(&built), hash_of(&adopted));
    }

    #[test]
    fn sorted_output_is_ordered(
        list in prop::collection::vec(0u16..32, 1..16),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..24),
    ) {
        let ordering = ExplicitOrdering::new(list.clone());
        let values: Vec<u16> = picks.iter().map(|i| list[i.index(list.len())]).collect();
        let sorted = ordering.sorted(values.clone()).unwrap();
        prop_assert_eq!(sorted.len(), values.len());
        prop_assert!(ordering.is_ordered(&sorted).unwrap());
        let mut in_place = values;
        ordering.sort(&mut in_place).unwrap();
        prop_assert_eq!(in_place, sorted);
    }

    #[test]
    fn singleton_contains_only_its_element(element in any::<i64>(), other in any::<i64>()) {
        let set = SingletonSet::new(element);
        prop_assert_eq!(set.len(), 1);
        prop_assert!(set.contains(&element));
        prop_assert_eq!(set.contains(&other), other == element);
        prop_assert_eq!(hash_of(&set), hash_of(&element));
        prop_assert_eq!(set.iter().count(), 1);
    }
}

#[test]
fn display_forms() {
    let ordering = ExplicitOrdering::of("a", ["b", "c"]);
    assert_eq!(ordering.to_string(), "Ordering.explicit([a, b, c])");
    assert_eq!(
        ordering.reverse().to_string(),
        "Ordering.explicit([a, b, c]).reverse()"
    );
}

#[test]
fn rank_map_entry_order_is_irrelevant() {
    let built = ExplicitOrdering::new(["a", "b", "c"]);
    let adopted = ExplicitOrdering::from_rank_map([("c", 2), ("a", 0), ("b", 1)]);
    assert_eq!(built, adopted);
    assert_eq!(hash_of(&built), hash_of(&adopted));
    assert_eq!(adopted.values(), ["a", "b", "c"]);
}

#[test]
fn min_max_prefer_first_on_ties() {
    let ordering = ExplicitOrdering::from_rank_map([("x", 0), ("y", 0), ("z", 1)]);
    assert_eq!(ordering.min(["y", "x", "z"]).unwrap(), Some("y"));
    assert_eq!(ordering.max(["z", "x"]).unwrap(), Some("z"));
    assert_eq!(ordering.min(Vec::<&str>::new()).unwrap(), None);
}
