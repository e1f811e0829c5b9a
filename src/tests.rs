use std::collections::BTreeSet as StdBTreeSet;
use std::fmt::Debug;

use proptest::{collection::vec, prelude::*, test_runner::TestCaseResult};

use crate::{ArraySet, OrderedSet, ReferenceSet, TreeSet};

fn key_lists() -> impl Strategy<Value = Vec<i16>> {
    vec(-256i16..256, 0..128)
}

fn matches_reference<S>(keys: &[i16]) -> TestCaseResult
where
    S: OrderedSet<Key = i16> + FromIterator<i16> + PartialEq<StdBTreeSet<i16>> + Debug,
{
    let set: S = keys.iter().copied().collect();
    let reference: StdBTreeSet<i16> = keys.iter().copied().collect();

    prop_assert_eq!(&set, &reference);
    prop_assert_eq!(set.len(), reference.len());
    for key in -260..260 {
        prop_assert_eq!(set.search(&key), reference.contains(&key));
    }
    Ok(())
}

fn incremental_matches_reference<S>(inserts: &[i16], removals: &[i16]) -> TestCaseResult
where
    S: OrderedSet<Key = i16> + PartialEq<StdBTreeSet<i16>> + Debug,
{
    let mut set = S::default();
    let mut reference = StdBTreeSet::new();

    for &key in inserts {
        prop_assert_eq!(set.insert(key), reference.insert(key));
    }
    for &key in removals {
        let before = set.len();
        let present = reference.remove(&key);

        prop_assert_eq!(set.remove(&key), present);
        prop_assert!(!set.search(&key));
        prop_assert_eq!(set.len(), if present { before - 1 } else { before });
    }

    prop_assert_eq!(&set, &reference);
    Ok(())
}

fn insert_is_idempotent<S>(keys: &[i16], key: i16) -> TestCaseResult
where
    S: OrderedSet<Key = i16> + FromIterator<i16> + PartialEq + Debug,
{
    let mut once: S = keys.iter().copied().collect();
    once.insert(key);

    let mut twice: S = keys.iter().copied().collect();
    twice.insert(key);
    twice.insert(key);

    prop_assert_eq!(once.len(), twice.len());
    prop_assert_eq!(once, twice);
    Ok(())
}

fn algebra_laws<S>(a: &[i16], b: &[i16]) -> TestCaseResult
where
    S: OrderedSet<Key = i16> + FromIterator<i16> + PartialEq + Debug,
{
    let a: S = a.iter().copied().collect();
    let b: S = b.iter().copied().collect();

    let union = a.union_with(&b);
    let intersection = a.intersect_with(&b);
    let difference = a.difference_from(&b);

    prop_assert_eq!(union.len(), a.len() + b.len() - intersection.len());
    prop_assert!(intersection.intersect_with(&difference).is_empty());
    prop_assert_eq!(&intersection.union_with(&difference), &a);
    prop_assert_eq!(&union, &b.union_with(&a));
    prop_assert_eq!(&intersection, &b.intersect_with(&a));

    for key in a.iter().chain(b.iter()) {
        prop_assert_eq!(union.search(key), a.search(key) || b.search(key));
        prop_assert_eq!(intersection.search(key), a.search(key) && b.search(key));
        prop_assert_eq!(difference.search(key), a.search(key) && !b.search(key));
    }
    Ok(())
}

proptest! {
    #[test]
    fn tree_set_matches_reference(keys in key_lists()) {
        matches_reference::<TreeSet<i16>>(&keys)?;
    }

    #[test]
    fn array_set_matches_reference(keys in key_lists()) {
        matches_reference::<ArraySet<i16>>(&keys)?;
    }

    #[test]
    fn tree_set_incremental_updates_match_reference(inserts in key_lists(), removals in key_lists()) {
        incremental_matches_reference::<TreeSet<i16>>(&inserts, &removals)?;
    }

    #[test]
    fn array_set_incremental_updates_match_reference(inserts in key_lists(), removals in key_lists()) {
        incremental_matches_reference::<ArraySet<i16>>(&inserts, &removals)?;
    }

    #[test]
    fn insert_is_idempotent_for_both(keys in key_lists(), key in -256i16..256) {
        insert_is_idempotent::<TreeSet<i16>>(&keys, key)?;
        insert_is_idempotent::<ArraySet<i16>>(&keys, key)?;
    }

    #[test]
    fn algebra_laws_hold_for_both(a in key_lists(), b in key_lists()) {
        algebra_laws::<TreeSet<i16>>(&a, &b)?;
        algebra_laws::<ArraySet<i16>>(&a, &b)?;
        algebra_laws::<ReferenceSet<i16>>(&a, &b)?;
    }

    #[test]
    fn representations_agree_on_algebra(a in key_lists(), b in key_lists()) {
        let (tree_a, tree_b): (TreeSet<i16>, TreeSet<i16>) =
            (a.iter().copied().collect(), b.iter().copied().collect());
        let (array_a, array_b): (ArraySet<i16>, ArraySet<i16>) =
            (a.iter().copied().collect(), b.iter().copied().collect());

        prop_assert_eq!(&tree_a, &array_a);
        prop_assert_eq!(&tree_a.union_with(&tree_b), &array_a.union_with(&array_b));
        prop_assert_eq!(&tree_a.intersect_with(&tree_b), &array_a.intersect_with(&array_b));
        prop_assert_eq!(&tree_a.difference_from(&tree_b), &array_a.difference_from(&array_b));
    }

    #[test]
    fn tree_removal_keeps_search_order(keys in key_lists(), removals in key_lists()) {
        let mut set = TreeSet::<i16>::new();
        for &key in &keys {
            set.insert(key);
        }
        for key in &removals {
            set.remove(key);
            let ordered: Vec<i16> = set.iter().copied().collect();
            prop_assert!(ordered.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert_eq!(ordered.len(), set.len());
        }
    }
}
