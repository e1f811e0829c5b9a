use thiserror::Error;

pub mod set;

#[cfg(test)]
mod tests;

pub use set::array::ArraySet;
pub use set::reference::ReferenceSet;
pub use set::tree::TreeSet;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("key not found")]
    KeyNotFound,

    #[error("key already exists")]
    KeyAlreadyExists,
}

/// An ordered, duplicate-free collection of keys.
///
/// `get`, `try_insert` and `take` are the strict primitives: they report why
/// nothing happened. `search`, `insert` and `remove` are built on top of them
/// and never fail.
///
/// The algebra methods return a new set and leave both operands untouched.
pub trait OrderedSet: Default {
    type Key: Ord;
    type Iter<'a>: Iterator<Item = &'a Self::Key>
    where
        Self: 'a;

    fn get(&self, key: &Self::Key) -> Result<&Self::Key>;
    fn try_insert(&mut self, key: Self::Key) -> Result<()>;
    fn take(&mut self, key: &Self::Key) -> Result<Self::Key>;

    fn len(&self) -> usize;

    /// Keys in ascending order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Keys present in either set.
    fn union_with(&self, other: &Self) -> Self
    where
        Self::Key: Clone;

    /// Keys present in both sets.
    fn intersect_with(&self, other: &Self) -> Self
    where
        Self::Key: Clone;

    /// Keys of `self` that are absent from `other`.
    fn difference_from(&self, other: &Self) -> Self
    where
        Self::Key: Clone;

    fn search(&self, key: &Self::Key) -> bool {
        self.get(key).is_ok()
    }

    /// Returns `true` if the key was not present before.
    fn insert(&mut self, key: Self::Key) -> bool {
        self.try_insert(key).is_ok()
    }

    /// Returns `true` if the key was present before.
    fn remove(&mut self, key: &Self::Key) -> bool {
        self.take(key).is_ok()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Membership equality with any other implementation, regardless of layout.
    fn same_elements<S>(&self, other: &S) -> bool
    where
        S: OrderedSet<Key = Self::Key>,
    {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

#[cfg(test)]
macro_rules! test_ordered_set_impl (
    ($impl:ident) => {
        fn set_of(keys: &[i32]) -> $impl<i32> {
            keys.iter().copied().collect()
        }

        fn keys_of(set: &$impl<i32>) -> Vec<i32> {
            set.iter().copied().collect()
        }

        #[test]
        fn test_new_returns_empty_set() {
            let set = $impl::<i32>::new();
            assert_eq!(set.len(), 0);
            assert!(set.is_empty());
            assert_eq!(set.iter().next(), None);
        }

        #[test]
        fn test_empty_set_does_not_contain_keys() {
            let set = $impl::<i32>::new();
            let items = vec![0, 420, i32::MAX, i32::MIN];

            for i in items {
                assert!(!set.search(&i));
            }
        }

        #[test]
        fn test_search_returns_true_after_insertion() {
            let mut set = $impl::<usize>::new();

            for i in 0..64 {
                assert!(!set.search(&i));
                assert!(set.insert(i));
                assert!(set.search(&i));
                assert_eq!(set.len(), i + 1);
            }
        }

        #[test]
        fn test_insert_is_idempotent() {
            let mut set = set_of(&[10, 5, 15]);

            assert!(!set.insert(5));
            assert!(!set.insert(5));
            assert_eq!(set.len(), 3);
            assert_eq!(keys_of(&set), vec![5, 10, 15]);
        }

        #[test]
        fn test_try_insert_existing_key_returns_error() {
            let mut set = $impl::<i32>::new();

            assert_eq!(set.try_insert(7), Ok(()));
            assert_eq!(set.try_insert(7), Err(Error::KeyAlreadyExists));
            assert_eq!(set.len(), 1);
        }

        #[test]
        fn test_get_existing_key_returns_ok() {
            let set = set_of(&[50]);
            assert_eq!(set.get(&50), Ok(&50));
        }

        #[test]
        fn test_get_non_existing_key_returns_error() {
            let set = set_of(&[50]);
            assert_eq!(set.get(&75), Err(Error::KeyNotFound));
        }

        #[test]
        fn test_take_existing_key_returns_ok_and_removes() {
            let mut set = set_of(&[20, 10, 30]);

            assert_eq!(set.take(&20), Ok(20));
            assert!(!set.search(&20));
            assert_eq!(set.len(), 2);
        }

        #[test]
        fn test_take_non_existing_key_returns_error() {
            let mut set = set_of(&[20]);

            assert_eq!(set.take(&99), Err(Error::KeyNotFound));
            assert_eq!(set.len(), 1);
        }

        #[test]
        fn test_remove_missing_key_is_noop() {
            let mut set = set_of(&[1, 2, 3]);

            assert!(!set.remove(&4));
            assert!(!$impl::<i32>::new().remove(&4));
            assert_eq!(keys_of(&set), vec![1, 2, 3]);
        }

        #[test]
        fn test_repeated_remove_of_same_key() {
            let mut set = set_of(&[1, 2, 3]);

            assert!(set.remove(&2));
            assert!(!set.remove(&2));
            assert_eq!(set.len(), 2);
        }

        #[test]
        fn test_remove_last_key_empties_set() {
            let mut set = set_of(&[42]);

            assert!(set.remove(&42));
            assert!(set.is_empty());
            assert!(!set.search(&42));
        }

        #[test]
        fn test_construct_from_collection_with_duplicates() {
            let set = set_of(&[4, 4, -1, 9, -1, 4, 0]);

            assert_eq!(set.len(), 4);
            assert_eq!(keys_of(&set), vec![-1, 0, 4, 9]);
        }

        #[test]
        fn test_construct_from_empty_collection() {
            let set = set_of(&[]);
            assert!(set.is_empty());
            assert_eq!(set, $impl::default());
        }

        #[test]
        fn test_iter_is_ascending() {
            let set = set_of(&[9, -3, 7, 0, 12, -8, 5]);
            assert_eq!(keys_of(&set), vec![-8, -3, 0, 5, 7, 9, 12]);
        }

        #[test]
        fn test_matches_reference_set() {
            let keys = [13, 2, 8, 2, 21, 1, 8, 34, 5, 3];
            let set = set_of(&keys);
            let reference: ::std::collections::BTreeSet<i32> = keys.iter().copied().collect();

            assert_eq!(set, reference);
            assert_eq!(set.len(), reference.len());
            for key in -5..40 {
                assert_eq!(set.search(&key), reference.contains(&key));
            }
        }

        #[test]
        fn test_insert_remove_and_algebra_scenario() {
            let mut first = $impl::<i32>::new();
            for key in [5, 3, 8, 3, 1] {
                first.insert(key);
            }
            assert_eq!(first.len(), 4);
            assert_eq!(keys_of(&first), vec![1, 3, 5, 8]);

            first.remove(&3);
            assert_eq!(first.len(), 3);
            assert!(!first.search(&3));

            let second = set_of(&[8, 9]);

            let union = first.union_with(&second);
            assert_eq!(keys_of(&union), vec![1, 5, 8, 9]);
            assert_eq!(union.len(), 4);

            let intersection = first.intersect_with(&second);
            assert_eq!(keys_of(&intersection), vec![8]);
            assert_eq!(intersection.len(), 1);

            let difference = first.difference_from(&second);
            assert_eq!(keys_of(&difference), vec![1, 5]);
            assert_eq!(difference.len(), 2);
        }

        #[test]
        fn test_algebra_with_empty_set() {
            let set = set_of(&[3, 1, 2]);
            let empty = $impl::<i32>::new();

            assert_eq!(set.union_with(&empty), set);
            assert_eq!(empty.union_with(&set), set);
            assert!(set.intersect_with(&empty).is_empty());
            assert!(empty.intersect_with(&set).is_empty());
            assert_eq!(set.difference_from(&empty), set);
            assert!(empty.difference_from(&set).is_empty());
            assert!(empty.union_with(&empty).is_empty());
        }

        #[test]
        fn test_algebra_with_itself() {
            let set = set_of(&[6, 2, 4, 8]);

            assert_eq!(set.union_with(&set), set);
            assert_eq!(set.intersect_with(&set), set);
            assert!(set.difference_from(&set).is_empty());
        }

        #[test]
        fn test_algebra_leaves_operands_unchanged() {
            let left = set_of(&[1, 2, 3, 4]);
            let right = set_of(&[3, 4, 5]);

            let _ = left.union_with(&right);
            let _ = left.intersect_with(&right);
            let _ = left.difference_from(&right);

            assert_eq!(keys_of(&left), vec![1, 2, 3, 4]);
            assert_eq!(keys_of(&right), vec![3, 4, 5]);
        }

        #[test]
        fn test_algebra_laws_on_overlapping_sets() {
            let a = set_of(&[1, 3, 5, 7, 9, 11, 13]);
            let b = set_of(&[2, 3, 5, 8, 13, 21]);

            let union = a.union_with(&b);
            let intersection = a.intersect_with(&b);
            let difference = a.difference_from(&b);

            assert_eq!(union.len(), a.len() + b.len() - intersection.len());
            assert_eq!(union, b.union_with(&a));
            assert_eq!(intersection, b.intersect_with(&a));
            assert!(intersection.intersect_with(&difference).is_empty());
            assert_eq!(intersection.union_with(&difference), a);
        }

        #[test]
        fn test_same_elements_ignores_insertion_order() {
            let mut ascending = $impl::<i32>::new();
            let mut descending = $impl::<i32>::new();
            for key in 0..100 {
                ascending.insert(key);
                descending.insert(99 - key);
            }

            assert!(ascending.same_elements(&descending));
            assert_eq!(ascending, descending);
        }

        #[test]
        fn test_sorted_insertion_of_many_keys() {
            let mut set = $impl::<u32>::new();
            for key in 0..5_000 {
                set.insert(key);
            }
            assert_eq!(set.len(), 5_000);
            assert!(set.search(&4_999));

            for key in (0..5_000).rev() {
                assert!(set.remove(&key));
            }
            assert!(set.is_empty());
        }

        #[test]
        fn test_set_stability_after_many_operations() {
            let mut set = $impl::<i32>::new();

            // Insert in a scattered order
            for i in 0..1000 {
                set.insert((i * 7919) % 1000);
            }
            assert_eq!(set.len(), 1000);

            // Delete the even keys
            for i in (0..1000).step_by(2) {
                assert!(set.remove(&i));
            }

            assert_eq!(set.len(), 500);
            for i in 0..1000 {
                assert_eq!(set.search(&i), i % 2 == 1);
            }
        }
    }
);

#[cfg(test)]
pub(crate) use test_ordered_set_impl;
