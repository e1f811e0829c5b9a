use std::collections::BTreeSet as StdBTreeSet;
use std::collections::btree_set;

use crate::{Error, OrderedSet, Result};

/// An ordered set test oracle backed by the standard library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSet<K>(StdBTreeSet<K>);

impl<K> ReferenceSet<K> {
    pub fn new() -> Self {
        Self(StdBTreeSet::new())
    }

    pub fn iter(&self) -> btree_set::Iter<'_, K> {
        self.0.iter()
    }
}

impl<K> Default for ReferenceSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> OrderedSet for ReferenceSet<K> {
    type Key = K;
    type Iter<'a>
        = btree_set::Iter<'a, K>
    where
        Self: 'a;

    fn get(&self, key: &Self::Key) -> Result<&Self::Key> {
        self.0.get(key).ok_or(Error::KeyNotFound)
    }

    fn try_insert(&mut self, key: Self::Key) -> Result<()> {
        if self.0.insert(key) {
            Ok(())
        } else {
            Err(Error::KeyAlreadyExists)
        }
    }

    fn take(&mut self, key: &Self::Key) -> Result<Self::Key> {
        self.0.take(key).ok_or(Error::KeyNotFound)
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.0.iter()
    }

    fn union_with(&self, other: &Self) -> Self
    where
        K: Clone,
    {
        Self(self.0.union(&other.0).cloned().collect())
    }

    fn intersect_with(&self, other: &Self) -> Self
    where
        K: Clone,
    {
        Self(self.0.intersection(&other.0).cloned().collect())
    }

    fn difference_from(&self, other: &Self) -> Self
    where
        K: Clone,
    {
        Self(self.0.difference(&other.0).cloned().collect())
    }
}

impl<K: Ord> FromIterator<K> for ReferenceSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<K: Ord> From<StdBTreeSet<K>> for ReferenceSet<K> {
    fn from(set: StdBTreeSet<K>) -> Self {
        Self(set)
    }
}

impl<K: PartialEq> PartialEq<StdBTreeSet<K>> for ReferenceSet<K> {
    fn eq(&self, other: &StdBTreeSet<K>) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_ordered_set_impl;

    test_ordered_set_impl!(ReferenceSet);
}
