use std::collections::BTreeSet as StdBTreeSet;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::slice;

use crate::set::merge::{MergeJoin, MergeOp};
use crate::set::tree::TreeSet;
use crate::{Error, OrderedSet, Result};

/// An ordered set stored as one sorted, duplicate-free buffer.
///
/// Lookups are binary searches. Inserts and removals shift the tail of the
/// buffer, and the set algebra is a single merge pass over both operands.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ArraySet<K> {
    elements: Vec<K>,
}

impl<K> ArraySet<K> {
    pub fn new() -> Self {
        ArraySet {
            elements: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ArraySet {
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, K> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[K] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<K> {
        self.elements
    }

    pub fn first(&self) -> Option<&K> {
        self.elements.first()
    }

    pub fn last(&self) -> Option<&K> {
        self.elements.last()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl<K: Ord> ArraySet<K> {
    fn merge(&self, other: &Self, op: MergeOp) -> Self
    where
        K: Clone,
    {
        let mut elements = Vec::with_capacity(match op {
            MergeOp::Union => self.elements.len() + other.elements.len(),
            MergeOp::Intersection => self.elements.len().min(other.elements.len()),
            MergeOp::Difference => self.elements.len(),
        });
        elements.extend(MergeJoin::new(op, &self.elements, &other.elements).cloned());
        elements.shrink_to_fit();

        ArraySet { elements }
    }
}

impl<K: Ord> OrderedSet for ArraySet<K> {
    type Key = K;
    type Iter<'a>
        = slice::Iter<'a, K>
    where
        Self: 'a;

    fn get(&self, key: &Self::Key) -> Result<&Self::Key> {
        match self.elements.binary_search(key) {
            Ok(idx) => Ok(&self.elements[idx]),
            Err(_) => Err(Error::KeyNotFound),
        }
    }

    fn try_insert(&mut self, key: Self::Key) -> Result<()> {
        let Err(idx) = self.elements.binary_search(&key) else {
            return Err(Error::KeyAlreadyExists);
        };

        self.elements.insert(idx, key);
        Ok(())
    }

    fn take(&mut self, key: &Self::Key) -> Result<Self::Key> {
        let Ok(idx) = self.elements.binary_search(key) else {
            return Err(Error::KeyNotFound);
        };

        Ok(self.elements.remove(idx))
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.elements.iter()
    }

    fn union_with(&self, other: &Self) -> Self
    where
        K: Clone,
    {
        self.merge(other, MergeOp::Union)
    }

    fn intersect_with(&self, other: &Self) -> Self
    where
        K: Clone,
    {
        self.merge(other, MergeOp::Intersection)
    }

    fn difference_from(&self, other: &Self) -> Self
    where
        K: Clone,
    {
        self.merge(other, MergeOp::Difference)
    }
}

impl<K> Default for ArraySet<K> {
    fn default() -> Self {
        ArraySet::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for ArraySet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<K: Ord> FromIterator<K> for ArraySet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let elements: Vec<K> = iter.into_iter().collect();
        ArraySet::from(elements)
    }
}

impl<K: Ord> From<Vec<K>> for ArraySet<K> {
    fn from(mut elements: Vec<K>) -> Self {
        elements.sort();
        elements.dedup();

        ArraySet { elements }
    }
}

impl<K: Ord, const N: usize> From<[K; N]> for ArraySet<K> {
    fn from(keys: [K; N]) -> Self {
        ArraySet::from(Vec::from(keys))
    }
}

impl<K: Ord> Extend<K> for ArraySet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.elements.extend(iter);
        self.elements.sort();
        self.elements.dedup();
    }
}

impl<K: PartialEq> PartialEq<StdBTreeSet<K>> for ArraySet<K> {
    fn eq(&self, other: &StdBTreeSet<K>) -> bool {
        self.elements.len() == other.len() && self.elements.iter().eq(other.iter())
    }
}

impl<K: PartialEq> PartialEq<TreeSet<K>> for ArraySet<K> {
    fn eq(&self, other: &TreeSet<K>) -> bool {
        other == self
    }
}

impl<K: Ord + Clone> Add for &ArraySet<K> {
    type Output = ArraySet<K>;

    fn add(self, rhs: Self) -> ArraySet<K> {
        self.union_with(rhs)
    }
}

impl<K: Ord + Clone> Sub for &ArraySet<K> {
    type Output = ArraySet<K>;

    fn sub(self, rhs: Self) -> ArraySet<K> {
        self.difference_from(rhs)
    }
}

impl<K: Ord + Clone> Mul for &ArraySet<K> {
    type Output = ArraySet<K>;

    fn mul(self, rhs: Self) -> ArraySet<K> {
        self.intersect_with(rhs)
    }
}

impl<'a, K> IntoIterator for &'a ArraySet<K> {
    type Item = &'a K;
    type IntoIter = slice::Iter<'a, K>;

    fn into_iter(self) -> slice::Iter<'a, K> {
        self.elements.iter()
    }
}

impl<K> IntoIterator for ArraySet<K> {
    type Item = K;
    type IntoIter = std::vec::IntoIter<K>;

    fn into_iter(self) -> std::vec::IntoIter<K> {
        self.elements.into_iter()
    }
}
