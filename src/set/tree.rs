use std::cmp::Ordering;
use std::collections::BTreeSet as StdBTreeSet;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Add, Mul, Sub};

use crate::set::array::ArraySet;
use crate::set::merge::{MergeJoin, MergeOp};
use crate::{Error, OrderedSet, Result};

/// An ordered set stored as an unbalanced binary search tree.
///
/// Every node owns its children. Bulk construction and the set algebra build
/// perfectly balanced trees; incremental inserts link new leaves wherever the
/// ordering puts them.
pub struct TreeSet<K> {
    root: Option<Link<K>>,
    len: usize,
}

type Link<K> = Box<Node<K>>;

struct Node<K> {
    key: K,
    left: Option<Link<K>>,
    right: Option<Link<K>>,
}

impl<K> Node<K> {
    fn leaf(key: K) -> Node<K> {
        Node {
            key,
            left: None,
            right: None,
        }
    }

    fn link(self) -> Link<K> {
        Box::new(self)
    }
}

impl<K> TreeSet<K> {
    pub fn new() -> Self {
        TreeSet { root: None, len: 0 }
    }

    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref(), self.len)
    }

    pub fn first(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    pub fn last(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();

        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| [node.left.as_deref(), node.right.as_deref()])
                .flatten()
                .collect();
        }

        height
    }

    pub fn clear(&mut self) {
        let mut pending: Vec<Link<K>> = self.root.take().into_iter().collect();

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }

        self.len = 0;
    }

    /// Builds a balanced tree from keys that are already strictly ascending.
    fn from_sorted(keys: impl IntoIterator<Item = K>) -> Self {
        let keys: Vec<K> = keys.into_iter().collect();
        let len = keys.len();
        let root = Self::build_balanced(len, &mut keys.into_iter());

        TreeSet { root, len }
    }

    fn build_balanced(len: usize, keys: &mut impl Iterator<Item = K>) -> Option<Link<K>> {
        if len == 0 {
            return None;
        }

        let left = Self::build_balanced(len / 2, keys);
        let key = keys.next()?;
        let right = Self::build_balanced(len - len / 2 - 1, keys);

        Some(Node { key, left, right }.link())
    }
}

impl<K: Ord> TreeSet<K> {
    /// Unlinks the smallest key of a subtree, lifting its right child into its place.
    fn pop_min(mut link: &mut Option<Link<K>>) -> Option<K> {
        while link.as_ref().is_some_and(|node| node.left.is_some()) {
            let Some(node) = link else { break };
            link = &mut node.left;
        }

        let node = link.take()?;
        let Node { key, right, .. } = *node;
        *link = right;

        Some(key)
    }

    fn merge(&self, other: &Self, op: MergeOp) -> Self
    where
        K: Clone,
    {
        Self::from_sorted(MergeJoin::new(op, self.iter(), other.iter()).cloned())
    }
}

impl<K: Ord> OrderedSet for TreeSet<K> {
    type Key = K;
    type Iter<'a>
        = Iter<'a, K>
    where
        Self: 'a;

    fn get(&self, key: &Self::Key) -> Result<&Self::Key> {
        let mut link = self.root.as_deref();

        while let Some(node) = link {
            match key.cmp(&node.key) {
                Ordering::Less => link = node.left.as_deref(),
                Ordering::Greater => link = node.right.as_deref(),
                Ordering::Equal => return Ok(&node.key),
            }
        }

        Err(Error::KeyNotFound)
    }

    fn try_insert(&mut self, key: Self::Key) -> Result<()> {
        let mut link = &mut self.root;

        while let Some(node) = link {
            match key.cmp(&node.key) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => return Err(Error::KeyAlreadyExists),
            }
        }

        *link = Some(Node::leaf(key).link());
        self.len += 1;
        Ok(())
    }

    fn take(&mut self, key: &Self::Key) -> Result<Self::Key> {
        let mut link = &mut self.root;

        loop {
            let ordering = match link.as_deref() {
                Some(node) => key.cmp(&node.key),
                None => return Err(Error::KeyNotFound),
            };
            if ordering == Ordering::Equal {
                break;
            }

            let Some(node) = link else { break };
            link = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        let node = link.take().ok_or(Error::KeyNotFound)?;
        let Node { key, left, right } = *node;

        *link = match (left, right) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                match Self::pop_min(&mut right) {
                    Some(successor) => Some(
                        Node {
                            key: successor,
                            left: Some(left),
                            right,
                        }
                        .link(),
                    ),
                    None => Some(left),
                }
            }
        };

        self.len -= 1;
        Ok(key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> Self::Iter<'_> {
        TreeSet::iter(self)
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

impl<K> Drop for TreeSet<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K> Default for TreeSet<K> {
    fn default() -> Self {
        TreeSet::new()
    }
}

impl<K: Clone> Clone for TreeSet<K> {
    fn clone(&self) -> Self {
        TreeSet::from_sorted(self.iter().cloned())
    }
}

impl<K: fmt::Debug> fmt::Debug for TreeSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> FromIterator<K> for TreeSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut keys: Vec<K> = iter.into_iter().collect();
        keys.sort();
        keys.dedup();

        TreeSet::from_sorted(keys)
    }
}

impl<K: Ord> From<Vec<K>> for TreeSet<K> {
    fn from(keys: Vec<K>) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: Ord, const N: usize> From<[K; N]> for TreeSet<K> {
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: Ord> Extend<K> for TreeSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: PartialEq> PartialEq for TreeSet<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Eq> Eq for TreeSet<K> {}

impl<K: PartialEq> PartialEq<StdBTreeSet<K>> for TreeSet<K> {
    fn eq(&self, other: &StdBTreeSet<K>) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: PartialEq> PartialEq<ArraySet<K>> for TreeSet<K> {
    fn eq(&self, other: &ArraySet<K>) -> bool {
        self.len == other.as_slice().len() && self.iter().eq(other.as_slice())
    }
}

impl<K: Ord + Clone> Add for &TreeSet<K> {
    type Output = TreeSet<K>;

    fn add(self, rhs: Self) -> TreeSet<K> {
        self.union_with(rhs)
    }
}

impl<K: Ord + Clone> Sub for &TreeSet<K> {
    type Output = TreeSet<K>;

    fn sub(self, rhs: Self) -> TreeSet<K> {
        self.difference_from(rhs)
    }
}

impl<K: Ord + Clone> Mul for &TreeSet<K> {
    type Output = TreeSet<K>;

    fn mul(self, rhs: Self) -> TreeSet<K> {
        self.intersect_with(rhs)
    }
}

/// In-order iterator over the keys of a [`TreeSet`].
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: len,
        };
        iter.descend_left(root);
        iter
    }

    fn descend_left(&mut self, mut link: Option<&'a Node<K>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}

impl<'a, K> IntoIterator for &'a TreeSet<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

/// Owning in-order iterator over the keys of a [`TreeSet`].
pub struct IntoIter<K> {
    stack: Vec<Link<K>>,
    remaining: usize,
}

impl<K> IntoIter<K> {
    fn descend_left(&mut self, mut link: Option<Link<K>>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        let node = self.stack.pop()?;
        let Node { key, right, .. } = *node;
        self.descend_left(right);
        self.remaining -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}
impl<K> FusedIterator for IntoIter<K> {}

impl<K> Drop for IntoIter<K> {
    fn drop(&mut self) {
        while let Some(mut node) = self.stack.pop() {
            self.stack.extend(node.right.take());
            self.stack.extend(node.left.take());
        }
    }
}

impl<K> IntoIterator for TreeSet<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(mut self) -> IntoIter<K> {
        let mut iter = IntoIter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.descend_left(self.root.take());
        self.len = 0;
        iter
    }
}
