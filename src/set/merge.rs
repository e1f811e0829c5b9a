use std::cmp::Ordering;
use std::iter::{FusedIterator, Peekable};

/// Which side of a merge-join survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MergeOp {
    Union,
    Intersection,
    Difference,
}

/// Linear merge-join over two strictly ascending sequences.
///
/// Yields a strictly ascending sequence. Every call to `next` advances at
/// least one cursor, so a full pass costs `O(left + right)` comparisons.
pub(crate) struct MergeJoin<L: Iterator, R: Iterator<Item = L::Item>> {
    op: MergeOp,
    left: Peekable<L>,
    right: Peekable<R>,
}

impl<L, R> MergeJoin<L, R>
where
    L: Iterator,
    R: Iterator<Item = L::Item>,
    L::Item: Ord,
{
    pub(crate) fn new(
        op: MergeOp,
        left: impl IntoIterator<IntoIter = L>,
        right: impl IntoIterator<IntoIter = R>,
    ) -> Self {
        Self {
            op,
            left: left.into_iter().peekable(),
            right: right.into_iter().peekable(),
        }
    }
}

impl<L, R> Iterator for MergeJoin<L, R>
where
    L: Iterator,
    R: Iterator<Item = L::Item>,
    L::Item: Ord,
{
    type Item = L::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let ordering = match (self.left.peek(), self.right.peek()) {
                (Some(l), Some(r)) => l.cmp(r),
                (Some(_), None) => {
                    return match self.op {
                        MergeOp::Union | MergeOp::Difference => self.left.next(),
                        MergeOp::Intersection => None,
                    };
                }
                (None, Some(_)) => {
                    return match self.op {
                        MergeOp::Union => self.right.next(),
                        MergeOp::Intersection | MergeOp::Difference => None,
                    };
                }
                (None, None) => return None,
            };

            match (ordering, self.op) {
                (Ordering::Less, MergeOp::Union | MergeOp::Difference) => return self.left.next(),
                (Ordering::Less, MergeOp::Intersection) => {
                    self.left.next();
                }
                (Ordering::Greater, MergeOp::Union) => return self.right.next(),
                (Ordering::Greater, MergeOp::Intersection | MergeOp::Difference) => {
                    self.right.next();
                }
                (Ordering::Equal, MergeOp::Union | MergeOp::Intersection) => {
                    self.right.next();
                    return self.left.next();
                }
                (Ordering::Equal, MergeOp::Difference) => {
                    self.left.next();
                    self.right.next();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, left) = self.left.size_hint();
        let (_, right) = self.right.size_hint();

        let upper = match self.op {
            MergeOp::Union => left.zip(right).and_then(|(l, r)| l.checked_add(r)),
            MergeOp::Intersection => left.zip(right).map(|(l, r)| l.min(r)),
            MergeOp::Difference => left,
        };

        (0, upper)
    }
}

impl<L, R> FusedIterator for MergeJoin<L, R>
where
    L: FusedIterator,
    R: FusedIterator<Item = L::Item>,
    L::Item: Ord,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merge(op: MergeOp, left: &[i32], right: &[i32]) -> Vec<i32> {
        MergeJoin::new(op, left.iter(), right.iter()).copied().collect()
    }

    #[test]
    fn test_union_interleaves_and_collapses_ties() {
        assert_eq!(
            merge(MergeOp::Union, &[1, 4, 6, 9], &[2, 4, 9, 11, 12]),
            vec![1, 2, 4, 6, 9, 11, 12]
        );
    }

    #[test]
    fn test_intersection_keeps_only_ties() {
        assert_eq!(
            merge(MergeOp::Intersection, &[1, 4, 6, 9], &[2, 4, 9, 11, 12]),
            vec![4, 9]
        );
    }

    #[test]
    fn test_difference_drops_ties_and_right_only_keys() {
        assert_eq!(
            merge(MergeOp::Difference, &[1, 4, 6, 9, 15], &[2, 4, 9, 11, 12]),
            vec![1, 6, 15]
        );
    }

    #[test]
    fn test_exhausted_side() {
        assert_eq!(merge(MergeOp::Union, &[], &[3, 5]), vec![3, 5]);
        assert_eq!(merge(MergeOp::Union, &[3, 5], &[]), vec![3, 5]);
        assert_eq!(merge(MergeOp::Intersection, &[3, 5], &[]), Vec::<i32>::new());
        assert_eq!(merge(MergeOp::Difference, &[], &[3, 5]), Vec::<i32>::new());
        assert_eq!(merge(MergeOp::Difference, &[3, 5], &[]), vec![3, 5]);
    }

    #[test]
    fn test_size_hint_upper_bounds() {
        let left = [1, 2, 3];
        let right = [2, 3, 4, 5];

        assert_eq!(MergeJoin::new(MergeOp::Union, left.iter(), right.iter()).size_hint(), (0, Some(7)));
        assert_eq!(MergeJoin::new(MergeOp::Intersection, left.iter(), right.iter()).size_hint(), (0, Some(3)));
        assert_eq!(MergeJoin::new(MergeOp::Difference, left.iter(), right.iter()).size_hint(), (0, Some(3)));
    }
}
