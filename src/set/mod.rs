pub mod array;
mod merge;
pub mod reference;
pub mod tree;

#[cfg(test)]
pub(crate) mod tests {
    use std::cmp::Ordering;

    /// A key ordered by its number only, so equal keys can still be told apart.
    #[derive(Debug, Clone, Copy)]
    pub(crate) struct Tagged(pub i32, pub char);

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.0.cmp(&other.0)
        }
    }
}
