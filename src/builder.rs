//! Runtime configuration of a [`Tree`].
//!
//! Most trees are made with [`Tree::new`] or [`Tree::with_comparator`], where the ordering
//! is settled by the type system. A `TreeBuilder` is for when the ordering and the seed
//! values are gathered separately (from options, say) and only put together at the end.
//! The ordering is resolved exactly once, in [`build`][TreeBuilder::build].
//!
//! # Examples
//!
//! ```
//! use ordtree::order::Natural;
//! use ordtree::{TreeBuilder, TreeError};
//!
//! let tree = TreeBuilder::new().natural_order().values([3, 1, 2]).build()?;
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 2, 3]);
//!
//! // Forgetting to pick an ordering is an error.
//! let unordered = TreeBuilder::<i32, Natural>::new().values([3, 1, 2]).build();
//! assert_eq!(unordered.unwrap_err(), TreeError::InvalidOrdering);
//! # Ok::<(), TreeError>(())
//! ```

use std::fmt;

use crate::error::TreeError;
use crate::order::{Comparator, Natural};
use crate::tree::Tree;

/// Collects the ordering and seed values for a [`Tree`].
pub struct TreeBuilder<T, C = Natural> {
    comparator: Option<C>,
    values: Vec<T>,
}

impl<T, C> Default for TreeBuilder<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> fmt::Debug for TreeBuilder<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeBuilder")
            .field("has_comparator", &self.comparator.is_some())
            .field("values", &self.values.len())
            .finish()
    }
}

impl<T, C> TreeBuilder<T, C> {
    /// A builder with no ordering and no values.
    pub fn new() -> Self {
        Self {
            comparator: None,
            values: Vec::new(),
        }
    }

    /// Orders the tree by `comparator`, replacing any ordering set earlier.
    pub fn comparator(mut self, comparator: C) -> Self {
        self.comparator = Some(comparator);
        self
    }

    /// Seeds the tree with `value`. Seeds are added in the order they were given.
    pub fn value(mut self, value: T) -> Self {
        self.values.push(value);
        self
    }

    /// Seeds the tree with each of `values`.
    pub fn values<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.values.extend(values);
        self
    }

    /// Resolves the ordering and builds the tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidOrdering`] if no ordering was ever configured.
    pub fn build(self) -> Result<Tree<T, C>, TreeError>
    where
        C: Comparator<T>,
    {
        let Some(order) = self.comparator else {
            log::debug!("refusing to build a tree without an ordering");
            return Err(TreeError::InvalidOrdering);
        };
        log::debug!(
            "resolved ordering {}, seeding {} values",
            std::any::type_name::<C>(),
            self.values.len()
        );

        Ok(Tree::from_iter_with(self.values, order))
    }
}

impl<T: Ord> TreeBuilder<T, Natural> {
    /// Orders the tree by `T`'s [`Ord`] implementation.
    pub fn natural_order(self) -> Self {
        self.comparator(Natural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Reverse;

    #[test]
    fn builds_with_seeds_in_order() {
        let tree = TreeBuilder::new()
            .natural_order()
            .value(100)
            .values([130, 50, 25, 70])
            .build()
            .unwrap();

        assert_eq!(tree.len(), 5);
        assert_eq!(tree.to_vec(), [100, 50, 25, 70, 130]);
    }

    #[test]
    fn missing_ordering_is_invalid() {
        let result = TreeBuilder::<i32, Natural>::new().value(1).build();
        assert_eq!(result.err(), Some(TreeError::InvalidOrdering));
    }

    #[test]
    fn last_comparator_wins() {
        let tree = TreeBuilder::new()
            .comparator(Reverse(Natural))
            .comparator(Reverse(Natural))
            .values([1, 2, 3])
            .build()
            .unwrap();

        assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [3, 2, 1]);
    }

    #[test]
    fn empty_builder_gives_empty_tree() {
        let tree = TreeBuilder::<u8, _>::new()
            .comparator(|a: &u8, b: &u8| a.cmp(b))
            .build()
            .unwrap();

        assert!(tree.is_empty());
    }

    #[test]
    fn debug_summarizes() {
        let builder = TreeBuilder::<i32, Natural>::new().values([1, 2]);
        assert_eq!(
            format!("{builder:?}"),
            "TreeBuilder { has_comparator: false, values: 2 }"
        );
    }
}
