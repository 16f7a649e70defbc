//! The ordered collection itself.
//!
//! # Examples
//!
//! ```
//! use ordtree::Tree;
//!
//! let mut tree: Tree<i32> = [100, 130, 50, 25, 70].into_iter().collect();
//!
//! assert_eq!(tree.len(), 5);
//! assert!(tree.contains(&70));
//!
//! // Iterating a tree walks it in preorder.
//! assert_eq!(tree.to_vec(), [100, 50, 25, 70, 130]);
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [25, 50, 70, 100, 130]);
//!
//! // Removing a node with two children promotes its in-order successor.
//! assert!(tree.remove(&100));
//! assert_eq!(tree.to_vec(), [130, 50, 25, 70]);
//! assert!(!tree.remove(&100));
//! ```

use std::fmt;

use crate::builder::TreeBuilder;
use crate::error::TreeError;
use crate::iter::{Inorder, IntoIter, Postorder, Preorder};
use crate::node::{self, Inserted, Link};
use crate::order::{Comparator, Natural};

/// An unbalanced binary search tree of values ordered by a [`Comparator`].
///
/// For every node, the values in its left subtree compare less than its own value and the
/// values in its right subtree compare greater. Adding a value that compares equal to one
/// already stored overwrites the stored value instead of adding a node.
///
/// The tree never rebalances, so its shape depends on the order values are added in. Values
/// added in sorted order produce a tree as tall as it is long. Every operation walks the tree
/// iteratively, so tall trees are slow but safe.
pub struct Tree<T, C = Natural> {
    root: Link<T>,
    len: usize,
    order: C,
}

impl<T: Ord> Tree<T> {
    /// Generates a new, empty `Tree` ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> Tree<T, C> {
    /// Generates a new, empty `Tree` ordered by `order`. The order can't be changed later.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree = Tree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// tree.add_all([1, 3, 2]);
    ///
    /// assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn with_comparator(order: C) -> Self {
        Self {
            root: None,
            len: 0,
            order,
        }
    }

    /// Starts configuring a tree. See [`TreeBuilder`].
    pub fn builder() -> TreeBuilder<T, C> {
        TreeBuilder::new()
    }

    /// The comparator every operation on this tree orders by.
    pub fn comparator(&self) -> &C {
        &self.order
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.len == 0, self.root.is_none());
        self.len == 0
    }

    /// Levels on the longest path from the root to a leaf. An empty tree has height 0.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// The smallest value in the tree.
    pub fn first(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value in the tree.
    pub fn last(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        log::debug!("clearing tree of {} values", self.len);
        node::dismantle(&mut self.root);
        self.len = 0;
    }

    /// Walks the tree in preorder. This is the tree's default iteration order.
    pub fn iter(&self) -> Preorder<'_, T> {
        self.preorder()
    }

    /// Walks the tree visiting each node, then its left subtree, then its right subtree.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(&self.root, self.len)
    }

    /// Walks the tree visiting each node's left subtree, then the node, then its right
    /// subtree. This yields values in ascending order.
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(&self.root, self.len)
    }

    /// Walks the tree visiting each node's subtrees, left then right, before the node.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(&self.root, self.len)
    }

    /// The first value, in preorder, that satisfies `predicate`. This scans the tree; it can't
    /// use the ordering to skip subtrees.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|value| predicate(*value))
    }

    /// Every value, in preorder, that satisfies `predicate`.
    pub fn find_all<P>(&self, mut predicate: P) -> Vec<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|value| predicate(*value)).collect()
    }

    /// Returns `true` if any stored value is equal to `value` according to `eq`.
    ///
    /// Unlike [`contains`][Tree::contains] this ignores the tree's ordering and checks every
    /// value, so `eq` may be any equivalence at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<&str> = ["Apple", "banana"].into_iter().collect();
    ///
    /// assert!(!tree.contains(&"apple"));
    /// assert!(tree.contains_by(&"apple", |a, b| a.eq_ignore_ascii_case(b)));
    /// ```
    pub fn contains_by<E>(&self, value: &T, mut eq: E) -> bool
    where
        E: FnMut(&T, &T) -> bool,
    {
        self.iter().any(|stored| eq(stored, value))
    }

    /// Copies the values, in preorder, into `destination` starting at `start`.
    ///
    /// # Errors
    ///
    /// Fails without touching `destination` if `start` is past its end or if the values
    /// don't all fit after `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Tree, TreeError};
    ///
    /// let tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    /// let mut buffer = [0; 5];
    ///
    /// tree.copy_to(&mut buffer, 1)?;
    /// assert_eq!(buffer, [0, 2, 1, 3, 0]);
    ///
    /// assert!(tree.copy_to(&mut buffer, 3).is_err());
    /// # Ok::<(), TreeError>(())
    /// ```
    pub fn copy_to(&self, destination: &mut [T], start: usize) -> Result<(), TreeError>
    where
        T: Clone,
    {
        let len = destination.len();
        if start > len {
            return Err(TreeError::IndexOutOfRange { index: start, len });
        }
        let available = len - start;
        if available < self.len {
            return Err(TreeError::InsufficientSpace {
                needed: self.len,
                available,
            });
        }

        for (slot, value) in destination[start..].iter_mut().zip(self.iter()) {
            slot.clone_from(value);
        }
        Ok(())
    }

    /// Copies the values, in preorder, into a new `Vec` of exactly [`len`][Tree::len] values.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T, C> Tree<T, C>
where
    C: Comparator<T>,
{
    /// Generates a `Tree` ordered by `order` holding `values`. Values are added one at a time
    /// in iteration order, which determines the tree's shape.
    pub fn from_iter_with<I>(values: I, order: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::with_comparator(order);
        tree.add_all(values);
        tree
    }

    /// Adds `value` to the tree. If an equal value is already stored, `value` takes its place
    /// and the old value is returned; the tree's length is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree = Tree::with_comparator(|a: &(u8, &str), b: &(u8, &str)| a.0.cmp(&b.0));
    ///
    /// assert_eq!(tree.add((1, "one")), None);
    /// assert_eq!(tree.add((1, "uno")), Some((1, "one")));
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.get(&(1, "")), Some(&(1, "uno")));
    /// ```
    pub fn add(&mut self, value: T) -> Option<T> {
        match node::insert(&mut self.root, value, &self.order) {
            Inserted::Created => {
                self.len += 1;
                None
            }
            Inserted::Replaced(old) => Some(old),
        }
    }

    /// Adds each of `values` in turn.
    pub fn add_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.add(value);
        }
    }

    /// The stored value that compares equal to `value`, if there is one.
    pub fn get(&self, value: &T) -> Option<&T> {
        node::search(&self.root, value, &self.order).map(|n| &n.value)
    }

    /// Returns `true` if a stored value compares equal to `value` under the tree's ordering.
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Removes the value that compares equal to `value` and returns it.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let removed = node::remove(&mut self.root, value, &self.order)?;
        self.len -= 1;
        Some(removed)
    }

    /// Removes the value that compares equal to `value`. Returns `false`, leaving the tree as
    /// it was, if there is no such value.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes every value that satisfies `predicate` and returns how many were removed.
    ///
    /// Matches are collected in a first pass and removed afterwards, so `predicate` always
    /// sees the tree as it was before the call.
    pub fn remove_where<P>(&mut self, mut predicate: P) -> usize
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let doomed: Vec<T> = self
            .iter()
            .filter(|value| predicate(*value))
            .cloned()
            .collect();

        doomed.iter().filter(|value| self.remove(value)).count()
    }
}

impl<T: Ord> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Drop for Tree<T, C> {
    fn drop(&mut self) {
        node::dismantle(&mut self.root);
    }
}

/// Cloning replays the preorder sequence into a new tree, which rebuilds the exact same shape.
impl<T, C> Clone for Tree<T, C>
where
    T: Clone,
    C: Comparator<T> + Clone,
{
    fn clone(&self) -> Self {
        Self::from_iter_with(self.iter().cloned(), self.order.clone())
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, Natural)
    }
}

impl<T, C> Extend<T> for Tree<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = Preorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> IntoIterator for Tree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = std::mem::take(&mut self.len);
        IntoIter::new(self.root.take(), len)
    }
}
