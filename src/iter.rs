//! Lazy traversals over a [`Tree`][crate::Tree].
//!
//! Each traversal keeps its own stack of pending nodes and does no work until it is
//! pulled. Asking the tree for a traversal again always starts a fresh walk from the root.
//! The borrowing iterators hold a shared borrow of the tree, so the tree can't be changed
//! underneath a walk that is still in progress.

use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// Visits each node before its left subtree, then its right subtree.
///
/// Created by [`Tree::preorder`][crate::Tree::preorder] or [`Tree::iter`][crate::Tree::iter].
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        Self {
            stack: root.as_deref().into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so that the left subtree is walked first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Visits each node's left subtree, then the node, then its right subtree. Values come out
/// in ascending order under the tree's comparator.
///
/// Created by [`Tree::inorder`][crate::Tree::inorder].
pub struct Inorder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut next: Option<&'a Node<T>>) {
        while let Some(node) = next {
            self.stack.push(node);
            next = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Visits each node's left subtree, then its right subtree, then the node itself.
///
/// Created by [`Tree::postorder`][crate::Tree::postorder].
pub struct Postorder<'a, T> {
    /// Pending nodes, flagged once their children have been scheduled.
    stack: Vec<(&'a Node<T>, bool)>,
    remaining: usize,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        Self {
            stack: root.as_deref().map(|n| (n, false)).into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                self.remaining -= 1;
                return Some(&node.value);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|n| (n, false)));
            self.stack.extend(node.left.as_deref().map(|n| (n, false)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

// Cloning a traversal copies its cursor, not the values, so `T: Clone` isn't needed.
impl<T> Clone for Preorder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T> Clone for Inorder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T> Clone for Postorder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T> ExactSizeIterator for Preorder<'_, T> {}
impl<T> ExactSizeIterator for Inorder<'_, T> {}
impl<T> ExactSizeIterator for Postorder<'_, T> {}

impl<T> FusedIterator for Preorder<'_, T> {}
impl<T> FusedIterator for Inorder<'_, T> {}
impl<T> FusedIterator for Postorder<'_, T> {}

/// An owning preorder traversal that hands out the tree's values.
///
/// Created by calling `into_iter` on a [`Tree`][crate::Tree].
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { value, left, right } = *node;
        self.stack.extend(right);
        self.stack.extend(left);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    // Unvisited subtrees are drained one node at a time instead of through recursive drops.
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}
