//! This crate exposes an ordered collection backed by an unbalanced Binary Search Tree (BST)
//! whose ordering is chosen by the caller.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! "Less" and "greater" here are decided by a [`Comparator`][order::Comparator], fixed when
//! the [`Tree`] is made. Searching takes `O(height)`, where `height` is the longest path from
//! the root `Node` to a leaf `Node`. [`Tree`] never rebalances itself, so values added in
//! sorted order give it a height equal to its length.
//!
//! A tree can be walked three ways, each a lazy [iterator][iter]:
//!
//! * preorder: a node, then its left subtree, then its right subtree. Default iteration.
//! * inorder: left subtree, node, right subtree. This is sorted order.
//! * postorder: left subtree, right subtree, then the node.
//!
//! # Examples
//!
//! ```
//! use ordtree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.add_all([100, 130, 50, 25, 70]);
//!
//! assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), [100, 50, 25, 70, 130]);
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [25, 50, 70, 100, 130]);
//! assert_eq!(tree.postorder().copied().collect::<Vec<_>>(), [25, 70, 50, 130, 100]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod builder;
pub mod error;
pub mod iter;
mod node;
pub mod order;
pub mod tree;


pub use builder::TreeBuilder;
pub use error::TreeError;
pub use tree::Tree;
