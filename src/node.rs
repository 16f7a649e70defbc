//! The node graph behind a [`Tree`][crate::Tree] and the structural edits made to it.
//!
//! Every edit works on a [`Link`], the owned slot a node hangs from (either the tree's
//! root or one of a node's children). Descents move a `&mut Link` cursor down the tree
//! instead of recursing, so a badly skewed tree costs time but never stack.

use std::cmp::Ordering;
use std::mem;

use crate::order::Comparator;

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

/// Outcome of [`insert`].
pub(crate) enum Inserted<T> {
    /// A new node was created in an empty slot.
    Created,
    /// A node already held an equal value. It now holds the new one and this is the old one.
    Replaced(T),
}

/// Walks down from `slot` to the slot holding a value equal to `value`, or to the empty
/// slot where such a value would be attached.
pub(crate) fn locate<'a, T, C>(mut slot: &'a mut Link<T>, value: &T, order: &C) -> &'a mut Link<T>
where
    C: Comparator<T> + ?Sized,
{
    loop {
        let direction = match slot.as_deref() {
            Some(node) => order.compare(value, &node.value),
            None => return slot,
        };
        slot = match (direction, slot) {
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, found) => return found,
        };
    }
}

/// Read-only counterpart of [`locate`]: the node holding a value equal to `value`.
pub(crate) fn search<'a, T, C>(mut link: &'a Link<T>, value: &T, order: &C) -> Option<&'a Node<T>>
where
    C: Comparator<T> + ?Sized,
{
    while let Some(node) = link {
        link = match order.compare(value, &node.value) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return Some(node),
        };
    }

    None
}

/// Puts `value` into the subtree hanging from `root`. An equal value already in the subtree
/// is overwritten in place rather than duplicated.
pub(crate) fn insert<T, C>(root: &mut Link<T>, value: T, order: &C) -> Inserted<T>
where
    C: Comparator<T> + ?Sized,
{
    let slot = locate(root, &value, order);
    match slot {
        Some(node) => Inserted::Replaced(mem::replace(&mut node.value, value)),
        None => {
            *slot = Some(Node::new_boxed(value));
            Inserted::Created
        }
    }
}

/// Removes the value equal to `value` from the subtree hanging from `root`, returning it.
pub(crate) fn remove<T, C>(root: &mut Link<T>, value: &T, order: &C) -> Option<T>
where
    C: Comparator<T> + ?Sized,
{
    unlink(locate(root, value, order))
}

/// Detaches the node in `slot`, keeping the subtree below it ordered, and returns its value.
///
/// * A leaf is simply dropped from its slot.
/// * A node with one child is replaced by that child.
/// * A node with two children stays where it is. Its in-order successor (the leftmost node
///   of its right subtree) is unlinked instead, and the successor's value moves up into it.
///   The successor never has a left child, so unlinking it always falls into one of the
///   first two cases.
pub(crate) fn unlink<T>(slot: &mut Link<T>) -> Option<T> {
    let node = slot.as_mut()?;
    if node.left.is_some() && node.right.is_some() {
        let successor = leftmost(&mut node.right);
        log::trace!("two children, promoting in-order successor");
        let promoted = unlink(successor)?;
        return Some(mem::replace(&mut node.value, promoted));
    }

    let Node { value, left, right } = *slot.take()?;
    if left.is_some() || right.is_some() {
        log::trace!("one child, lifting it into the vacated slot");
    }
    *slot = left.or(right);
    Some(value)
}

/// The slot holding the smallest value of the subtree hanging from `slot`.
pub(crate) fn leftmost<T>(mut slot: &mut Link<T>) -> &mut Link<T> {
    loop {
        let descend = slot.as_deref().is_some_and(|node| node.left.is_some());
        if !descend {
            return slot;
        }
        slot = match slot {
            Some(node) => &mut node.left,
            None => return slot,
        };
    }
}

/// Levels on the longest path from `root` down to a leaf.
pub(crate) fn height<T>(root: &Link<T>) -> usize {
    let mut deepest = 0;
    let mut pending: Vec<(&Node<T>, usize)> = root.as_deref().map(|n| (n, 1)).into_iter().collect();
    while let Some((node, depth)) = pending.pop() {
        deepest = deepest.max(depth);
        pending.extend(node.left.as_deref().map(|n| (n, depth + 1)));
        pending.extend(node.right.as_deref().map(|n| (n, depth + 1)));
    }

    deepest
}

/// Tears down the subtree hanging from `root` without recursing into `Box`'s drop glue.
pub(crate) fn dismantle<T>(root: &mut Link<T>) {
    let mut pending: Vec<Box<Node<T>>> = root.take().into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}
