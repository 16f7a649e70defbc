//! Orderings a [`Tree`][crate::Tree] can be built with.
//!
//! Anything implementing [`Comparator`] can order a tree. Closures and
//! functions of the shape `Fn(&T, &T) -> Ordering` already do, so an ad-hoc
//! ordering rarely needs its own type.
//!
//! # Examples
//!
//! ```
//! use ordtree::order::{CaseInsensitive, Reverse};
//! use ordtree::Tree;
//!
//! let mut tree = Tree::with_comparator(Reverse(CaseInsensitive));
//! tree.add_all(["b", "A", "c"]);
//!
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), ["c", "b", "A"]);
//! ```

use std::cmp::Ordering;

/// A total ordering over `T`.
///
/// Implementations must be consistent: `compare(a, b)` is the reverse of
/// `compare(b, a)` and the relation is transitive. A tree's shape is only
/// meaningful under the comparator it was built with.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders values by their [`Ord`] implementation. This is what
/// [`Tree::new`][crate::Tree::new] uses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flips the ordering of the wrapped comparator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reverse<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Orders text without regard to case.
///
/// Strings that only differ by case fall back to their ordinal ordering so that
/// distinct strings never compare equal, e.g. `"Apple" < "apple" < "Banana"`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CaseInsensitive;

impl<T: AsRef<str> + ?Sized> Comparator<T> for CaseInsensitive {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let (a, b) = (a.as_ref(), b.as_ref());
        let folded = a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase));

        folded.then_with(|| a.cmp(b))
    }
}
