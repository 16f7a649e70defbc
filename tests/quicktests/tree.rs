use ordtree::order::{CaseInsensitive, Comparator, Natural};
use ordtree::{Tree, TreeBuilder};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Add(value) => {
                tree.add(value.clone());
                set.insert(value.clone());
            }
            Op::Remove(value) => {
                tree.remove(value);
                set.remove(value);
            }
            Op::RemoveBelow(bound) => {
                tree.remove_where(|value| value < bound);
                set.retain(|value| value >= bound);
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.len() == set.len() && tree.inorder().eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();
        let added: BTreeSet<_> = xs.into_iter().collect();
        let nots: BTreeSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn len_counts_distinct_values(xs: Vec<u8>) -> bool {
        let tree: Tree<u8> = xs.iter().copied().collect();
        let distinct: BTreeSet<_> = xs.into_iter().collect();

        tree.len() == distinct.len()
    }
}

quickcheck::quickcheck! {
    fn builder_matches_collect(xs: Vec<i16>) -> bool {
        let built = TreeBuilder::new().natural_order().values(xs.clone()).build();
        let collected: Tree<i16> = xs.into_iter().collect();

        built.map(|tree| tree.to_vec()) == Ok(collected.to_vec())
    }
}

quickcheck::quickcheck! {
    fn case_insensitive_inorder_is_sorted(words: Vec<String>) -> bool {
        let tree = Tree::from_iter_with(words, CaseInsensitive);
        let inorder: Vec<_> = tree.inorder().collect();

        inorder
            .windows(2)
            .all(|pair| CaseInsensitive.compare(pair[0], pair[1]).is_lt())
    }
}

#[test]
fn traversal_examples() {
    let mut tree: Tree<i32> = [100, 130, 50, 25, 70].into_iter().collect();

    assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), [100, 50, 25, 70, 130]);
    assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [25, 50, 70, 100, 130]);
    assert_eq!(tree.postorder().copied().collect::<Vec<_>>(), [25, 70, 50, 130, 100]);

    tree.add(140);
    assert_eq!(tree.to_vec(), [100, 50, 25, 70, 130, 140]);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), tree.to_vec());
}

#[test]
fn ascending_input_is_one_long_branch() {
    let mut tree = Tree::with_comparator(Natural);
    tree.add_all(0..5_000u32);

    assert_eq!(tree.height(), 5_000);
    assert_eq!(tree.first(), Some(&0));
    assert_eq!(tree.last(), Some(&4_999));
    assert_eq!(tree.remove_where(|v| v % 2 == 1), 2_500);
    assert_eq!(tree.height(), 2_500);
}
