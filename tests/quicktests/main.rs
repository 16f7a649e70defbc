use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Clone, Debug)]
pub enum Op<T> {
    /// Add the value to the collection
    Add(T),
    /// Remove the value from the collection
    Remove(T),
    /// Remove every value matching a predicate
    RemoveBelow(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2]).unwrap() {
            0 => Op::Add(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::RemoveBelow(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
