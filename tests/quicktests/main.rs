use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

mod array;
mod bitvector;
mod tree;

/// An enum for the various kinds of "things" to do to
/// containers in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert (or append) the element
    Insert(T),
    /// Remove an element equal to this one
    Remove(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(T::arbitrary(g))
        } else {
            Op::Remove(T::arbitrary(g))
        }
    }
}

#[quickcheck]
fn containers_agree_on_membership(xs: Vec<u8>) -> bool {
    use containers::{callback::natural, Array, BitVector, Tree};

    let mut tree = Tree::new();
    let mut array = Array::new();
    let mut bits = BitVector::new(256).unwrap();
    for x in &xs {
        if tree.insert(*x, natural).is_ok() {
            array.add(*x).unwrap();
        }
        bits.set(*x as usize).unwrap();
    }

    let mut sorted = array.into_vec();
    sorted.sort_unstable();
    let ones: Vec<u8> = bits.iter_ones().map(|bit| bit as u8).collect();

    tree.iter().copied().eq(sorted.iter().copied()) && sorted == ones
}
