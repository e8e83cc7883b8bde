use containers::{callback::natural, Array, Error};
use quickcheck_macros::quickcheck;

use crate::Op;

#[quickcheck]
fn capacity_covers_len(xs: Vec<u32>) -> bool {
    let mut array = Array::new();
    for (k, x) in xs.iter().enumerate() {
        array.add(*x).unwrap();
        if array.len() != k + 1 || array.capacity() < array.len() {
            return false;
        }
    }

    array.iter().eq(xs.iter())
}

#[quickcheck]
fn truncating_reserve_changes_nothing(xs: Vec<u32>, n: usize) -> bool {
    let mut array = Array::new();
    for x in &xs {
        array.add(*x).unwrap();
    }
    let capacity = array.capacity();

    let unchanged = |array: &Array<u32>| {
        array.capacity() == capacity && array.as_slice() == xs.as_slice()
    };
    match array.reserve(n) {
        Ok(()) => n >= xs.len() && array.capacity() == n,
        Err(Error::InvalidOperation(_)) => n < xs.len() && unchanged(&array),
        // quickcheck likes to try `usize::MAX`.
        Err(Error::OutOfMemory(_)) => n >= xs.len() && unchanged(&array),
        Err(Error::OutOfRange { .. }) => false,
    }
}

#[quickcheck]
fn removal_keeps_survivors(ops: Vec<Op<u8>>) -> bool {
    let mut array = Array::new();
    let mut model: Vec<u8> = Vec::new();
    for op in ops {
        match op {
            Op::Insert(x) => {
                array.add(x).unwrap();
                model.push(x);
            }
            Op::Remove(x) => {
                let expected = model.iter().position(|y| *y == x).map(|i| model.remove(i));
                if array.remove_by_value(&x, natural) != expected {
                    return false;
                }
            }
        }
    }

    let mut survivors = array.into_vec();
    survivors.sort_unstable();
    model.sort_unstable();
    survivors == model
}
