use containers::{BitVector, Error};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn set_get_clear(len: u16, bits: Vec<u16>) -> bool {
    let len = len as usize + 1;
    let mut vector = BitVector::new(len).unwrap();

    bits.iter().map(|bit| *bit as usize).all(|bit| {
        if bit >= len {
            return vector.set(bit) == Err(Error::OutOfRange { index: bit, len })
                && vector.get(bit) == Err(Error::OutOfRange { index: bit, len });
        }
        vector.set(bit).is_ok()
            && vector.get(bit) == Ok(true)
            && vector.clear(bit).is_ok()
            && vector.get(bit) == Ok(false)
    })
}

#[quickcheck]
fn flip_twice_restores(len: u16, bit: u16, initially_set: bool) -> bool {
    let len = len as usize + 1;
    let bit = bit as usize % len;
    let mut vector = BitVector::new(len).unwrap();
    if initially_set {
        vector.set(bit).unwrap();
    }

    vector.flip(bit).unwrap();
    let flipped = vector.get(bit) == Ok(!initially_set);
    vector.flip(bit).unwrap();
    flipped && vector.get(bit) == Ok(initially_set)
}

#[quickcheck]
fn bulk_ops(len: u16) -> bool {
    let len = len as usize + 1;
    let mut vector = BitVector::new(len).unwrap();

    vector.set_all();
    let all_set = (0..len).all(|i| vector.get(i) == Ok(true)) && vector.count_ones() == len;
    vector.clear_all();
    let all_clear = (0..len).all(|i| vector.get(i) == Ok(false)) && vector.count_ones() == 0;

    all_set && all_clear && vector.get(len).is_err()
}

#[test]
fn size_five() {
    let mut vector = BitVector::new(5).unwrap();
    vector.set(1).unwrap();

    assert_eq!(vector.len(), 5);
    assert_eq!(vector.get(1), Ok(true));
    assert_eq!(vector.get(5), Err(Error::OutOfRange { index: 5, len: 5 }));
}
