use containers::{callback::natural, Error, Tree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

fn in_order<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    let mut out = Vec::new();
    tree.traverse(|x: &T, out: &mut Vec<T>| out.push(x.clone()), &mut out);
    out
}

/// Applies a set of operations to a tree and a `BTreeSet`, counting successful inserts and
/// removes along the way.
fn do_ops(ops: &[Op<i8>], bst: &mut Tree<i8>, set: &mut BTreeSet<i8>) -> (usize, usize) {
    let (mut inserted, mut removed) = (0, 0);
    for op in ops {
        match op {
            Op::Insert(x) => match bst.insert(*x, natural) {
                Ok(()) => {
                    assert!(set.insert(*x));
                    inserted += 1;
                }
                Err(refused) => {
                    assert_eq!(
                        refused.error(),
                        &Error::InvalidOperation("element already present")
                    );
                    assert_eq!(refused.into_inner(), *x);
                    assert!(set.contains(x));
                }
            },
            Op::Remove(x) => {
                let result = bst.remove(x, natural);
                assert_eq!(result, set.take(x));
                if result.is_some() {
                    removed += 1;
                }
            }
        }
    }

    (inserted, removed)
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    let (inserted, removed) = do_ops(&ops, &mut tree, &mut set);
    tree.len() == inserted - removed
        && set.iter().all(|x| tree.find(x, natural) == Some(x))
        && in_order(&tree) == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn traversal_is_strictly_ascending(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in xs {
        let _ = tree.insert(x, natural);
    }

    in_order(&tree).windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        let _ = tree.insert(*x, natural);
    }
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x, natural).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        let _ = tree.insert(*x, natural);
    }
    for delete in &deletes {
        tree.remove(delete, natural);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.find(x, natural).is_none())
        && still_present.iter().all(|x| tree.find(x, natural).is_some())
}

#[test]
fn round_trip() {
    let mut tree = Tree::new();
    for x in [5, 3, 7, 2, 4, 6, 8] {
        tree.insert(x, natural).unwrap();
    }

    assert_eq!(in_order(&tree), [2, 3, 4, 5, 6, 7, 8]);
}
