//! The two caller-supplied capabilities every container leans on.
//!
//! A [`Comparator`] is handed to each ordered operation; containers never store one. Any
//! `FnMut(&T, &T) -> Ordering` closure is a comparator, so `Ord::cmp` works directly:
//!
//! ```
//! use containers::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert(3, i32::cmp).unwrap();
//! tree.insert(1, |a: &i32, b: &i32| a.cmp(b)).unwrap();
//!
//! assert_eq!(tree.find(&1, i32::cmp), Some(&1));
//! ```
//!
//! A [`Visitor`] is applied to every element of a container together with a context the
//! caller owns for the duration of the walk. A [`VisitorMut`] is the same but may change the
//! element in place, e.g. the payload behind an `Array<Box<P>>`.

use std::cmp::Ordering;

/// A three-way comparison. Must be a strict total order, consistent for the whole of the
/// operation it is passed to.
pub trait Comparator<T: ?Sized> {
    /// Orders `a` relative to `b`.
    fn compare(&mut self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Caller-defined work applied to one element at a time. A visitor only ever sees shared
/// references, so it cannot restructure the container it is called from.
pub trait Visitor<T: ?Sized, C: ?Sized> {
    /// Called once per element.
    fn visit(&mut self, elem: &T, context: &mut C);
}

impl<T, C, F> Visitor<T, C> for F
where
    T: ?Sized,
    C: ?Sized,
    F: FnMut(&T, &mut C),
{
    fn visit(&mut self, elem: &T, context: &mut C) {
        self(elem, context)
    }
}

/// A [`Visitor`] that gets each element mutably. It still can't add or remove elements.
pub trait VisitorMut<T: ?Sized, C: ?Sized> {
    /// Called once per element.
    fn visit_mut(&mut self, elem: &mut T, context: &mut C);
}

impl<T, C, F> VisitorMut<T, C> for F
where
    T: ?Sized,
    C: ?Sized,
    F: FnMut(&mut T, &mut C),
{
    fn visit_mut(&mut self, elem: &mut T, context: &mut C) {
        self(elem, context)
    }
}

/// The comparator for types that already have a total order.
pub fn natural<T: Ord + ?Sized>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Orders by `natural` backwards. Handy for keeping a `Tree` in descending order.
pub fn reverse<T: Ord + ?Sized>(a: &T, b: &T) -> Ordering {
    b.cmp(a)
}
