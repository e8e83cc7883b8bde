//! A growable array. Elements stay in insertion order until something is removed: removal
//! moves the last element into the hole, so it's `O(1)` but doesn't keep order.
//!
//! # Examples
//!
//! ```
//! use containers::{callback::natural, Array};
//!
//! let mut array = Array::new();
//! assert_eq!(array.capacity(), 0);
//!
//! for x in [1, 2, 3, 4] {
//!     array.add(x).unwrap();
//! }
//! assert_eq!(array.at(0), Some(&1));
//! assert!(array.capacity() >= array.len());
//!
//! // The last element fills the gap.
//! assert_eq!(array.remove_by_value(&1, natural), Some(1));
//! assert_eq!(array.as_slice(), [4, 2, 3]);
//! ```
//!
//! # Payload ownership
//!
//! An `Array<T>` owns its `T`s and drops them along with itself. Which payloads that releases
//! is chosen by the element type: an `Array<&Payload>` leaves every payload with its owner,
//! an `Array<Box<Payload>>` frees them. [`Array::dispose`] hands each element to a callback
//! instead.

use std::fmt;
use std::slice;

use crate::callback::{Comparator, Visitor, VisitorMut};
use crate::error::{Error, Refused, Result};

/// The capacity of the first allocation.
pub const MIN_CAPACITY: usize = 10;

/// A growable array of `T`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Array<T> {
    elems: Vec<T>,
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Array<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elems.iter()).finish()
    }
}

impl<T> Array<T> {
    /// Creates an empty array. Nothing is allocated until the first [`add`](Self::add).
    pub fn new() -> Self {
        Self { elems: Vec::new() }
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Whether there are no elements.
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// How many elements fit before the next reallocation.
    pub fn capacity(&self) -> usize {
        self.elems.capacity()
    }

    /// Appends `elem`. When the array is full, capacity grows to the larger of
    /// [`MIN_CAPACITY`] and one and a half times the current capacity. If that allocation
    /// fails the array is unchanged and `elem` comes back in a [`Refused`] holding
    /// [`Error::OutOfMemory`].
    pub fn add(&mut self, elem: T) -> std::result::Result<(), Refused<T>> {
        if self.len() == self.capacity() {
            let capacity = self.capacity();
            let grown = capacity.saturating_add(capacity / 2).max(MIN_CAPACITY);
            if let Err(err) = self.grow_to(grown) {
                return Err(Refused::new(err, elem));
            }
        }

        self.elems.push(elem);
        Ok(())
    }

    /// The element at `idx`, if there is one.
    pub fn at(&self, idx: usize) -> Option<&T> {
        self.elems.get(idx)
    }

    /// The element at `idx`, mutably, if there is one.
    pub fn at_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.elems.get_mut(idx)
    }

    /// The first element comparing equal to `elem`.
    pub fn find<C>(&self, elem: &T, mut cmp: C) -> Option<&T>
    where
        C: Comparator<T>,
    {
        self.position(elem, &mut cmp).map(|idx| &self.elems[idx])
    }

    /// Removes the first element comparing equal to `elem` and returns it. The last element
    /// takes its place.
    pub fn remove_by_value<C>(&mut self, elem: &T, mut cmp: C) -> Option<T>
    where
        C: Comparator<T>,
    {
        let idx = self.position(elem, &mut cmp)?;
        Some(self.elems.swap_remove(idx))
    }

    /// Removes the element at `idx` and returns it. The last element takes its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::{Array, Error};
    ///
    /// let mut array = Array::new();
    /// array.add('a').unwrap();
    /// array.add('b').unwrap();
    ///
    /// assert_eq!(array.remove_at(2), Err(Error::OutOfRange { index: 2, len: 2 }));
    /// assert_eq!(array.remove_at(0), Ok('a'));
    /// assert_eq!(array.as_slice(), ['b']);
    /// ```
    pub fn remove_at(&mut self, idx: usize) -> Result<T> {
        if idx >= self.len() {
            tracing::debug!(idx, len = self.len(), "array index out of range");
            return Err(Error::OutOfRange {
                index: idx,
                len: self.len(),
            });
        }

        Ok(self.elems.swap_remove(idx))
    }

    /// Resizes the backing storage to exactly `capacity` slots. Asking for fewer slots than
    /// there are elements is an [`Error::InvalidOperation`]; nothing is ever truncated.
    ///
    /// Shrinking allocates the smaller buffer first and moves the elements into it, so a
    /// failed allocation is an [`Error::OutOfMemory`] with the array untouched.
    pub fn reserve(&mut self, capacity: usize) -> Result<()> {
        if capacity < self.len() {
            tracing::debug!(capacity, len = self.len(), "rejected truncating reserve");
            return Err(Error::InvalidOperation("reserve would truncate the array"));
        }

        if capacity < self.capacity() {
            self.shrink_to(capacity)
        } else {
            self.grow_to(capacity)
        }
    }

    /// Drops every unused slot. Same as `reserve(len)`.
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        self.reserve(self.len())
    }

    /// Applies `visitor` to every element in index order, passing `context` along.
    pub fn foreach<V, Ctx>(&self, mut visitor: V, context: &mut Ctx)
    where
        V: Visitor<T, Ctx>,
        Ctx: ?Sized,
    {
        for elem in &self.elems {
            visitor.visit(elem, context);
        }
    }

    /// Applies `visitor` to every element in index order with mutable access, passing
    /// `context` along.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Array;
    ///
    /// let mut array = Array::new();
    /// array.add(Box::new(1)).unwrap();
    /// array.add(Box::new(2)).unwrap();
    ///
    /// array.foreach_mut(|p: &mut Box<i32>, by: &mut i32| **p *= *by, &mut 3);
    /// assert_eq!(array.as_slice(), [Box::new(3), Box::new(6)]);
    /// ```
    pub fn foreach_mut<V, Ctx>(&mut self, mut visitor: V, context: &mut Ctx)
    where
        V: VisitorMut<T, Ctx>,
        Ctx: ?Sized,
    {
        for elem in &mut self.elems {
            visitor.visit_mut(elem, context);
        }
    }

    /// Iterates over the elements in index order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elems.iter()
    }

    /// The elements in index order.
    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    /// Removes every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.elems.clear();
    }

    /// Consumes the array, returning its elements in index order.
    pub fn into_vec(self) -> Vec<T> {
        self.elems
    }

    /// Consumes the array, passing every element to `release` in index order.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Array;
    ///
    /// let mut array = Array::new();
    /// array.add(Box::new(1)).unwrap();
    /// array.add(Box::new(2)).unwrap();
    ///
    /// let mut released = Vec::new();
    /// array.dispose(|payload| released.push(*payload));
    /// assert_eq!(released, [1, 2]);
    /// ```
    pub fn dispose<F>(self, release: F)
    where
        F: FnMut(T),
    {
        self.elems.into_iter().for_each(release);
    }

    fn position<C>(&self, elem: &T, cmp: &mut C) -> Option<usize>
    where
        C: Comparator<T>,
    {
        self.elems
            .iter()
            .position(|candidate| cmp.compare(elem, candidate).is_eq())
    }

    /// Reallocates so exactly `capacity` slots exist. `capacity` must be at least the current
    /// capacity.
    fn grow_to(&mut self, capacity: usize) -> Result<()> {
        let additional = capacity - self.len();
        if let Err(err) = self.elems.try_reserve_exact(additional) {
            tracing::debug!(capacity, %err, "array allocation failed");
            return Err(err.into());
        }

        tracing::trace!(capacity = self.capacity(), len = self.len(), "grew array");
        Ok(())
    }

    /// Moves the elements into a new buffer of exactly `capacity` slots. `capacity` must be at
    /// least the current length.
    fn shrink_to(&mut self, capacity: usize) -> Result<()> {
        let mut shrunk = Vec::new();
        if let Err(err) = shrunk.try_reserve_exact(capacity) {
            tracing::debug!(capacity, %err, "array allocation failed");
            return Err(err.into());
        }

        tracing::trace!(from = self.capacity(), to = capacity, "shrinking array");
        shrunk.append(&mut self.elems);
        self.elems = shrunk;
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
