//! An unbalanced Binary Search Tree. The tree never stores its comparator: every ordered
//! operation is handed one, and it must agree with the one the tree was built with.
//!
//! # Examples
//!
//! ```
//! use containers::{callback::natural, Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1, natural), None);
//!
//! tree.insert(1, natural).unwrap();
//! assert_eq!(tree.find(&1, natural), Some(&1));
//!
//! // Equal elements can't coexist; the refused element comes back.
//! let refused = tree.insert(1, natural).unwrap_err();
//! assert!(matches!(refused.error(), Error::InvalidOperation(_)));
//! assert_eq!(refused.into_inner(), 1);
//! assert_eq!(tree.len(), 1);
//!
//! // Removing an element hands it back.
//! assert_eq!(tree.remove(&1, natural), Some(1));
//! assert!(tree.is_empty());
//! ```
//!
//! Elements are stored as given. To keep payloads owned by the caller, store references:
//!
//! ```
//! use containers::Tree;
//!
//! let names = ["mallory".to_string(), "alice".to_string(), "bob".to_string()];
//! let mut tree = Tree::new();
//! for name in &names {
//!     tree.insert(name, |a: &&String, b: &&String| a.cmp(b)).unwrap();
//! }
//!
//! let sorted: Vec<&str> = tree.iter().map(|s| s.as_str()).collect();
//! assert_eq!(sorted, ["alice", "bob", "mallory"]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::callback::{Comparator, Visitor};
use crate::error::{Error, Refused};

/// A Binary Search Tree holding distinct elements in comparator order. Elements in a node's
/// left subtree compare less than the node's element, elements in its right subtree compare
/// greater.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `elem` at its position under `cmp`. If an equal element is already present
    /// the tree is unchanged and `elem` comes back in a [`Refused`] holding
    /// [`Error::InvalidOperation`].
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::{callback::natural, Tree};
    ///
    /// let mut tree = Tree::new();
    /// for x in [5, 3, 7] {
    ///     tree.insert(x, natural).unwrap();
    /// }
    ///
    /// assert!(tree.insert(3, natural).is_err());
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn insert<C>(&mut self, elem: T, mut cmp: C) -> Result<(), Refused<T>>
    where
        C: Comparator<T>,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match cmp.compare(&elem, &node.elem) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    tracing::debug!(len = self.len, "rejected duplicate insert");
                    let error = Error::InvalidOperation("element already present");
                    return Err(Refused::new(error, elem));
                }
            };
        }

        *slot = Some(Node::new_boxed(elem));
        self.len += 1;
        tracing::trace!(len = self.len, "inserted node");
        Ok(())
    }

    /// [`insert`](Self::insert) for callers whose element may be missing. A missing element
    /// is an [`Error::InvalidOperation`]. Whatever was passed in comes back on refusal.
    pub fn insert_opt<C>(&mut self, elem: Option<T>, cmp: C) -> Result<(), Refused<Option<T>>>
    where
        C: Comparator<T>,
    {
        match elem {
            Some(elem) => self.insert(elem, cmp).map_err(|refused| {
                let error = refused.error().clone();
                Refused::new(error, Some(refused.into_inner()))
            }),
            None => Err(Refused::new(
                Error::InvalidOperation("no element to insert"),
                None,
            )),
        }
    }

    /// Potentially finds the stored element comparing equal to `elem`. If no element does,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::{callback::natural, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, natural).unwrap();
    ///
    /// assert_eq!(tree.find(&1, natural), Some(&1));
    /// assert_eq!(tree.find(&42, natural), None);
    /// ```
    pub fn find<C>(&self, elem: &T, mut cmp: C) -> Option<&T>
    where
        C: Comparator<T>,
    {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match cmp.compare(elem, &node.elem) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.elem),
            };
        }

        None
    }

    /// [`find`](Self::find) for callers whose key may be missing. A missing key finds nothing.
    pub fn find_opt<C>(&self, elem: Option<&T>, cmp: C) -> Option<&T>
    where
        C: Comparator<T>,
    {
        elem.and_then(|elem| self.find(elem, cmp))
    }

    /// Removes the stored element comparing equal to `elem` and returns it. If the tree has
    /// no such element, nothing happens and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::{callback::natural, Tree};
    ///
    /// let mut tree = Tree::new();
    /// for x in [5, 3, 7, 6, 8] {
    ///     tree.insert(x, natural).unwrap();
    /// }
    ///
    /// // 7 has two children.
    /// assert_eq!(tree.remove(&7, natural), Some(7));
    /// assert_eq!(tree.remove(&7, natural), None);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 5, 6, 8]);
    /// ```
    pub fn remove<C>(&mut self, elem: &T, mut cmp: C) -> Option<T>
    where
        C: Comparator<T>,
    {
        // Walk the parent's child slot rather than the node itself so a leaf can be unlinked.
        let mut slot = &mut self.root;
        loop {
            let ordering = cmp.compare(elem, &slot.as_deref()?.elem);
            slot = match ordering {
                Ordering::Less => &mut slot.as_mut()?.left,
                Ordering::Greater => &mut slot.as_mut()?.right,
                Ordering::Equal => break,
            };
        }

        let removed = Node::unlink(slot)?;
        self.len -= 1;
        Some(removed)
    }

    /// [`remove`](Self::remove) for callers whose key may be missing. A missing key removes
    /// nothing.
    pub fn remove_opt<C>(&mut self, elem: Option<&T>, cmp: C) -> Option<T>
    where
        C: Comparator<T>,
    {
        elem.and_then(|elem| self.remove(elem, cmp))
    }

    /// Applies `visitor` to every element in ascending order, passing `context` along.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::{callback::natural, Tree};
    ///
    /// let mut tree = Tree::new();
    /// for x in [2, 1, 3] {
    ///     tree.insert(x, natural).unwrap();
    /// }
    ///
    /// let mut seen = Vec::new();
    /// tree.traverse(|x: &i32, seen: &mut Vec<i32>| seen.push(*x), &mut seen);
    /// assert_eq!(seen, [1, 2, 3]);
    /// ```
    pub fn traverse<V, Ctx>(&self, mut visitor: V, context: &mut Ctx)
    where
        V: Visitor<T, Ctx>,
        Ctx: ?Sized,
    {
        for elem in self.iter() {
            visitor.visit(elem, context);
        }
    }

    /// Iterates over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Removes every element. Nodes are released children first, without recursing.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            match (node.left.take(), node.right.take()) {
                (None, None) => drop(node),
                (left, right) => {
                    stack.push(node);
                    stack.extend(left);
                    stack.extend(right);
                }
            }
        }
        self.len = 0;
    }

    /// Asserts that the elements are strictly ascending under `cmp` and that `len` matches
    /// the node count.
    #[cfg(test)]
    fn assert_ordered<C>(&self, mut cmp: C)
    where
        C: Comparator<T>,
    {
        let mut count = 0;
        let mut prev: Option<&T> = None;
        for elem in self.iter() {
            if let Some(prev) = prev {
                assert_eq!(cmp.compare(prev, elem), Ordering::Less);
            }
            prev = Some(elem);
            count += 1;
        }
        assert_eq!(count, self.len);
    }
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    elem: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(elem: T) -> Box<Self> {
        Box::new(Node {
            elem,
            left: None,
            right: None,
        })
    }

    /// Removes the node in `slot` from the tree and returns its element. The node's storage is
    /// only released when it is a leaf; otherwise a descendant's element is moved up into it
    /// and that descendant is released instead.
    fn unlink(slot: &mut Link<T>) -> Option<T> {
        let mut node = slot.take()?;
        match (node.left.take(), node.right.take()) {
            (None, None) => {
                tracing::trace!(case = "leaf", "removed node");
                Some(node.elem)
            }
            (Some(mut child), None) | (None, Some(mut child)) => {
                tracing::trace!(case = "single child", "removed node");
                mem::swap(&mut node.elem, &mut child.elem);
                // The child may have children of its own; the surviving node adopts them.
                node.left = child.left.take();
                node.right = child.right.take();
                *slot = Some(node);
                Some(child.elem)
            }
            (Some(left), Some(right)) => {
                tracing::trace!(case = "two children", "removed node");
                let mut right = Some(right);
                let Some(mut successor) = Self::take_leftmost(&mut right) else {
                    unreachable!("a non-empty subtree has a leftmost node");
                };
                mem::swap(&mut node.elem, &mut successor.elem);
                node.left = Some(left);
                node.right = right;
                *slot = Some(node);
                Some(successor.elem)
            }
        }
    }

    /// Detaches the leftmost node below `slot`. The detached node's right subtree takes its
    /// place.
    fn take_leftmost(mut slot: &mut Link<T>) -> Option<Box<Self>> {
        while slot.as_deref()?.left.is_some() {
            slot = &mut slot.as_mut()?.left;
        }

        let mut leftmost = slot.take()?;
        *slot = leftmost.right.take();
        Some(leftmost)
    }
}

/// An in-order iterator over a [`Tree`], see [`Tree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose left subtree has been visited (or is being visited) but which haven't been
    /// yielded yet.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
