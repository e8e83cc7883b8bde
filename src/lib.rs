//! This crate exposes three small generic containers: a fixed-size [`BitVector`], an
//! unbalanced binary search [`Tree`], and a growable [`Array`].
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element
//! and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree hold an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree hold an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`, where `height` is the longest path from the root `Node` to a
//! leaf `Node`. This tree does no rebalancing, so inserting in sorted order degrades it to a
//! list. BSTs also naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree.
//!
//! ## Comparators and visitors
//!
//! None of the containers require `T: Ord`. Ordered operations take a
//! [`Comparator`](callback::Comparator) per call and traversals take a
//! [`Visitor`](callback::Visitor) plus a context; plain closures are both. See [`callback`].
//!
//! ## Errors
//!
//! Refused operations return an [`Error`] and leave the container untouched. Operations that
//! take ownership of an element wrap the error in a [`Refused`], which hands the element back.
//! Nothing panics on bad input.
//!
//! None of the containers synchronize internally; share them across threads the way you
//! would share a `Vec`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod array;
pub mod bitvector;
pub mod callback;
pub mod error;
pub mod tree;


pub use array::Array;
pub use bitvector::BitVector;
pub use error::{Error, Refused, Result};
pub use tree::Tree;
