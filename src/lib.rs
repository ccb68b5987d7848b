//! This crate provides an ordered, duplicate-tolerant Binary Search Tree
//! ([`Tree`]) along with a unique-key [`Map`] and a unique-value [`Set`]
//! built on top of it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of the trees
//! in this crate are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key less
//!    than its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key
//!    greater than *or equal to* its own key.
//!
//! The second invariant is where [`Tree`] departs from a textbook BST: equal
//! keys are allowed, and every insertion of an equal key descends to the
//! right. That makes the tree a multimap: in-order traversal visits keys in
//! non-decreasing order, and entries sharing a key are visited in the order
//! they were inserted.
//!
//! Each node also holds a non-owning link to its parent, which is what makes
//! cheap bidirectional in-order iteration possible (see [`iter::Cursor`]):
//! stepping to a successor either descends into the right subtree or climbs
//! back out of one.
//!
//! ## No rebalancing
//!
//! None of the structures here rebalance. Searching, inserting, and deleting
//! all take `O(height)`, and the height is only `O(lg N)` when insertions
//! arrive in a friendly order. Inserting sorted keys degrades the tree into
//! a linked list with `O(N)` operations. Teardown, cloning, and iteration are
//! written iteratively, so even a degenerate chain won't overflow the call
//! stack; only your patience is at risk.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod iter;
pub mod map;
pub mod set;
pub mod tree;

pub use map::Map;
pub use set::Set;
pub use tree::Tree;
