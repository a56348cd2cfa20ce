//! A binary search tree over any totally ordered element type.
//!
//! A [`Tree`] is built from a collection in one step, producing a tree of
//! minimal height holding the distinct elements of the collection. It then
//! supports insertion, deletion and lookup of single elements, three
//! depth-first traversal orders and one breadth-first order, height and depth
//! queries, a balance check and an explicit [`Tree::rebalance()`].
//!
//! The tree does not rebalance itself: insertions and deletions keep the
//! ordering of the tree intact, but may skew its shape until the next call to
//! [`Tree::rebalance()`].
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut t = Tree::build([5, 3, 8, 1, 4, 7, 9]);
//!
//! assert_eq!(t.inorder(), [&1, &3, &4, &5, &7, &8, &9]);
//! assert_eq!(t.height(), 2);
//! assert!(t.is_balanced());
//!
//! // Removing a node with two children.
//! t.delete(&5);
//! assert!(t.find(&5).is_none());
//! assert!(t.find(&7).is_some());
//!
//! // Growing one side of the tree unbalances it...
//! for v in [100, 101, 102] {
//!     t.insert(v);
//! }
//! assert!(!t.is_balanced());
//!
//! // ...until it is rebuilt.
//! t.rebalance();
//! assert!(t.is_balanced());
//! assert_eq!(t.inorder(), [&1, &3, &4, &7, &8, &9, &100, &101, &102]);
//! ```
//!
//! # Ordering
//!
//! For every node, all elements in its left subtree compare strictly less
//! than the node's element, and all elements in its right subtree compare
//! greater than or equal to it. An element equal to one already in the tree
//! is inserted into the right subtree by default; see [`DuplicatePolicy`].
//!
//! [`Tree::rebalance()`] preserves this ordering, so copies of one element
//! always descend to the right of each other. A tree holding three or more
//! copies of the same element can therefore remain unbalanced after a
//! rebalance; a tree of distinct elements is always balanced by it.
//!
//! # Nodes
//!
//! Lookups and traversals hand out shared references to [`Node`]s. A node
//! reference can be passed back to [`Tree::depth()`], which matches nodes by
//! identity rather than by value.
//!
//! # Recursion
//!
//! Traversals, height and depth queries, insertion, deletion, rendering,
//! cloning and dropping a tree (or a partly consumed `into_iter()` of one) all
//! use an explicit stack, and are safe on degenerate (chain-shaped) trees of
//! any size. The [`Debug`](std::fmt::Debug) output of a [`Node`] shows only
//! the elements of its immediate children.
//!
//! Building a tree recurses to a depth of log2(n), and [`Tree::is_balanced()`] recurses no deeper than the balanced
//! upper part of the tree it inspects.

#![deny(missing_docs)]

pub mod iter;
mod node;
mod render;
mod tree;

#[cfg(test)]
mod test_utils;

pub use node::{height, Node};
pub use tree::{DuplicatePolicy, Tree};
