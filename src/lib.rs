//! This crate exposes a height-balanced Binary Search Tree (an AVL tree) that
//! stores unique, ordered values.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! ## AVL Tree
//!
//! Without any care the height of a BST is `O(N)` (insert sorted values and you
//! get a linked list). An AVL tree additionally stores the height of every `Node`
//! and, after each insertion, rotates `Node`s along the insertion path so that for
//! every `Node` the heights of its two subtrees differ by at most one. This keeps
//! the height at `O(lg N)`, which bounds the recursion depth of every operation.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//! for x in [274, 3245, 5342, 4235] {
//!     tree.insert(x);
//! }
//!
//! let mut sorted = Vec::new();
//! tree.traverse_in_order(|x| sorted.push(*x));
//! assert_eq!(sorted, [274, 3245, 4235, 5342]);
//!
//! let mut hits = 0;
//! assert_eq!(tree.search(&4235, |_| hits += 1), Ok(true));
//! assert_eq!(hits, 1);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod tree;
mod util;


pub use error::TreeError;
pub use tree::Tree;
