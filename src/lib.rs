//! This crate exposes an AVL tree: a Binary Search Tree that keeps itself balanced so insert,
//! remove, and lookup all stay `O(lg N)`.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`).
//!
//! ## AVL
//!
//! An AVL tree adds a third invariant: for every `Node`, the heights of its two subtrees differ by
//! at most one. Each `Node` stores that difference (`height(right) - height(left)`) as its
//! _balance factor_. After an insert or a remove, the balance factors on the path back up to the
//! root are updated and, where one reaches +/-2, a rotation (or two) restores the invariant. This
//! caps the height at roughly `1.44 * lg N`.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [10, 20, 30] {
//!     tree.insert(key, key.to_string());
//! }
//!
//! // Inserting in ascending order still leaves a balanced tree.
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.keys().collect::<Vec<_>>(), [&10, &20, &30]);
//!
//! assert_eq!(tree.remove(&20), Some("20".to_string()));
//! assert!(tree.get(&20).is_err());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

#[cfg(test)]
#[macro_use]
mod test;

pub mod error;
mod insert;
pub mod iter;
mod node;
mod paths;
mod remove;
mod rotate;
pub mod tree;

pub use error::{Error, Result};
pub use iter::{Iter, Keys};
pub use tree::Tree;
