//! This crate benchmarks an unbalanced Binary Search Tree (BST) against the
//! standard library's balanced ordered containers.
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
//! Searching for values in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). Without any
//! rebalancing the height depends only on insertion order: a random order gives
//! roughly `2 lg N` while sorted input gives a chain of `N` nodes.
//!
//! ## Benchmarks
//!
//! [`scenario::run_suite`] measures insertion, lookup and deletion on shuffled
//! input, sorted input and several dataset sizes, and writes the timings to a
//! report file (see [`report`]).

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod config;
pub mod container;
pub mod dataset;
mod error;
pub mod harness;
pub mod recursive;
pub mod report;
pub mod scenario;


pub use error::{Error, Result};
