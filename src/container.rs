//! The operations the harness needs from a data structure, and their implementations for the
//! unbalanced [`Tree`] and the standard library's balanced ordered containers.
//!
//! The standard library has no red-black tree; its balanced ordered collections are B-trees.
//! They serve the same purpose here: `O(lg N)` worst case for every operation.

use std::collections::{BTreeMap, BTreeSet};

use crate::recursive::Tree;

/// Something that stores unique keys and can be benchmarked.
pub trait Container<K> {
    /// Stores the key. Storing a key twice keeps a single copy.
    fn insert(&mut self, key: K);

    /// Returns `true` if the key is stored.
    fn find(&self, key: &K) -> bool;

    /// Removes the key if it is stored.
    fn erase(&mut self, key: &K);

    /// The measured height, or `None` if this container doesn't expose one.
    fn height(&self) -> Option<usize> {
        None
    }
}

impl<K: Ord> Container<K> for Tree<K> {
    fn insert(&mut self, key: K) {
        Tree::insert(self, key)
    }

    fn find(&self, key: &K) -> bool {
        Tree::find(self, key)
    }

    fn erase(&mut self, key: &K) {
        Tree::erase(self, key)
    }

    fn height(&self) -> Option<usize> {
        Some(Tree::height(self))
    }
}

impl<K: Ord> Container<K> for BTreeSet<K> {
    fn insert(&mut self, key: K) {
        BTreeSet::insert(self, key);
    }

    fn find(&self, key: &K) -> bool {
        self.contains(key)
    }

    fn erase(&mut self, key: &K) {
        self.remove(key);
    }
}

/// Maps every key to itself.
impl<K: Ord + Clone> Container<K> for BTreeMap<K, K> {
    fn insert(&mut self, key: K) {
        BTreeMap::insert(self, key.clone(), key);
    }

    fn find(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn erase(&mut self, key: &K) {
        self.remove(key);
    }
}
