//! An unbalanced, recursive BST. Every operation walks down from the root one
//! level per call and nothing ever rotates, so the shape of the tree is decided
//! entirely by insertion order.
//!
//! # Examples
//!
//! ```
//! use bst_bench::recursive::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.find(&1));
//!
//! tree.insert(1);
//! assert!(tree.find(&1));
//!
//! // Inserting the same key again does nothing.
//! tree.insert(1);
//! assert_eq!(tree.len(), 1);
//!
//! tree.erase(&1);
//! assert!(!tree.find(&1));
//! ```

use std::cmp::Ordering;

type Link<K> = Option<Box<Node<K>>>;

/// An unbalanced Binary Search Tree of unique keys.
///
/// `Clone`, `Debug` and `PartialEq` are derived and recurse once per level, so like `insert` they
/// need stack proportional to the height. Only `Drop` is safe on arbitrarily deep trees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<K> {
    root: Link<K>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // A degenerate tree is a linked list of `len` boxes so the derived recursive drop would need
    // one stack frame per node. Detach the children of each node before it is dropped instead.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the given key was inserted and not erased since.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_bench::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.find(&1));
    /// assert!(!tree.find(&42));
    /// ```
    pub fn find(&self, key: &K) -> bool
    where
        K: Ord,
    {
        find(&self.root, key)
    }

    /// Inserts the key as a new leaf. Inserting a key that is already present is a no-op.
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        insert(&mut self.root, key);
    }

    /// Removes the key from the tree. If the tree does not contain the key, nothing happens.
    ///
    /// A node with two children takes the key of its in-order successor (the smallest key of its
    /// right subtree) and the successor's node is unlinked instead, so exactly one node is freed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_bench::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [5, 3, 8, 1, 4] {
    ///     tree.insert(key);
    /// }
    /// tree.erase(&3);
    ///
    /// assert!(!tree.find(&3));
    /// assert!(tree.find(&4));
    /// ```
    pub fn erase(&mut self, key: &K)
    where
        K: Ord,
    {
        erase(&mut self.root, key);
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    ///
    /// This visits every node so it's only meant for reporting.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// How many keys are stored. Like [`Tree::height`] this walks the whole tree.
    pub fn len(&self) -> usize {
        len(&self.root)
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

fn find<K: Ord>(link: &Link<K>, key: &K) -> bool {
    match link {
        None => false,
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => find(&node.left, key),
            Ordering::Equal => true,
            Ordering::Greater => find(&node.right, key),
        },
    }
}

fn insert<K: Ord>(link: &mut Link<K>, key: K) {
    match link {
        None => {
            *link = Some(Box::new(Node {
                key,
                left: None,
                right: None,
            }))
        }
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key),
            Ordering::Equal => {}
            Ordering::Greater => insert(&mut node.right, key),
        },
    }
}

fn erase<K: Ord>(link: &mut Link<K>, key: &K) {
    let node = match link {
        None => return,
        Some(node) => node,
    };

    match key.cmp(&node.key) {
        Ordering::Less => erase(&mut node.left, key),
        Ordering::Greater => erase(&mut node.right, key),
        Ordering::Equal => {
            if node.left.is_none() {
                let right = node.right.take();
                *link = right;
            } else if node.right.is_none() {
                let left = node.left.take();
                *link = left;
            } else if let Some(successor) = take_smallest(&mut node.right) {
                node.key = successor;
            }
        }
    }
}

/// Unlinks the leftmost node of the subtree, splicing its right child into its place, and
/// returns its key.
fn take_smallest<K>(link: &mut Link<K>) -> Option<K> {
    let node = link.as_mut()?;
    if node.left.is_some() {
        return take_smallest(&mut node.left);
    }

    let mut smallest = link.take()?;
    *link = smallest.right.take();
    Some(smallest.key)
}

fn height<K>(link: &Link<K>) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + height(&node.left).max(height(&node.right)),
    }
}

fn len<K>(link: &Link<K>) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + len(&node.left) + len(&node.right),
    }
}

#[cfg(test)]
impl<K: Clone> Tree<K> {
    /// The keys in order. For a valid BST this is strictly increasing.
    fn keys(&self) -> Vec<K> {
        fn walk<K: Clone>(link: &Link<K>, keys: &mut Vec<K>) {
            if let Some(node) = link {
                walk(&node.left, keys);
                keys.push(node.key.clone());
                walk(&node.right, keys);
            }
        }
        let mut keys = Vec::new();
        walk(&self.root, &mut keys);
        keys
    }
}
