//! The public face of the AVL tree along with the plain BST mechanics (searching, walking to
//! neighbours, relinking a child) that the balancing code is built on.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.insert(1, 2);
//! assert_eq!(tree.find(&1), Some(&2));
//!
//! // Inserting a new value for the same key overwrites the value.
//! tree.insert(1, 3);
//! assert_eq!(tree.find(&1), Some(&3));
//!
//! // Removing a node returns its value.
//! assert_eq!(tree.remove(&1), Some(3));
//! assert_eq!(tree.find(&1), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

use log::debug;

use crate::error::{Error, Result};
use crate::iter::{Iter, Keys};
use crate::node::{Arena, Link, NodeId, Side};

/// A self-balancing Binary Search Tree (specifically, an AVL tree) mapping ordered keys to values.
///
/// Every node tracks its balance factor, `height(right) - height(left)`, and the tree keeps it
/// within `-1..=1` after every `insert` and `remove`, so all operations take `O(lg N)` time.
#[derive(Clone)]
pub struct Tree<K, V> {
    pub(crate) arena: Arena<K, V>,
    pub(crate) root: Link,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> Index<&K> for Tree<K, V> {
    type Output = V;

    /// ## Panics
    ///
    /// When the key isn't in the tree.
    fn index(&self, key: &K) -> &V {
        match self.get(key) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Tree<K, V> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// The number of entries in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    ///
    /// The balance factors say which subtree is taller so this only walks one path.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// for key in 1..=7 {
    ///     tree.insert(key, ());
    /// }
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            height += 1;
            let node = &self.arena[id];
            cursor = if node.balance > 0 {
                node.right
            } else {
                node.left
            };
        }
        height
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        debug!("clearing tree of {} nodes", self.len());
        self.arena.clear();
        self.root = None;
    }

    /// Lazily visits every entry in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2, 'b');
    /// tree.insert(1, 'a');
    /// tree.insert(3, 'c');
    ///
    /// let entries: Vec<_> = tree.iter().collect();
    /// assert_eq!(entries, [(&1, &'a'), (&2, &'b'), (&3, &'c')]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    /// Lazily visits every key in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// The entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.root.map(|root| self.entry(self.leftmost(root)))
    }

    /// The entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.root.map(|root| self.entry(self.rightmost(root)))
    }

    /// The entry at the top of the tree. After rebalancing this is roughly the median key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [10, 20, 30] {
    ///     tree.insert(key, ());
    /// }
    /// assert_eq!(tree.root(), Some((&20, &())));
    /// ```
    pub fn root(&self) -> Option<(&K, &V)> {
        self.root.map(|root| self.entry(root))
    }

    pub(crate) fn entry(&self, id: NodeId) -> (&K, &V) {
        let node = &self.arena[id];
        (&node.key, &node.value)
    }

    /// The deepest node reached by always going left from `id`.
    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.arena[id].left {
            id = left;
        }
        id
    }

    /// The deepest node reached by always going right from `id`.
    pub(crate) fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.arena[id].right {
            id = right;
        }
        id
    }

    /// The node holding the largest key smaller than `id`'s key.
    pub(crate) fn predecessor(&self, id: NodeId) -> Link {
        if let Some(left) = self.arena[id].left {
            return Some(self.rightmost(left));
        }
        let mut child = id;
        let mut parent = self.arena[id].parent;
        while let Some(p) = parent {
            if self.arena[p].right == Some(child) {
                return Some(p);
            }
            child = p;
            parent = self.arena[p].parent;
        }
        None
    }

    /// The node holding the smallest key larger than `id`'s key.
    pub(crate) fn successor(&self, id: NodeId) -> Link {
        if let Some(right) = self.arena[id].right {
            return Some(self.leftmost(right));
        }
        let mut child = id;
        let mut parent = self.arena[id].parent;
        while let Some(p) = parent {
            if self.arena[p].left == Some(child) {
                return Some(p);
            }
            child = p;
            parent = self.arena[p].parent;
        }
        None
    }

    /// Which child `id` is of `parent`.
    pub(crate) fn side_in(&self, parent: NodeId, id: NodeId) -> Side {
        if self.arena[parent].left == Some(id) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Points whatever referenced `old` (its parent's child link, or the root) at `new` instead.
    /// Only the downward link is rewritten; `new`'s parent link is the caller's to fix.
    pub(crate) fn replace_child(&mut self, parent: Link, old: NodeId, new: Link) {
        match parent {
            None => self.root = new,
            Some(p) => {
                let side = self.side_in(p, old);
                self.arena[p].set_child(side, new);
            }
        }
    }
}

impl<K: Ord, V> Tree<K, V> {
    /// Potentially finds the value associated with the given key in this tree. If no node has the
    /// corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Some(&2));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&V> {
        self.find_node(key).map(|id| &self.arena[id].value)
    }

    /// Like [`find`][Tree::find] but reports a miss as [`Error::KeyNotFound`].
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("a", 1);
    ///
    /// assert_eq!(tree.get(&"a"), Ok(&1));
    /// assert_eq!(tree.get(&"b"), Err(Error::KeyNotFound));
    /// ```
    pub fn get(&self, key: &K) -> Result<&V> {
        self.find(key).ok_or(Error::KeyNotFound)
    }

    /// A mutable reference to the value stored at `key`, or [`Error::KeyNotFound`].
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        let id = self.find_node(key).ok_or(Error::KeyNotFound)?;
        Ok(&mut self.arena[id].value)
    }

    /// Whether some node holds `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_node(key).is_some()
    }

    pub(crate) fn find_node(&self, key: &K) -> Link {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.arena[id];
            cursor = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
            };
        }
        None
    }
}

#[cfg(test)]
impl<K: Ord, V> Tree<K, V> {
    /// Walks the whole tree checking parent links, key order, and that every stored balance
    /// factor matches the real subtree heights and is within `-1..=1`. Returns the height.
    pub(crate) fn validate(&self) -> usize {
        if let Some(root) = self.root {
            assert_eq!(self.arena[root].parent, None, "root has a parent");
        }
        let height = self.root.map_or(0, |root| self.validate_node(root));
        let mut count = 0;
        let mut keys = self.keys();
        let mut previous = keys.next();
        if previous.is_some() {
            count += 1;
        }
        for key in keys {
            assert!(previous < Some(key), "keys out of order");
            previous = Some(key);
            count += 1;
        }
        assert_eq!(count, self.len());
        height
    }

    fn validate_node(&self, id: NodeId) -> usize {
        let node = &self.arena[id];
        let mut heights = [0, 0];
        for (height, side) in heights.iter_mut().zip([Side::Left, Side::Right].iter()) {
            if let Some(child) = node.child(*side) {
                assert_eq!(self.arena[child].parent, Some(id), "broken parent link");
                *height = self.validate_node(child);
            }
        }
        let [left, right] = heights;
        assert_eq!(
            node.balance as isize,
            right as isize - left as isize,
            "stale balance factor at {:?}",
            id
        );
        assert!(node.balance.abs() <= 1, "unbalanced node at {:?}", id);
        left.max(right) + 1
    }

    /// The key at the root followed by the keys of its left and right children.
    pub(crate) fn top(&self) -> (Option<&K>, Option<&K>, Option<&K>) {
        let key = |link: Link| link.map(|id| &self.arena[id].key);
        match self.root {
            None => (None, None, None),
            Some(root) => (
                key(Some(root)),
                key(self.arena[root].left),
                key(self.arena[root].right),
            ),
        }
    }
}
