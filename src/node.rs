//! Node storage for the tree. Nodes live in an [`Arena`] and refer to each other by [`NodeId`]
//! instead of by pointer, so a parent back-link is just another index and never owns anything.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

/// The index of a node slot in an [`Arena`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A possibly-missing node. `None` plays the role of a null child or the root's parent.
pub(crate) type Link = Option<NodeId>;

/// Which child of a parent a node is (or which way a rotation pushes a node down).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The change in balance factor a node sees when the subtree on this side grows by one.
    pub(crate) fn sign(self) -> i8 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }

    /// The heavy side of an out-of-balance node.
    pub(crate) fn of_balance(balance: i8) -> Self {
        if balance < 0 {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// A single key/value entry of the tree along with its links.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    /// `height(right) - height(left)`. Only ever -1, 0, or 1 between public operations.
    pub(crate) balance: i8,
    pub(crate) parent: Link,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V, parent: Link) -> Self {
        Self {
            key,
            value,
            balance: 0,
            parent,
            left: None,
            right: None,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Link) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Growable storage for nodes. Freed slots are recycled by later allocations so a long-lived tree
/// doesn't keep growing under insert/remove churn.
#[derive(Clone)]
pub(crate) struct Arena<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<NodeId>,
}

impl<K, V> Arena<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// How many slots currently hold a node.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = Some(node);
                id
            }
            None => {
                assert!(self.slots.len() < u32::MAX as usize, "node arena is full");
                let id = NodeId(self.slots.len() as u32);
                self.slots.push(Some(node));
                id
            }
        }
    }

    /// Empties the slot and hands back the node it held.
    ///
    /// ## Panics
    ///
    /// When the slot is already empty.
    pub(crate) fn free(&mut self, id: NodeId) -> Node<K, V> {
        let node = self.slots[id.index()]
            .take()
            .expect("Freeing a node requires a live slot");
        self.free.push(id);
        node
    }

    /// Exchanges the keys and values stored in two slots. Links and balance factors stay with
    /// their slot, so the tree's shape is untouched and only the entries trade places.
    pub(crate) fn swap_entries(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let (low, high) = if a.index() < b.index() { (a, b) } else { (b, a) };
        let (head, tail) = self.slots.split_at_mut(high.index());
        let low = head[low.index()]
            .as_mut()
            .expect("Swapping entries requires live slots");
        let high = tail[0]
            .as_mut()
            .expect("Swapping entries requires live slots");
        mem::swap(&mut low.key, &mut high.key);
        mem::swap(&mut low.value, &mut high.value);
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<K, V> Index<NodeId> for Arena<K, V> {
    type Output = Node<K, V>;

    fn index(&self, id: NodeId) -> &Node<K, V> {
        match &self.slots[id.index()] {
            Some(node) => node,
            None => panic!("Dangling link to freed node {:?}", id),
        }
    }
}

impl<K, V> IndexMut<NodeId> for Arena<K, V> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        match &mut self.slots[id.index()] {
            Some(node) => node,
            None => panic!("Dangling link to freed node {:?}", id),
        }
    }
}
