//! Insertion and the upward fix-up that restores balance after a new leaf is attached.

use std::cmp::Ordering;

use log::{debug, trace};

use crate::node::{Node, NodeId, Side};
use crate::tree::Tree;

impl<K: Ord, V> Tree<K, V> {
    /// Inserts the given value into the tree stored at the given key. Inserting a new value for an
    /// existing key overwrites its value.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1, 2);
    /// assert_eq!(tree.find(&1), Some(&2));
    ///
    /// tree.insert(1, 3);
    /// assert_eq!(tree.find(&1), Some(&3));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) {
        let Some(mut parent) = self.root else {
            let root = self.arena.alloc(Node::new(key, value, None));
            debug!("inserted {:?} as the root", root);
            self.root = Some(root);
            return;
        };

        let side = loop {
            let node = &self.arena[parent];
            let side = match key.cmp(&node.key) {
                Ordering::Less => Side::Left,
                Ordering::Equal => {
                    // No structural change so nothing to rebalance.
                    self.arena[parent].value = value;
                    return;
                }
                Ordering::Greater => Side::Right,
            };
            match node.child(side) {
                Some(child) => parent = child,
                None => break side,
            }
        };

        let child = self.arena.alloc(Node::new(key, value, Some(parent)));
        self.arena[parent].set_child(side, Some(child));
        debug!("inserted {:?} as the {:?} child of {:?}", child, side, parent);

        // A parent that was already leaning had exactly one (leaf) child on the other side, so its
        // height doesn't change.
        if self.arena[parent].balance != 0 {
            self.arena[parent].balance = 0;
            return;
        }
        self.arena[parent].balance = side.sign();
        self.insert_fix(parent, child);
    }
}

impl<K, V> Tree<K, V> {
    /// Walks up from `parent`, whose subtree just grew by one level through `child`, updating
    /// balance factors. Stops as soon as a subtree's height is unchanged or after the single
    /// rebalance an insert can need.
    pub(crate) fn insert_fix(&mut self, mut parent: NodeId, mut child: NodeId) {
        while let Some(grandparent) = self.arena[parent].parent {
            let side = self.side_in(grandparent, parent);
            let balance = self.arena[grandparent].balance + side.sign();
            trace!("insert fix: {:?} balance is now {}", grandparent, balance);

            match balance {
                0 => {
                    self.arena[grandparent].balance = 0;
                    return;
                }
                -1 | 1 => {
                    self.arena[grandparent].balance = balance;
                    child = parent;
                    parent = grandparent;
                }
                -2 | 2 => {
                    self.rebalance_after_insert(grandparent, parent, child, side);
                    return;
                }
                _ => unreachable!("balance factor {} after a single insert", balance),
            }
        }
    }

    /// Fixes a grandparent left at +/-2 because `parent` (on `side`) grew through `child`. The
    /// rotated subtree ends up exactly as tall as it was before the insert.
    fn rebalance_after_insert(
        &mut self,
        grandparent: NodeId,
        parent: NodeId,
        child: NodeId,
        side: Side,
    ) {
        if self.side_in(parent, child) == side {
            trace!("insert fix: zig-zig at {:?}", grandparent);
            self.rotate(grandparent, side.opposite());
            self.arena[parent].balance = 0;
            self.arena[grandparent].balance = 0;
        } else {
            trace!("insert fix: zig-zag at {:?}", grandparent);
            let child_balance = self.arena[child].balance;
            self.rotate(parent, side);
            self.rotate(grandparent, side.opposite());
            self.settle_double_rotation(grandparent, parent, child, child_balance, side);
        }

        if cfg!(debug_assertions) {
            for id in [parent, grandparent, child].iter() {
                assert!(self.arena[*id].balance.abs() <= 1);
            }
        }
    }

    /// Sets balance factors after a double rotation that lifted `middle` above `upper` (which was
    /// heavy on `side`) and `lower` (its child on `side`). `middle_balance` is `middle`'s balance
    /// from before the rotations.
    pub(crate) fn settle_double_rotation(
        &mut self,
        upper: NodeId,
        lower: NodeId,
        middle: NodeId,
        middle_balance: i8,
        side: Side,
    ) {
        let sign = side.sign();
        let (upper_balance, lower_balance) = if middle_balance == sign {
            (-sign, 0)
        } else if middle_balance == 0 {
            (0, 0)
        } else {
            (0, sign)
        };
        self.arena[upper].balance = upper_balance;
        self.arena[lower].balance = lower_balance;
        self.arena[middle].balance = 0;
    }
}
