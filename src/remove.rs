//! Removal and the upward fix-up that restores balance after a node is spliced out.

use log::{debug, trace};

use crate::node::{NodeId, Side};
use crate::tree::Tree;

impl<K: Ord, V> Tree<K, V> {
    /// Removes the node containing the given key from the tree and returns its value. If the tree
    /// does not contain a node with the key, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.remove(&1), Some(2));
    /// assert_eq!(tree.remove(&1), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let mut target = self.find_node(key)?;

        // With two children, trade entries with the in-order predecessor (which has no right
        // child) and remove that slot instead. Balance factors belong to the slot, not the entry.
        if self.arena[target].left.is_some() && self.arena[target].right.is_some() {
            let predecessor = self
                .predecessor(target)
                .expect("A node with a left child has a predecessor");
            self.arena.swap_entries(target, predecessor);
            target = predecessor;
        }

        let parent = self.arena[target].parent;
        let child = self.arena[target].left.or(self.arena[target].right);
        // Losing a left child tips the parent right and vice versa.
        let diff = parent.map_or(0, |p| -self.side_in(p, target).sign());

        if let Some(child) = child {
            self.arena[child].parent = parent;
        }
        self.replace_child(parent, target, child);
        let removed = self.arena.free(target);

        match parent {
            Some(parent) => {
                debug!("spliced {:?} out from under {:?}", target, parent);
                self.remove_fix(parent, diff);
            }
            None if self.root.is_none() => debug!("removed the last node"),
            None => debug!("spliced out the root {:?}", target),
        }

        Some(removed.value)
    }
}

impl<K, V> Tree<K, V> {
    /// Walks up from `node`, whose subtree on one side just got shorter, applying `diff` to its
    /// balance factor. Keeps climbing for as long as the subtree being fixed lost height.
    pub(crate) fn remove_fix(&mut self, node: NodeId, diff: i8) {
        let mut cursor = Some(node);
        let mut diff = diff;

        while let Some(node) = cursor {
            // Taken before any rotation here. A rotation puts the new subtree top in `node`'s old
            // slot under the same parent, so both stay right for the next step up.
            let parent = self.arena[node].parent;
            let next_diff = parent.map_or(0, |p| -self.side_in(p, node).sign());

            let balance = self.arena[node].balance + diff;
            trace!("remove fix: {:?} balance is now {}", node, balance);

            let shrank = match balance {
                -1 | 1 => {
                    self.arena[node].balance = balance;
                    false
                }
                0 => {
                    self.arena[node].balance = 0;
                    true
                }
                -2 | 2 => self.rebalance_after_remove(node, balance),
                _ => unreachable!("balance factor {} after a single removal", balance),
            };
            if !shrank {
                return;
            }

            cursor = parent;
            diff = next_diff;
        }
    }

    /// Rotates the subtree at `node`, which is out of balance by `balance` (+/-2). Returns whether
    /// the subtree came out shorter than it was before the removal.
    fn rebalance_after_remove(&mut self, node: NodeId, balance: i8) -> bool {
        let side = Side::of_balance(balance);
        let sign = side.sign();
        let child = self.arena[node]
            .child(side)
            .expect("A node heavy on one side has a child there");
        let child_balance = self.arena[child].balance;

        let shrank = if child_balance == -sign {
            let grandchild = self.arena[child]
                .child(side.opposite())
                .expect("A child leaning inwards has a child there");
            trace!("remove fix: double rotation at {:?}", node);
            let grandchild_balance = self.arena[grandchild].balance;
            self.rotate(child, side);
            self.rotate(node, side.opposite());
            self.settle_double_rotation(node, child, grandchild, grandchild_balance, side);
            true
        } else {
            trace!("remove fix: single rotation at {:?}", node);
            self.rotate(node, side.opposite());
            if child_balance == 0 {
                self.arena[node].balance = sign;
                self.arena[child].balance = -sign;
                false
            } else {
                self.arena[node].balance = 0;
                self.arena[child].balance = 0;
                true
            }
        };

        if cfg!(debug_assertions) {
            assert!(self.arena[node].balance.abs() <= 1);
            assert!(self.arena[child].balance.abs() <= 1);
        }
        shrank
    }
}
