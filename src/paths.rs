use crate::node::NodeId;
use crate::tree::Tree;

impl<K, V> Tree<K, V> {
    /// Whether every leaf (a node with no children) is the same distance from the root. An empty
    /// tree trivially qualifies.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in 1..=7 {
    ///     tree.insert(key, ());
    /// }
    /// assert!(tree.has_equal_leaf_depths());
    ///
    /// tree.insert(8, ());
    /// assert!(!tree.has_equal_leaf_depths());
    /// ```
    pub fn has_equal_leaf_depths(&self) -> bool {
        let mut leaf_depth = None;
        self.root
            .map_or(true, |root| self.leaves_at(root, 0, &mut leaf_depth))
    }

    /// The first leaf found fixes the depth every later leaf must match.
    fn leaves_at(&self, id: NodeId, depth: usize, leaf_depth: &mut Option<usize>) -> bool {
        let node = &self.arena[id];
        if node.is_leaf() {
            return *leaf_depth.get_or_insert(depth) == depth;
        }
        [node.left, node.right]
            .iter()
            .flatten()
            .all(|&child| self.leaves_at(child, depth + 1, leaf_depth))
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::Tree;

    fn tree_of(keys: &[i32]) -> Tree<i32, ()> {
        let mut tree = Tree::new();
        for &key in keys {
            tree.insert(key, ());
        }
        tree
    }

    #[test]
    fn empty_and_single() {
        assert!(tree_of(&[]).has_equal_leaf_depths());
        assert!(tree_of(&[1]).has_equal_leaf_depths());
    }

    #[test]
    fn one_child_is_not_a_leaf() {
        // 2 -> 1 has exactly one leaf.
        assert!(tree_of(&[2, 1]).has_equal_leaf_depths());
    }

    #[test]
    fn uneven_leaves() {
        //     2
        //    / \
        //   1   3
        //        \
        //         4
        assert!(!tree_of(&[2, 1, 3, 4]).has_equal_leaf_depths());
    }

    #[test]
    fn evened_out_by_removal() {
        let mut tree = tree_of(&[2, 1, 3, 4]);
        tree.remove(&4);

        assert!(tree.has_equal_leaf_depths());
    }
}
