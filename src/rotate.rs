//! Rotation primitives. These only re-link nodes; balance factors are left alone because the
//! right values depend on which rebalancing case asked for the rotation.

use log::trace;

use crate::node::{NodeId, Side};
use crate::tree::Tree;

impl<K, V> Tree<K, V> {
    /// Rotate `top` to the left. This moves its right child up vertically and `top` down
    /// vertically. Used to rebalance the tree when the right child is too tall. As such, it must
    /// only be called when there _is_ a right child.
    ///
    /// ## Panics
    ///
    /// When called on a node without a right child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///   Option<parent>          Option<parent>
    ///       /                        /
    ///     top                     pivot
    ///    /   \                    /   \
    ///   x   pivot   rotate ->   top    z
    ///       /   \              /   \
    ///      y     z            x     y
    /// ```
    pub(crate) fn rotate_left(&mut self, top: NodeId) {
        self.push_down(top, Side::Left);
    }

    /// Rotate `top` to the right. The mirror image of [`rotate_left`][Tree::rotate_left]: the
    /// left child moves up and its right subtree becomes `top`'s new left subtree.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    pub(crate) fn rotate_right(&mut self, top: NodeId) {
        self.push_down(top, Side::Right);
    }

    /// Rotates `top` so that it ends up one level lower on the `down` side.
    pub(crate) fn rotate(&mut self, top: NodeId, down: Side) {
        match down {
            Side::Left => self.rotate_left(top),
            Side::Right => self.rotate_right(top),
        }
    }

    fn push_down(&mut self, top: NodeId, down: Side) {
        let up = down.opposite();
        let pivot = self.arena[top]
            .child(up)
            .expect("Rotating a node requires a child to promote");
        let inner = self.arena[pivot].child(down);
        let parent = self.arena[top].parent;
        trace!("rotating {:?} {:?} around {:?}", top, down, pivot);

        self.arena[top].set_child(up, inner);
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(top);
        }

        self.arena[pivot].set_child(down, Some(top));
        self.arena[top].parent = Some(pivot);

        self.arena[pivot].parent = parent;
        self.replace_child(parent, top, Some(pivot));
    }
}
