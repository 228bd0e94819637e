//! KD-tree node implementation.

use nalgebra::Point2;

use crate::Axis;

/// A node in the KD-tree, representing one split of the point set.
///
/// Each node owns the point chosen as its split pivot and its two child
/// subtrees outright. Ownership is strictly tree-shaped: nothing outside the
/// tree holds references into its interior except transient traversal.
///
/// # Point identity
///
/// A node also carries the index its point had in the original input
/// sequence. The index is used only for external labeling (e.g. "P3" in a
/// rendered diagram); tree logic never consults it.
#[derive(Debug, Clone)]
pub struct KdNode {
    /// The split point chosen at this node (the median along `axis`).
    point: Point2<f32>,

    /// The point's position in the original input sequence.
    index: usize,

    /// The coordinate axis compared at this node, derived from depth parity.
    axis: Axis,

    /// Subtree of points with `coord(axis) <=` this node's split value.
    left: Option<Box<KdNode>>,

    /// Subtree of points with `coord(axis) >=` this node's split value.
    right: Option<Box<KdNode>>,
}

impl KdNode {
    /// Creates a new leaf node for the given point.
    pub fn new(point: Point2<f32>, index: usize, axis: Axis) -> Self {
        Self {
            point,
            index,
            axis,
            left: None,
            right: None,
        }
    }

    /// Returns the split point.
    #[inline]
    pub fn point(&self) -> Point2<f32> {
        self.point
    }

    /// Returns the point's index in the original input sequence.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the axis this node splits on.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns the coordinate value the split compares against.
    #[inline]
    pub fn split_value(&self) -> f32 {
        self.axis.coord(&self.point)
    }

    /// Returns a reference to the left child subtree.
    #[inline]
    pub fn left(&self) -> Option<&KdNode> {
        self.left.as_deref()
    }

    /// Returns a reference to the right child subtree.
    #[inline]
    pub fn right(&self) -> Option<&KdNode> {
        self.right.as_deref()
    }

    /// Sets the left child subtree.
    #[inline]
    pub(crate) fn set_left(&mut self, node: Option<KdNode>) {
        self.left = node.map(Box::new);
    }

    /// Sets the right child subtree.
    #[inline]
    pub(crate) fn set_right(&mut self, node: Option<KdNode>) {
        self.right = node.map(Box::new);
    }

    /// Checks if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns the number of nodes in this subtree (including this one).
    pub fn node_count(&self) -> usize {
        let mut count = 1;

        if let Some(ref left) = self.left {
            count += left.node_count();
        }
        if let Some(ref right) = self.right {
            count += right.node_count();
        }

        count
    }

    /// Returns the depth of this subtree (1 for a leaf node).
    pub fn depth(&self) -> usize {
        let left_depth = self.left.as_ref().map_or(0, |n| n.depth());
        let right_depth = self.right.as_ref().map_or(0, |n| n.depth());
        1 + left_depth.max(right_depth)
    }
}
