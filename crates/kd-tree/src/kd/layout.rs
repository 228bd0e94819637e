//! Display layout for rendering the tree's logical structure.
//!
//! Layout coordinates are purely for drawing the binary tree's shape and are
//! unrelated to the points' real coordinates: each node is placed one unit
//! below its parent, offset left or right by half the horizontal spread
//! available at its level. Halving the spread per level guarantees that no
//! two nodes at the same depth share a display x-coordinate.

use std::collections::HashMap;

use nalgebra::Point2;

use super::node::KdNode;
use super::tree::KdTree;

/// Display positions and edges for a tree-structure diagram.
///
/// Positions are keyed by each node's original point index, which is unique
/// per node (every input point becomes exactly one node). The layout is
/// transient: recomputed on each render request, never stored on the tree.
#[derive(Debug, Clone, Default)]
pub struct TreeLayout {
    positions: HashMap<usize, Point2<f32>>,
    edges: Vec<(Point2<f32>, Point2<f32>)>,
}

impl TreeLayout {
    /// Computes display positions for every node of the tree.
    ///
    /// The root is placed at `(root_x, root_y)` with `spread` display units
    /// of horizontal room; children go to `x -/+ spread / 2` one unit below,
    /// each with half the spread. An empty tree yields an empty layout.
    pub fn compute(tree: &KdTree, root_x: f32, root_y: f32, spread: f32) -> Self {
        let mut layout = Self {
            positions: HashMap::with_capacity(tree.node_count()),
            edges: Vec::new(),
        };
        if let Some(root) = tree.root() {
            layout.place(root, root_x, root_y, spread);
        }
        layout
    }

    /// Returns the display position of the node holding the point with the
    /// given original index, if that point exists in the tree.
    pub fn position(&self, point_index: usize) -> Option<Point2<f32>> {
        self.positions.get(&point_index).copied()
    }

    /// Returns the parent-to-child edges, one per present child.
    ///
    /// Edges are a derived view for drawing connectors; a tree with n nodes
    /// has n - 1 of them.
    pub fn edges(&self) -> &[(Point2<f32>, Point2<f32>)] {
        &self.edges
    }

    /// Iterates over `(point index, display position)` pairs in no
    /// particular order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Point2<f32>)> + '_ {
        self.positions.iter().map(|(&index, &pos)| (index, pos))
    }

    /// Returns the number of placed nodes.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if no nodes were placed (empty tree).
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    fn place(&mut self, node: &KdNode, x: f32, y: f32, spread: f32) {
        let here = Point2::new(x, y);
        self.positions.insert(node.index(), here);

        let offset = spread / 2.0;
        if let Some(left) = node.left() {
            let child = Point2::new(x - offset, y - 1.0);
            self.edges.push((here, child));
            self.place(left, child.x, child.y, offset);
        }
        if let Some(right) = node.right() {
            let child = Point2::new(x + offset, y - 1.0);
            self.edges.push((here, child));
            self.place(right, child.x, child.y, offset);
        }
    }
}
