//! Visitor pattern for KD-tree traversal.
//!
//! Visitors allow custom processing of nodes during pre-order traversal
//! without coupling traversal logic to specific use cases.

use nalgebra::Point2;

use super::node::KdNode;

/// Visitor for processing nodes during KD-tree traversal.
///
/// Implement this trait to define custom behavior when traversing the tree.
/// Common uses include:
/// - Collecting nodes in traversal order
/// - Rendering node markers
/// - Gathering statistics per depth level
pub trait KdVisitor {
    /// Called for each node during pre-order traversal, with the node's
    /// depth in the tree (0 for the root).
    fn visit(&mut self, node: &KdNode, depth: usize);
}

/// A simple visitor that records each visited node's original point index,
/// point, and depth.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    visited: Vec<(usize, Point2<f32>, usize)>,
}

impl CollectingVisitor {
    /// Creates a new empty collecting visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the visited `(point index, point, depth)` records.
    pub fn visited(&self) -> &[(usize, Point2<f32>, usize)] {
        &self.visited
    }

    /// Consumes the visitor, returning the visited records.
    pub fn into_visited(self) -> Vec<(usize, Point2<f32>, usize)> {
        self.visited
    }
}

impl KdVisitor for CollectingVisitor {
    fn visit(&mut self, node: &KdNode, depth: usize) {
        self.visited.push((node.index(), node.point(), depth));
    }
}

/// A visitor that calls a closure for each node.
pub struct FnVisitor<F>
where
    F: FnMut(&KdNode, usize),
{
    func: F,
}

impl<F> FnVisitor<F>
where
    F: FnMut(&KdNode, usize),
{
    /// Creates a new visitor from a closure.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> KdVisitor for FnVisitor<F>
where
    F: FnMut(&KdNode, usize),
{
    fn visit(&mut self, node: &KdNode, depth: usize) {
        (self.func)(node, depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Axis;

    #[test]
    fn collecting_visitor_empty() {
        let visitor = CollectingVisitor::new();
        assert!(visitor.visited().is_empty());
    }

    #[test]
    fn collecting_visitor_records_order() {
        let mut visitor = CollectingVisitor::new();
        let a = KdNode::new(Point2::new(1.0, 2.0), 0, Axis::X);
        let b = KdNode::new(Point2::new(3.0, 4.0), 1, Axis::Y);

        visitor.visit(&a, 0);
        visitor.visit(&b, 1);

        let visited = visitor.into_visited();
        assert_eq!(visited.len(), 2);
        assert_eq!(visited[0], (0, Point2::new(1.0, 2.0), 0));
        assert_eq!(visited[1], (1, Point2::new(3.0, 4.0), 1));
    }

    #[test]
    fn fn_visitor_calls_closure() {
        let mut count = 0;
        {
            let mut visitor = FnVisitor::new(|_: &KdNode, _| {
                count += 1;
            });

            let node = KdNode::new(Point2::new(0.0, 0.0), 0, Axis::X);
            visitor.visit(&node, 0);
            visitor.visit(&node, 0);
        }
        assert_eq!(count, 2);
    }
}
