//! KD-tree container and construction.

use nalgebra::Point2;

use super::node::KdNode;
use super::visitor::KdVisitor;
use crate::Axis;

/// A two-dimensional KD-tree over a fixed point set.
///
/// The tree recursively partitions the plane by alternating the splitting
/// axis with depth (x at even depths, y at odd depths) and splitting at the
/// median of the points sorted along that axis. Median splitting makes the
/// tree balanced by construction: for n points the depth is
/// `ceil(log2(n + 1))` regardless of input order.
///
/// # Construction
///
/// Trees are built once from a point sequence and are immutable afterwards;
/// there are no insert, delete, or rebalance operations:
///
/// ```
/// use kd_tree::KdTree;
/// use nalgebra::Point2;
///
/// let points = vec![Point2::new(1.0, 7.0), Point2::new(2.5, 8.5)];
/// let tree = KdTree::build(&points);
/// assert_eq!(tree.node_count(), 2);
/// ```
///
/// # Traversal
///
/// All downstream consumers (partition geometry, layout, reporting) walk the
/// tree read-only through shared references; pre-order traversal with a
/// custom [`KdVisitor`] is available via [`KdTree::traverse_preorder`].
#[derive(Debug, Clone, Default)]
pub struct KdTree {
    root: Option<KdNode>,
}

impl KdTree {
    /// Creates an empty KD-tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a KD-tree from a point sequence.
    ///
    /// Each input point becomes exactly one node; the node remembers the
    /// point's position in `points` for external labeling. Ties along a
    /// splitting axis keep their relative input order (stable sort), so
    /// construction is deterministic. An empty input produces an empty tree.
    ///
    /// Duplicate coordinates are fine: equal values may land on either side
    /// of the median index, which preserves the non-strict `<= / >=`
    /// partition invariant.
    ///
    /// # Panics
    /// Panics if any coordinate is NaN or infinite. Malformed geometry is a
    /// caller precondition violation, not a recoverable condition.
    pub fn build(points: &[Point2<f32>]) -> Self {
        for (i, p) in points.iter().enumerate() {
            assert!(
                p.x.is_finite() && p.y.is_finite(),
                "point {i} has a non-finite coordinate: ({}, {})",
                p.x,
                p.y
            );
        }

        let indexed: Vec<(usize, Point2<f32>)> =
            points.iter().copied().enumerate().collect();
        Self {
            root: build_node(indexed, 0),
        }
    }

    /// Returns `true` if the tree contains no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a reference to the root node, if any.
    #[inline]
    pub fn root(&self) -> Option<&KdNode> {
        self.root.as_ref()
    }

    /// Returns the total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.node_count())
    }

    /// Returns the maximum depth of the tree (0 for empty tree).
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.depth())
    }

    /// Traverses the tree in pre-order (node, then left, then right).
    ///
    /// The visitor is called once per node, together with the node's depth.
    pub fn traverse_preorder<V: KdVisitor>(&self, visitor: &mut V) {
        if let Some(ref root) = self.root {
            traverse_preorder_node(root, 0, visitor);
        }
    }

    /// Collects all points in the tree in pre-order.
    pub fn collect_points(&self) -> Vec<Point2<f32>> {
        let mut result = Vec::with_capacity(self.node_count());
        collect_points_recursive(self.root.as_ref(), &mut result);
        result
    }
}

/// Recursively builds a KD node from index-tagged points.
fn build_node(mut points: Vec<(usize, Point2<f32>)>, depth: usize) -> Option<KdNode> {
    if points.is_empty() {
        return None;
    }

    let axis = Axis::from_depth(depth);

    // Stable sort keeps ties in input order, so construction is reproducible.
    // Coordinates were checked finite up front, so total_cmp matches the
    // usual numeric order here.
    points.sort_by(|(_, a), (_, b)| axis.coord(a).total_cmp(&axis.coord(b)));

    let median = points.len() / 2;
    let right_points = points.split_off(median + 1);
    // `points` now holds [0, median]; the median is its last element.
    let (index, point) = points.pop()?;
    let left_points = points;

    let mut node = KdNode::new(point, index, axis);
    node.set_left(build_node(left_points, depth + 1));
    node.set_right(build_node(right_points, depth + 1));

    Some(node)
}

/// Traverses a node subtree in pre-order.
fn traverse_preorder_node<V: KdVisitor>(node: &KdNode, depth: usize, visitor: &mut V) {
    visitor.visit(node, depth);
    if let Some(left) = node.left() {
        traverse_preorder_node(left, depth + 1, visitor);
    }
    if let Some(right) = node.right() {
        traverse_preorder_node(right, depth + 1, visitor);
    }
}

/// Recursively collects all points from a node subtree.
fn collect_points_recursive(node: Option<&KdNode>, result: &mut Vec<Point2<f32>>) {
    if let Some(n) = node {
        result.push(n.point());
        collect_points_recursive(n.left(), result);
        collect_points_recursive(n.right(), result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kd::visitor::CollectingVisitor;

    fn make_points(coords: &[(f32, f32)]) -> Vec<Point2<f32>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    /// Checks the partition invariant for every node in a subtree.
    fn assert_partitioned(node: &KdNode) {
        let split = node.split_value();
        let axis = node.axis();

        if let Some(left) = node.left() {
            let mut collector = Vec::new();
            collect_points_recursive(Some(left), &mut collector);
            for p in &collector {
                assert!(
                    axis.coord(p) <= split,
                    "left subtree point {p} violates <= {split} on {}",
                    axis.name()
                );
            }
            assert_partitioned(left);
        }
        if let Some(right) = node.right() {
            let mut collector = Vec::new();
            collect_points_recursive(Some(right), &mut collector);
            for p in &collector {
                assert!(
                    axis.coord(p) >= split,
                    "right subtree point {p} violates >= {split} on {}",
                    axis.name()
                );
            }
            assert_partitioned(right);
        }
    }

    #[test]
    fn empty_tree() {
        let tree = KdTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.depth(), 0);
        assert!(tree.collect_points().is_empty());
    }

    #[test]
    fn build_empty() {
        let tree = KdTree::build(&[]);
        assert!(tree.is_empty());
    }

    #[test]
    fn build_single_point() {
        let tree = KdTree::build(&make_points(&[(2.0, 3.0)]));

        let root = tree.root().unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.axis(), Axis::X);
        assert_eq!(root.index(), 0);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn build_five_points_scenario() {
        // Root splits on x at the median of the 5 x-values (2.5), with two
        // points on each side.
        let points = make_points(&[(1.0, 7.0), (2.5, 8.5), (1.5, 6.0), (7.0, 8.0), (8.5, 7.5)]);
        let tree = KdTree::build(&points);

        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.depth(), 3);

        let root = tree.root().unwrap();
        assert_eq!(root.axis(), Axis::X);
        assert_eq!(root.split_value(), 2.5);
        assert_eq!(root.index(), 1);
        assert_eq!(root.left().unwrap().node_count(), 2);
        assert_eq!(root.right().unwrap().node_count(), 2);

        assert_partitioned(root);
    }

    #[test]
    fn every_point_appears_exactly_once() {
        let points = make_points(&[
            (1.0, 7.0),
            (2.5, 8.5),
            (1.5, 6.0),
            (7.0, 8.0),
            (8.5, 7.5),
            (2.0, 2.0),
            (1.0, 3.5),
            (7.5, 2.5),
            (8.0, 1.0),
            (6.5, 3.0),
        ]);
        let tree = KdTree::build(&points);

        assert_eq!(tree.node_count(), points.len());

        let mut collected = tree.collect_points();
        let mut expected = points.clone();
        let key = |p: &Point2<f32>| (p.x.to_bits(), p.y.to_bits());
        collected.sort_by_key(key);
        expected.sort_by_key(key);
        assert_eq!(collected, expected);

        // Each original index shows up on exactly one node.
        let mut visitor = CollectingVisitor::new();
        tree.traverse_preorder(&mut visitor);
        let mut indices: Vec<usize> =
            visitor.visited().iter().map(|(index, _, _)| *index).collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..points.len()).collect::<Vec<_>>());
    }

    #[test]
    fn depth_is_balanced_regardless_of_input_order() {
        let mut points = make_points(&[
            (9.0, 1.0),
            (8.0, 2.0),
            (7.0, 3.0),
            (6.0, 4.0),
            (5.0, 5.0),
            (4.0, 6.0),
            (3.0, 7.0),
        ]);

        // ceil(log2(7 + 1)) = 3
        assert_eq!(KdTree::build(&points).depth(), 3);
        points.reverse();
        assert_eq!(KdTree::build(&points).depth(), 3);
        points.swap(0, 3);
        points.swap(2, 5);
        assert_eq!(KdTree::build(&points).depth(), 3);
    }

    #[test]
    fn subtree_sizes_follow_median_split() {
        for n in 1..=16 {
            let points: Vec<Point2<f32>> =
                (0..n).map(|i| Point2::new(i as f32, (n - i) as f32)).collect();
            let tree = KdTree::build(&points);

            let root = tree.root().unwrap();
            let left = root.left().map_or(0, |l| l.node_count());
            let right = root.right().map_or(0, |r| r.node_count());
            assert_eq!(left, n / 2);
            assert_eq!(right, n - 1 - n / 2);
        }
    }

    #[test]
    fn duplicate_coordinates_preserve_invariant() {
        let points = make_points(&[(2.0, 1.0), (2.0, 5.0), (2.0, 3.0), (2.0, 4.0), (2.0, 2.0)]);
        let tree = KdTree::build(&points);

        assert_eq!(tree.node_count(), 5);
        assert_partitioned(tree.root().unwrap());
    }

    #[test]
    fn ties_keep_input_order() {
        // All x equal: the stable sort leaves input order intact, so the
        // median node is the point at input index 2.
        let points = make_points(&[(1.0, 9.0), (1.0, 8.0), (1.0, 7.0), (1.0, 6.0), (1.0, 5.0)]);
        let tree = KdTree::build(&points);

        assert_eq!(tree.root().unwrap().index(), 2);
    }

    #[test]
    fn preorder_visits_node_before_children() {
        let points = make_points(&[(1.0, 7.0), (2.5, 8.5), (1.5, 6.0), (7.0, 8.0), (8.5, 7.5)]);
        let tree = KdTree::build(&points);

        let mut visitor = CollectingVisitor::new();
        tree.traverse_preorder(&mut visitor);

        let visited = visitor.visited();
        assert_eq!(visited.len(), 5);
        // Root first, at depth 0.
        assert_eq!(visited[0].0, tree.root().unwrap().index());
        assert_eq!(visited[0].2, 0);
        // Depths never jump by more than one going down.
        for pair in visited.windows(2) {
            assert!(pair[1].2 <= pair[0].2 + 1);
        }
    }

    #[test]
    #[should_panic(expected = "non-finite coordinate")]
    fn nan_coordinate_panics() {
        KdTree::build(&[Point2::new(f32::NAN, 0.0)]);
    }

    #[test]
    #[should_panic(expected = "non-finite coordinate")]
    fn infinite_coordinate_panics() {
        KdTree::build(&[Point2::new(0.0, f32::INFINITY)]);
    }
}
