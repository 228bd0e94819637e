//! Human-readable description of a KD-tree's structure.

use super::node::KdNode;
use super::tree::KdTree;

/// Produces a depth-ordered textual description of the tree.
///
/// Nodes are listed in pre-order, one line per node giving its level, axis
/// name, split value, and point coordinates. Before each present child, a
/// label line states which side of the split the subtree covers, matching
/// the comparison direction used during construction (`<=` left, `>` right).
/// Lines are indented two spaces per level.
///
/// An empty tree produces no lines; a single-node tree produces exactly one.
///
/// ```
/// use kd_tree::{KdTree, kd::describe};
/// use nalgebra::Point2;
///
/// let tree = KdTree::build(&[Point2::new(2.0, 3.0)]);
/// let lines = describe(&tree);
/// assert_eq!(lines, vec!["level 0: split x at 2.00, point (2.00, 3.00)"]);
/// ```
pub fn describe(tree: &KdTree) -> Vec<String> {
    let mut lines = Vec::with_capacity(tree.node_count());
    if let Some(root) = tree.root() {
        describe_node(root, 0, &mut lines);
    }
    lines
}

fn describe_node(node: &KdNode, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    let point = node.point();
    lines.push(format!(
        "{indent}level {depth}: split {} at {:.2}, point ({:.2}, {:.2})",
        node.axis().name(),
        node.split_value(),
        point.x,
        point.y,
    ));

    if let Some(left) = node.left() {
        lines.push(format!(
            "{indent}  left subtree (<= {:.2}):",
            node.split_value()
        ));
        describe_node(left, depth + 1, lines);
    }
    if let Some(right) = node.right() {
        lines.push(format!(
            "{indent}  right subtree (> {:.2}):",
            node.split_value()
        ));
        describe_node(right, depth + 1, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    fn make_points(coords: &[(f32, f32)]) -> Vec<Point2<f32>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn empty_tree_empty_report() {
        assert!(describe(&KdTree::new()).is_empty());
    }

    #[test]
    fn single_node_single_line() {
        let tree = KdTree::build(&make_points(&[(2.0, 3.0)]));
        let lines = describe(&tree);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], "level 0: split x at 2.00, point (2.00, 3.00)");
    }

    #[test]
    fn three_nodes_full_report() {
        let tree = KdTree::build(&make_points(&[(1.0, 4.0), (5.0, 2.0), (9.0, 6.0)]));
        let lines = describe(&tree);

        assert_eq!(
            lines,
            vec![
                "level 0: split x at 5.00, point (5.00, 2.00)",
                "  left subtree (<= 5.00):",
                "  level 1: split y at 4.00, point (1.00, 4.00)",
                "  right subtree (> 5.00):",
                "  level 1: split y at 6.00, point (9.00, 6.00)",
            ]
        );
    }

    #[test]
    fn node_lines_come_before_their_children() {
        let tree = KdTree::build(&make_points(&[
            (1.0, 7.0),
            (2.5, 8.5),
            (1.5, 6.0),
            (7.0, 8.0),
            (8.5, 7.5),
        ]));
        let lines = describe(&tree);

        // One line per node plus one label line per present child.
        let node_lines = lines.iter().filter(|l| l.contains("level")).count();
        let label_lines = lines.iter().filter(|l| l.contains("subtree")).count();
        assert_eq!(node_lines, 5);
        assert_eq!(label_lines, 4);

        // Pre-order: the root's line is first.
        assert!(lines[0].starts_with("level 0"));
    }
}
