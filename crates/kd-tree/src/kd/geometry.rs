//! Partition geometry: the split segments and leaf regions a KD-tree
//! carves out of an ambient bounding rectangle.
//!
//! The tree stores no geometry beyond its split points; everything here is
//! derived top-down on each call by narrowing the ambient [`Bounds`] along
//! the splitting axis at every node.

use nalgebra::Point2;

use super::node::KdNode;
use super::tree::KdTree;
use crate::{Axis, Bounds};

/// One split line, clipped to the bounding rectangle its node inherited.
///
/// A node splitting on x produces a vertical segment at `position = point.x`
/// spanning its rectangle's y extent; a node splitting on y produces a
/// horizontal segment at `position = point.y` spanning the x extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitSegment {
    /// The axis the node compares on. [`Axis::X`] means a vertical line.
    pub axis: Axis,
    /// The fixed coordinate of the line (x for vertical, y for horizontal).
    pub position: f32,
    /// Start of the segment along the perpendicular axis.
    pub span_start: f32,
    /// End of the segment along the perpendicular axis.
    pub span_end: f32,
}

impl SplitSegment {
    /// Returns the segment's two endpoints in world coordinates.
    pub fn endpoints(&self) -> (Point2<f32>, Point2<f32>) {
        match self.axis {
            Axis::X => (
                Point2::new(self.position, self.span_start),
                Point2::new(self.position, self.span_end),
            ),
            Axis::Y => (
                Point2::new(self.span_start, self.position),
                Point2::new(self.span_end, self.position),
            ),
        }
    }
}

/// Computes the clipped split segments for every node of the tree.
///
/// Segments are produced in pre-order. Each node's segment lies within the
/// rectangle inherited from its parent: the root's segment spans `bounds`,
/// and each child sees its parent's rectangle narrowed to its own side of
/// the split. Returns an empty sequence for an empty tree.
///
/// `bounds` should enclose the full point set, typically via
/// [`Bounds::around_points`] with a positive margin.
///
/// # Panics
/// Panics if a split point lies outside `bounds`.
pub fn partition_segments(tree: &KdTree, bounds: Bounds) -> Vec<SplitSegment> {
    let mut segments = Vec::with_capacity(tree.node_count());
    collect_segments(tree.root(), bounds, &mut segments);
    segments
}

/// Computes the leaf-level rectangles of the fully recursed partition.
///
/// Every node splits its inherited rectangle in two; a missing child
/// contributes its (unsplit) rectangle directly. The returned rectangles
/// exactly tile `bounds` with no gaps or overlaps. An empty tree yields the
/// single undivided `bounds`.
///
/// # Panics
/// Panics if a split point lies outside `bounds`.
pub fn leaf_regions(tree: &KdTree, bounds: Bounds) -> Vec<Bounds> {
    let mut regions = Vec::new();
    collect_regions(tree.root(), bounds, &mut regions);
    regions
}

fn collect_segments(node: Option<&KdNode>, bounds: Bounds, out: &mut Vec<SplitSegment>) {
    let Some(node) = node else {
        return;
    };

    let position = node.split_value();
    let (span_start, span_end) = bounds.span(node.axis().perpendicular());
    out.push(SplitSegment {
        axis: node.axis(),
        position,
        span_start,
        span_end,
    });

    let (low_side, high_side) = bounds.split_at(node.axis(), position);
    collect_segments(node.left(), low_side, out);
    collect_segments(node.right(), high_side, out);
}

fn collect_regions(node: Option<&KdNode>, bounds: Bounds, out: &mut Vec<Bounds>) {
    let Some(node) = node else {
        out.push(bounds);
        return;
    };

    let (low_side, high_side) = bounds.split_at(node.axis(), node.split_value());
    collect_regions(node.left(), low_side, out);
    collect_regions(node.right(), high_side, out);
}
