//! Two-dimensional KD-tree implementation for spatial-partition visualization.

mod axis;
mod bounds;

pub mod kd;

pub use axis::Axis;
pub use bounds::Bounds;
pub use kd::{
    CollectingVisitor, FnVisitor, KdNode, KdTree, KdVisitor, SplitSegment, TreeLayout, describe,
    leaf_regions, partition_segments,
};
