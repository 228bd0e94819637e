//! Two-dimensional KD-tree construction and its read-only consumers.
//!
//! The tree recursively partitions a 2D point set by alternating the
//! splitting axis with depth and splitting at the median along that axis.
//! It is built once from a fixed point set and never mutated or queried
//! afterwards; three independent consumers derive views from it:
//!
//! - [`partition_segments`]/[`leaf_regions`]: the clipped split lines and
//!   leaf rectangles inside an ambient bounding rectangle (space diagram)
//! - [`TreeLayout`]: display coordinates for the tree's logical shape
//!   (structure diagram)
//! - [`describe`]: a depth-ordered textual report
//!
//! # Example
//!
//! ```
//! use kd_tree::{Bounds, KdTree, TreeLayout, kd};
//! use nalgebra::Point2;
//!
//! let points = vec![
//!     Point2::new(1.0, 7.0),
//!     Point2::new(2.5, 8.5),
//!     Point2::new(1.5, 6.0),
//! ];
//! let tree = KdTree::build(&points);
//!
//! // Space-partition view: split segments within a margin-padded rectangle.
//! let bounds = Bounds::around_points(&points, 2.0).unwrap();
//! let segments = kd::partition_segments(&tree, bounds);
//! assert_eq!(segments.len(), tree.node_count());
//!
//! // Structure view: one display position per node.
//! let layout = TreeLayout::compute(&tree, 4.0, 3.0, 2.0);
//! assert_eq!(layout.len(), tree.node_count());
//! ```
//!
//! # Architecture
//!
//! - [`KdTree`]: the container holding the root node and the builder
//! - [`KdNode`]: one split, owning its point and child subtrees
//! - [`KdVisitor`]: visitor trait for pre-order traversal
//! - [`SplitSegment`]: one clipped partition line for drawing

mod geometry;
mod layout;
mod node;
mod report;
mod tree;
mod visitor;

// Re-export main types
pub use geometry::{SplitSegment, leaf_regions, partition_segments};
pub use layout::TreeLayout;
pub use node::KdNode;
pub use report::describe;
pub use tree::KdTree;
pub use visitor::{CollectingVisitor, FnVisitor, KdVisitor};
