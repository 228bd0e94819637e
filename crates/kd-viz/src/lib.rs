//! Shared drawing utilities for the KD-tree visualization binaries.

use kd_tree::{Axis, Bounds, FnVisitor, KdNode, KdTree, TreeLayout, partition_segments};
use macroquad::prelude::*;
use nalgebra::Point2;

/// Radius of the point markers in the space-partition view.
const POINT_RADIUS: f32 = 5.0;

/// Radius of the node circles in the tree-structure view.
const NODE_RADIUS: f32 = 24.0;

/// Builds the index-to-label mapping for a point set: "P1", "P2", ...
///
/// Labels follow each point's position in the original input sequence, so
/// they stay attached to the right point no matter where the tree places it.
pub fn point_labels(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("P{}", i + 1)).collect()
}

/// Line color for a split on the given axis: vertical x-splits are blue,
/// horizontal y-splits are green.
pub fn split_color(axis: Axis) -> Color {
    match axis {
        Axis::X => BLUE,
        Axis::Y => GREEN,
    }
}

/// Fill color for a node circle in the structure view.
fn node_color(axis: Axis) -> Color {
    match axis {
        Axis::X => SKYBLUE,
        Axis::Y => LIME,
    }
}

/// Maps world coordinates inside a [`Bounds`] onto a screen rectangle.
///
/// World y grows upward, screen y downward; the viewport flips the axis so
/// diagrams read the usual way up.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    bounds: Bounds,
    origin: Vec2,
    size: Vec2,
}

impl Viewport {
    /// Creates a viewport showing `bounds` inside the screen rectangle at
    /// `origin` with the given `size` in pixels.
    pub fn new(bounds: Bounds, origin: Vec2, size: Vec2) -> Self {
        Self {
            bounds,
            origin,
            size,
        }
    }

    /// Returns the world-space region this viewport shows.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Converts a world-space point to screen pixels.
    pub fn to_screen(&self, point: Point2<f32>) -> Vec2 {
        let fx = (point.x - self.bounds.x_min()) / self.bounds.width();
        let fy = (point.y - self.bounds.y_min()) / self.bounds.height();
        vec2(
            self.origin.x + fx * self.size.x,
            self.origin.y + (1.0 - fy) * self.size.y,
        )
    }

    /// Draws the viewport's outline.
    pub fn draw_frame(&self) {
        draw_rectangle_lines(
            self.origin.x,
            self.origin.y,
            self.size.x,
            self.size.y,
            2.0,
            DARKGRAY,
        );
    }
}

/// Draws every split segment of the tree, clipped to `bounds`, into the
/// space-partition view.
pub fn draw_partition(tree: &KdTree, bounds: Bounds, viewport: &Viewport) {
    for segment in partition_segments(tree, bounds) {
        let (start, end) = segment.endpoints();
        let a = viewport.to_screen(start);
        let b = viewport.to_screen(end);
        draw_line(a.x, a.y, b.x, b.y, 2.5, split_color(segment.axis));
    }
}

/// Draws the input points with their labels into the space-partition view.
pub fn draw_points(points: &[Point2<f32>], labels: &[String], viewport: &Viewport) {
    for (i, point) in points.iter().enumerate() {
        let s = viewport.to_screen(*point);
        draw_circle(s.x, s.y, POINT_RADIUS, RED);
        if let Some(label) = labels.get(i) {
            draw_text(label, s.x + 8.0, s.y - 8.0, 18.0, WHITE);
        }
    }
}

/// Draws the tree-structure view: parent-child edges, one circle per node
/// colored by its splitting axis, the split value inside the circle, and the
/// point's label above it.
pub fn draw_structure(tree: &KdTree, layout: &TreeLayout, labels: &[String], viewport: &Viewport) {
    for (from, to) in layout.edges() {
        let a = viewport.to_screen(*from);
        let b = viewport.to_screen(*to);
        draw_line(a.x, a.y, b.x, b.y, 2.0, GRAY);
    }

    let mut visitor = FnVisitor::new(|node: &KdNode, _| {
        let Some(position) = layout.position(node.index()) else {
            return;
        };
        let s = viewport.to_screen(position);

        draw_circle(s.x, s.y, NODE_RADIUS, node_color(node.axis()));
        draw_circle_lines(s.x, s.y, NODE_RADIUS, 2.0, BLACK);

        let axis_text = match node.axis() {
            Axis::X => "x-split",
            Axis::Y => "y-split",
        };
        draw_centered_text(axis_text, s.x, s.y - 4.0, 14.0, BLACK);
        draw_centered_text(
            &format!("{:.1}", node.split_value()),
            s.x,
            s.y + 12.0,
            16.0,
            DARKBLUE,
        );

        if let Some(label) = labels.get(node.index()) {
            draw_centered_text(label, s.x, s.y - NODE_RADIUS - 6.0, 18.0, RED);
        }
    });
    tree.traverse_preorder(&mut visitor);
}

/// Draws text horizontally centered on `x`.
fn draw_centered_text(text: &str, x: f32, y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, x - dims.width / 2.0, y, font_size, color);
}

/// The ten-point demonstration dataset, strategically placed so each level
/// of splitting is visible in the space diagram.
pub fn demonstration_points() -> Vec<Point2<f32>> {
    vec![
        Point2::new(1.0, 7.0),  // P1 - upper left cluster
        Point2::new(2.5, 8.5),  // P2 - upper left cluster
        Point2::new(1.5, 6.0),  // P3 - upper left cluster
        Point2::new(7.0, 8.0),  // P4 - upper right
        Point2::new(8.5, 7.5),  // P5 - upper right
        Point2::new(2.0, 2.0),  // P6 - lower left
        Point2::new(1.0, 3.5),  // P7 - lower left
        Point2::new(7.5, 2.5),  // P8 - lower right cluster
        Point2::new(8.0, 1.0),  // P9 - lower right cluster
        Point2::new(6.5, 3.0),  // P10 - lower right cluster
    ]
}
