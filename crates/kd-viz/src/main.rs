use kd_tree::{Bounds, KdTree, TreeLayout};
use kd_viz::{
    Viewport, demonstration_points, draw_partition, draw_points, draw_structure, point_labels,
};
use macroquad::prelude::*;

/// Margin added around the point extents so extreme points are not drawn on
/// the boundary of the space diagram.
const SPACE_MARGIN: f32 = 2.0;

#[macroquad::main("KD-Tree Visualization")]
async fn main() {
    let points = demonstration_points();
    let labels = point_labels(points.len());

    println!("Building KD-tree from {} demonstration points...", points.len());
    let tree = KdTree::build(&points);
    println!(
        "KD-tree built: {} nodes, depth {}",
        tree.node_count(),
        tree.depth()
    );

    let bounds = Bounds::around_points(&points, SPACE_MARGIN)
        .expect("demonstration dataset is non-empty");

    loop {
        clear_background(Color::from_rgba(20, 20, 30, 255));

        let pane_width = screen_width() / 2.0 - 30.0;
        let pane_height = screen_height() - 100.0;

        // Left pane: how the splits carve up the plane.
        let space_view = Viewport::new(bounds, vec2(20.0, 70.0), vec2(pane_width, pane_height));
        space_view.draw_frame();
        draw_partition(&tree, bounds, &space_view);
        draw_points(&points, &labels, &space_view);

        // Right pane: the logical shape of the tree. Layout coordinates are
        // display units, recomputed each frame and unrelated to the points.
        let layout = TreeLayout::compute(&tree, 4.0, 3.0, 4.0);
        let layout_region = Bounds::new(-1.0, 9.0, -1.0, 4.0);
        let structure_view = Viewport::new(
            layout_region,
            vec2(screen_width() / 2.0 + 10.0, 70.0),
            vec2(pane_width, pane_height),
        );
        draw_structure(&tree, &layout, &labels, &structure_view);

        draw_text("KD-Tree Space Partitioning", 20.0, 30.0, 24.0, WHITE);
        draw_text(
            "KD-Tree Structure",
            screen_width() / 2.0 + 10.0,
            30.0,
            24.0,
            WHITE,
        );
        draw_text(
            &format!(
                "{} points | {} nodes | depth {}",
                points.len(),
                tree.node_count(),
                tree.depth()
            ),
            20.0,
            52.0,
            18.0,
            GRAY,
        );
        draw_text(
            "blue: x-splits (vertical) | green: y-splits (horizontal)",
            20.0,
            screen_height() - 12.0,
            16.0,
            DARKGRAY,
        );

        next_frame().await
    }
}
