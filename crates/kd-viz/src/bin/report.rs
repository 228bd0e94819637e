//! Prints the construction details of the demonstration KD-tree to stdout.

use kd_tree::{KdTree, describe};
use kd_viz::{demonstration_points, point_labels};

fn main() {
    let points = demonstration_points();
    let labels = point_labels(points.len());

    println!("Building KD-tree for demonstration dataset...");
    println!("Dataset: {} strategically placed points", points.len());
    for (label, point) in labels.iter().zip(&points) {
        println!("  {label}: ({:.2}, {:.2})", point.x, point.y);
    }

    let tree = KdTree::build(&points);
    println!();
    println!(
        "KD-tree built: {} nodes, depth {}",
        tree.node_count(),
        tree.depth()
    );

    println!();
    println!("KD-Tree construction details:");
    println!("{}", "=".repeat(60));
    for line in describe(&tree) {
        println!("{line}");
    }
}
