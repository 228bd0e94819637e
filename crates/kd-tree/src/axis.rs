//! Splitting axis for two-dimensional KD-trees.

use nalgebra::Point2;

/// The coordinate axis a node splits on.
///
/// The axis is determined solely by a node's depth in the tree: even depths
/// split on X, odd depths on Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Split on the x coordinate (a vertical partition line).
    X,
    /// Split on the y coordinate (a horizontal partition line).
    Y,
}

impl Axis {
    /// Returns the splitting axis for a node at the given depth.
    #[inline]
    pub fn from_depth(depth: usize) -> Self {
        if depth % 2 == 0 { Self::X } else { Self::Y }
    }

    /// Extracts this axis' coordinate from a point.
    #[inline]
    pub fn coord(&self, point: &Point2<f32>) -> f32 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
        }
    }

    /// Returns the other axis.
    #[inline]
    pub fn perpendicular(&self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// Human-readable axis name for reports.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}
