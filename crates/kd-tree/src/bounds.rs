//! Axis-aligned bounding rectangles.

use nalgebra::Point2;

use crate::Axis;

/// An axis-aligned rectangle, used as the ambient region while deriving
/// partition geometry.
///
/// Bounds are threaded top-down through the recursion and never stored in
/// the tree itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    x_min: f32,
    x_max: f32,
    y_min: f32,
    y_max: f32,
}

impl Bounds {
    /// Creates a rectangle from its coordinate extents.
    ///
    /// # Panics
    /// Panics if `x_min > x_max` or `y_min > y_max`.
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        assert!(
            x_min <= x_max && y_min <= y_max,
            "Bounds extents must be ordered: [{x_min}, {x_max}] x [{y_min}, {y_max}]"
        );
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Computes the bounding rectangle of a point set, expanded by `margin`
    /// on every side so extreme points are not drawn on the boundary.
    ///
    /// Returns `None` for an empty point set.
    pub fn around_points(points: &[Point2<f32>], margin: f32) -> Option<Self> {
        let first = points.first()?;
        let mut x_min = first.x;
        let mut x_max = first.x;
        let mut y_min = first.y;
        let mut y_max = first.y;

        for p in &points[1..] {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }

        Some(Self::new(
            x_min - margin,
            x_max + margin,
            y_min - margin,
            y_max + margin,
        ))
    }

    /// Returns the minimum x extent.
    #[inline]
    pub fn x_min(&self) -> f32 {
        self.x_min
    }

    /// Returns the maximum x extent.
    #[inline]
    pub fn x_max(&self) -> f32 {
        self.x_max
    }

    /// Returns the minimum y extent.
    #[inline]
    pub fn y_min(&self) -> f32 {
        self.y_min
    }

    /// Returns the maximum y extent.
    #[inline]
    pub fn y_max(&self) -> f32 {
        self.y_max
    }

    /// Returns the extent of the rectangle along `axis`.
    #[inline]
    pub fn span(&self, axis: Axis) -> (f32, f32) {
        match axis {
            Axis::X => (self.x_min, self.x_max),
            Axis::Y => (self.y_min, self.y_max),
        }
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    /// Area of the rectangle.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Returns `true` if the point lies inside the rectangle (inclusive).
    pub fn contains(&self, point: &Point2<f32>) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }

    /// Splits the rectangle into two along `axis` at `position`.
    ///
    /// For [`Axis::X`] the cut is a vertical line: the first result keeps
    /// everything left of `position`, the second everything right of it.
    /// For [`Axis::Y`] the cut is horizontal, below/above respectively.
    ///
    /// # Panics
    /// Panics if `position` lies outside the rectangle's extent on `axis`.
    pub fn split_at(&self, axis: Axis, position: f32) -> (Self, Self) {
        let (lo, hi) = self.span(axis);
        assert!(
            position >= lo && position <= hi,
            "split position {position} outside [{lo}, {hi}]"
        );
        match axis {
            Axis::X => (
                Self::new(self.x_min, position, self.y_min, self.y_max),
                Self::new(position, self.x_max, self.y_min, self.y_max),
            ),
            Axis::Y => (
                Self::new(self.x_min, self.x_max, self.y_min, position),
                Self::new(self.x_min, self.x_max, position, self.y_max),
            ),
        }
    }
}
