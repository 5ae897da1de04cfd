//! Normalized page geometry.
//!
//! This module provides the geometric value types used to position diagram
//! elements on a page.
//!
//! # Coordinate System
//!
//! Pages use a normalized coordinate space:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! - **Origin**: Bottom-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward, from 0.0 to 1.0
//! - **Y-axis**: Increases upward, from 0.0 to 1.0
//!
//! The [`Canvas`](crate::draw::Canvas) maps this space onto page points and
//! performs the y-flip that SVG output requires.

/// A 2D point in normalized page space.
///
/// # Examples
///
/// ```
/// # use capdeck_core::geometry::Point;
/// let start = Point::new(0.2, 0.5);
/// let end = Point::new(0.8, 0.5);
///
/// let mid = start.midpoint(end);
/// assert_eq!(mid.x(), 0.5);
/// assert_eq!(mid.y(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Returns this point displaced by the given offset.
    pub fn translate(self, offset: Offset) -> Self {
        Self {
            x: self.x + offset.dx,
            y: self.y + offset.dy,
        }
    }
}

/// A displacement in normalized page space, used for label offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    dx: f32,
    dy: f32,
}

impl Offset {
    /// Creates a new offset with the specified displacements
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Returns the horizontal displacement
    pub fn dx(self) -> f32 {
        self.dx
    }

    /// Returns the vertical displacement
    pub fn dy(self) -> f32 {
        self.dy
    }
}

/// Width and height dimensions in normalized page space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    /// Creates a new size with the specified dimensions
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height
    pub fn height(self) -> f32 {
        self.height
    }
}

/// An axis-aligned rectangle defined by minimum and maximum corners.
///
/// # Examples
///
/// ```
/// # use capdeck_core::geometry::{Bounds, Point, Size};
/// let bounds = Bounds::new(Point::new(0.0, 0.0), Point::new(1.0, 0.92));
///
/// assert!(bounds.contains(Point::new(0.5, 0.5)));
/// assert!(!bounds.contains(Point::new(0.5, 0.95)));
/// assert!(bounds.contains_rect(Point::new(0.1, 0.1), Size::new(0.2, 0.2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    /// Creates bounds from minimum and maximum corner points
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Returns the minimum corner point
    pub fn min_point(self) -> Point {
        self.min
    }

    /// Returns the maximum corner point
    pub fn max_point(self) -> Point {
        self.max
    }

    /// Checks whether a point lies inside these bounds (inclusive).
    pub fn contains(self, point: Point) -> bool {
        point.x() >= self.min.x()
            && point.x() <= self.max.x()
            && point.y() >= self.min.y()
            && point.y() <= self.max.y()
    }

    /// Checks whether a rectangle anchored at `origin` (its bottom-left
    /// corner) with the given size lies entirely inside these bounds.
    pub fn contains_rect(self, origin: Point, size: Size) -> bool {
        self.contains(origin)
            && self.contains(Point::new(
                origin.x() + size.width(),
                origin.y() + size.height(),
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn test_point_midpoint() {
        let a = Point::new(0.2, 0.4);
        let b = Point::new(0.6, 0.8);
        let mid = a.midpoint(b);
        assert!(approx_eq!(f32, mid.x(), 0.4));
        assert!(approx_eq!(f32, mid.y(), 0.6));
    }

    #[test]
    fn test_point_translate() {
        let anchor = Point::new(0.5, 0.5).translate(Offset::new(-0.04, 0.02));
        assert!(approx_eq!(f32, anchor.x(), 0.46));
        assert!(approx_eq!(f32, anchor.y(), 0.52));
    }

    #[test]
    fn test_bounds_contains_edges() {
        let bounds = Bounds::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        assert!(bounds.contains(Point::new(0.0, 0.0)));
        assert!(bounds.contains(Point::new(1.0, 1.0)));
        assert!(!bounds.contains(Point::new(1.0001, 0.5)));
    }

    #[test]
    fn test_bounds_contains_rect() {
        let bounds = Bounds::new(Point::new(0.0, 0.0), Point::new(1.0, 0.92));
        assert!(bounds.contains_rect(Point::new(0.03, 0.35), Size::new(0.94, 0.55)));
        assert!(!bounds.contains_rect(Point::new(0.5, 0.8), Size::new(0.2, 0.2)));
    }
}
