//! Geometric primitives for board layout and rendering.
//!
//! # Coordinate System
//!
//! Dropboard uses the screen/SVG convention:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: top-left corner at `(0, 0)`
//! - **X-axis**: increases rightward
//! - **Y-axis**: increases downward
//!
//! Gravity therefore points toward positive Y, and an "upward kick" is a
//! negative Y velocity.

/// A 2D point in board coordinate space.
///
/// Box placements store their *center* as a `Point`; the physics world uses
/// the same convention for body translations.
///
/// # Examples
///
/// ```
/// # use dropboard_core::geometry::Point;
/// let center = Point::new(60.0, 40.0);
/// let moved = center.add_point(Point::new(0.0, 10.0));
/// assert_eq!(moved.y(), 50.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
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

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Converts a center point and a size into a bounds rectangle
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

/// Width and height of a board element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Half of the width, the horizontal extent from center to edge
    pub fn half_width(self) -> f32 {
        self.width / 2.0
    }

    /// Half of the height, the vertical extent from center to edge
    pub fn half_height(self) -> f32 {
        self.height / 2.0
    }
}

/// A rectangular bounding box with minimum and maximum coordinates.
///
/// Used when a centered box has to be expressed in top-left/extent form,
/// which is what SVG `<rect>` elements expect.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        Self {
            min_x: center.x - size.half_width(),
            min_y: center.y - size.half_height(),
            max_x: center.x + size.half_width(),
            max_y: center.y + size.half_height(),
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_accessors() {
        let point = Point::new(3.5, 4.25);
        assert_approx_eq!(f32, point.x(), 3.5);
        assert_approx_eq!(f32, point.y(), 4.25);
    }

    #[test]
    fn test_point_add() {
        let moved = Point::new(1.0, 2.0).add_point(Point::new(3.0, -4.0));
        assert_approx_eq!(f32, moved.x(), 4.0);
        assert_approx_eq!(f32, moved.y(), -2.0);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_approx_eq!(f32, a.distance(b), 5.0);
        assert_approx_eq!(f32, a.distance(a), 0.0);
    }

    #[test]
    fn test_size_halves() {
        let size = Size::new(80.0, 40.0);
        assert_approx_eq!(f32, size.half_width(), 40.0);
        assert_approx_eq!(f32, size.half_height(), 20.0);
    }

    #[test]
    fn test_bounds_from_center() {
        let bounds = Bounds::new_from_center(Point::new(60.0, 40.0), Size::new(80.0, 40.0));
        assert_approx_eq!(f32, bounds.min_x(), 20.0);
        assert_approx_eq!(f32, bounds.min_y(), 20.0);
        assert_approx_eq!(f32, bounds.max_x(), 100.0);
        assert_approx_eq!(f32, bounds.max_y(), 60.0);
        assert_approx_eq!(f32, bounds.width(), 80.0);
        assert_approx_eq!(f32, bounds.height(), 40.0);
    }

    #[test]
    fn test_bounds_center_roundtrip() {
        let center = Point::new(-12.0, 7.5);
        let bounds = center.to_bounds(Size::new(10.0, 4.0));
        assert_eq!(bounds.center(), center);
    }
}
