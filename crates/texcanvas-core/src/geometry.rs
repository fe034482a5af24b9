//! Geometric primitives for drawing point sets and graphs.
//!
//! This module provides the input contracts the printers draw from.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in input units
//! - [`Bounds`] - The axis-aligned bounding box of a point set
//! - [`Vertex`] - A positioned, optionally labelled point
//! - [`Edge`] - A pair of indices into a vertex sequence
//!
//! Any upstream graph or triangulation representation adapts to these by
//! producing a sequence of points and a sequence of index pairs.
//!
//! # Coordinate System
//!
//! Coordinates follow TikZ: X increases rightward and Y increases upward.
//! Coordinates use `f64` since they are interpolated into markup with six
//! fractional digits after scaling.

/// A 2D point in input coordinate space.
///
/// # Examples
///
/// ```
/// # use texcanvas_core::geometry::Point;
/// let p = Point::new(3.0, 4.0);
/// let q = Point::new(1.0, 1.0);
///
/// assert_eq!(p.sub_point(q), Point::new(2.0, 3.0));
/// assert_eq!(p.hypot(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Checks if both coordinates are finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both coordinates by the given factor.
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Calculates the Euclidean distance from the origin
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Rotates this point clockwise about the origin by `theta` radians.
    ///
    /// # Examples
    ///
    /// ```
    /// # use texcanvas_core::geometry::Point;
    /// let rotated = Point::new(0.0, 1.0).rotate_clockwise(std::f64::consts::FRAC_PI_2);
    /// assert!((rotated.x() - 1.0).abs() < 1e-12);
    /// assert!(rotated.y().abs() < 1e-12);
    /// ```
    pub fn rotate_clockwise(self, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self {
            x: self.x * cos + self.y * sin,
            y: -self.x * sin + self.y * cos,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// An axis-aligned bounding box defined by minimum and maximum coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates bounds spanning two corners, in any order.
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Creates the smallest bounds containing every point.
    ///
    /// Returns `None` for an empty sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// # use texcanvas_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::from_points([
    ///     Point::new(1.0, 5.0),
    ///     Point::new(-2.0, 3.0),
    ///     Point::new(4.0, 0.0),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(bounds.width(), 6.0);
    /// assert_eq!(bounds.height(), 5.0);
    /// assert!(Bounds::from_points(Vec::<Point>::new()).is_none());
    /// ```
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::new(first, first), |bounds, p| bounds.include(p)))
    }

    /// Returns these bounds grown to contain `point`.
    pub fn include(self, point: Point) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            min_y: self.min_y.min(point.y),
            max_x: self.max_x.max(point.x),
            max_y: self.max_y.max(point.y),
        }
    }

    /// Merges these bounds with another, returning bounds containing both.
    pub fn merge(&self, other: &Bounds) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the larger of width and height.
    pub fn extent(self) -> f64 {
        self.width().max(self.height())
    }

    /// Returns true if every corner coordinate is finite.
    pub fn is_finite(self) -> bool {
        [self.min_x, self.min_y, self.max_x, self.max_y]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// A positioned, optionally labelled point.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    position: Point,
    label: Option<String>,
}

impl Vertex {
    /// Creates an unlabelled vertex at `position`.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            label: None,
        }
    }

    /// Sets the label for this vertex (builder style).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl From<Point> for Vertex {
    fn from(position: Point) -> Self {
        Self::new(position)
    }
}

impl From<(f64, f64)> for Vertex {
    fn from(position: (f64, f64)) -> Self {
        Self::new(position.into())
    }
}

/// An edge given as two indices into a point or vertex sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    source: usize,
    target: usize,
}

impl Edge {
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    pub fn source(self) -> usize {
        self.source
    }

    pub fn target(self) -> usize {
        self.target
    }
}

impl From<(usize, usize)> for Edge {
    fn from((source, target): (usize, usize)) -> Self {
        Self::new(source, target)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let p = Point::new(1.5, -2.0);
        let q = Point::new(0.5, 1.0);

        assert_eq!(p.add_point(q), Point::new(2.0, -1.0));
        assert_eq!(p.sub_point(q), Point::new(1.0, -3.0));
        assert_eq!(p.scale(2.0), Point::new(3.0, -4.0));
        assert!(Point::default().is_zero());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
    }

    #[test]
    fn test_rotate_clockwise_quarter_turns() {
        let p = Point::new(1.0, 0.0);
        let quarter = std::f64::consts::FRAC_PI_2;

        let once = p.rotate_clockwise(quarter);
        assert_approx_eq!(f64, once.x(), 0.0, epsilon = 1e-12);
        assert_approx_eq!(f64, once.y(), -1.0, epsilon = 1e-12);

        let twice = once.rotate_clockwise(quarter);
        assert_approx_eq!(f64, twice.x(), -1.0, epsilon = 1e-12);
        assert_approx_eq!(f64, twice.y(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bounds_new_normalizes_corners() {
        let bounds = Bounds::new(Point::new(4.0, -1.0), Point::new(-2.0, 3.0));
        assert_eq!(bounds.min_x(), -2.0);
        assert_eq!(bounds.min_y(), -1.0);
        assert_eq!(bounds.max_x(), 4.0);
        assert_eq!(bounds.max_y(), 3.0);
        assert_eq!(bounds.extent(), 6.0);
    }

    #[test]
    fn test_bounds_single_point_has_zero_extent() {
        let bounds = Bounds::from_points([Point::new(7.0, 7.0)]).unwrap();
        assert_eq!(bounds.extent(), 0.0);
    }

    #[test]
    fn test_vertex_and_edge_conversions() {
        let vertex = Vertex::from((1.0, 2.0)).with_label("a");
        assert_eq!(vertex.position(), Point::new(1.0, 2.0));
        assert_eq!(vertex.label(), Some("a"));
        assert_eq!(Vertex::from(Point::new(0.0, 0.0)).label(), None);

        let edge = Edge::from((3, 5));
        assert_eq!(edge.source(), 3);
        assert_eq!(edge.target(), 5);
    }
}
