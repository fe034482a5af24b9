//! Scaling from input coordinates to drawing units.
//!
//! A [`ScaleTransform`] is a single positive factor. It is usually fitted to a
//! point set so that the larger side of the set's bounding box spans a target
//! physical size (TikZ coordinates are centimetres by default).

use log::debug;

use crate::{
    error::GeometryError,
    geometry::{Bounds, Point},
};

/// Default target size in centimetres for the larger bounding-box side.
pub const DEFAULT_TARGET_SIZE: f64 = 10.0;

/// Multiplier converting input coordinates into drawing units.
///
/// # Examples
///
/// ```
/// use texcanvas_core::{geometry::Point, scale::ScaleTransform};
///
/// let points = [Point::new(0.0, 0.0), Point::new(50.0, 20.0)];
/// let scale = ScaleTransform::fit_points(points, 10.0).unwrap();
///
/// assert_eq!(scale.factor(), 0.2);
/// assert_eq!(scale.apply(Point::new(50.0, 20.0)), Point::new(10.0, 4.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTransform {
    factor: f64,
}

impl Default for ScaleTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ScaleTransform {
    /// A transform leaving coordinates unchanged.
    pub fn identity() -> Self {
        Self { factor: 1.0 }
    }

    /// Fits a transform so that the larger side of `bounds` spans `target_size`.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::InvalidTargetSize`] if `target_size` is not positive and finite.
    /// - [`GeometryError::NonFiniteCoordinate`] if a corner of the bounds is not finite.
    /// - [`GeometryError::CoincidentPoints`] if the bounds have zero extent.
    pub fn fit_bounds(bounds: Bounds, target_size: f64) -> Result<Self, GeometryError> {
        if !(target_size.is_finite() && target_size > 0.0) {
            return Err(GeometryError::InvalidTargetSize(target_size));
        }

        // f64::max skips NaN, so the extent alone can look finite.
        if !bounds.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate);
        }
        let basis = bounds.extent();
        if basis == 0.0 {
            return Err(GeometryError::CoincidentPoints);
        }

        let factor = target_size / basis;
        debug!(basis, target_size, factor; "Fitted scale transform");
        Ok(Self { factor })
    }

    /// Fits a transform to the bounding box of `points`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyPointSet`] for an empty sequence,
    /// [`GeometryError::NonFiniteCoordinate`] if any point has a NaN or
    /// infinite coordinate, and the errors of [`Self::fit_bounds`] otherwise.
    pub fn fit_points<I>(points: I, target_size: f64) -> Result<Self, GeometryError>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut bounds: Option<Bounds> = None;
        for point in points {
            if !point.is_finite() {
                return Err(GeometryError::NonFiniteCoordinate);
            }
            bounds = Some(match bounds {
                Some(bounds) => bounds.include(point),
                None => Bounds::new(point, point),
            });
        }
        let bounds = bounds.ok_or(GeometryError::EmptyPointSet)?;
        Self::fit_bounds(bounds, target_size)
    }

    /// Returns the scale factor.
    pub fn factor(self) -> f64 {
        self.factor
    }

    /// Scales a point.
    pub fn apply(self, point: Point) -> Point {
        point.scale(self.factor)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_identity_is_default() {
        assert_eq!(ScaleTransform::default().factor(), 1.0);
    }

    #[test]
    fn test_fit_uses_larger_dimension() {
        let points = [Point::new(-1.0, 0.0), Point::new(1.0, 8.0)];
        let scale = ScaleTransform::fit_points(points, DEFAULT_TARGET_SIZE).unwrap();
        assert_approx_eq!(f64, scale.factor(), 1.25);
    }

    #[test]
    fn test_fit_rejects_empty_points() {
        let result = ScaleTransform::fit_points(Vec::new(), 10.0);
        assert_eq!(result, Err(GeometryError::EmptyPointSet));
    }

    #[test]
    fn test_fit_rejects_coincident_points() {
        let points = [Point::new(2.0, 3.0), Point::new(2.0, 3.0)];
        let result = ScaleTransform::fit_points(points, 10.0);
        assert_eq!(result, Err(GeometryError::CoincidentPoints));
    }

    #[test]
    fn test_fit_rejects_nan_between_finite_points() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(f64::NAN, 1.0),
            Point::new(2.0, 2.0),
        ];
        let result = ScaleTransform::fit_points(points, 10.0);
        assert_eq!(result, Err(GeometryError::NonFiniteCoordinate));

        let points = [Point::new(0.0, 0.0), Point::new(1.0, f64::INFINITY)];
        let result = ScaleTransform::fit_points(points, 10.0);
        assert_eq!(result, Err(GeometryError::NonFiniteCoordinate));
    }

    #[test]
    fn test_fit_rejects_bounds_with_nan_corner() {
        let bounds = Bounds::new(Point::new(f64::NAN, 0.0), Point::new(f64::NAN, 4.0));
        assert_eq!(
            ScaleTransform::fit_bounds(bounds, 10.0),
            Err(GeometryError::NonFiniteCoordinate)
        );
    }

    #[test]
    fn test_fit_rejects_bad_target_size() {
        let bounds = Bounds::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        assert!(matches!(
            ScaleTransform::fit_bounds(bounds, 0.0),
            Err(GeometryError::InvalidTargetSize(_))
        ));
        assert!(matches!(
            ScaleTransform::fit_bounds(bounds, f64::NAN),
            Err(GeometryError::InvalidTargetSize(_))
        ));
    }

    #[test]
    fn test_fit_rejects_infinite_coordinates() {
        let points = [Point::new(0.0, 0.0), Point::new(f64::INFINITY, 1.0)];
        assert_eq!(
            ScaleTransform::fit_points(points, 10.0),
            Err(GeometryError::NonFiniteCoordinate)
        );
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    /// The scaled bounding box's larger side equals the target size.
    fn check_fit_reaches_target(points: &[Point], target: f64) -> Result<(), TestCaseError> {
        let bounds = Bounds::from_points(points.iter().copied()).expect("non-empty input");
        prop_assume!(bounds.extent() > 1.0);

        let scale = ScaleTransform::fit_bounds(bounds, target)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert!(scale.factor() > 0.0);

        let scaled = Bounds::from_points(points.iter().map(|p| scale.apply(*p)))
            .expect("non-empty input");
        prop_assert!(approx_eq!(
            f64,
            scaled.extent(),
            target,
            epsilon = 1e-9 * target.max(1.0)
        ));
        Ok(())
    }

    proptest! {
        #[test]
        fn fit_reaches_target(
            points in prop::collection::vec(point_strategy(), 2..40),
            target in 0.5f64..50.0,
        ) {
            check_fit_reaches_target(&points, target)?;
        }
    }
}
