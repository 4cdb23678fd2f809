//! **Polar projection of 2D points**
//!
//! Angles in this crate are measured in radians *clockwise from the +y axis*,
//! the way a compass bearing is read, not counter-clockwise from +x:
//! ```text
//! x' = x + d·sin(θ)
//! y' = y + d·cos(θ)
//! ```
//! so θ = 0 points up (+y) and θ = π/2 points right (+x). A negative distance
//! projects in the opposite direction.
//!
//! Nothing here validates its inputs. NaN or infinite values flow straight
//! through to the result.

use crate::float_types::Real;
use geo::{Coord, LineString, Point};

/// Types that can be moved a distance along a bearing.
pub trait Project: Sized {
    /// Returns a new value offset by `distance` along `angle`.
    fn project(&self, distance: Real, angle: Real) -> Self;
}

impl Project for Coord<Real> {
    #[inline]
    fn project(&self, distance: Real, angle: Real) -> Self {
        let (sin, cos) = angle.sin_cos();
        Coord {
            x: self.x + distance * sin,
            y: self.y + distance * cos,
        }
    }
}

impl Project for Point<Real> {
    #[inline]
    fn project(&self, distance: Real, angle: Real) -> Self {
        Point(self.0.project(distance, angle))
    }
}

/// Projects `point` by `distance` along `angle`.
///
/// # Example
/// ```
/// use geo::Point;
/// use polar::projection::project;
///
/// let p = project(Point::new(0.0, 0.0), 10.0, 0.0);
/// assert_eq!(p, Point::new(0.0, 10.0));
/// ```
pub fn project(point: Point<Real>, distance: Real, angle: Real) -> Point<Real> {
    point.project(distance, angle)
}

/// Two-vertex line from `point` to its projection.
///
/// A zero `distance` gives a degenerate, zero-length line.
pub fn extend_point(point: Point<Real>, distance: Real, angle: Real) -> LineString<Real> {
    LineString::new(vec![point.0, point.0.project(distance, angle)])
}

/// Three-vertex line of total length `distance` centered on `point`.
///
/// The vertices are the forward projection by `distance / 2`, the point
/// itself, then the backward projection.
///
/// # Example
/// ```
/// use geo::{Point, line_string};
/// use polar::projection::centerline;
///
/// let line = centerline(Point::new(5.0, 5.0), 4.0, 0.0);
/// assert_eq!(line, line_string![(x: 5.0, y: 7.0), (x: 5.0, y: 5.0), (x: 5.0, y: 3.0)]);
/// ```
pub fn centerline(point: Point<Real>, distance: Real, angle: Real) -> LineString<Real> {
    let half = distance / 2.0;
    LineString::new(vec![
        point.0.project(half, angle),
        point.0,
        point.0.project(-half, angle),
    ])
}
