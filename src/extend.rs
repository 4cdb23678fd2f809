//! Lengthening a `LineString` at both ends.
//!
//! Each end is pushed out with [`Project`], so the start distance moves the
//! first vertex along the start angle and the end distance moves the last
//! vertex along the end angle. The new vertices are prepended and appended;
//! the original vertices are kept untouched in between.

use crate::errors::GeometryError;
use crate::float_types::{Real, approx_eq};
use crate::projection::Project;
use geo::{Coord, LineString};

/// How far to push each end of a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extension {
    /// Distance for the first vertex.
    pub start: Real,
    /// Distance for the last vertex.
    pub end: Real,
}

impl Extension {
    /// Explicit per-end distances.
    pub const fn new(start: Real, end: Real) -> Self {
        Self { start, end }
    }

    /// Splits `total` evenly between the two ends.
    pub const fn symmetric(total: Real) -> Self {
        let half = total / 2.0;
        Self { start: half, end: half }
    }
}

/// Rule for reading a direction off a vertex.
///
/// At the first vertex only the outgoing segment exists, and at the last
/// vertex only the incoming one, so every rule uses that single segment there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexAngle {
    /// Bearing of the segment ending at the vertex.
    Incoming,
    /// Bearing of the segment starting at the vertex.
    Outgoing,
    /// Bearing of the sum of the incoming and outgoing unit directions.
    /// A full reversal (within [`tolerance`](crate::float_types::tolerance)) has no bisector and falls back
    /// to `Incoming`.
    Bisector,
}

/// Bearing from `from` to `to`, clockwise from +y.
///
/// This undoes [`Project`]: projecting `from` by the distance to `to` along
/// this bearing lands on `to`. A zero-length segment has bearing 0.
#[inline]
pub fn bearing(from: Coord<Real>, to: Coord<Real>) -> Real {
    (to.x - from.x).atan2(to.y - from.y)
}

/// Direction of `line` at `vertex_index`.
///
/// No rule has been settled for this yet, so after the bounds check this
/// always fails with [`GeometryError::Unimplemented`]. Use
/// [`angle_at_vertex_by`] to pick a rule explicitly.
pub fn angle_at_vertex(
    line: &LineString<Real>,
    vertex_index: usize,
) -> Result<Real, GeometryError> {
    check_index(line, vertex_index)?;
    Err(GeometryError::Unimplemented("angle_at_vertex"))
}

/// Direction of `line` at `vertex_index` according to `rule`.
pub fn angle_at_vertex_by(
    line: &LineString<Real>,
    vertex_index: usize,
    rule: VertexAngle,
) -> Result<Real, GeometryError> {
    check_index(line, vertex_index)?;
    let coords = &line.0;
    let last = coords.len() - 1;
    let incoming = (vertex_index > 0).then(|| (coords[vertex_index - 1], coords[vertex_index]));
    let outgoing = (vertex_index < last).then(|| (coords[vertex_index], coords[vertex_index + 1]));

    let angle = match (incoming, outgoing) {
        (Some((a, b)), None) | (None, Some((a, b))) => bearing(a, b),
        (Some(inc), Some(out)) => match rule {
            VertexAngle::Incoming => bearing(inc.0, inc.1),
            VertexAngle::Outgoing => bearing(out.0, out.1),
            VertexAngle::Bisector => {
                let sum = unit(inc.1 - inc.0) + unit(out.1 - out.0);
                if approx_eq(sum.x.hypot(sum.y), 0.0) {
                    bearing(inc.0, inc.1)
                } else {
                    sum.x.atan2(sum.y)
                }
            },
        },
        (None, None) => return Err(GeometryError::TooFewPoints(coords.len())),
    };
    Ok(angle)
}

/// Extends `line` at both ends.
///
/// With `Some(angle)` both ends are projected along that same angle. With
/// `None` each end's angle is inferred through [`angle_at_vertex`], which
/// currently fails with [`GeometryError::Unimplemented`].
///
/// # Example
/// ```
/// use geo::line_string;
/// use polar::extend::{Extension, extend_line};
///
/// let line = line_string![(x: 0.0, y: 0.0), (x: 0.0, y: 4.0)];
/// let longer = extend_line(&line, Extension::symmetric(6.0), Some(0.0)).unwrap();
/// assert_eq!(longer.0.len(), 4);
/// assert_eq!(longer.0[0].y, 3.0);
/// assert_eq!(longer.0[3].y, 7.0);
/// ```
pub fn extend_line(
    line: &LineString<Real>,
    extension: Extension,
    angle: Option<Real>,
) -> Result<LineString<Real>, GeometryError> {
    let (start_angle, end_angle) = match angle {
        Some(angle) => (angle, angle),
        None => {
            let last = last_index(line)?;
            (angle_at_vertex(line, 0)?, angle_at_vertex(line, last)?)
        },
    };
    extend_line_with_angles(line, extension, start_angle, end_angle)
}

/// Extends `line` at both ends, inferring each end's angle with `rule`.
pub fn extend_line_by(
    line: &LineString<Real>,
    extension: Extension,
    rule: VertexAngle,
) -> Result<LineString<Real>, GeometryError> {
    let last = last_index(line)?;
    let start_angle = angle_at_vertex_by(line, 0, rule)?;
    let end_angle = angle_at_vertex_by(line, last, rule)?;
    extend_line_with_angles(line, extension, start_angle, end_angle)
}

/// Extends `line` with a separate angle for each end.
pub fn extend_line_with_angles(
    line: &LineString<Real>,
    extension: Extension,
    start_angle: Real,
    end_angle: Real,
) -> Result<LineString<Real>, GeometryError> {
    let last = last_index(line)?;
    let first = line.0[0];
    let final_vertex = line.0[last];

    let mut coords = Vec::with_capacity(line.0.len() + 2);
    coords.push(first.project(extension.start, start_angle));
    coords.extend_from_slice(&line.0);
    coords.push(final_vertex.project(extension.end, end_angle));
    Ok(LineString::new(coords))
}

fn check_index(line: &LineString<Real>, vertex_index: usize) -> Result<(), GeometryError> {
    let len = line.0.len();
    if vertex_index >= len {
        return Err(GeometryError::IndexOutOfRange { index: vertex_index, len });
    }
    Ok(())
}

fn last_index(line: &LineString<Real>) -> Result<usize, GeometryError> {
    match line.0.len() {
        len @ (0 | 1) => Err(GeometryError::TooFewPoints(len)),
        len => Ok(len - 1),
    }
}

fn unit(v: Coord<Real>) -> Coord<Real> {
    let length = v.x.hypot(v.y);
    if length == 0.0 { v } else { v / length }
}
