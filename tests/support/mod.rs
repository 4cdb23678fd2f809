//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use geo::{Coord, Point};
use polar::float_types::{Real, approx_eq, tolerance};

/// Euclidean distance between two coordinates.
pub fn distance(a: Coord<Real>, b: Coord<Real>) -> Real {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Comparison epsilon for the active `Real` (1e-9 for f64, 1e-4 for f32).
pub fn eps() -> Real {
    tolerance()
}

/// Returns `true` if `a` and `b` agree within [`tolerance`] on both axes.
pub fn coords_close(a: Coord<Real>, b: Coord<Real>) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

pub fn points_close(a: Point<Real>, b: Point<Real>) -> bool {
    coords_close(a.0, b.0)
}

/// A spread of points, distances and angles covering every quadrant.
pub fn samples() -> Vec<(Point<Real>, Real, Real)> {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(5.0, -3.0),
        Point::new(-120.5, 48.25),
    ];
    let distances = [0.5, 10.0, -7.25];
    let angles = [0.0, 0.3, 1.9, 3.5, -2.2, 7.0];

    let mut out = Vec::new();
    for p in points {
        for d in distances {
            for a in angles {
                out.push((p, d, a));
            }
        }
    }
    out
}
