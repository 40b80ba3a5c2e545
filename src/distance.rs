//! Euclidean distances and nearest points.

use crate::{
    line::Line,
    types::{Point, Point2D, Value},
    vector::{dot, magnitude, subtract},
};

pub fn between(a: Point, b: Point) -> Value {
    magnitude(subtract(b, a))
}

pub fn between_2d(a: Point2D, b: Point2D) -> Value {
    (b - a).norm()
}

/// Point on `line` closest to `point`.
///
/// The projection parameter is clamped to `[0, 1]`, so the result is
/// always on the segment. A zero-length segment returns its start.
pub fn closest_point_on_line(point: Point, line: &Line) -> Point {
    let line_vec = line.direction();
    let length_sq = dot(line_vec, line_vec);
    if length_sq == 0.0 {
        return line.start;
    }
    let t = dot(subtract(point, line.start), line_vec) / length_sq;
    line.point_at(t.clamp(0.0, 1.0))
}

/// Shortest distance from `point` to the segment `line`.
pub fn point_to_line(point: Point, line: &Line) -> Value {
    between(point, closest_point_on_line(point, line))
}
