//! Ray, segment and fence intersection tests.
//!
//! A ray is `origin + direction * t` for `t >= 0`; a segment is
//! `start + (end - start) * s` for `s` in `[0, 1]`. Every routine returns
//! `None` for parallel, behind-the-origin, out-of-range and zero-length
//! configurations rather than failing.

use crate::{
    line::Line,
    types::{EPSILON, Point, UP, Value, Vector},
    vector::{add, cross, dot, lerp_value, magnitude, normalize, scale, subtract},
};

/// Where a ray meets a segment in 3D.
///
/// Solves for the parameters of the common perpendicular of the ray's
/// supporting line and the segment, and returns the point on the ray. For
/// coplanar inputs that is the intersection; for skew inputs it is the ray's
/// point of closest approach to the segment.
pub fn ray_line_intersection(origin: Point, direction: Vector, line: &Line) -> Option<Point> {
    let line_vec = line.direction();
    let w = subtract(line.start, origin);

    let cross_ray_line = cross(direction, line_vec);
    let denom = magnitude(cross_ray_line);
    if denom < EPSILON {
        return None;
    }
    let denom_sq = denom * denom;

    let t = dot(cross(w, line_vec), cross_ray_line) / denom_sq;
    if t < 0.0 {
        return None;
    }

    let s = dot(cross(w, direction), cross_ray_line) / denom_sq;
    if !(0.0..=1.0).contains(&s) {
        return None;
    }

    Some(add(origin, scale(direction, t)))
}

/// Plan-view intersection of two segments.
///
/// Only `x` and `y` take part in the test. The returned point's `z` is
/// interpolated along `first`.
pub fn line_line_intersection_2d(first: &Line, second: &Line) -> Option<Point> {
    let (x1, y1) = (first.start.x, first.start.y);
    let (x2, y2) = (first.end.x, first.end.y);
    let (x3, y3) = (second.start.x, second.start.y);
    let (x4, y4) = (second.end.x, second.end.y);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom.abs() < EPSILON {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / denom;
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }

    Some(Point::new(
        lerp_value(x1, x2, t),
        lerp_value(y1, y2, t),
        lerp_value(first.start.z, first.end.z, t),
    ))
}

/// The unbounded-height vertical plane through a segment.
///
/// Both the obstruction test and the minimum-height solver go through
/// [`VerticalPlane::crossing`], so they always agree on which rays reach
/// the segment's lateral extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalPlane {
    origin: Point,
    along: Vector,
    normal: Vector,
}

/// A ray's crossing of a [`VerticalPlane`] within the segment's lateral extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneCrossing {
    pub point: Point,
    /// Ray parameter of `point`; the distance from the origin for a unit direction.
    pub t: Value,
    /// Position of `point` along the segment, in `[0, 1]`.
    pub projection: Value,
}

impl VerticalPlane {
    pub fn from_line(line: &Line) -> Self {
        let along = line.direction();
        Self {
            origin: line.start,
            along,
            normal: normalize(cross(along, UP)),
        }
    }

    /// Horizontal unit normal, or zero for a zero-length or vertical segment.
    pub fn normal(&self) -> Vector {
        self.normal
    }

    /// Crossing of the ray with this plane, if it lies in front of the
    /// origin and projects onto the segment.
    pub fn crossing(&self, origin: Point, direction: Vector) -> Option<PlaneCrossing> {
        let denom = dot(self.normal, direction);
        if denom.abs() < EPSILON {
            return None;
        }

        let t = dot(subtract(self.origin, origin), self.normal) / denom;
        if t < 0.0 {
            return None;
        }

        let length_sq = dot(self.along, self.along);
        if length_sq == 0.0 {
            return None;
        }

        let point = add(origin, scale(direction, t));
        let projection = dot(subtract(point, self.origin), self.along) / length_sq;
        if !(0.0..=1.0).contains(&projection) {
            return None;
        }

        Some(PlaneCrossing { point, t, projection })
    }
}

/// Where a ray hits the fence rectangle standing on `line`.
///
/// The rectangle spans `ground_level ..= ground_level + height` vertically
/// and the segment laterally; hits on either boundary count.
pub fn ray_fence_intersection(
    origin: Point,
    direction: Vector,
    line: &Line,
    height: Value,
    ground_level: Value,
) -> Option<Point> {
    let crossing = VerticalPlane::from_line(line).crossing(origin, direction)?;
    let z = crossing.point.z;
    if z < ground_level || z > ground_level + height {
        return None;
    }
    Some(crossing.point)
}
