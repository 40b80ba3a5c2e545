//! Vector algebra over [`Point`] and [`Vector`].
//!
//! Every function here is total: zero-length inputs produce a defined
//! value instead of `NaN`.

use crate::types::{Point, Point2D, Value, Vector};

/// Vector pointing from `from` to `to`.
#[inline]
pub fn subtract(to: Point, from: Point) -> Vector {
    to - from
}

/// Translates `p` by `v`.
#[inline]
pub fn add(p: Point, v: Vector) -> Point {
    p + v
}

#[inline]
pub fn scale(v: Vector, scalar: Value) -> Vector {
    v * scalar
}

#[inline]
pub fn magnitude(v: Vector) -> Value {
    v.norm()
}

/// Unit vector along `v`, or the zero vector when `v` has zero length.
pub fn normalize(v: Vector) -> Vector {
    let mag = magnitude(v);
    if mag == 0.0 {
        Vector::zeros()
    } else {
        v / mag
    }
}

#[inline]
pub fn dot(a: Vector, b: Vector) -> Value {
    a.dot(&b)
}

#[inline]
pub fn cross(a: Vector, b: Vector) -> Vector {
    a.cross(&b)
}

/// Angle between `a` and `b` in radians, `0` if either is zero-length.
///
/// The cosine is clamped to `[-1, 1]` before `acos` so rounding on
/// (anti)parallel inputs cannot produce `NaN`.
pub fn angle_between(a: Vector, b: Vector) -> Value {
    let mag_a = magnitude(a);
    let mag_b = magnitude(b);
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    let cos_theta = dot(a, b) / (mag_a * mag_b);
    cos_theta.clamp(-1.0, 1.0).acos()
}

// Linear interpolation
#[inline]
pub fn lerp_value(a: Value, b: Value, t: Value) -> Value {
    a + (b - a) * t
}

/// Linearly interpolates between two points; `t = 0` is `a`, `t = 1` is `b`.
#[inline]
pub fn lerp(a: Point, b: Point, t: Value) -> Point {
    a + (b - a) * t
}

/// Component-wise comparison with tolerance `epsilon`.
pub fn approx_eq(a: Point, b: Point, epsilon: Value) -> bool {
    (a.x - b.x).abs() < epsilon && (a.y - b.y).abs() < epsilon && (a.z - b.z).abs() < epsilon
}

/// Drops the height of `p`.
#[inline]
pub fn to_point_2d(p: Point) -> Point2D {
    Point2D::new(p.x, p.y)
}

/// Lifts a plan-view point to height `z`.
#[inline]
pub fn to_point_3d(p: Point2D, z: Value) -> Point {
    Point::new(p.x, p.y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::POINT_EPSILON;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn subtract_points_from_to() {
        let v = subtract(Point::new(4.0, 6.0, 1.0), Point::new(1.0, 2.0, 1.0));
        assert_eq!(v, Vector::new(3.0, 4.0, 0.0));
        assert_relative_eq!(magnitude(v), 5.0);
    }

    #[test]
    fn normalize_zero_vector_is_zero() {
        assert_eq!(normalize(Vector::zeros()), Vector::zeros());
    }

    #[test]
    fn normalize_has_unit_length() {
        let n = normalize(Vector::new(0.0, -3.0, 4.0));
        assert_relative_eq!(magnitude(n), 1.0);
        assert_relative_eq!(n.z, 0.8);
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        let c = cross(Vector::x(), Vector::y());
        assert_eq!(c, Vector::z());
        assert_relative_eq!(dot(c, Vector::x()), 0.0);
    }

    #[test]
    fn angle_between_handles_degenerate_and_antiparallel() {
        assert_eq!(angle_between(Vector::zeros(), Vector::x()), 0.0);
        assert_relative_eq!(angle_between(Vector::x(), Vector::y()), FRAC_PI_2);
        let a = Vector::new(1e-3, 1e-3, 1e-3);
        assert_relative_eq!(angle_between(a, -a * 1e9), PI, epsilon = 1e-6);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(2.0, 4.0, -6.0);
        assert!(approx_eq(lerp(a, b, 0.0), a, POINT_EPSILON));
        assert!(approx_eq(lerp(a, b, 1.0), b, POINT_EPSILON));
        assert!(approx_eq(lerp(a, b, 0.5), Point::new(1.0, 2.0, -3.0), POINT_EPSILON));
        assert_relative_eq!(lerp_value(1.0, 3.0, 0.25), 1.5);
    }

    #[test]
    fn approx_eq_respects_tolerance() {
        let a = Point::new(1.0, 1.0, 1.0);
        assert!(approx_eq(a, Point::new(1.0 + 5e-7, 1.0, 1.0), POINT_EPSILON));
        assert!(!approx_eq(a, Point::new(1.0 + 5e-6, 1.0, 1.0), POINT_EPSILON));
    }

    #[test]
    fn plan_projection_round_trip_sets_height() {
        let p = to_point_3d(to_point_2d(Point::new(1.0, 2.0, 3.0)), 7.0);
        assert_eq!(p, Point::new(1.0, 2.0, 7.0));
    }
}
