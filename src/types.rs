use nalgebra::{Point2, Point3, Vector3};

/// Scalar length, in meters.
pub type Value = f64;

/// A 3D position with [`Value`] components. `z` is height.
pub type Point = Point3<Value>;

/// A plan-view position, i.e. a [`Point`] with its height dropped.
pub type Point2D = Point2<Value>;

/// A free 3D vector with [`Value`] components.
pub type Vector = Vector3<Value>;

/// Tolerance below which a determinant or dot product counts as zero.
pub const EPSILON: Value = 1e-8;

/// Default tolerance for [`approx_eq`](crate::vector::approx_eq) on points.
pub const POINT_EPSILON: Value = 1e-6;

/// World up. Fences are always vertical with respect to this axis.
pub const UP: Vector = Vector::new(0.0, 0.0, 1.0);
