use serde::{Deserialize, Serialize};

use crate::{
    types::{Point, Value, Vector},
    vector::{lerp, magnitude, subtract},
};

/// A finite, ordered segment from `start` to `end`.
///
/// `start == end` is allowed; every routine in the crate treats such a
/// segment as one that nothing can intersect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Unnormalised vector from `start` to `end`.
    pub fn direction(&self) -> Vector {
        subtract(self.end, self.start)
    }

    pub fn length(&self) -> Value {
        magnitude(self.direction())
    }

    pub fn is_degenerate(&self) -> bool {
        self.length() == 0.0
    }

    pub fn midpoint(&self) -> Point {
        self.point_at(0.5)
    }

    /// Point at parameter `t`; `t = 0` is `start`, `t = 1` is `end`.
    pub fn point_at(&self, t: Value) -> Point {
        lerp(self.start, self.end, t)
    }

    /// Same segment with its endpoints swapped.
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }
}
