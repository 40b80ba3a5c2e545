//! Length-unit conversion at the boundary with a host model.
//!
//! The engine works in meters throughout. Hosts convert their coordinates
//! in before a check and convert reported points back out afterwards.

use serde::{Deserialize, Serialize};

use crate::{
    check::VisibilityCheck,
    line::Line,
    scene::{Fence, Observer, Target},
    types::{Point, Value},
};

const METERS_PER_FOOT: Value = 0.3048;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Meters,
    Millimeters,
    Feet,
}

impl LengthUnit {
    /// Length of one of this unit, in meters.
    pub fn meters_per_unit(self) -> Value {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Millimeters => 0.001,
            LengthUnit::Feet => METERS_PER_FOOT,
        }
    }

    pub fn to_meters(self, value: Value) -> Value {
        value * self.meters_per_unit()
    }

    pub fn from_meters(self, meters: Value) -> Value {
        meters / self.meters_per_unit()
    }

    pub fn point_to_meters(self, p: Point) -> Point {
        Point::from(p.coords * self.meters_per_unit())
    }

    pub fn point_from_meters(self, p: Point) -> Point {
        Point::from(p.coords / self.meters_per_unit())
    }

    pub fn line_to_meters(self, line: &Line) -> Line {
        Line::new(self.point_to_meters(line.start), self.point_to_meters(line.end))
    }
}

impl VisibilityCheck {
    /// Copy of this check with every length given in `unit` converted to meters.
    pub fn to_meters(&self, unit: LengthUnit) -> Self {
        let observers = self
            .observers
            .iter()
            .map(|o| Observer {
                position: unit.point_to_meters(o.position),
                eye_height: unit.to_meters(o.eye_height),
                name: o.name.clone(),
            })
            .collect();
        let targets = self
            .targets
            .iter()
            .map(|t| Target {
                position: unit.point_to_meters(t.position),
                name: t.name.clone(),
            })
            .collect();
        let fence = Fence {
            line: unit.line_to_meters(&self.fence.line),
            height: unit.to_meters(self.fence.height),
            ground_level: unit.to_meters(self.fence.ground_level),
            name: self.fence.name.clone(),
        };
        Self::new(observers, targets, fence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn feet_to_meters() {
        assert_relative_eq!(LengthUnit::Feet.to_meters(10.0), 3.048);
        assert_relative_eq!(LengthUnit::Feet.from_meters(0.3048), 1.0);
    }

    #[test]
    fn point_conversion_scales_every_axis() {
        let p = LengthUnit::Millimeters.point_to_meters(Point::new(1500.0, -250.0, 1800.0));
        assert_relative_eq!(p.x, 1.5);
        assert_relative_eq!(p.y, -0.25);
        assert_relative_eq!(p.z, 1.8);
        let back = LengthUnit::Millimeters.point_from_meters(p);
        assert_relative_eq!(back.z, 1800.0, epsilon = 1e-9);
    }

    #[test]
    fn line_conversion_converts_both_ends() {
        let line = Line::new(Point::new(0.0, 0.0, 0.0), Point::new(0.0, 10.0, 0.0));
        let converted = LengthUnit::Feet.line_to_meters(&line);
        assert_relative_eq!(converted.length(), 3.048);
    }

    #[test]
    fn check_conversion_covers_heights() {
        let line = Line::new(Point::new(0.0, 0.0, 0.0), Point::new(0.0, 1000.0, 0.0));
        let fence = Fence::new(line, 1800.0).with_ground_level(200.0);
        let check = VisibilityCheck::new(
            vec![Observer::new(Point::origin()).with_eye_height(1600.0)],
            vec![Target::new(Point::new(500.0, 0.0, 0.0))],
            fence,
        )
        .to_meters(LengthUnit::Millimeters);
        assert_relative_eq!(check.observers[0].eye_height, 1.6);
        assert_relative_eq!(check.targets[0].position.x, 0.5);
        assert_relative_eq!(check.fence.height, 1.8);
        assert_relative_eq!(check.fence.ground_level, 0.2);
        assert_relative_eq!(check.fence.line.length(), 1.0);
    }

    #[test]
    fn meters_is_identity_and_default() {
        assert_eq!(LengthUnit::default(), LengthUnit::Meters);
        let p = Point::new(1.0, 2.0, 3.0);
        assert_eq!(LengthUnit::Meters.point_to_meters(p), p);
    }
}
