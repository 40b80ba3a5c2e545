use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    distance::between,
    intersection::ray_fence_intersection,
    scene::{Fence, Observer, Target},
    types::{Point, Value},
    vector::{normalize, subtract},
};

/// The line of sight from an observer's eye to a target, and what (if
/// anything) interrupts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sightline {
    pub from: Point,
    pub to: Point,
    pub obstructed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obstruction_point: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obstructed_by: Option<String>,
    /// Eye-to-obstruction distance, present whenever `obstruction_point` is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_to_obstruction: Option<Value>,
}

impl Sightline {
    pub fn clear(from: Point, to: Point) -> Self {
        Self {
            from,
            to,
            obstructed: false,
            obstruction_point: None,
            obstructed_by: None,
            distance_to_obstruction: None,
        }
    }

    pub fn blocked(from: Point, to: Point, at: Point, by: impl Into<String>) -> Self {
        Self {
            from,
            to,
            obstructed: true,
            obstruction_point: Some(at),
            obstructed_by: Some(by.into()),
            distance_to_obstruction: Some(between(from, at)),
        }
    }
}

/// Tests the single sightline from `observer`'s eye to `target` against `fence`.
pub fn check_sightline_obstruction(
    observer: &Observer,
    target: &Target,
    fence: &Fence,
) -> Sightline {
    let eye = observer.eye_position();
    let direction = normalize(subtract(target.position, eye));

    match ray_fence_intersection(eye, direction, &fence.line, fence.height, fence.ground_level) {
        Some(hit) => {
            trace!(?eye, to = ?target.position, ?hit, fence = %fence.name, "sightline obstructed");
            Sightline::blocked(eye, target.position, hit, fence.name.as_str())
        }
        None => {
            trace!(?eye, to = ?target.position, "sightline clear");
            Sightline::clear(eye, target.position)
        }
    }
}

/// One sightline per observer/target pair, observers in the outer loop.
pub fn check_multiple_sightlines(
    observers: &[Observer],
    targets: &[Target],
    fence: &Fence,
) -> Vec<Sightline> {
    let mut sightlines = Vec::with_capacity(observers.len() * targets.len());
    for observer in observers {
        for target in targets {
            sightlines.push(check_sightline_obstruction(observer, target, fence));
        }
    }
    sightlines
}

/// True if a single sightline gets past the fence.
pub fn is_any_visible(sightlines: &[Sightline]) -> bool {
    sightlines.iter().any(|s| !s.obstructed)
}

pub fn are_all_obstructed(sightlines: &[Sightline]) -> bool {
    sightlines.iter().all(|s| s.obstructed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{line::Line, types::POINT_EPSILON, vector::approx_eq};
    use approx::assert_relative_eq;

    fn east_fence(height: Value) -> Fence {
        Fence::new(Line::new(Point::new(5.0, 0.0, 0.0), Point::new(5.0, 10.0, 0.0)), height)
            .with_name("east boundary")
    }

    fn deck() -> Target {
        Target::new(Point::new(10.0, 5.0, 0.2)).with_name("deck")
    }

    #[test]
    fn ground_floor_window_is_blocked() {
        let observer = Observer::new(Point::origin());
        let sightline = check_sightline_obstruction(&observer, &deck(), &east_fence(1.8));
        assert!(sightline.obstructed);
        assert_eq!(sightline.obstructed_by.as_deref(), Some("east boundary"));
        let at = sightline.obstruction_point.unwrap();
        assert!(approx_eq(at, Point::new(5.0, 2.5, 0.9), POINT_EPSILON));
        assert_relative_eq!(
            sightline.distance_to_obstruction.unwrap(),
            between(Point::new(0.0, 0.0, 1.6), at),
            epsilon = 1e-9
        );
    }

    #[test]
    fn upper_floor_window_sees_over() {
        let observer = Observer::new(Point::new(0.0, 5.0, 3.0)).with_eye_height(1.5);
        let sightline = check_sightline_obstruction(&observer, &deck(), &east_fence(1.8));
        assert!(!sightline.obstructed);
        assert!(sightline.obstruction_point.is_none());
        assert!(sightline.obstructed_by.is_none());
        assert!(sightline.distance_to_obstruction.is_none());
        assert_eq!(sightline.from, Point::new(0.0, 5.0, 4.5));
    }

    #[test]
    fn unnamed_fence_reports_generic_label() {
        let fence = Fence::new(east_fence(1.8).line, 1.8);
        let observer = Observer::new(Point::origin());
        let sightline = check_sightline_obstruction(&observer, &deck(), &fence);
        assert_eq!(sightline.obstructed_by.as_deref(), Some(crate::scene::DEFAULT_FENCE_NAME));
    }

    #[test]
    fn observer_on_target_is_not_obstructed() {
        let observer = Observer::new(Point::new(10.0, 5.0, -1.4));
        let sightline = check_sightline_obstruction(&observer, &deck(), &east_fence(1.8));
        assert!(!sightline.obstructed);
    }

    #[test]
    fn pairs_are_observer_major() {
        let observers = [
            Observer::new(Point::origin()),
            Observer::new(Point::new(0.0, 5.0, 3.0)).with_eye_height(1.5),
        ];
        let targets = [deck(), Target::new(Point::new(10.0, 8.0, 0.0))];
        let sightlines = check_multiple_sightlines(&observers, &targets, &east_fence(1.8));
        assert_eq!(sightlines.len(), 4);
        for (i, sightline) in sightlines.iter().enumerate() {
            assert_eq!(sightline.from, observers[i / 2].eye_position());
            assert_eq!(sightline.to, targets[i % 2].position);
        }
    }

    #[test]
    fn any_and_all_reductions() {
        let p = Point::origin();
        let clear = Sightline::clear(p, p);
        let blocked = Sightline::blocked(p, p, p, "fence");
        assert!(is_any_visible(&[blocked.clone(), clear.clone()]));
        assert!(!is_any_visible(&[blocked.clone()]));
        assert!(are_all_obstructed(&[blocked.clone(), blocked.clone()]));
        assert!(!are_all_obstructed(&[blocked, clear]));
    }
}
