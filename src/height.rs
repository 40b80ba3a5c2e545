//! Minimum fence height needed to cut every sightline.

use tracing::trace;

use crate::{
    intersection::VerticalPlane,
    line::Line,
    scene::{Observer, Target},
    types::Value,
    vector::{normalize, subtract},
};

/// Smallest height a fence on `fence_line` needs to block this one sightline.
///
/// The fence's own height is ignored: the sightline is crossed with the full
/// vertical plane of the segment. Sightlines that never reach the segment
/// (parallel, pointing away, passing beside it) need no fence and yield `0`.
pub fn calculate_minimum_height(
    observer: &Observer,
    target: &Target,
    fence_line: &Line,
    ground_level: Value,
) -> Value {
    minimum_height_through(&VerticalPlane::from_line(fence_line), observer, target, ground_level)
}

fn minimum_height_through(
    plane: &VerticalPlane,
    observer: &Observer,
    target: &Target,
    ground_level: Value,
) -> Value {
    let eye = observer.eye_position();
    let direction = normalize(subtract(target.position, eye));
    let Some(crossing) = plane.crossing(eye, direction) else {
        return 0.0;
    };
    let required = (crossing.point.z - ground_level).max(0.0);
    trace!(
        ?eye,
        to = ?target.position,
        crossing = ?crossing.point,
        required,
        "minimum height for pair"
    );
    required
}

/// Height that blocks the worst-case pair; `0` when no pair needs blocking.
pub fn calculate_maximum_minimum_height(
    observers: &[Observer],
    targets: &[Target],
    fence_line: &Line,
    ground_level: Value,
) -> Value {
    let plane = VerticalPlane::from_line(fence_line);
    observers
        .iter()
        .flat_map(|observer| targets.iter().map(move |target| (observer, target)))
        .map(|(observer, target)| minimum_height_through(&plane, observer, target, ground_level))
        .fold(0.0, Value::max)
}
