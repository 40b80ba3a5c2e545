//! Observers, targets and the fence: the inputs of a visibility check.
//!
//! Optional attributes are resolved to concrete values when an input is
//! built (or deserialised), so the geometry never has to re-apply defaults.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    line::Line,
    types::{Point, Value, Vector},
};

/// Eye height of a standing adult, in meters.
pub const DEFAULT_EYE_HEIGHT: Value = 1.6;

/// Label reported for an obstruction when the fence has no name.
pub const DEFAULT_FENCE_NAME: &str = "fence";

fn default_eye_height() -> Value {
    DEFAULT_EYE_HEIGHT
}

fn default_fence_name() -> String {
    DEFAULT_FENCE_NAME.to_string()
}

/// A missing or empty name becomes [`DEFAULT_FENCE_NAME`].
fn fence_label(name: Option<String>) -> String {
    name.filter(|n| !n.is_empty()).unwrap_or_else(default_fence_name)
}

fn deserialize_fence_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(fence_label)
}

/// Where a sightline starts: a person, a window, a camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observer {
    /// Standing position; the eye is `eye_height` above it.
    pub position: Point,
    #[serde(default = "default_eye_height")]
    pub eye_height: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Observer {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            eye_height: DEFAULT_EYE_HEIGHT,
            name: None,
        }
    }

    pub fn with_eye_height(mut self, eye_height: Value) -> Self {
        self.eye_height = eye_height;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn eye_position(&self) -> Point {
        self.position + Vector::new(0.0, 0.0, self.eye_height)
    }
}

/// The spot that should stay out of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub position: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Target {
    pub fn new(position: Point) -> Self {
        Self { position, name: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A vertical wall standing on `line`.
///
/// The wall spans heights `ground_level ..= ground_level + height`. Only the
/// plan-view course of `line` and its start point matter to the geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fence {
    pub line: Line,
    pub height: Value,
    #[serde(default)]
    pub ground_level: Value,
    #[serde(default = "default_fence_name", deserialize_with = "deserialize_fence_name")]
    pub name: String,
}

impl Fence {
    pub fn new(line: Line, height: Value) -> Self {
        Self {
            line,
            height,
            ground_level: 0.0,
            name: default_fence_name(),
        }
    }

    pub fn with_ground_level(mut self, ground_level: Value) -> Self {
        self.ground_level = ground_level;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = fence_label(Some(name.into()));
        self
    }

    /// Absolute height of the top edge.
    pub fn top_height(&self) -> Value {
        self.ground_level + self.height
    }

    pub fn top_start(&self) -> Point {
        Point::new(self.line.start.x, self.line.start.y, self.top_height())
    }

    pub fn top_end(&self) -> Point {
        Point::new(self.line.end.x, self.line.end.y, self.top_height())
    }

    pub fn top_line(&self) -> Line {
        Line::new(self.top_start(), self.top_end())
    }
}
