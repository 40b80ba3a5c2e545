//! Fence sightline engine.
//!
//! Decides whether any observer can see any target past a vertical fence,
//! and how tall the fence would have to be so that none can.

pub mod check;
pub mod distance;
pub mod error;
pub mod height;
pub mod intersection;
pub mod json;
pub mod judgment;
pub mod line;
pub mod scene;
pub mod sightline;
pub mod types;
pub mod units;
pub mod vector;

pub use check::{CheckConfig, VisibilityCheck, VisibilityChecker, check_visibility};
pub use json::check_visibility_json;
pub use judgment::VisibilityJudgment;
