//! JSON entry point for hosts that talk to the engine through strings.
//!
//! Request:
//!
//! ```text
//! {
//!   "observers": [{ "position": [0, 0, 0], "eyeHeight": 1.6, "name": "window" }],
//!   "targets":   [{ "position": [10, 5, 0.2] }],
//!   "fence":     { "line": { "start": [5, 0, 0], "end": [5, 10, 0] }, "height": 1.8 },
//!   "config":    { "marginalMargin": 0.1 },
//!   "unit":      "meters"
//! }
//! ```
//!
//! `config` and `unit` are optional. Lengths in the request are read in
//! `unit`; the returned judgment is always in meters.

use serde::Deserialize;

use crate::{
    check::{CheckConfig, VisibilityCheck, VisibilityChecker},
    error::Result,
    units::LengthUnit,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonRequest {
    #[serde(flatten)]
    check: VisibilityCheck,
    #[serde(default)]
    config: CheckConfig,
    #[serde(default)]
    unit: LengthUnit,
}

/// Parses a check request, runs it and serialises the judgment.
pub fn check_visibility_json(request_json: &str) -> Result<String> {
    let request: JsonRequest = serde_json::from_str(request_json)?;
    let check = match request.unit {
        LengthUnit::Meters => request.check,
        unit => request.check.to_meters(unit),
    };
    let judgment = VisibilityChecker::new(request.config).check(&check)?;
    Ok(serde_json::to_string(&judgment)?)
}
