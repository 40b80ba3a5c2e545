use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Result, VisibilityError},
    height::calculate_maximum_minimum_height,
    judgment::{DEFAULT_MARGINAL_MARGIN, VisibilityJudgment},
    scene::{Fence, Observer, Target},
    sightline::{check_multiple_sightlines, is_any_visible},
    types::{Point, Value},
};

/// Tunables for a visibility check.
///
/// ```rust,ignore
/// let checker = VisibilityChecker::new(CheckConfig::default().with_marginal_margin(0.2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckConfig {
    /// An adequate fence whose margin is below this is reported as marginal,
    /// and this much extra height is suggested. Default: `0.1`.
    pub marginal_margin: Value,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            marginal_margin: DEFAULT_MARGINAL_MARGIN,
        }
    }
}

impl CheckConfig {
    pub fn with_marginal_margin(mut self, marginal_margin: Value) -> Self {
        self.marginal_margin = marginal_margin;
        self
    }
}

/// Everything a visibility check looks at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityCheck {
    pub observers: Vec<Observer>,
    pub targets: Vec<Target>,
    pub fence: Fence,
}

impl VisibilityCheck {
    pub fn new(observers: Vec<Observer>, targets: Vec<Target>, fence: Fence) -> Self {
        Self {
            observers,
            targets,
            fence,
        }
    }

    /// Rejects inputs the geometry cannot give a meaningful answer for:
    /// empty observer or target lists, non-finite coordinates, negative
    /// eye or fence heights.
    pub fn validate(&self) -> Result<()> {
        if self.observers.is_empty() {
            return Err(VisibilityError::NoObservers);
        }
        if self.targets.is_empty() {
            return Err(VisibilityError::NoTargets);
        }

        for (i, observer) in self.observers.iter().enumerate() {
            ensure_finite_point(observer.position, || format!("observer {i}"))?;
            ensure_length(observer.eye_height, || format!("eye height of observer {i}"))?;
        }
        for (i, target) in self.targets.iter().enumerate() {
            ensure_finite_point(target.position, || format!("target {i}"))?;
        }

        let fence = &self.fence;
        ensure_finite_point(fence.line.start, || format!("start of fence '{}'", fence.name))?;
        ensure_finite_point(fence.line.end, || format!("end of fence '{}'", fence.name))?;
        ensure_length(fence.height, || format!("height of fence '{}'", fence.name))?;
        if !fence.ground_level.is_finite() {
            return Err(VisibilityError::NonFinite {
                what: format!("ground level of fence '{}'", fence.name),
            });
        }
        Ok(())
    }
}

fn ensure_finite_point(p: Point, what: impl FnOnce() -> String) -> Result<()> {
    if p.coords.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(VisibilityError::NonFinite { what: what() })
    }
}

fn ensure_length(value: Value, what: impl FnOnce() -> String) -> Result<()> {
    if !value.is_finite() {
        return Err(VisibilityError::NonFinite { what: what() });
    }
    if value < 0.0 {
        return Err(VisibilityError::NegativeLength { what: what(), value });
    }
    Ok(())
}

/// Runs visibility checks with a fixed [`CheckConfig`].
#[derive(Debug, Clone, Default)]
pub struct VisibilityChecker {
    config: CheckConfig,
}

impl VisibilityChecker {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Validates `input`, then evaluates every observer/target pair.
    ///
    /// ```text
    /// observers × targets ─┬─ sightlines (obstruction test)   ─→ visible
    ///                      └─ required height (plane crossing) ─→ minimum
    ///                                                   └────────┴─→ judgment
    /// ```
    pub fn check(&self, input: &VisibilityCheck) -> Result<VisibilityJudgment> {
        input.validate()?;
        let VisibilityCheck {
            observers,
            targets,
            fence,
        } = input;

        let sightlines = check_multiple_sightlines(observers, targets, fence);
        let visible = is_any_visible(&sightlines);
        let minimum_fence_height =
            calculate_maximum_minimum_height(observers, targets, &fence.line, fence.ground_level);
        let obstructed_by = (!visible).then(|| fence.name.clone());

        debug!(
            pairs = sightlines.len(),
            obstructed = sightlines.iter().filter(|s| s.obstructed).count(),
            visible,
            minimum_fence_height,
            current_fence_height = fence.height,
            fence = %fence.name,
            "visibility checked"
        );

        Ok(VisibilityJudgment::new(
            visible,
            obstructed_by,
            sightlines,
            minimum_fence_height,
            fence.height,
            self.config.marginal_margin,
        ))
    }
}

/// Checks `input` with the default [`CheckConfig`].
pub fn check_visibility(input: &VisibilityCheck) -> Result<VisibilityJudgment> {
    VisibilityChecker::default().check(input)
}
