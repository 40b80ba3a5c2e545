use serde::{Deserialize, Serialize};

use crate::{sightline::Sightline, types::Value};

/// Margin below which an adequate fence is reported as marginal, in meters.
pub const DEFAULT_MARGINAL_MARGIN: Value = 0.1;

/// Outcome of checking a set of sightlines against one fence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityJudgment {
    /// At least one sightline gets past the fence.
    pub visible: bool,
    /// Fence name, set only when nothing is visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obstructed_by: Option<String>,
    /// Observer-major: all targets of the first observer, then the next.
    pub sightlines: Vec<Sightline>,
    pub minimum_fence_height: Value,
    pub current_fence_height: Value,
    /// `current_fence_height - minimum_fence_height`
    pub height_margin: Value,
    pub is_adequate: bool,
    pub recommendation: String,
}

impl VisibilityJudgment {
    /// Derives margin, adequacy and recommendation from the two heights.
    pub fn new(
        visible: bool,
        obstructed_by: Option<String>,
        sightlines: Vec<Sightline>,
        minimum_fence_height: Value,
        current_fence_height: Value,
        marginal_margin: Value,
    ) -> Self {
        let height_margin = current_fence_height - minimum_fence_height;
        let is_adequate = height_margin >= 0.0;
        let recommendation =
            recommend(current_fence_height, minimum_fence_height, height_margin, marginal_margin);
        Self {
            visible,
            obstructed_by,
            sightlines,
            minimum_fence_height,
            current_fence_height,
            height_margin,
            is_adequate,
            recommendation,
        }
    }
}

fn recommend(current: Value, minimum: Value, margin: Value, marginal_margin: Value) -> String {
    if margin >= 0.0 && margin < marginal_margin {
        format!(
            "The current fence height ({current:.2}m) is adequate but marginal; \
             raising it by about {marginal_margin:.2}m is recommended."
        )
    } else if margin >= 0.0 {
        format!(
            "The current fence height ({current:.2}m) is adequate with a margin of {margin:.2}m."
        )
    } else {
        format!(
            "The current fence height ({current:.2}m) is inadequate; raise it to at least \
             {minimum:.2}m ({:.2}m short).",
            margin.abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn judge(current: Value, minimum: Value) -> VisibilityJudgment {
        VisibilityJudgment::new(false, None, Vec::new(), minimum, current, DEFAULT_MARGINAL_MARGIN)
    }

    #[test]
    fn comfortable_margin() {
        let judgment = judge(1.8, 0.9);
        assert!(judgment.is_adequate);
        assert_relative_eq!(judgment.height_margin, 0.9);
        assert!(judgment.recommendation.contains("adequate with a margin of 0.90m"));
        assert!(judgment.recommendation.contains("(1.80m)"));
    }

    #[test]
    fn marginal_when_under_a_tenth() {
        let judgment = judge(2.0, 1.95);
        assert!(judgment.is_adequate);
        assert!(judgment.recommendation.contains("marginal"));
        assert!(judgment.recommendation.contains("0.10m"));
    }

    #[test]
    fn exact_match_is_adequate_but_marginal() {
        let judgment = judge(2.0, 2.0);
        assert_eq!(judgment.height_margin, 0.0);
        assert!(judgment.is_adequate);
        assert!(judgment.recommendation.contains("marginal"));
    }

    #[test]
    fn shortfall_reports_required_height() {
        let judgment = judge(1.8, 2.35);
        assert!(!judgment.is_adequate);
        assert!(judgment.height_margin < 0.0);
        assert!(judgment.recommendation.contains("inadequate"));
        assert!(judgment.recommendation.contains("at least 2.35m"));
        assert!(judgment.recommendation.contains("(0.55m short)"));
    }

    #[test]
    fn marginal_threshold_is_configurable() {
        let judgment = VisibilityJudgment::new(false, None, Vec::new(), 1.5, 1.8, 0.5);
        assert!(judgment.recommendation.contains("marginal"));
        assert!(judgment.recommendation.contains("0.50m"));
    }
}
