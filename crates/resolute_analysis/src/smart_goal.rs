//! Typed SMART-goal view over structured analyzer results.

use resolute_core::GenerationResult;
use serde::{Deserialize, Serialize};

/// Best-effort SMART decomposition of an analyzed resolution.
///
/// The gateway enforces no schema on structured payloads; this view
/// decodes the conventional fields when present and keeps everything else
/// under `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, derive_getters::Getters)]
pub struct SmartGoalAnalysis {
    /// What exactly will be accomplished.
    #[serde(default)]
    specific: Option<String>,
    /// How progress is quantified.
    #[serde(default)]
    measurable: Option<String>,
    /// Why the goal is realistic.
    #[serde(default)]
    achievable: Option<String>,
    /// Why the goal matters to the user.
    #[serde(default)]
    relevant: Option<String>,
    /// The deadline or cadence.
    #[serde(default)]
    time_bound: Option<String>,
    /// Any additional fields the model produced.
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl SmartGoalAnalysis {
    /// Decode the SMART view from a generation result.
    ///
    /// Returns `None` for raw results and for structured payloads that are
    /// not objects; decode failure is never an error.
    pub fn from_result(result: &GenerationResult) -> Option<Self> {
        result
            .as_structured()
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Whether all five SMART fields are present.
    pub fn is_complete(&self) -> bool {
        self.specific.is_some()
            && self.measurable.is_some()
            && self.achievable.is_some()
            && self.relevant.is_some()
            && self.time_bound.is_some()
    }
}
