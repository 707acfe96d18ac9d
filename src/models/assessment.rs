use serde::{Deserialize, Serialize};

use crate::config;

// ---------------------------------------------------------------------------
// SafetyStatus
// ---------------------------------------------------------------------------

/// Three-level safety verdict shared by both assessment paths.
///
/// Ordered so callers can take the more severe of the deterministic and
/// AI verdicts for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SafetyStatus {
    Safe,
    Caution,
    Danger,
}

impl SafetyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Caution => "caution",
            Self::Danger => "danger",
        }
    }
}

impl std::fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AllergyAssessment
// ---------------------------------------------------------------------------

/// Output of the deterministic conflict matcher.
///
/// `status` is `Danger` iff at least one ingredient exactly equals a user
/// allergy after normalization; `Caution` iff only substring matches
/// exist; `Safe` otherwise. Exact matches always displace partial ones
/// from the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllergyAssessment {
    pub status: SafetyStatus,
    /// Normalized ingredient strings that triggered the status, in
    /// medication label order.
    pub conflicting_ingredients: Vec<String>,
}

impl AllergyAssessment {
    /// Baseline: nothing declared or nothing matched.
    pub fn safe() -> Self {
        Self {
            status: SafetyStatus::Safe,
            conflicting_ingredients: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// AiAssessment
// ---------------------------------------------------------------------------

/// Output of the AI summary generator. Recomputed on every invocation,
/// never persisted by this engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiAssessment {
    /// Short, non-personalized product summary.
    pub general_summary: String,
    /// Short summary referencing the specific profile.
    pub personalized_summary: String,
    pub status: SafetyStatus,
    /// Citation, when the model consulted an external source.
    pub source: Option<String>,
}

impl AiAssessment {
    /// Fixed degraded result for transport failure. Deliberately
    /// `Caution` rather than `Safe`: when the system cannot analyze, it
    /// does not assert safety.
    pub fn degraded() -> Self {
        Self {
            general_summary: config::ANALYSIS_UNAVAILABLE_MESSAGE.to_string(),
            personalized_summary: config::ANALYSIS_UNAVAILABLE_MESSAGE.to_string(),
            status: SafetyStatus::Caution,
            source: None,
        }
    }
}
