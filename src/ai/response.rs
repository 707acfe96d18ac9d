//! Completion response parsing.
//!
//! The endpoint is expected, but not guaranteed, to return the mandated
//! JSON object. The outcome is a tagged result so the fallback for
//! prose responses is one visible branch instead of null-coalescing
//! scattered through the caller.

use serde::Deserialize;

use crate::models::{AiAssessment, SafetyStatus};

/// Outcome of parsing one completion's message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedAiResponse {
    /// The text was the mandated JSON object.
    Ok(AiAssessment),
    /// The text was prose or otherwise unparseable; carries it verbatim.
    Malformed(String),
}

impl ParsedAiResponse {
    /// Collapse into a valid assessment. Malformed text becomes both
    /// summaries with a `Safe` status and no source — degraded, never an
    /// error.
    pub fn into_assessment(self) -> AiAssessment {
        match self {
            Self::Ok(assessment) => assessment,
            Self::Malformed(raw) => AiAssessment {
                general_summary: raw.clone(),
                personalized_summary: raw,
                status: SafetyStatus::Safe,
                source: None,
            },
        }
    }
}

/// Raw wire shape of the mandated response object. Every field is
/// optional; defaults are applied in one place below.
#[derive(Deserialize)]
struct RawAiResponse {
    #[serde(default)]
    general_summary: Option<String>,
    #[serde(default)]
    personalized_summary: Option<String>,
    #[serde(default)]
    status: Option<SafetyStatus>,
    #[serde(default)]
    source: Option<String>,
}

/// Strict JSON parse of the completion text.
///
/// A missing `status` defaults to `Safe` — parsing never fails solely
/// because the model omitted it. An unrecognized status string, or any
/// non-JSON text, yields `Malformed`.
pub fn parse_completion(text: &str) -> ParsedAiResponse {
    match serde_json::from_str::<RawAiResponse>(text) {
        Ok(raw) => ParsedAiResponse::Ok(AiAssessment {
            general_summary: raw.general_summary.unwrap_or_default(),
            personalized_summary: raw.personalized_summary.unwrap_or_default(),
            status: raw.status.unwrap_or(SafetyStatus::Safe),
            source: raw.source.filter(|s| !s.is_empty()),
        }),
        Err(_) => ParsedAiResponse::Malformed(text.to_string()),
    }
}
