//! Safety assessment engine for medication lookups.
//!
//! Two cooperating components:
//! - [`conflict`]: deterministic, local matching of a user's declared
//!   allergies against a medication's ingredient list.
//! - [`ai`]: prompt construction + a single LLM completion call, parsed
//!   into a typed safety summary with deterministic fallbacks.
//!
//! The caller (a presentation layer) supplies already-fetched
//! [`models::Medication`], [`models::UserProfile`], and
//! [`models::SupportingDocument`] values and renders the two assessments
//! it gets back. This crate fetches nothing and persists nothing.

pub mod ai;
pub mod config;
pub mod conflict;
pub mod engine;
pub mod models;

pub use ai::{generate_ai_assessment, CompletionClient, CompletionError, OpenAiClient};
pub use conflict::assess_conflicts;
pub use engine::SafetyEngine;
pub use models::{
    AiAssessment, AllergyAssessment, Medication, SafetyStatus, SupportingDocument, UserProfile,
};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for embedding applications.
///
/// Honors `RUST_LOG` when set, otherwise falls back to
/// [`config::default_log_filter`]. Only the first call installs a
/// subscriber; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}
