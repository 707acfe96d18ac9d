//! Façade bundling the two assessment components behind one configured
//! value. Holds a completion client and a model id, nothing mutable —
//! safe to share and to call concurrently for different medications.

use crate::ai::{self, CompletionClient, OpenAiClient};
use crate::config;
use crate::conflict;
use crate::models::{AiAssessment, AllergyAssessment, Medication, SupportingDocument, UserProfile};

pub struct SafetyEngine<C: CompletionClient> {
    client: C,
    model: String,
}

impl<C: CompletionClient> SafetyEngine<C> {
    pub fn new(client: C, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Deterministic allergy/ingredient conflict check. Synchronous and
    /// pure; see [`conflict::assess_conflicts`].
    pub fn assess_conflicts(
        &self,
        profile: &UserProfile,
        medication: &Medication,
    ) -> AllergyAssessment {
        conflict::assess_conflicts(profile, medication)
    }

    /// LLM-backed safety summary. Always resolves to a valid assessment;
    /// see [`ai::generate_ai_assessment`].
    pub async fn generate_ai_assessment(
        &self,
        medication: &Medication,
        profile: &UserProfile,
        documents: &[SupportingDocument],
    ) -> AiAssessment {
        ai::generate_ai_assessment(&self.client, &self.model, medication, profile, documents).await
    }
}

impl SafetyEngine<OpenAiClient> {
    /// Engine wired to the environment-configured OpenAI endpoint and
    /// the default completion model.
    pub fn from_env() -> Self {
        Self::new(OpenAiClient::from_env(), config::DEFAULT_COMPLETION_MODEL)
    }
}
