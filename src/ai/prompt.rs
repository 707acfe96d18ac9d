//! Assessment prompt construction.
//!
//! The prompt is built from plain string formatting so that identical
//! inputs always produce byte-identical prompts. Missing profile fields
//! are rendered as explicit placeholders ("unknown" / "no") instead of
//! being omitted, keeping the prompt shape stable regardless of profile
//! completeness.

use crate::models::{Medication, SupportingDocument, UserProfile};

/// Separator between rendered documents.
const DOCUMENT_SEPARATOR: &str = "\n---\n";

/// Build the single user-role instruction for one assessment.
///
/// The instruction restricts the model to the supplied ingredient list
/// and document text, permits reputable external sources only with a
/// citation, requests a general and a personalized one-sentence summary
/// in one pass, and mandates a fixed JSON response shape.
pub fn build_assessment_prompt(
    medication: &Medication,
    profile: &UserProfile,
    documents: &[SupportingDocument],
) -> String {
    let ingredients = medication.ingredients.join(", ");
    let doc_texts = documents
        .iter()
        .map(|doc| format!("Type: {}\n{}", doc.kind.as_str(), doc.extracted_text))
        .collect::<Vec<_>>()
        .join(DOCUMENT_SEPARATOR);

    let allergies = profile.allergies.join(", ");
    let intolerances = profile.intolerances.join(", ");
    let medical_conditions = profile.medical_conditions.join(", ");
    let age = match profile.age {
        Some(age) => age.to_string(),
        None => "unknown".to_string(),
    };
    let pregnant = match profile.is_pregnant {
        Some(true) => "yes",
        _ => "no",
    };

    format!(
        "You are a medical safety assistant for South African medications. \
         ONLY use the provided ingredient list and PI/PIL text for risk assessment. \
         If you cannot find enough information, search reputable, up-to-date medical \
         sources (preferably South African) and cite your source.\n\
         \n\
         - Medication ingredients: {ingredients}\n\
         - Extracted PI/PIL text: {doc_texts}\n\
         \n\
         First, write a one-sentence, friendly, emoji-enhanced general summary of the \
         product and any general warnings/cautions (not personalized).\n\
         \n\
         Second, given the user profile:\n\
         - Allergies: {allergies}\n\
         - Intolerances: {intolerances}\n\
         - Age: {age}\n\
         - Pregnant: {pregnant}\n\
         - Medical conditions: {medical_conditions}\n\
         Write a one-sentence, friendly, emoji-enhanced personalized safety summary, \
         comparing the user's profile to the medication, and highlight any conflicts \
         or risks. ONLY mention a risk if the ingredient or warning is present in the \
         provided data or a reputable cited source. If there are no conflicts, say so \
         with a positive emoji.\n\
         \n\
         If you use information from a web search, cite the source (URL or publication).\n\
         \n\
         Respond in this JSON format:\n\
         {{\n\
         \x20 \"general_summary\": \"...\",\n\
         \x20 \"personalized_summary\": \"...\",\n\
         \x20 \"status\": \"safe|caution|danger\",\n\
         \x20 \"source\": \"...\" (optional)\n\
         }}"
    )
}
