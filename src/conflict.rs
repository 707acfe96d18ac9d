//! Deterministic allergy/ingredient conflict matching.
//!
//! Pure function over already-fetched data: no I/O, no shared state,
//! safe to call from any thread. Absent or empty inputs degrade to the
//! "safe" baseline rather than failing.

use crate::models::{AllergyAssessment, Medication, SafetyStatus, UserProfile};

/// Compare the user's declared allergies against a medication's
/// ingredient list.
///
/// Matching is bidirectional substring containment over trimmed,
/// lowercased strings. An ingredient that equals an allergy after
/// normalization is an exact match; one that merely contains (or is
/// contained by) an allergy is a partial match. Any exact match yields
/// `Danger` and only exact matches are reported; otherwise partial
/// matches yield `Caution`. Reported ingredients keep medication label
/// order.
///
/// Substring containment is intentionally literal: a short allergen
/// string can match inside an unrelated longer ingredient name. That is
/// the matching policy, not a bug to special-case.
pub fn assess_conflicts(profile: &UserProfile, medication: &Medication) -> AllergyAssessment {
    let allergies: Vec<String> = profile
        .allergies
        .iter()
        .map(|a| normalize(a))
        .filter(|a| !a.is_empty())
        .collect();

    if allergies.is_empty() {
        return AllergyAssessment::safe();
    }

    let mut exact_matches: Vec<String> = Vec::new();
    let mut partial_matches: Vec<String> = Vec::new();

    for ingredient in medication.ingredients.iter().map(|i| normalize(i)) {
        if ingredient.is_empty() {
            continue;
        }
        let is_exact = allergies.iter().any(|a| *a == ingredient);
        let is_partial = !is_exact
            && allergies
                .iter()
                .any(|a| ingredient.contains(a.as_str()) || a.contains(ingredient.as_str()));

        if is_exact {
            exact_matches.push(ingredient);
        } else if is_partial {
            partial_matches.push(ingredient);
        }
    }

    // Exact matches take priority: partial matches are dropped from the
    // report whenever any exact match exists.
    if !exact_matches.is_empty() {
        AllergyAssessment {
            status: SafetyStatus::Danger,
            conflicting_ingredients: exact_matches,
        }
    } else if !partial_matches.is_empty() {
        AllergyAssessment {
            status: SafetyStatus::Caution,
            conflicting_ingredients: partial_matches,
        }
    } else {
        AllergyAssessment::safe()
    }
}

/// Total, stable normalization: trim + ASCII-insensitive lowercase.
fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn medication(ingredients: &[&str]) -> Medication {
        Medication {
            id: Uuid::new_v4(),
            name: "Testol".to_string(),
            usage: None,
            dosage: None,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            safe_for_pregnant: true,
            safe_for_children: true,
            barcode: None,
            explanation: None,
        }
    }

    fn profile(allergies: &[&str]) -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            full_name: None,
            allergies: allergies.iter().map(|s| s.to_string()).collect(),
            intolerances: Vec::new(),
            medical_conditions: Vec::new(),
            age: None,
            is_pregnant: None,
        }
    }

    #[test]
    fn no_allergies_is_safe_regardless_of_ingredients() {
        let result = assess_conflicts(&profile(&[]), &medication(&["penicillin", "starch"]));
        assert_eq!(result, AllergyAssessment::safe());
    }

    #[test]
    fn blank_allergy_entries_count_as_none() {
        let result = assess_conflicts(&profile(&["  ", ""]), &medication(&["penicillin"]));
        assert_eq!(result, AllergyAssessment::safe());
    }

    #[test]
    fn case_insensitive_equality_is_danger() {
        let result = assess_conflicts(&profile(&["Penicillin"]), &medication(&["PENICILLIN"]));
        assert_eq!(result.status, SafetyStatus::Danger);
        assert_eq!(result.conflicting_ingredients, vec!["penicillin"]);
    }

    #[test]
    fn exact_match_displaces_partial_from_report() {
        let result = assess_conflicts(
            &profile(&["penicillin"]),
            &medication(&["Penicillin", "Penicillamine"]),
        );
        assert_eq!(result.status, SafetyStatus::Danger);
        assert_eq!(result.conflicting_ingredients, vec!["penicillin"]);
    }

    #[test]
    fn partial_only_match_is_caution() {
        let result = assess_conflicts(&profile(&["peanut"]), &medication(&["peanut oil"]));
        assert_eq!(result.status, SafetyStatus::Caution);
        assert_eq!(result.conflicting_ingredients, vec!["peanut oil"]);
    }

    #[test]
    fn allergy_containing_ingredient_also_matches() {
        // Containment is bidirectional: allergy "peanut oil" vs
        // ingredient "peanut".
        let result = assess_conflicts(&profile(&["peanut oil"]), &medication(&["peanut"]));
        assert_eq!(result.status, SafetyStatus::Caution);
        assert_eq!(result.conflicting_ingredients, vec!["peanut"]);
    }

    #[test]
    fn no_match_is_safe() {
        let result = assess_conflicts(
            &profile(&["shellfish"]),
            &medication(&["acetaminophen", "starch"]),
        );
        assert_eq!(result, AllergyAssessment::safe());
    }

    #[test]
    fn report_keeps_label_order() {
        let result = assess_conflicts(
            &profile(&["starch", "lactose"]),
            &medication(&["lactose monohydrate", "maize starch"]),
        );
        assert_eq!(result.status, SafetyStatus::Caution);
        assert_eq!(
            result.conflicting_ingredients,
            vec!["lactose monohydrate", "maize starch"],
        );
    }

    #[test]
    fn duplicate_ingredients_are_not_deduplicated() {
        let result = assess_conflicts(
            &profile(&["lactose"]),
            &medication(&["Lactose", "lactose"]),
        );
        assert_eq!(result.status, SafetyStatus::Danger);
        assert_eq!(result.conflicting_ingredients, vec!["lactose", "lactose"]);
    }

    #[test]
    fn whitespace_is_trimmed_before_matching() {
        let result = assess_conflicts(&profile(&["  aspirin "]), &medication(&[" Aspirin"]));
        assert_eq!(result.status, SafetyStatus::Danger);
        assert_eq!(result.conflicting_ingredients, vec!["aspirin"]);
    }

    #[test]
    fn short_allergen_substring_still_matches() {
        // Known false-positive class: the literal substring rule flags
        // any ingredient containing the allergen text.
        let result = assess_conflicts(&profile(&["soy"]), &medication(&["soybean lecithin"]));
        assert_eq!(result.status, SafetyStatus::Caution);
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let p = profile(&["penicillin", "soy"]);
        let m = medication(&["Penicillin", "soybean oil", "starch"]);
        assert_eq!(assess_conflicts(&p, &m), assess_conflicts(&p, &m));
    }

    #[test]
    fn empty_ingredient_list_is_safe() {
        let result = assess_conflicts(&profile(&["penicillin"]), &medication(&[]));
        assert_eq!(result, AllergyAssessment::safe());
    }
}
