use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Snapshot of one user's self-reported health attributes.
///
/// Owned and mutated by the external profile editor; this engine only
/// reads it. Empty lists stand in for undeclared attributes — absence is
/// never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub full_name: Option<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub intolerances: Vec<String>,
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    /// Upper bound (<= 120) is enforced at entry, not here.
    pub age: Option<u8>,
    /// `None` = unknown.
    pub is_pregnant: Option<bool>,
}
