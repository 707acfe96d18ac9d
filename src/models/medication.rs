use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A drug product, read-only from the engine's perspective.
/// Created and maintained by the external medication store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    pub id: Uuid,
    pub name: String,
    pub usage: Option<String>,
    pub dosage: Option<String>,
    /// Canonical active/inactive ingredient names, in label order.
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub safe_for_pregnant: bool,
    pub safe_for_children: bool,
    /// External lookup key (scanner flow).
    pub barcode: Option<String>,
    pub explanation: Option<String>,
}
