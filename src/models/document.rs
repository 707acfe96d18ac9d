use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product-insert / label text associated with a medication.
/// Produced by an external ingestion pipeline; read-only here. The
/// extracted text grounds the AI summary step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportingDocument {
    pub id: Uuid,
    pub medication_id: Uuid,
    pub kind: DocumentKind,
    pub extracted_text: String,
}

/// Document category. Producers supply free-form category strings, so
/// anything beyond the two known kinds round-trips through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentKind {
    Label,
    Insert,
    Other(String),
}

impl DocumentKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Label => "label",
            Self::Insert => "insert",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for DocumentKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "label" => Self::Label,
            "insert" => Self::Insert,
            _ => Self::Other(s),
        }
    }
}

impl From<DocumentKind> for String {
    fn from(kind: DocumentKind) -> Self {
        kind.as_str().to_string()
    }
}
