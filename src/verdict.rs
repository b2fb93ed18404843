//! Verdict returned for one candidate.

use serde::{Deserialize, Serialize};

/// Aggregate result of running every rule against one candidate.
///
/// Serializes as `{"valida": true}` when valid and
/// `{"valida": false, "erros": [...]}` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    #[serde(rename = "valida")]
    pub valid: bool,
    #[serde(rename = "erros", default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl Verdict {
    /// Builds a verdict from the collected failure messages.
    ///
    /// An empty list means every rule passed.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}
