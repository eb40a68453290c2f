// src/domain/check/value_objects.rs
//
// Check Value Objects
//
// Pure, immutable data structures describing one thumbnail check.
//
// CRITICAL INVARIANTS:
// - All fields are immutable (no &mut self methods)
// - No side effects, no I/O
// - Clone + Debug + Serialize for traceability

use serde::{Deserialize, Serialize};

/// Whether an asynchronous check is outstanding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    #[default]
    Idle,
    Checking,
}

impl CheckStatus {
    pub fn is_checking(&self) -> bool {
        matches!(self, CheckStatus::Checking)
    }
}

/// The terminal outcome of one check attempt.
/// Replaced, never mutated, by each new check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// True when the collaborator reported the thumbnail as found
    pub valid: bool,

    /// User-visible outcome text
    pub message: String,
}

impl CheckResult {
    /// Build a result from the collaborator's "found" signal
    pub fn from_found(found: bool, success_message: &str, failure_message: &str) -> Self {
        Self {
            valid: found,
            message: if found {
                success_message.to_string()
            } else {
                failure_message.to_string()
            },
        }
    }

    /// Distinct terminal result for a check attempt that could not complete
    pub fn could_not_complete(error_message: &str) -> Self {
        Self {
            valid: false,
            message: error_message.to_string(),
        }
    }
}
