// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain state only (never TO)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{CheckStatus, CheckerState};

/// Serializable projection of the checker state for a presentation layer.
/// Errors are keyed by field name as the UI addresses them
/// ("url" / "episodeId").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerSnapshot {
    pub url: String,
    pub episode_id: String,
    pub errors: BTreeMap<String, String>,
    pub checking: bool,
    pub result: Option<CheckResultDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResultDto {
    pub valid: bool,
    pub message: String,
}

impl From<&CheckerState> for CheckerSnapshot {
    fn from(state: &CheckerState) -> Self {
        Self {
            url: state.input.url.clone(),
            episode_id: state.input.episode_id.clone(),
            errors: state
                .errors
                .iter()
                .map(|(field, msg)| (field.as_str().to_string(), msg.to_string()))
                .collect(),
            checking: state.status == CheckStatus::Checking,
            result: state.result.as_ref().map(|r| CheckResultDto {
                valid: r.valid,
                message: r.message.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::FormField;

    #[test]
    fn test_snapshot_keys_errors_by_ui_field_name() {
        let state = CheckerState::new().edit_field(FormField::EpisodeId, "5");
        let (state, _) = state.submit();

        let snapshot = CheckerSnapshot::from(&state);
        assert!(snapshot.errors.contains_key("url"));
        assert!(!snapshot.errors.contains_key("episodeId"));
        assert!(!snapshot.checking);
        assert!(snapshot.result.is_none());
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let state = CheckerState::new()
            .edit_field(FormField::Url, "https://a.com")
            .edit_field(FormField::EpisodeId, "5");
        let (state, _) = state.submit();

        let snapshot = CheckerSnapshot::from(&state);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["url"], "https://a.com");
        assert_eq!(json["checking"], true);
    }
}
