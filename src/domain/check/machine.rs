// src/domain/check/machine.rs
//
// Check State Machine
//
// The state record behind the checker form, updated via discrete transition
// functions (edit, submit, settle). Each transition consumes nothing and
// returns a fresh state, so the machine is testable in isolation from any
// presentation layer or async runtime.
//
// CRITICAL RULES:
// - A result and `Checking` status are mutually exclusive
// - Validation runs against the field values at the moment of submission
// - A check never starts while any validation error exists
// - Every in-flight check carries a monotonically increasing sequence
//   number; settling with a stale number is a no-op

use serde::{Deserialize, Serialize};

use crate::domain::form::{validate_form, FormField, FormInput, ValidationErrors};

use super::value_objects::{CheckResult, CheckStatus};

/// Handle for one in-flight check, returned by a successful submit.
/// The orchestrator drives the collaborator with the captured input and
/// settles the machine with the same sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckTicket {
    pub seq: u64,
    pub input: FormInput,
}

/// The full checker state at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerState {
    /// Current field values; retained across submissions (no reset)
    pub input: FormInput,

    /// Errors from the most recent validation pass
    pub errors: ValidationErrors,

    /// Whether a check is outstanding
    pub status: CheckStatus,

    /// Outcome of the most recent settled check, if any
    pub result: Option<CheckResult>,

    /// Sequence number of the current (or most recent) check
    seq: u64,
}

impl CheckerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number of the current in-flight check (or the last settled one)
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Edit transition: replace one field's value.
    ///
    /// No validation happens on keystrokes; errors and result from earlier
    /// passes stay visible until the next submit.
    pub fn edit_field(&self, field: FormField, value: impl Into<String>) -> Self {
        Self {
            input: self.input.with_field(field, value),
            ..self.clone()
        }
    }

    /// Submit transition.
    ///
    /// Validates the current input. On errors the state stores them and
    /// stays `Idle` with no ticket. On clean input the previous errors and
    /// result are cleared, status becomes `Checking` and the returned ticket
    /// carries the captured input plus a fresh sequence number.
    ///
    /// Submitting while already `Checking` is not a valid transition; the
    /// state is returned unchanged, without a ticket.
    pub fn submit(&self) -> (Self, Option<CheckTicket>) {
        if self.status.is_checking() {
            return (self.clone(), None);
        }

        let errors = validate_form(&self.input);
        if !errors.is_empty() {
            let next = Self {
                errors,
                status: CheckStatus::Idle,
                ..self.clone()
            };
            return (next, None);
        }

        let seq = self.seq + 1;
        let ticket = CheckTicket {
            seq,
            input: self.input.clone(),
        };
        let next = Self {
            input: self.input.clone(),
            errors: ValidationErrors::new(),
            status: CheckStatus::Checking,
            result: None,
            seq,
        };
        (next, Some(ticket))
    }

    /// Settle transition: apply the outcome of check `seq`.
    ///
    /// A stale sequence number (anything but the current in-flight one) is
    /// discarded so a late-resolving earlier check can never overwrite the
    /// state of a later one.
    pub fn settle(&self, seq: u64, result: CheckResult) -> Self {
        if seq != self.seq || !self.status.is_checking() {
            return self.clone();
        }
        Self {
            status: CheckStatus::Idle,
            result: Some(result),
            ..self.clone()
        }
    }
}

/// Critical Checker Invariants:
///
/// 1. `result` and `Checking` are mutually exclusive
/// 2. A check is never started while validation errors exist
/// 3. Field values are retained across submissions (no reset transition)
/// 4. Stale settlements are discarded, never merged
/// 5. Sequence numbers only increase

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::invariants::{EPISODE_ID_REQUIRED, URL_REQUIRED};

    fn result(valid: bool) -> CheckResult {
        CheckResult {
            valid,
            message: "outcome".to_string(),
        }
    }

    #[test]
    fn test_edit_replaces_single_field() {
        let state = CheckerState::new()
            .edit_field(FormField::Url, "https://a.com")
            .edit_field(FormField::EpisodeId, "5");
        assert_eq!(state.input, FormInput::new("https://a.com", "5"));
        assert_eq!(state.status, CheckStatus::Idle);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_submit_with_invalid_url_stores_errors_and_stays_idle() {
        let state = CheckerState::new().edit_field(FormField::EpisodeId, "5");
        let (next, ticket) = state.submit();
        assert!(ticket.is_none());
        assert_eq!(next.status, CheckStatus::Idle);
        assert_eq!(next.errors.get(FormField::Url), Some(URL_REQUIRED));
    }

    #[test]
    fn test_submit_with_missing_episode_id_stores_errors() {
        let state = CheckerState::new().edit_field(FormField::Url, "https://a.com");
        let (next, ticket) = state.submit();
        assert!(ticket.is_none());
        assert_eq!(next.errors.get(FormField::EpisodeId), Some(EPISODE_ID_REQUIRED));
    }

    #[test]
    fn test_submit_with_valid_input_starts_check() {
        let state = CheckerState::new()
            .edit_field(FormField::Url, "https://a.com")
            .edit_field(FormField::EpisodeId, "5");
        let (next, ticket) = state.submit();
        let ticket = ticket.expect("clean input must produce a ticket");
        assert_eq!(next.status, CheckStatus::Checking);
        assert!(next.errors.is_empty());
        assert!(next.result.is_none());
        assert_eq!(ticket.input, FormInput::new("https://a.com", "5"));
        assert_eq!(ticket.seq, next.seq());
    }

    #[test]
    fn test_submit_clears_previous_result_before_checking() {
        let state = CheckerState::new()
            .edit_field(FormField::Url, "https://a.com")
            .edit_field(FormField::EpisodeId, "5");
        let (state, ticket) = state.submit();
        let state = state.settle(ticket.unwrap().seq, result(true));
        assert!(state.result.is_some());

        let (resubmitted, ticket) = state.submit();
        assert!(ticket.is_some());
        assert!(resubmitted.result.is_none(), "stale result must be cleared");
        assert_eq!(resubmitted.status, CheckStatus::Checking);
    }

    #[test]
    fn test_submit_clears_errors_once_fields_become_valid() {
        let state = CheckerState::new();
        let (state, _) = state.submit();
        assert!(!state.errors.is_empty());

        let state = state
            .edit_field(FormField::Url, "https://a.com")
            .edit_field(FormField::EpisodeId, "5");
        let (state, ticket) = state.submit();
        assert!(ticket.is_some());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_submit_while_checking_is_rejected() {
        let state = CheckerState::new()
            .edit_field(FormField::Url, "https://a.com")
            .edit_field(FormField::EpisodeId, "5");
        let (checking, first) = state.submit();
        assert!(first.is_some());

        let (unchanged, second) = checking.submit();
        assert!(second.is_none());
        assert_eq!(unchanged, checking);
    }

    #[test]
    fn test_settle_stores_result_and_returns_to_idle() {
        let state = CheckerState::new()
            .edit_field(FormField::Url, "https://a.com")
            .edit_field(FormField::EpisodeId, "5");
        let (state, ticket) = state.submit();
        let settled = state.settle(ticket.unwrap().seq, result(true));

        assert_eq!(settled.status, CheckStatus::Idle);
        assert_eq!(settled.result, Some(result(true)));
    }

    #[test]
    fn test_result_and_checking_are_mutually_exclusive() {
        let state = CheckerState::new()
            .edit_field(FormField::Url, "https://a.com")
            .edit_field(FormField::EpisodeId, "5");
        let (state, ticket) = state.submit();
        assert!(state.result.is_none() || !state.status.is_checking());

        let settled = state.settle(ticket.unwrap().seq, result(false));
        assert!(!settled.status.is_checking());
        assert!(settled.result.is_some());
    }

    #[test]
    fn test_stale_settlement_is_discarded() {
        let state = CheckerState::new()
            .edit_field(FormField::Url, "https://a.com")
            .edit_field(FormField::EpisodeId, "5");
        let (state, first) = state.submit();
        let first_seq = first.unwrap().seq;

        // First check settles, user resubmits, second check is in flight
        let state = state.settle(first_seq, result(false));
        let (state, second) = state.submit();
        let second_seq = second.unwrap().seq;
        assert!(second_seq > first_seq);

        // A late resolution of the first check must not touch the state
        let after_stale = state.settle(first_seq, result(true));
        assert_eq!(after_stale, state);

        // The current check still settles normally
        let settled = after_stale.settle(second_seq, result(true));
        assert_eq!(settled.result, Some(result(true)));
    }

    #[test]
    fn test_settle_while_idle_is_discarded() {
        let state = CheckerState::new();
        let settled = state.settle(state.seq(), result(true));
        assert_eq!(settled, state);
    }

    #[test]
    fn test_fields_retained_across_submissions() {
        let state = CheckerState::new()
            .edit_field(FormField::Url, "https://a.com")
            .edit_field(FormField::EpisodeId, "5");
        let (state, ticket) = state.submit();
        let state = state.settle(ticket.unwrap().seq, result(false));
        assert_eq!(state.input, FormInput::new("https://a.com", "5"));
    }
}
