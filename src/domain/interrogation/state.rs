//! Per-interrogation progress state.
//!
//! `InterrogationState` is an immutable value. Every change produces a new
//! value from the previous one; there are no setters. Locking and lost-update
//! detection belong to the repository that stores it.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StateMachine, Timestamp};

use super::{InterrogationError, StateLabel};

/// Progress of one respondent through a questionnaire.
///
/// Persisted shape is exactly `{ currentPage, lastModified, state }` where
/// only `state` is non-null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterrogationState {
    current_page: Option<String>,
    last_modified: Option<i64>,
    state: StateLabel,
}

/// Event moving an interrogation forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateTransition {
    PageChanged { page: String },
    DataSubmitted,
    Completed,
    Validated,
}

impl InterrogationState {
    /// State of a freshly registered interrogation: no page, no timestamp,
    /// label `NOT_STARTED`.
    pub fn initial() -> Self {
        Self {
            current_page: None,
            last_modified: None,
            state: StateLabel::NotStarted,
        }
    }

    pub fn current_page(&self) -> Option<&str> {
        self.current_page.as_deref()
    }

    /// Epoch milliseconds of the last state-changing event.
    pub fn last_modified(&self) -> Option<i64> {
        self.last_modified
    }

    pub fn last_modified_at(&self) -> Option<Timestamp> {
        self.last_modified.and_then(Timestamp::from_unix_millis)
    }

    pub fn state(&self) -> StateLabel {
        self.state
    }

    /// Applies a transition event.
    pub fn apply(
        &self,
        transition: StateTransition,
        now: Timestamp,
    ) -> Result<Self, InterrogationError> {
        match transition {
            StateTransition::PageChanged { page } => self.advance_page(page, now),
            StateTransition::DataSubmitted => self.record_submission(now),
            StateTransition::Completed => self.mark_completed(now),
            StateTransition::Validated => self.mark_validated(now),
        }
    }

    /// Moves the respondent to another page.
    ///
    /// The first page visit starts the interrogation; later visits keep the
    /// label. Validated interrogations are frozen.
    pub fn advance_page(
        &self,
        page: impl Into<String>,
        now: Timestamp,
    ) -> Result<Self, InterrogationError> {
        let state = self.started_label("change the page of")?;
        Ok(Self {
            current_page: Some(page.into()),
            last_modified: Some(now.as_unix_millis()),
            state,
        })
    }

    /// Records that answer data was submitted without moving the page.
    pub fn record_submission(&self, now: Timestamp) -> Result<Self, InterrogationError> {
        let state = self.started_label("submit data for")?;
        Ok(Self {
            current_page: self.current_page.clone(),
            last_modified: Some(now.as_unix_millis()),
            state,
        })
    }

    /// Marks the questionnaire as completed by the respondent.
    pub fn mark_completed(&self, now: Timestamp) -> Result<Self, InterrogationError> {
        self.moved_to(StateLabel::Completed, "complete", now)
    }

    /// Marks a completed questionnaire as validated.
    pub fn mark_validated(&self, now: Timestamp) -> Result<Self, InterrogationError> {
        self.moved_to(StateLabel::Validated, "validate", now)
    }

    fn started_label(&self, action: &'static str) -> Result<StateLabel, InterrogationError> {
        if !self.state.accepts_answers() {
            return Err(InterrogationError::invalid_transition(self.state, action));
        }
        Ok(match self.state {
            StateLabel::NotStarted => StateLabel::InProgress,
            label => label,
        })
    }

    fn moved_to(
        &self,
        target: StateLabel,
        action: &'static str,
        now: Timestamp,
    ) -> Result<Self, InterrogationError> {
        let state = self
            .state
            .transition_to(target)
            .map_err(|_| InterrogationError::invalid_transition(self.state, action))?;
        Ok(Self {
            current_page: self.current_page.clone(),
            last_modified: Some(now.as_unix_millis()),
            state,
        })
    }
}

impl Default for InterrogationState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn at(millis: i64) -> Timestamp {
        Timestamp::from_unix_millis(millis).unwrap()
    }

    #[test]
    fn initial_state_is_fully_defined() {
        let state = InterrogationState::initial();
        assert_eq!(state.state(), StateLabel::NotStarted);
        assert_eq!(state.current_page(), None);
        assert_eq!(state.last_modified(), None);
        assert_eq!(InterrogationState::default(), state);
    }

    #[test]
    fn first_page_visit_starts_the_interrogation() {
        let state = InterrogationState::initial()
            .advance_page("2.1", at(1_000))
            .unwrap();

        assert_eq!(state.state(), StateLabel::InProgress);
        assert_eq!(state.current_page(), Some("2.1"));
        assert_eq!(state.last_modified(), Some(1_000));
    }

    #[test]
    fn later_page_changes_keep_the_label() {
        let state = InterrogationState::initial()
            .advance_page("1", at(1_000))
            .and_then(|s| s.advance_page("2", at(2_000)))
            .unwrap();

        assert_eq!(state.state(), StateLabel::InProgress);
        assert_eq!(state.current_page(), Some("2"));
        assert_eq!(state.last_modified_at(), Some(at(2_000)));
    }

    #[test]
    fn advancing_returns_a_new_value() {
        let original = InterrogationState::initial();
        let _next = original.advance_page("3", at(5)).unwrap();
        assert_eq!(original, InterrogationState::initial());
    }

    #[test]
    fn completed_interrogation_can_still_be_browsed() {
        let state = InterrogationState::initial()
            .mark_completed(at(1_000))
            .and_then(|s| s.advance_page("end", at(2_000)))
            .unwrap();
        assert_eq!(state.state(), StateLabel::Completed);
    }

    #[test]
    fn validated_interrogation_is_frozen() {
        let validated = InterrogationState::initial()
            .mark_completed(at(1))
            .and_then(|s| s.mark_validated(at(2)))
            .unwrap();

        assert!(matches!(
            validated.advance_page("4", at(3)),
            Err(InterrogationError::InvalidTransition {
                current: StateLabel::Validated,
                ..
            })
        ));
        assert!(validated.record_submission(at(3)).is_err());
    }

    #[test]
    fn completing_twice_fails() {
        let completed = InterrogationState::initial()
            .advance_page("1", at(1))
            .and_then(|s| s.mark_completed(at(2)))
            .unwrap();
        assert_eq!(completed.state(), StateLabel::Completed);
        assert_eq!(completed.last_modified(), Some(2));

        let err = completed.mark_completed(at(3)).unwrap_err();
        assert_eq!(
            err,
            InterrogationError::invalid_transition(StateLabel::Completed, "complete")
        );
    }

    #[test]
    fn completing_a_validated_interrogation_fails() {
        let validated = InterrogationState::initial()
            .mark_completed(at(1))
            .and_then(|s| s.mark_validated(at(2)))
            .unwrap();
        assert!(validated.mark_completed(at(3)).is_err());
    }

    #[test]
    fn validation_requires_completion() {
        let in_progress = InterrogationState::initial()
            .advance_page("1", at(1))
            .unwrap();
        assert!(in_progress.mark_validated(at(2)).is_err());
    }

    #[test]
    fn submission_starts_but_keeps_page() {
        let state = InterrogationState::initial()
            .advance_page("7", at(1))
            .and_then(|s| s.record_submission(at(9)))
            .unwrap();
        assert_eq!(state.current_page(), Some("7"));
        assert_eq!(state.last_modified(), Some(9));

        let fresh = InterrogationState::initial().record_submission(at(4)).unwrap();
        assert_eq!(fresh.state(), StateLabel::InProgress);
    }

    #[test]
    fn apply_dispatches_each_transition() {
        let state = InterrogationState::initial()
            .apply(StateTransition::PageChanged { page: "1".into() }, at(1))
            .and_then(|s| s.apply(StateTransition::DataSubmitted, at(2)))
            .and_then(|s| s.apply(StateTransition::Completed, at(3)))
            .and_then(|s| s.apply(StateTransition::Validated, at(4)))
            .unwrap();
        assert_eq!(state.state(), StateLabel::Validated);
        assert_eq!(state.last_modified(), Some(4));
    }

    #[test]
    fn serializes_to_the_persisted_shape() {
        let state = InterrogationState::initial()
            .advance_page("2", at(1_700_000_000_000))
            .unwrap();
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({
                "currentPage": "2",
                "lastModified": 1_700_000_000_000_i64,
                "state": "IN_PROGRESS"
            })
        );

        assert_eq!(
            serde_json::to_value(InterrogationState::initial()).unwrap(),
            json!({ "currentPage": null, "lastModified": null, "state": "NOT_STARTED" })
        );
    }

    #[test]
    fn deserialization_rejects_missing_or_null_label() {
        let missing = serde_json::from_value::<InterrogationState>(
            json!({ "currentPage": null, "lastModified": null }),
        );
        assert!(missing.is_err());

        let null = serde_json::from_value::<InterrogationState>(
            json!({ "currentPage": "1", "lastModified": 3, "state": null }),
        );
        assert!(null.is_err());
    }
}
