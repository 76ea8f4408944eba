//! Lifecycle labels of an interrogation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Lifecycle label of an interrogation.
///
/// Monotonic: `NOT_STARTED -> IN_PROGRESS -> COMPLETED -> VALIDATED`.
/// A questionnaire submitted in one go may jump from `NOT_STARTED` straight
/// to `COMPLETED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StateLabel {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Validated,
}

impl StateLabel {
    /// Every label, in lifecycle order.
    pub const ALL: [StateLabel; 4] = [
        StateLabel::NotStarted,
        StateLabel::InProgress,
        StateLabel::Completed,
        StateLabel::Validated,
    ];

    /// Returns the persisted label string.
    pub fn as_str(&self) -> &'static str {
        match self {
            StateLabel::NotStarted => "NOT_STARTED",
            StateLabel::InProgress => "IN_PROGRESS",
            StateLabel::Completed => "COMPLETED",
            StateLabel::Validated => "VALIDATED",
        }
    }

    /// Returns true if the respondent may still change answers.
    pub fn accepts_answers(&self) -> bool {
        !matches!(self, StateLabel::Validated)
    }
}

impl StateMachine for StateLabel {
    fn can_transition_to(&self, target: &Self) -> bool {
        use StateLabel::*;
        matches!(
            (self, target),
            (NotStarted, InProgress)
                | (NotStarted, Completed)
                | (InProgress, Completed)
                | (Completed, Validated)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use StateLabel::*;
        match self {
            NotStarted => vec![InProgress, Completed],
            InProgress => vec![Completed],
            Completed => vec![Validated],
            Validated => vec![],
        }
    }
}

impl fmt::Display for StateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateLabel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_STARTED" => Ok(StateLabel::NotStarted),
            "IN_PROGRESS" => Ok(StateLabel::InProgress),
            "COMPLETED" => Ok(StateLabel::Completed),
            "VALIDATED" => Ok(StateLabel::Validated),
            other => Err(ValidationError::invalid_format(
                "state",
                format!("unknown lifecycle label '{}'", other),
            )),
        }
    }
}
