//! Interrogation-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InvalidPayload | 400 |
//! | UnparseablePayload | 400 |
//! | NotFound | 404 |
//! | InvalidTransition | 409 |
//! | ConcurrentModification | 409 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, InterrogationId};
use crate::domain::ingestion::{FormatType, InvalidPayloadError};

use super::StateLabel;

/// Errors raised while ingesting answers or moving an interrogation through
/// its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterrogationError {
    /// Payload was absent or empty.
    InvalidPayload(InvalidPayloadError),

    /// Payload was classified but its parser rejected it.
    UnparseablePayload { format: FormatType, reason: String },

    /// No state exists for this interrogation.
    NotFound(InterrogationId),

    /// The requested lifecycle move is not allowed from the current label.
    InvalidTransition {
        current: StateLabel,
        attempted: &'static str,
    },

    /// Someone else stored a newer state since it was read.
    ConcurrentModification(InterrogationId),

    /// Infrastructure error.
    Infrastructure(String),
}

impl InterrogationError {
    pub fn invalid_transition(current: StateLabel, attempted: &'static str) -> Self {
        InterrogationError::InvalidTransition { current, attempted }
    }

    pub fn unparseable(format: FormatType, reason: impl Into<String>) -> Self {
        InterrogationError::UnparseablePayload {
            format,
            reason: reason.into(),
        }
    }

    pub fn not_found(id: InterrogationId) -> Self {
        InterrogationError::NotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        InterrogationError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            InterrogationError::InvalidPayload(_) => ErrorCode::InvalidPayload,
            InterrogationError::UnparseablePayload { .. } => ErrorCode::UnparseablePayload,
            InterrogationError::NotFound(_) => ErrorCode::InterrogationNotFound,
            InterrogationError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            InterrogationError::ConcurrentModification(_) => ErrorCode::ConcurrentModification,
            InterrogationError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    /// Returns a user-facing error message.
    pub fn message(&self) -> String {
        match self {
            InterrogationError::InvalidPayload(e) => format!("Invalid payload: {}", e),
            InterrogationError::UnparseablePayload { format, reason } => {
                format!("{} payload could not be parsed: {}", format, reason)
            }
            InterrogationError::NotFound(id) => format!("Interrogation not found: {}", id),
            InterrogationError::InvalidTransition { current, attempted } => {
                format!("Cannot {} an interrogation in {} state", attempted, current)
            }
            InterrogationError::ConcurrentModification(id) => {
                format!("Interrogation {} was modified concurrently", id)
            }
            InterrogationError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for InterrogationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for InterrogationError {}

impl From<InvalidPayloadError> for InterrogationError {
    fn from(err: InvalidPayloadError) -> Self {
        InterrogationError::InvalidPayload(err)
    }
}

impl From<DomainError> for InterrogationError {
    fn from(err: DomainError) -> Self {
        InterrogationError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_id() -> InterrogationId {
        InterrogationId::new("INTERRO-1").unwrap()
    }

    #[test]
    fn invalid_transition_message_names_state_and_action() {
        let err = InterrogationError::invalid_transition(StateLabel::Validated, "complete");
        assert_eq!(
            err.to_string(),
            "Cannot complete an interrogation in VALIDATED state"
        );
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn invalid_payload_converts_from_sniffer_error() {
        let err: InterrogationError = InvalidPayloadError::Empty.into();
        assert_eq!(err.code(), ErrorCode::InvalidPayload);
        assert_eq!(err.message(), "Invalid payload: Payload is empty");
    }

    #[test]
    fn not_found_and_conflict_codes() {
        assert_eq!(
            InterrogationError::not_found(test_id()).code(),
            ErrorCode::InterrogationNotFound
        );
        assert_eq!(
            InterrogationError::ConcurrentModification(test_id()).code(),
            ErrorCode::ConcurrentModification
        );
    }

    #[test]
    fn domain_error_becomes_infrastructure() {
        let err: InterrogationError =
            DomainError::new(ErrorCode::StorageError, "disk full").into();
        assert!(matches!(err, InterrogationError::Infrastructure(_)));
    }
}
