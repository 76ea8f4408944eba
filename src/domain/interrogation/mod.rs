//! Interrogation progress tracking.
//!
//! An interrogation is one respondent's instance of answering a
//! questionnaire. This module holds its lifecycle labels, the immutable
//! progress state and the errors raised by lifecycle moves.

mod errors;
mod lifecycle;
mod state;

pub use errors::InterrogationError;
pub use lifecycle::StateLabel;
pub use state::{InterrogationState, StateTransition};
