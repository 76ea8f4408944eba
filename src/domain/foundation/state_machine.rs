//! State machine trait for lifecycle label enums.

use std::fmt::Debug;
use thiserror::Error;

/// A transition the state machine does not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cannot transition from {from:?} to {to:?}")]
pub struct TransitionRejected<S: Debug> {
    pub from: S,
    pub to: S,
}

/// Trait for label enums that represent state machines.
///
/// Implementors define the allowed edges; validated transitions and terminal
/// detection come for free.
///
/// ```ignore
/// let next = StateLabel::InProgress.transition_to(StateLabel::Completed)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation.
    fn transition_to(&self, target: Self) -> Result<Self, TransitionRejected<Self>> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(TransitionRejected {
                from: *self,
                to: target,
            })
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
