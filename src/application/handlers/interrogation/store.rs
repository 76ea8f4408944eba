//! Load/transition/save helpers shared by the interrogation handlers.

use crate::domain::foundation::{DomainError, ErrorCode, InterrogationId, Timestamp};
use crate::domain::interrogation::{InterrogationError, InterrogationState, StateTransition};
use crate::ports::InterrogationStateRepository;

/// Loads the stored state, falling back to the initial state for an
/// interrogation that has never been touched.
pub(super) async fn load_or_initial(
    repository: &dyn InterrogationStateRepository,
    id: &InterrogationId,
) -> Result<(InterrogationState, Option<u64>), InterrogationError> {
    Ok(match repository.find_state(id).await? {
        Some(stored) => (stored.state, Some(stored.version)),
        None => (InterrogationState::initial(), None),
    })
}

/// Saves `state` guarded by `expected_version`.
pub(super) async fn save(
    repository: &dyn InterrogationStateRepository,
    id: &InterrogationId,
    state: &InterrogationState,
    expected_version: Option<u64>,
) -> Result<u64, InterrogationError> {
    repository
        .save_state(id, state, expected_version)
        .await
        .map_err(|e| save_error(id, e))
}

/// Applies one transition to the stored state and persists the result.
pub(super) async fn apply_transition(
    repository: &dyn InterrogationStateRepository,
    id: &InterrogationId,
    transition: StateTransition,
    now: Timestamp,
) -> Result<(InterrogationState, u64), InterrogationError> {
    let (current, expected_version) = load_or_initial(repository, id).await?;
    let next = current.apply(transition, now)?;
    let version = save(repository, id, &next, expected_version).await?;
    Ok((next, version))
}

fn save_error(id: &InterrogationId, err: DomainError) -> InterrogationError {
    if err.code == ErrorCode::ConcurrentModification {
        InterrogationError::ConcurrentModification(id.clone())
    } else {
        err.into()
    }
}
