//! Interrogation State Port - persistence of progress state and answers.
//!
//! State values are immutable, so concurrent page changes for the same
//! interrogation are resolved here: every stored state carries a version and
//! `save` only succeeds when the caller still holds the latest one.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, InterrogationId};
use crate::domain::ingestion::InterrogationData;
use crate::domain::interrogation::InterrogationState;

/// A stored state together with its optimistic-lock version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedState {
    pub state: InterrogationState,
    pub version: u64,
}

/// Port for persisting interrogation state and submitted answers.
///
/// # Contract
///
/// - `save(.., None)` inserts and fails with `ErrorCode::ConcurrentModification`
///   if a state already exists
/// - `save(.., Some(v))` replaces the state only if the stored version is `v`,
///   otherwise fails with `ErrorCode::ConcurrentModification`
/// - the returned version is strictly greater than the previous one
/// - `delete` removes the state and the answers together
#[async_trait]
pub trait InterrogationStateRepository: Send + Sync {
    async fn find_state(&self, id: &InterrogationId)
        -> Result<Option<VersionedState>, DomainError>;

    async fn save_state(
        &self,
        id: &InterrogationId,
        state: &InterrogationState,
        expected_version: Option<u64>,
    ) -> Result<u64, DomainError>;

    async fn find_data(&self, id: &InterrogationId)
        -> Result<Option<InterrogationData>, DomainError>;

    async fn save_data(
        &self,
        id: &InterrogationId,
        data: &InterrogationData,
    ) -> Result<(), DomainError>;

    /// Returns true if something was deleted.
    async fn delete(&self, id: &InterrogationId) -> Result<bool, DomainError>;
}
