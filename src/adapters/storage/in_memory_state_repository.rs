//! In-Memory Interrogation State Repository
//!
//! Keeps versioned states and answers in memory. Useful for tests and local
//! development; the versioning follows the same compare-and-swap contract a
//! database adapter must honour.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, InterrogationId};
use crate::domain::ingestion::InterrogationData;
use crate::domain::interrogation::InterrogationState;
use crate::ports::{InterrogationStateRepository, VersionedState};

/// In-memory storage for interrogation state and answers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInterrogationStateRepository {
    states: Arc<RwLock<HashMap<InterrogationId, VersionedState>>>,
    data: Arc<RwLock<HashMap<InterrogationId, InterrogationData>>>,
}

impl InMemoryInterrogationStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored states.
    pub async fn state_count(&self) -> usize {
        self.states.read().await.len()
    }
}

fn conflict(id: &InterrogationId, expected: Option<u64>, actual: Option<u64>) -> DomainError {
    let render = |v: Option<u64>| v.map_or_else(|| "none".to_string(), |v| v.to_string());
    DomainError::new(
        ErrorCode::ConcurrentModification,
        format!("Interrogation {} was modified concurrently", id),
    )
    .with_detail("expected_version", render(expected))
    .with_detail("actual_version", render(actual))
}

#[async_trait]
impl InterrogationStateRepository for InMemoryInterrogationStateRepository {
    async fn find_state(
        &self,
        id: &InterrogationId,
    ) -> Result<Option<VersionedState>, DomainError> {
        Ok(self.states.read().await.get(id).cloned())
    }

    async fn save_state(
        &self,
        id: &InterrogationId,
        state: &InterrogationState,
        expected_version: Option<u64>,
    ) -> Result<u64, DomainError> {
        let mut states = self.states.write().await;
        let current = states.get(id).map(|s| s.version);
        if current != expected_version {
            return Err(conflict(id, expected_version, current));
        }

        let version = current.map_or(1, |v| v + 1);
        states.insert(
            id.clone(),
            VersionedState {
                state: state.clone(),
                version,
            },
        );
        Ok(version)
    }

    async fn find_data(
        &self,
        id: &InterrogationId,
    ) -> Result<Option<InterrogationData>, DomainError> {
        Ok(self.data.read().await.get(id).cloned())
    }

    async fn save_data(
        &self,
        id: &InterrogationId,
        data: &InterrogationData,
    ) -> Result<(), DomainError> {
        self.data.write().await.insert(id.clone(), data.clone());
        Ok(())
    }

    async fn delete(&self, id: &InterrogationId) -> Result<bool, DomainError> {
        let removed_state = self.states.write().await.remove(id).is_some();
        let removed_data = self.data.write().await.remove(id).is_some();
        Ok(removed_state || removed_data)
    }
}
