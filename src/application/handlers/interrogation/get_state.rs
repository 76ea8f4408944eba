//! GetInterrogationStateHandler - Query handler for the stored progress state.

use std::sync::Arc;

use crate::domain::foundation::InterrogationId;
use crate::domain::interrogation::{InterrogationError, InterrogationState};
use crate::ports::InterrogationStateRepository;

#[derive(Debug, Clone)]
pub struct GetInterrogationStateQuery {
    pub interrogation_id: InterrogationId,
}

pub struct GetInterrogationStateHandler {
    repository: Arc<dyn InterrogationStateRepository>,
}

impl GetInterrogationStateHandler {
    pub fn new(repository: Arc<dyn InterrogationStateRepository>) -> Self {
        Self { repository }
    }

    /// Returns the stored state, or `NotFound` if nothing was ever stored.
    pub async fn handle(
        &self,
        query: GetInterrogationStateQuery,
    ) -> Result<InterrogationState, InterrogationError> {
        self.repository
            .find_state(&query.interrogation_id)
            .await?
            .map(|stored| stored.state)
            .ok_or(InterrogationError::NotFound(query.interrogation_id))
    }
}
