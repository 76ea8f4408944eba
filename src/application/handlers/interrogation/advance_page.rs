//! AdvancePageHandler - Command handler for page navigation.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{CommandMetadata, InterrogationId, Timestamp, ValidationError};
use crate::domain::interrogation::{InterrogationError, InterrogationState, StateTransition};
use crate::ports::InterrogationStateRepository;

use super::store;

/// Command to record the page the respondent is on.
#[derive(Debug, Clone)]
pub struct AdvancePageCommand {
    pub interrogation_id: InterrogationId,
    pub page: String,
}

impl AdvancePageCommand {
    /// Builds the command, rejecting blank page identifiers.
    pub fn new(
        interrogation_id: InterrogationId,
        page: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let page = page.into();
        if page.trim().is_empty() {
            return Err(ValidationError::empty_field("page"));
        }
        Ok(Self {
            interrogation_id,
            page,
        })
    }
}

/// State after the page change, with its stored version.
#[derive(Debug, Clone)]
pub struct TransitionResult {
    pub state: InterrogationState,
    pub version: u64,
}

pub struct AdvancePageHandler {
    repository: Arc<dyn InterrogationStateRepository>,
}

impl AdvancePageHandler {
    pub fn new(repository: Arc<dyn InterrogationStateRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: AdvancePageCommand,
        metadata: CommandMetadata,
    ) -> Result<TransitionResult, InterrogationError> {
        let (state, version) = store::apply_transition(
            self.repository.as_ref(),
            &cmd.interrogation_id,
            StateTransition::PageChanged { page: cmd.page },
            Timestamp::now(),
        )
        .await?;

        debug!(
            interrogation_id = %cmd.interrogation_id,
            page = state.current_page().unwrap_or_default(),
            state = %state.state(),
            correlation_id = metadata.correlation_id(),
            "Page changed"
        );

        Ok(TransitionResult { state, version })
    }
}
