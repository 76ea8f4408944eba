//! CompleteInterrogationHandler - Respondent finished the questionnaire.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{CommandMetadata, InterrogationId, Timestamp};
use crate::domain::interrogation::{InterrogationError, StateTransition};
use crate::ports::InterrogationStateRepository;

use super::{store, TransitionResult};

#[derive(Debug, Clone)]
pub struct CompleteInterrogationCommand {
    pub interrogation_id: InterrogationId,
}

pub struct CompleteInterrogationHandler {
    repository: Arc<dyn InterrogationStateRepository>,
}

impl CompleteInterrogationHandler {
    pub fn new(repository: Arc<dyn InterrogationStateRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CompleteInterrogationCommand,
        metadata: CommandMetadata,
    ) -> Result<TransitionResult, InterrogationError> {
        let (state, version) = store::apply_transition(
            self.repository.as_ref(),
            &cmd.interrogation_id,
            StateTransition::Completed,
            Timestamp::now(),
        )
        .await?;

        info!(
            interrogation_id = %cmd.interrogation_id,
            user_id = %metadata.user_id,
            correlation_id = metadata.correlation_id(),
            "Interrogation completed"
        );

        Ok(TransitionResult { state, version })
    }
}
