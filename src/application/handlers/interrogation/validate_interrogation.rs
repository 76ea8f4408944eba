//! ValidateInterrogationHandler - A designer accepts a completed questionnaire.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{CommandMetadata, InterrogationId, Timestamp};
use crate::domain::interrogation::{InterrogationError, StateTransition};
use crate::ports::InterrogationStateRepository;

use super::{store, TransitionResult};

#[derive(Debug, Clone)]
pub struct ValidateInterrogationCommand {
    pub interrogation_id: InterrogationId,
}

pub struct ValidateInterrogationHandler {
    repository: Arc<dyn InterrogationStateRepository>,
}

impl ValidateInterrogationHandler {
    pub fn new(repository: Arc<dyn InterrogationStateRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: ValidateInterrogationCommand,
        metadata: CommandMetadata,
    ) -> Result<TransitionResult, InterrogationError> {
        let (state, version) = store::apply_transition(
            self.repository.as_ref(),
            &cmd.interrogation_id,
            StateTransition::Validated,
            Timestamp::now(),
        )
        .await?;

        info!(
            interrogation_id = %cmd.interrogation_id,
            validated_by = %metadata.user_id,
            correlation_id = metadata.correlation_id(),
            "Interrogation validated"
        );

        Ok(TransitionResult { state, version })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryInterrogationStateRepository;
    use crate::domain::interrogation::{InterrogationState, StateLabel};

    fn id() -> InterrogationId {
        InterrogationId::new("INTERRO-1").unwrap()
    }

    fn cmd() -> ValidateInterrogationCommand {
        ValidateInterrogationCommand {
            interrogation_id: id(),
        }
    }

    #[tokio::test]
    async fn completed_interrogation_is_validated() {
        let repo = Arc::new(InMemoryInterrogationStateRepository::new());
        let completed = InterrogationState::initial()
            .mark_completed(Timestamp::now())
            .unwrap();
        repo.save_state(&id(), &completed, None).await.unwrap();
        let handler = ValidateInterrogationHandler::new(repo);

        let result = handler
            .handle(cmd(), CommandMetadata::test_fixture())
            .await
            .unwrap();

        assert_eq!(result.state.state(), StateLabel::Validated);
    }

    #[tokio::test]
    async fn unfinished_interrogation_cannot_be_validated() {
        let repo = Arc::new(InMemoryInterrogationStateRepository::new());
        let handler = ValidateInterrogationHandler::new(repo.clone());

        let err = handler
            .handle(cmd(), CommandMetadata::test_fixture())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            InterrogationError::invalid_transition(StateLabel::NotStarted, "validate")
        );
        assert!(repo.find_state(&id()).await.unwrap().is_none());
    }
}
