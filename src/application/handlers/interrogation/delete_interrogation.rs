//! DeleteInterrogationHandler - Removes state and answers of an interrogation.

use std::sync::Arc;

use tracing::warn;

use crate::domain::foundation::{CommandMetadata, InterrogationId};
use crate::domain::interrogation::InterrogationError;
use crate::ports::InterrogationStateRepository;

#[derive(Debug, Clone)]
pub struct DeleteInterrogationCommand {
    pub interrogation_id: InterrogationId,
}

pub struct DeleteInterrogationHandler {
    repository: Arc<dyn InterrogationStateRepository>,
}

impl DeleteInterrogationHandler {
    pub fn new(repository: Arc<dyn InterrogationStateRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeleteInterrogationCommand,
        metadata: CommandMetadata,
    ) -> Result<(), InterrogationError> {
        if !self.repository.delete(&cmd.interrogation_id).await? {
            return Err(InterrogationError::not_found(cmd.interrogation_id));
        }

        warn!(
            interrogation_id = %cmd.interrogation_id,
            deleted_by = %metadata.user_id,
            correlation_id = metadata.correlation_id(),
            "Interrogation state and answers deleted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryInterrogationStateRepository;
    use crate::domain::interrogation::InterrogationState;

    fn cmd() -> DeleteInterrogationCommand {
        DeleteInterrogationCommand {
            interrogation_id: InterrogationId::new("INTERRO-1").unwrap(),
        }
    }

    #[tokio::test]
    async fn deletes_existing_interrogation() {
        let repo = Arc::new(InMemoryInterrogationStateRepository::new());
        repo.save_state(&cmd().interrogation_id, &InterrogationState::initial(), None)
            .await
            .unwrap();
        let handler = DeleteInterrogationHandler::new(repo.clone());

        handler
            .handle(cmd(), CommandMetadata::test_fixture())
            .await
            .unwrap();

        assert!(repo.find_state(&cmd().interrogation_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deleting_unknown_interrogation_is_not_found() {
        let repo = Arc::new(InMemoryInterrogationStateRepository::new());
        let handler = DeleteInterrogationHandler::new(repo);

        let err = handler
            .handle(cmd(), CommandMetadata::test_fixture())
            .await
            .unwrap_err();

        assert!(matches!(err, InterrogationError::NotFound(_)));
    }
}
