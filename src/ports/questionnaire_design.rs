//! Questionnaire Design Port - questionnaire structure documents.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, QuestionnaireId};
use crate::domain::lookup::QuestionnaireDocument;

/// Read access to the questionnaire-design service.
#[async_trait]
pub trait QuestionnaireDesignService: Send + Sync {
    /// Fetches a questionnaire-design document, `None` if the service has
    /// no document under this id.
    async fn find_questionnaire(
        &self,
        id: &QuestionnaireId,
    ) -> Result<Option<QuestionnaireDocument>, DomainError>;
}
