//! "Not found" conditions reported by the external services.
//!
//! Each variant carries the key that was searched for. Absence is not
//! transient, so none of these are retried; the HTTP boundary turns all of
//! them into a 404.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::domain::foundation::{
    CampaignId, ErrorCode, InterrogationId, QuestionnaireId, SurveyUnitId,
};

/// Key a set of resources was looked up by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ResourceKey {
    Campaign(CampaignId),
    SurveyUnit(SurveyUnitId),
    Interrogation(InterrogationId),
    Questionnaire(QuestionnaireId),
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKey::Campaign(id) => write!(f, "campaign {}", id),
            ResourceKey::SurveyUnit(id) => write!(f, "survey unit {}", id),
            ResourceKey::Interrogation(id) => write!(f, "interrogation {}", id),
            ResourceKey::Questionnaire(id) => write!(f, "questionnaire {}", id),
        }
    }
}

impl From<CampaignId> for ResourceKey {
    fn from(id: CampaignId) -> Self {
        ResourceKey::Campaign(id)
    }
}

impl From<SurveyUnitId> for ResourceKey {
    fn from(id: SurveyUnitId) -> Self {
        ResourceKey::SurveyUnit(id)
    }
}

/// A requested external resource does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceLookupError {
    #[error("Campaign not found: {0}")]
    CampaignNotFound(CampaignId),

    #[error("No interrogations found for {0}")]
    InterrogationsNotFound(ResourceKey),

    #[error("No survey units found for {0}")]
    SurveyUnitsNotFound(ResourceKey),

    #[error("Questionnaire design document not found: {0}")]
    QuestionnaireDocumentNotFound(QuestionnaireId),
}

impl ResourceLookupError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ResourceLookupError::CampaignNotFound(_) => ErrorCode::CampaignNotFound,
            ResourceLookupError::InterrogationsNotFound(_) => ErrorCode::InterrogationsNotFound,
            ResourceLookupError::SurveyUnitsNotFound(_) => ErrorCode::SurveyUnitsNotFound,
            ResourceLookupError::QuestionnaireDocumentNotFound(_) => {
                ErrorCode::QuestionnaireNotFound
            }
        }
    }

    /// Returns the searched key, rendered for diagnostics.
    pub fn searched_key(&self) -> String {
        match self {
            ResourceLookupError::CampaignNotFound(id) => id.to_string(),
            ResourceLookupError::InterrogationsNotFound(key)
            | ResourceLookupError::SurveyUnitsNotFound(key) => key.to_string(),
            ResourceLookupError::QuestionnaireDocumentNotFound(id) => id.to_string(),
        }
    }
}
