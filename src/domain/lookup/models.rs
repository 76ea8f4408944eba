//! Read models returned by the external services.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CampaignId, InterrogationId, QuestionnaireId, SurveyUnitId};

/// Campaign as known by the data-collection service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: CampaignId,
    pub label: String,
    /// Questionnaire models deployed in this campaign.
    #[serde(default)]
    pub questionnaire_ids: Vec<QuestionnaireId>,
}

/// One interrogation registered in a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterrogationSummary {
    pub id: InterrogationId,
    pub survey_unit_id: SurveyUnitId,
    pub questionnaire_id: QuestionnaireId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyUnit {
    pub id: SurveyUnitId,
    #[serde(default)]
    pub label: Option<String>,
}

/// Questionnaire structure produced by the design service.
///
/// The body is kept opaque; only the orchestration metadata is typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireDocument {
    pub id: QuestionnaireId,
    pub label: String,
    pub definition: serde_json::Value,
}
