//! GetCampaignOverviewHandler - Query handler assembling a campaign overview.
//!
//! Pulls the campaign, its sample and its questionnaires from the external
//! services and joins them with the stored interrogation states. Every empty
//! lookup is reported as the matching `ResourceLookupError`.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::foundation::{CampaignId, DomainError, ErrorCode};
use crate::domain::lookup::{
    CampaignOverview, InterrogationProgress, QuestionnaireSummary, ResourceKey,
    ResourceLookupError,
};
use crate::ports::{DataCollectionService, InterrogationStateRepository, QuestionnaireDesignService};

#[derive(Debug, Clone)]
pub struct GetCampaignOverviewQuery {
    pub campaign_id: CampaignId,
}

/// Errors raised while building a campaign overview.
#[derive(Debug, Clone, Error)]
pub enum CampaignOverviewError {
    #[error(transparent)]
    Lookup(#[from] ResourceLookupError),

    /// An external service or the state store failed.
    #[error("{0}")]
    Upstream(DomainError),
}

impl CampaignOverviewError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CampaignOverviewError::Lookup(e) => e.code(),
            CampaignOverviewError::Upstream(e) => e.code,
        }
    }
}

impl From<DomainError> for CampaignOverviewError {
    fn from(err: DomainError) -> Self {
        CampaignOverviewError::Upstream(err)
    }
}

pub struct GetCampaignOverviewHandler {
    data_collection: Arc<dyn DataCollectionService>,
    questionnaire_design: Arc<dyn QuestionnaireDesignService>,
    states: Arc<dyn InterrogationStateRepository>,
}

impl GetCampaignOverviewHandler {
    pub fn new(
        data_collection: Arc<dyn DataCollectionService>,
        questionnaire_design: Arc<dyn QuestionnaireDesignService>,
        states: Arc<dyn InterrogationStateRepository>,
    ) -> Self {
        Self {
            data_collection,
            questionnaire_design,
            states,
        }
    }

    pub async fn handle(
        &self,
        query: GetCampaignOverviewQuery,
    ) -> Result<CampaignOverview, CampaignOverviewError> {
        let id = query.campaign_id;

        let campaign = self
            .data_collection
            .find_campaign(&id)
            .await?
            .ok_or_else(|| ResourceLookupError::CampaignNotFound(id.clone()))?;

        let survey_units = self.data_collection.list_survey_units(&id).await?;
        if survey_units.is_empty() {
            return Err(ResourceLookupError::SurveyUnitsNotFound(ResourceKey::Campaign(id)).into());
        }

        let summaries = self.data_collection.list_interrogations(&id).await?;
        if summaries.is_empty() {
            return Err(
                ResourceLookupError::InterrogationsNotFound(ResourceKey::Campaign(id)).into(),
            );
        }

        let mut questionnaires = Vec::with_capacity(campaign.questionnaire_ids.len());
        for questionnaire_id in &campaign.questionnaire_ids {
            let document = self
                .questionnaire_design
                .find_questionnaire(questionnaire_id)
                .await?
                .ok_or_else(|| {
                    ResourceLookupError::QuestionnaireDocumentNotFound(questionnaire_id.clone())
                })?;
            questionnaires.push(QuestionnaireSummary::from(&document));
        }

        let mut interrogations = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let stored = self.states.find_state(&summary.id).await?;
            interrogations.push(InterrogationProgress::new(
                summary,
                stored.as_ref().map(|s| &s.state),
            ));
        }

        debug!(
            campaign_id = %id,
            survey_units = survey_units.len(),
            interrogations = interrogations.len(),
            "Campaign overview assembled"
        );

        Ok(CampaignOverview {
            campaign,
            questionnaires,
            survey_unit_count: survey_units.len(),
            interrogations,
        })
    }
}
