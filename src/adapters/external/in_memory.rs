//! In-memory stand-ins for the data-collection and questionnaire-design
//! services.
//!
//! Seeded with builder methods and optionally forced to fail, so handlers can
//! be exercised against every lookup outcome.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{CampaignId, DomainError, ErrorCode, QuestionnaireId};
use crate::domain::lookup::{Campaign, InterrogationSummary, QuestionnaireDocument, SurveyUnit};
use crate::ports::{DataCollectionService, QuestionnaireDesignService};

#[derive(Debug, Default)]
struct CampaignEntry {
    campaign: Option<Campaign>,
    interrogations: Vec<InterrogationSummary>,
    survey_units: Vec<SurveyUnit>,
}

/// In-memory data-collection service.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataCollectionService {
    campaigns: Arc<RwLock<HashMap<CampaignId, CampaignEntry>>>,
    unavailable: Arc<RwLock<Option<String>>>,
}

impl InMemoryDataCollectionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a campaign.
    pub async fn add_campaign(&self, campaign: Campaign) {
        let mut campaigns = self.campaigns.write().await;
        let id = campaign.id.clone();
        campaigns.entry(id).or_default().campaign = Some(campaign);
    }

    /// Registers an interrogation under a campaign.
    pub async fn add_interrogation(&self, campaign_id: &CampaignId, summary: InterrogationSummary) {
        let mut campaigns = self.campaigns.write().await;
        campaigns
            .entry(campaign_id.clone())
            .or_default()
            .interrogations
            .push(summary);
    }

    /// Registers a sampled survey unit under a campaign.
    pub async fn add_survey_unit(&self, campaign_id: &CampaignId, unit: SurveyUnit) {
        let mut campaigns = self.campaigns.write().await;
        campaigns
            .entry(campaign_id.clone())
            .or_default()
            .survey_units
            .push(unit);
    }

    /// Makes every call fail with `ExternalServiceError`.
    pub async fn set_unavailable(&self, reason: impl Into<String>) {
        *self.unavailable.write().await = Some(reason.into());
    }

    async fn check_available(&self) -> Result<(), DomainError> {
        match self.unavailable.read().await.as_ref() {
            Some(reason) => Err(DomainError::new(
                ErrorCode::ExternalServiceError,
                format!("Data collection service unavailable: {}", reason),
            )),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DataCollectionService for InMemoryDataCollectionService {
    async fn find_campaign(&self, id: &CampaignId) -> Result<Option<Campaign>, DomainError> {
        self.check_available().await?;
        let campaigns = self.campaigns.read().await;
        Ok(campaigns.get(id).and_then(|e| e.campaign.clone()))
    }

    async fn list_interrogations(
        &self,
        campaign_id: &CampaignId,
    ) -> Result<Vec<InterrogationSummary>, DomainError> {
        self.check_available().await?;
        let campaigns = self.campaigns.read().await;
        Ok(campaigns
            .get(campaign_id)
            .map(|e| e.interrogations.clone())
            .unwrap_or_default())
    }

    async fn list_survey_units(
        &self,
        campaign_id: &CampaignId,
    ) -> Result<Vec<SurveyUnit>, DomainError> {
        self.check_available().await?;
        let campaigns = self.campaigns.read().await;
        Ok(campaigns
            .get(campaign_id)
            .map(|e| e.survey_units.clone())
            .unwrap_or_default())
    }
}

/// In-memory questionnaire-design service.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionnaireDesignService {
    documents: Arc<RwLock<HashMap<QuestionnaireId, QuestionnaireDocument>>>,
}

impl InMemoryQuestionnaireDesignService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_document(&self, document: QuestionnaireDocument) {
        self.documents
            .write()
            .await
            .insert(document.id.clone(), document);
    }
}

#[async_trait]
impl QuestionnaireDesignService for InMemoryQuestionnaireDesignService {
    async fn find_questionnaire(
        &self,
        id: &QuestionnaireId,
    ) -> Result<Option<QuestionnaireDocument>, DomainError> {
        Ok(self.documents.read().await.get(id).cloned())
    }
}
