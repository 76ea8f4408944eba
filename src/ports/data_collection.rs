//! Data Collection Port - campaigns, interrogations and survey units.
//!
//! The data-collection service owns the sample. This port only reads from
//! it; an empty answer is reported as `None` or an empty list and turned into
//! a `ResourceLookupError` by the application layer.

use async_trait::async_trait;

use crate::domain::foundation::{CampaignId, DomainError};
use crate::domain::lookup::{Campaign, InterrogationSummary, SurveyUnit};

/// Read access to the data-collection service.
#[async_trait]
pub trait DataCollectionService: Send + Sync {
    /// Fetches a campaign by id.
    async fn find_campaign(&self, id: &CampaignId) -> Result<Option<Campaign>, DomainError>;

    /// Lists the interrogations registered in a campaign.
    async fn list_interrogations(
        &self,
        campaign_id: &CampaignId,
    ) -> Result<Vec<InterrogationSummary>, DomainError>;

    /// Lists the survey units sampled for a campaign.
    async fn list_survey_units(
        &self,
        campaign_id: &CampaignId,
    ) -> Result<Vec<SurveyUnit>, DomainError>;
}
