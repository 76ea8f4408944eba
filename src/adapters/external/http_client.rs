//! REST clients for the data-collection and questionnaire-design services.
//!
//! Both services expose plain JSON resources:
//!
//! | Call | Resource |
//! |------|----------|
//! | `find_campaign` | `GET {data_collection}/api/campaigns/{id}` |
//! | `list_interrogations` | `GET {data_collection}/api/campaigns/{id}/interrogations` |
//! | `list_survey_units` | `GET {data_collection}/api/campaigns/{id}/survey-units` |
//! | `find_questionnaire` | `GET {questionnaire_design}/api/questionnaires/{id}` |
//!
//! A 404 means "no such resource" and becomes `None` or an empty list; any
//! other non-success status or transport failure is an
//! `ExternalServiceError`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::domain::foundation::{CampaignId, DomainError, ErrorCode, QuestionnaireId};
use crate::domain::lookup::{Campaign, InterrogationSummary, QuestionnaireDocument, SurveyUnit};
use crate::ports::{DataCollectionService, QuestionnaireDesignService};

/// Thin JSON GET client bound to one service base URL.
#[derive(Debug, Clone)]
struct ServiceClient {
    service: &'static str,
    base_url: Url,
    client: Client,
}

impl ServiceClient {
    fn new(service: &'static str, base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            DomainError::new(
                ErrorCode::ExternalServiceError,
                format!("Invalid {} base URL: {}", service, e),
            )
        })?;
        if base_url.cannot_be_a_base() {
            return Err(DomainError::new(
                ErrorCode::ExternalServiceError,
                format!("Invalid {} base URL: {}", service, base_url),
            ));
        }
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            DomainError::new(
                ErrorCode::ExternalServiceError,
                format!("Failed to create HTTP client: {}", e),
            )
        })?;
        Ok(Self {
            service,
            base_url,
            client,
        })
    }

    /// Appends percent-encoded path segments to the base URL.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn failure(&self, reason: impl std::fmt::Display) -> DomainError {
        DomainError::new(
            ErrorCode::ExternalServiceError,
            format!("{} request failed: {}", self.service, reason),
        )
        .with_detail("service", self.service)
    }

    /// GETs a JSON resource; `None` on 404.
    async fn get_optional<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, DomainError> {
        tracing::debug!(service = self.service, %url, "Calling external service");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.failure(e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            tracing::warn!(service = self.service, status = status.as_u16(), "External service error");
            return Err(self.failure(format!("status {}", status)));
        }
        response.json::<T>().await.map(Some).map_err(|e| self.failure(e))
    }
}

/// Data-collection service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDataCollectionService {
    inner: ServiceClient,
}

impl HttpDataCollectionService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        Ok(Self {
            inner: ServiceClient::new("data-collection", base_url, timeout)?,
        })
    }
}

#[async_trait]
impl DataCollectionService for HttpDataCollectionService {
    async fn find_campaign(&self, id: &CampaignId) -> Result<Option<Campaign>, DomainError> {
        let url = self.inner.url(&["api", "campaigns", id.as_str()]);
        self.inner.get_optional(url).await
    }

    async fn list_interrogations(
        &self,
        campaign_id: &CampaignId,
    ) -> Result<Vec<InterrogationSummary>, DomainError> {
        let url = self
            .inner
            .url(&["api", "campaigns", campaign_id.as_str(), "interrogations"]);
        Ok(self.inner.get_optional(url).await?.unwrap_or_default())
    }

    async fn list_survey_units(
        &self,
        campaign_id: &CampaignId,
    ) -> Result<Vec<SurveyUnit>, DomainError> {
        let url = self
            .inner
            .url(&["api", "campaigns", campaign_id.as_str(), "survey-units"]);
        Ok(self.inner.get_optional(url).await?.unwrap_or_default())
    }
}

/// Questionnaire-design service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpQuestionnaireDesignService {
    inner: ServiceClient,
}

impl HttpQuestionnaireDesignService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        Ok(Self {
            inner: ServiceClient::new("questionnaire-design", base_url, timeout)?,
        })
    }
}

#[async_trait]
impl QuestionnaireDesignService for HttpQuestionnaireDesignService {
    async fn find_questionnaire(
        &self,
        id: &QuestionnaireId,
    ) -> Result<Option<QuestionnaireDocument>, DomainError> {
        let url = self.inner.url(&["api", "questionnaires", id.as_str()]);
        self.inner.get_optional(url).await
    }
}
