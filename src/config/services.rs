//! External service endpoints

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Base URLs of the questionnaire-design and data-collection services.
///
/// Left unset in development, the in-memory stand-ins are used instead.
#[derive(Debug, Clone, Deserialize)]
pub struct ServicesConfig {
    pub questionnaire_design_url: Option<String>,

    pub data_collection_url: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ServicesConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        check_url(
            "QUESTIONNAIRE_DESIGN_URL",
            self.questionnaire_design_url.as_deref(),
            environment,
        )?;
        check_url(
            "DATA_COLLECTION_URL",
            self.data_collection_url.as_deref(),
            environment,
        )?;
        Ok(())
    }
}

fn check_url(
    name: &'static str,
    url: Option<&str>,
    environment: &Environment,
) -> Result<(), ValidationError> {
    let Some(url) = url else {
        return if environment.is_development() {
            Ok(())
        } else {
            Err(ValidationError::MissingRequired(name))
        };
    };
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ValidationError::InvalidUrl(name));
    }
    if environment.is_production() && !url.starts_with("https://") {
        return Err(ValidationError::UrlMustBeHttps(name));
    }
    Ok(())
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            questionnaire_design_url: None,
            data_collection_url: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}
