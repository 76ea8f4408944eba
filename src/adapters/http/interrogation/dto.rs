//! HTTP DTOs for interrogation endpoints.

use serde::{Deserialize, Serialize};

use crate::application::{IngestInterrogationDataResult, TransitionResult};
use crate::domain::foundation::InterrogationId;
use crate::domain::ingestion::FormatType;
use crate::domain::interrogation::InterrogationState;

/// Request to record the page the respondent is on.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePageRequest {
    pub page: String,
}

/// Response for lifecycle commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateCommandResponse {
    pub interrogation_id: String,
    pub state: InterrogationState,
    pub version: u64,
}

impl StateCommandResponse {
    pub fn new(id: &InterrogationId, result: TransitionResult) -> Self {
        Self {
            interrogation_id: id.to_string(),
            state: result.state,
            version: result.version,
        }
    }
}

/// Response for an answer upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataUploadResponse {
    pub interrogation_id: String,
    pub format: FormatType,
    pub record_count: usize,
    pub state: InterrogationState,
    pub version: u64,
}

impl DataUploadResponse {
    pub fn new(id: &InterrogationId, result: IngestInterrogationDataResult) -> Self {
        Self {
            interrogation_id: id.to_string(),
            format: result.format,
            record_count: result.record_count,
            state: result.state,
            version: result.version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upload_response_uses_camel_case_and_label_strings() {
        let response = DataUploadResponse {
            interrogation_id: "I-1".into(),
            format: FormatType::Csv,
            record_count: 2,
            state: InterrogationState::initial(),
            version: 1,
        };

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["interrogationId"], "I-1");
        assert_eq!(value["format"], "CSV");
        assert_eq!(value["recordCount"], 2);
        assert_eq!(
            value["state"],
            json!({"currentPage": null, "lastModified": null, "state": "NOT_STARTED"})
        );
    }
}
