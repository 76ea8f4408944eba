//! Structured answers decoded from a payload.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::FormatType;

/// Answers of one interrogation after parsing.
///
/// JSON payloads keep their structure; CSV payloads become an array of
/// objects keyed by the header row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterrogationData {
    pub source_format: FormatType,
    pub answers: serde_json::Value,
    pub received_at: Timestamp,
}

impl InterrogationData {
    pub fn new(source_format: FormatType, answers: serde_json::Value, received_at: Timestamp) -> Self {
        Self {
            source_format,
            answers,
            received_at,
        }
    }

    /// Number of top-level records: array length, or 1 for any other value.
    pub fn record_count(&self) -> usize {
        match &self.answers {
            serde_json::Value::Array(items) => items.len(),
            serde_json::Value::Null => 0,
            _ => 1,
        }
    }
}
