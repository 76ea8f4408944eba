//! Payload Parser Port - decoding classified answer payloads.
//!
//! Format detection only picks the family; one parser per family turns the
//! bytes into structured answers.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::ingestion::{FormatType, RawInterrogationPayload};

/// The parser rejected a payload of its own format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct PayloadParseError {
    pub reason: String,
}

impl PayloadParseError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Decodes one format family into a JSON value.
pub trait PayloadParser: Send + Sync {
    /// The format family this parser accepts.
    fn format(&self) -> FormatType;

    fn parse(&self, payload: &RawInterrogationPayload)
        -> Result<serde_json::Value, PayloadParseError>;
}

/// One parser per `FormatType`, selected by the detected format.
#[derive(Clone)]
pub struct PayloadParsers {
    json: Arc<dyn PayloadParser>,
    csv: Arc<dyn PayloadParser>,
}

impl PayloadParsers {
    pub fn new(json: Arc<dyn PayloadParser>, csv: Arc<dyn PayloadParser>) -> Self {
        Self { json, csv }
    }

    /// Returns the parser for a format family.
    pub fn for_format(&self, format: FormatType) -> &dyn PayloadParser {
        match format {
            FormatType::Json => self.json.as_ref(),
            FormatType::Csv => self.csv.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedParser(FormatType);

    impl PayloadParser for FixedParser {
        fn format(&self) -> FormatType {
            self.0
        }

        fn parse(
            &self,
            _payload: &RawInterrogationPayload,
        ) -> Result<serde_json::Value, PayloadParseError> {
            Ok(serde_json::json!(self.0.to_string()))
        }
    }

    #[test]
    fn for_format_selects_matching_parser() {
        let parsers = PayloadParsers::new(
            Arc::new(FixedParser(FormatType::Json)),
            Arc::new(FixedParser(FormatType::Csv)),
        );
        assert_eq!(parsers.for_format(FormatType::Json).format(), FormatType::Json);
        assert_eq!(parsers.for_format(FormatType::Csv).format(), FormatType::Csv);
    }
}
