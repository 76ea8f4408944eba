//! JSON answer parser backed by serde_json.

use crate::domain::ingestion::{FormatType, RawInterrogationPayload};
use crate::ports::{PayloadParseError, PayloadParser};

/// Parses JSON payloads as-is into a `serde_json::Value`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonPayloadParser;

impl JsonPayloadParser {
    pub fn new() -> Self {
        Self
    }
}

impl PayloadParser for JsonPayloadParser {
    fn format(&self) -> FormatType {
        FormatType::Json
    }

    fn parse(
        &self,
        payload: &RawInterrogationPayload,
    ) -> Result<serde_json::Value, PayloadParseError> {
        serde_json::from_slice(payload.as_bytes()).map_err(|e| PayloadParseError::new(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(s: &str) -> RawInterrogationPayload {
        RawInterrogationPayload::new(s.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn parses_object_payload() {
        let value = JsonPayloadParser::new()
            .parse(&payload(r#"{"name":"Alice"}"#))
            .unwrap();
        assert_eq!(value, json!({"name": "Alice"}));
    }

    #[test]
    fn parses_array_with_leading_whitespace() {
        let value = JsonPayloadParser::new()
            .parse(&payload("\n  [{\"name\":\"Alice\"}, {\"name\":\"Bob\"}]"))
            .unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn reports_position_of_syntax_errors() {
        let err = JsonPayloadParser::new().parse(&payload("{\"a\":")).unwrap_err();
        assert!(err.reason.contains("line 1"), "got {}", err.reason);
    }
}
