//! Delimited-text answer parser backed by the `csv` crate.
//!
//! Front-ends export either comma- or semicolon-separated tables. The
//! delimiter is picked from the header line, a UTF-8 byte-order mark is
//! dropped, and every row becomes a JSON object keyed by the header.

use serde_json::{Map, Value};

use crate::domain::ingestion::{FormatType, RawInterrogationPayload};
use crate::ports::{PayloadParseError, PayloadParser};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const CANDIDATE_DELIMITERS: [u8; 3] = [b',', b';', b'\t'];

/// Parses CSV payloads into an array of row objects.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvPayloadParser;

impl CsvPayloadParser {
    pub fn new() -> Self {
        Self
    }
}

/// Picks the candidate delimiter occurring most often in the header line.
///
/// Ties and header lines without any candidate fall back to a comma.
fn sniff_delimiter(header_line: &[u8]) -> u8 {
    let mut best = (b',', 0usize);
    for candidate in CANDIDATE_DELIMITERS {
        let count = header_line.iter().filter(|b| **b == candidate).count();
        if count > best.1 {
            best = (candidate, count);
        }
    }
    best.0
}

fn significant_bytes(raw: &[u8]) -> &[u8] {
    let raw = raw.strip_prefix(UTF8_BOM).unwrap_or(raw);
    let start = raw
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(raw.len());
    &raw[start..]
}

impl PayloadParser for CsvPayloadParser {
    fn format(&self) -> FormatType {
        FormatType::Csv
    }

    fn parse(&self, payload: &RawInterrogationPayload) -> Result<Value, PayloadParseError> {
        let bytes = significant_bytes(payload.as_bytes());
        if bytes.is_empty() {
            return Err(PayloadParseError::new("no header row"));
        }

        let header_line = bytes.split(|b| *b == b'\n').next().unwrap_or(bytes);
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(sniff_delimiter(header_line))
            .trim(csv::Trim::All)
            .from_reader(bytes);

        let headers = reader
            .headers()
            .map_err(|e| PayloadParseError::new(e.to_string()))?
            .clone();
        if headers.iter().any(str::is_empty) {
            return Err(PayloadParseError::new("header row contains an empty column name"));
        }
        for (i, name) in headers.iter().enumerate() {
            if headers.iter().take(i).any(|seen| seen == name) {
                return Err(PayloadParseError::new(format!(
                    "duplicate column name '{}'",
                    name
                )));
            }
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| PayloadParseError::new(e.to_string()))?;
            let row: Map<String, Value> = headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.to_string(), Value::String(v.to_string())))
                .collect();
            rows.push(Value::Object(row));
        }

        Ok(Value::Array(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(s: &[u8]) -> Result<Value, PayloadParseError> {
        CsvPayloadParser::new().parse(&RawInterrogationPayload::new(s.to_vec()).unwrap())
    }

    #[test]
    fn parses_comma_separated_rows() {
        let value = parse(b"name,age\nAlice,30\nBob,25").unwrap();
        assert_eq!(
            value,
            json!([
                {"name": "Alice", "age": "30"},
                {"name": "Bob", "age": "25"}
            ])
        );
    }

    #[test]
    fn sniffs_semicolon_delimiter() {
        let value = parse(b"id;Q1;Q2\nSU-1;yes;no\n").unwrap();
        assert_eq!(value, json!([{"id": "SU-1", "Q1": "yes", "Q2": "no"}]));
    }

    #[test]
    fn strips_bom_and_leading_blank_lines() {
        let value = parse(b"\xEF\xBB\xBF\n\nid,Q1\n1,a").unwrap();
        assert_eq!(value, json!([{"id": "1", "Q1": "a"}]));
    }

    #[test]
    fn header_only_payload_is_an_empty_table() {
        assert_eq!(parse(b"id,Q1\n").unwrap(), json!([]));
    }

    #[test]
    fn duplicate_column_names_are_rejected() {
        let err = parse(b"id,Q1,Q1\n1,yes,no").unwrap_err();
        assert_eq!(err.reason, "duplicate column name 'Q1'");
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(parse(b"id,Q1\n1,a,extra").is_err());
    }

    #[test]
    fn whitespace_only_payload_is_rejected() {
        let err = parse(b"  \n ").unwrap_err();
        assert_eq!(err.reason, "no header row");
    }

    #[test]
    fn delimiter_sniffing_prefers_most_frequent() {
        assert_eq!(sniff_delimiter(b"a;b;c,d"), b';');
        assert_eq!(sniff_delimiter(b"a\tb\tc"), b'\t');
        assert_eq!(sniff_delimiter(b"single"), b',');
    }
}
