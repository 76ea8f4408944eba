//! Payload parser adapters, one per format family.

mod csv_parser;
mod json_parser;

pub use csv_parser::CsvPayloadParser;
pub use json_parser::JsonPayloadParser;

use std::sync::Arc;

use crate::ports::PayloadParsers;

/// The default parser set: serde_json for JSON, the csv crate for CSV.
pub fn default_parsers() -> PayloadParsers {
    PayloadParsers::new(Arc::new(JsonPayloadParser::new()), Arc::new(CsvPayloadParser::new()))
}
