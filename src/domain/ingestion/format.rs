//! Content sniffing for raw interrogation payloads.
//!
//! Collection front-ends send answers either as a JSON document or as a
//! delimited table. Before any schema-aware processing the bytes are routed to
//! the right parser by looking at the first significant character only:
//!
//! 1. absent or zero-length payload: rejected
//! 2. leading ASCII whitespace: skipped
//! 3. `{` or `[`: JSON (the rest is not validated here)
//! 4. anything else: CSV
//!
//! Byte-order marks, encodings and delimiters are the CSV parser's concern.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Format family of an answer payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormatType {
    Json,
    Csv,
}

impl FormatType {
    /// MIME type the payload is parsed as.
    pub fn content_type(&self) -> &'static str {
        match self {
            FormatType::Json => "application/json",
            FormatType::Csv => "text/csv",
        }
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FormatType::Json => "JSON",
            FormatType::Csv => "CSV",
        };
        write!(f, "{}", s)
    }
}

/// Input to format detection was absent or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidPayloadError {
    #[error("Payload is missing")]
    Missing,

    #[error("Payload is empty")]
    Empty,
}

/// Classifies a payload as JSON or CSV.
///
/// Pure function of the bytes; safe to call from any number of threads.
pub fn detect_format(payload: Option<&[u8]>) -> Result<FormatType, InvalidPayloadError> {
    let bytes = payload.ok_or(InvalidPayloadError::Missing)?;
    if bytes.is_empty() {
        return Err(InvalidPayloadError::Empty);
    }

    let first = bytes.iter().copied().find(|b| !b.is_ascii_whitespace());
    Ok(match first {
        Some(b'{') | Some(b'[') => FormatType::Json,
        _ => FormatType::Csv,
    })
}
