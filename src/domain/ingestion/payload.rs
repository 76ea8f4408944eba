//! Raw answer payload as received from a collection front-end.

use super::format::{detect_format, FormatType, InvalidPayloadError};

/// Immutable, non-empty byte payload.
///
/// Construction is the only place emptiness is checked, so every value of this
/// type can be classified without failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInterrogationPayload {
    bytes: Vec<u8>,
    format: FormatType,
}

impl RawInterrogationPayload {
    /// Wraps a byte buffer, rejecting an empty one.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, InvalidPayloadError> {
        let bytes = bytes.into();
        let format = detect_format(Some(bytes.as_slice()))?;
        Ok(Self { bytes, format })
    }

    /// Wraps an optional buffer; `None` is rejected as a missing payload.
    pub fn from_optional(bytes: Option<Vec<u8>>) -> Result<Self, InvalidPayloadError> {
        bytes.ok_or(InvalidPayloadError::Missing).and_then(Self::new)
    }

    /// Format family detected from the content.
    pub fn format(&self) -> FormatType {
        self.format
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl TryFrom<Vec<u8>> for RawInterrogationPayload {
    type Error = InvalidPayloadError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_classifies_on_construction() {
        let payload = RawInterrogationPayload::new(b"[1,2]".to_vec()).unwrap();
        assert_eq!(payload.format(), FormatType::Json);
        assert_eq!(payload.len(), 5);
        assert!(!payload.is_empty());
    }

    #[test]
    fn new_rejects_empty_buffer() {
        assert_eq!(
            RawInterrogationPayload::new(Vec::new()),
            Err(InvalidPayloadError::Empty)
        );
    }

    #[test]
    fn from_optional_rejects_absent_buffer() {
        assert_eq!(
            RawInterrogationPayload::from_optional(None),
            Err(InvalidPayloadError::Missing)
        );
    }

    #[test]
    fn bytes_are_kept_untouched() {
        let raw = b"  id;q1\n1;yes".to_vec();
        let payload = RawInterrogationPayload::try_from(raw.clone()).unwrap();
        assert_eq!(payload.as_bytes(), raw.as_slice());
        assert_eq!(payload.format(), FormatType::Csv);
    }
}
