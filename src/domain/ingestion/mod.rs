//! Ingestion of respondent answer payloads.
//!
//! Classifies raw bytes into a format family so the matching parser can be
//! selected downstream, and holds the structured answers it produces.

mod answers;
mod format;
mod payload;

pub use answers::InterrogationData;
pub use format::{detect_format, FormatType, InvalidPayloadError};
pub use payload::RawInterrogationPayload;
