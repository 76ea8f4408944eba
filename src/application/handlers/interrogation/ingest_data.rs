//! IngestInterrogationDataHandler - Command handler for answer uploads.
//!
//! The raw body is sniffed, decoded by the matching parser, stored, and the
//! interrogation is marked as started.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{CommandMetadata, InterrogationId, Timestamp};
use crate::domain::ingestion::{FormatType, InterrogationData, RawInterrogationPayload};
use crate::domain::interrogation::{InterrogationError, InterrogationState};
use crate::ports::{InterrogationStateRepository, PayloadParsers};

use super::store;

/// Command to store submitted answers.
#[derive(Debug, Clone)]
pub struct IngestInterrogationDataCommand {
    pub interrogation_id: InterrogationId,
    /// Request body as received; `None` when the request had no body.
    pub payload: Option<Vec<u8>>,
}

/// Result of a successful upload.
#[derive(Debug, Clone)]
pub struct IngestInterrogationDataResult {
    pub format: FormatType,
    pub record_count: usize,
    pub state: InterrogationState,
    pub version: u64,
}

pub struct IngestInterrogationDataHandler {
    repository: Arc<dyn InterrogationStateRepository>,
    parsers: PayloadParsers,
}

impl IngestInterrogationDataHandler {
    pub fn new(repository: Arc<dyn InterrogationStateRepository>, parsers: PayloadParsers) -> Self {
        Self {
            repository,
            parsers,
        }
    }

    pub async fn handle(
        &self,
        cmd: IngestInterrogationDataCommand,
        metadata: CommandMetadata,
    ) -> Result<IngestInterrogationDataResult, InterrogationError> {
        // 1. Classify
        let payload = RawInterrogationPayload::from_optional(cmd.payload)?;
        let format = payload.format();

        // 2. Decode
        let answers = self
            .parsers
            .for_format(format)
            .parse(&payload)
            .map_err(|e| InterrogationError::unparseable(format, e.reason))?;

        // 3. Check the transition before touching storage
        let now = Timestamp::now();
        let repository = self.repository.as_ref();
        let (current, expected_version) =
            store::load_or_initial(repository, &cmd.interrogation_id).await?;
        let next = current.record_submission(now)?;

        // 4. Store answers, then the state that records them
        let data = InterrogationData::new(format, answers, now);
        let record_count = data.record_count();
        repository.save_data(&cmd.interrogation_id, &data).await?;
        let version = store::save(repository, &cmd.interrogation_id, &next, expected_version).await?;

        info!(
            interrogation_id = %cmd.interrogation_id,
            format = %format,
            records = record_count,
            state = %next.state(),
            correlation_id = metadata.correlation_id(),
            "Interrogation data stored"
        );

        Ok(IngestInterrogationDataResult {
            format,
            record_count,
            state: next,
            version,
        })
    }
}
