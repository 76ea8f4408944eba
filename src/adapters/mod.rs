//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - Session validation backed by a static token table
//! - `external` - REST and in-memory data-collection / questionnaire-design services
//! - `http` - REST API, auth middleware and error translation
//! - `parsing` - JSON and CSV answer parsers
//! - `storage` - Versioned interrogation state store

pub mod auth;
pub mod external;
pub mod http;
pub mod parsing;
pub mod storage;

pub use auth::MockSessionValidator;
pub use external::{
    HttpDataCollectionService, HttpQuestionnaireDesignService, InMemoryDataCollectionService,
    InMemoryQuestionnaireDesignService,
};
pub use parsing::{default_parsers, CsvPayloadParser, JsonPayloadParser};
pub use storage::InMemoryInterrogationStateRepository;
