//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## External Services
//!
//! - `DataCollectionService` - Campaigns, interrogations and survey units
//! - `QuestionnaireDesignService` - Questionnaire structure documents
//!
//! ## Ingestion
//!
//! - `PayloadParser` / `PayloadParsers` - Decoding of JSON and CSV answers
//! - `InterrogationStateRepository` - Versioned progress state and answers
//!
//! ## Identity
//!
//! - `SessionValidator` - Bearer token validation

mod data_collection;
mod interrogation_state_repository;
mod payload_parser;
mod questionnaire_design;
mod session_validator;

pub use data_collection::DataCollectionService;
pub use interrogation_state_repository::{InterrogationStateRepository, VersionedState};
pub use payload_parser::{PayloadParseError, PayloadParser, PayloadParsers};
pub use questionnaire_design::QuestionnaireDesignService;
pub use session_validator::SessionValidator;
