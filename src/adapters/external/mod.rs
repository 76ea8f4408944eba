//! Adapters for the external survey services.
//!
//! - `http_client` - REST clients used in deployed environments
//! - `in_memory` - Seeded stand-ins for tests and local development

mod http_client;
mod in_memory;

pub use http_client::{HttpDataCollectionService, HttpQuestionnaireDesignService};
pub use in_memory::{InMemoryDataCollectionService, InMemoryQuestionnaireDesignService};
