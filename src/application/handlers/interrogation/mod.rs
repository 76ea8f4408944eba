//! Interrogation command and query handlers.

mod advance_page;
mod complete_interrogation;
mod delete_interrogation;
mod get_state;
mod ingest_data;
mod store;
mod validate_interrogation;

pub use advance_page::{AdvancePageCommand, AdvancePageHandler, TransitionResult};
pub use complete_interrogation::{CompleteInterrogationCommand, CompleteInterrogationHandler};
pub use delete_interrogation::{DeleteInterrogationCommand, DeleteInterrogationHandler};
pub use get_state::{GetInterrogationStateHandler, GetInterrogationStateQuery};
pub use ingest_data::{
    IngestInterrogationDataCommand, IngestInterrogationDataHandler, IngestInterrogationDataResult,
};
pub use validate_interrogation::{ValidateInterrogationCommand, ValidateInterrogationHandler};
