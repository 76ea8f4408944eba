//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod campaign;
pub mod interrogation;

pub use campaign::{CampaignOverviewError, GetCampaignOverviewHandler, GetCampaignOverviewQuery};
pub use interrogation::{
    AdvancePageCommand, AdvancePageHandler, CompleteInterrogationCommand,
    CompleteInterrogationHandler, DeleteInterrogationCommand, DeleteInterrogationHandler,
    GetInterrogationStateHandler, GetInterrogationStateQuery, IngestInterrogationDataCommand,
    IngestInterrogationDataHandler, IngestInterrogationDataResult, TransitionResult,
    ValidateInterrogationCommand, ValidateInterrogationHandler,
};
