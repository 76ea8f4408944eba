//! HTTP adapter for interrogation endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChangePageRequest, DataUploadResponse, StateCommandResponse};
pub use handlers::InterrogationHandlers;
pub use routes::interrogation_routes;
