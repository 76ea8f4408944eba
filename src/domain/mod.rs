//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, roles)
//! - `ingestion` - Raw answer payloads and format sniffing
//! - `interrogation` - Interrogation lifecycle and progress state
//! - `lookup` - External service read models and not-found errors

pub mod foundation;
pub mod ingestion;
pub mod interrogation;
pub mod lookup;
