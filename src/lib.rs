//! Survey Bridge - orchestration backend for survey data collection
//!
//! Bridges the questionnaire-design and data-collection services with
//! respondents: classifies uploaded answer payloads, tracks each
//! interrogation's lifecycle, reports missing campaign resources and maps
//! UI roles onto identity-provider roles.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
