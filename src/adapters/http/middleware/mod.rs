//! HTTP middleware for axum.
//!
//! - `auth` - Authentication middleware, extractors and role checks

pub mod auth;

pub use auth::{auth_middleware, authorize, AuthRejection, AuthState, RequireAuth};
