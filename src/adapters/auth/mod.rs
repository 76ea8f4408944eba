//! Authentication adapters.
//!
//! Real deployments put an OIDC-aware gateway in front of the service; the
//! in-process validator here backs tests and the development profile.

mod mock;

pub use mock::MockSessionValidator;
