//! # Greenlight Core
//!
//! `greenlight_core` provides the shared vocabulary of the Greenlight
//! authorization engine: strongly-typed identifiers, the actor snapshot
//! model handed in by the session-resolution collaborator, and the error
//! taxonomy.
//!
//! The crate holds no behavior beyond accessors. Role derivation and
//! capability checking live in `greenlight_authz`; row-level query
//! scoping lives in `greenlight_scope`.

pub mod actor;
pub mod error;
pub mod id;

// Re-export key types for convenience
pub use actor::{Actor, CountryRole, OrganizationRole, ProjectRole, ValidationStatus};
pub use error::{AuthzError, Result};
pub use id::{AssetId, OrganizationId, ProjectId, UserId};
