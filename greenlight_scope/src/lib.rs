//! # Greenlight Scope
//!
//! `greenlight_scope` is the row-level scoping half of the Greenlight
//! authorization engine. Where the capability gate answers yes/no for a
//! single entity, this crate restricts bulk list/report queries to the
//! rows an actor may see, reusing the same role vocabulary.
//!
//! One generic builder walks a per-entity-kind descriptor (asset,
//! organization, project); the output is a composable query value the
//! storage collaborator executes. A scoping result of "nothing visible"
//! must surface as `Unauthorized`, never as the unrestricted base query
//! and never as an empty result set — [`scope_or_deny`] encodes that
//! directly.

pub mod builder;
pub mod descriptor;
pub mod query;

// Re-export key types for convenience
pub use builder::{scope, scope_or_deny};
pub use descriptor::{EntityDescriptor, OwnershipRule, ASSET, ORGANIZATION, PROJECT};
pub use query::{Join, Param, Predicate, Query};
