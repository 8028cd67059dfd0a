//! # Greenlight Authz
//!
//! `greenlight_authz` is the capability-bitmask authorization engine of
//! the Greenlight platform. Almost every read/write operation asks one
//! question: can this actor perform this action on this target, in this
//! jurisdiction?
//!
//! Key pieces:
//!
//! 1. **Role vocabulary**: 20 primitive capability bits and the
//!    immutable string→bit tables that translate stored role rows.
//!
//! 2. **Actor role deriver**: a pure function computing the full mask an
//!    actor holds against one (target, jurisdiction) pair.
//!
//! 3. **Action catalogue**: ~130 named permissions declared as a
//!    compile-time DAG of const unions.
//!
//! 4. **Capability gate**: the boolean overlap check, fail-closed for
//!    anonymous requests.
//!
//! The engine performs no I/O and keeps no state; the catalogue is the
//! only shared table and it is immutable after process start
//! ([`catalogue::validate_catalogue`] checks its invariants during
//! initialization).

pub mod capability;
pub mod catalogue;
pub mod derive;
pub mod gate;
pub mod vocabulary;

// Re-export key types for convenience
pub use capability::{Action, Capability};
pub use derive::derive_mask;
pub use gate::RequestContext;
pub use vocabulary::{country_role_capability, position_capability};
