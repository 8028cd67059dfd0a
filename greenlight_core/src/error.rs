//! Error types for the Greenlight authorization engine.
//!
//! The engine itself has almost no error surface: capability checks are
//! plain booleans and unknown role strings degrade to "no bit granted".
//! What remains is the single `Unauthorized` condition that callers
//! surface for denied list/report scoping, and the startup-time
//! catalogue validation failure, which is a programming error rather
//! than a per-request condition.

use thiserror::Error;

/// Errors surfaced by the authorization engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthzError {
    /// The actor may not perform the requested operation. Deliberately
    /// carries no detail: at this layer "not found" and "not permitted"
    /// are indistinguishable so that existence never leaks.
    #[error("unauthorized")]
    Unauthorized,

    /// The action catalogue failed its startup-time invariant check.
    /// Binaries are expected to abort on this during initialization;
    /// it must never be produced per-request.
    #[error("invalid action catalogue: {0}")]
    InvalidCatalogue(String),
}

/// Result type used throughout the Greenlight engine.
pub type Result<T> = std::result::Result<T, AuthzError>;
