//! Strongly-typed identifiers for the Greenlight platform.
//!
//! This module provides a set of identifier types that are used
//! throughout the engine, ensuring type safety and clear semantics.
//! Every identifier wraps a UUID; the phantom marker keeps a `UserId`
//! from being passed where an `OrganizationId` is expected.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// A type-safe identifier based on UUID.
pub struct Id<T> {
    uuid: Uuid,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create a new random identifier.
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Create an identifier from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            uuid,
            _marker: PhantomData,
        }
    }

    /// Get the underlying UUID.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Create a nil (all zeros) identifier.
    ///
    /// The nil identifier is legal as a check target: it is used for
    /// jurisdiction-only actions such as country-wide reports, where no
    /// single entity is being addressed.
    pub fn nil() -> Self {
        Self::from_uuid(Uuid::nil())
    }

    /// Whether this is the nil (all zeros) identifier.
    pub fn is_nil(&self) -> bool {
        self.uuid.is_nil()
    }
}

// Manual impls: derives would bound the marker type, which is never
// instantiated and carries no trait impls of its own.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.uuid.cmp(&other.uuid)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.uuid)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uuid)
    }
}

impl<T> FromStr for Id<T> {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_uuid(Uuid::parse_str(s)?))
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.uuid.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Uuid::deserialize(deserializer).map(Self::from_uuid)
    }
}

/// Marker type for users.
pub struct UserMarker;
/// Identifier for a user.
pub type UserId = Id<UserMarker>;

/// Marker type for organizations.
pub struct OrganizationMarker;
/// Identifier for an organization.
pub type OrganizationId = Id<OrganizationMarker>;

/// Marker type for projects.
pub struct ProjectMarker;
/// Identifier for a project.
pub type ProjectId = Id<ProjectMarker>;

/// Marker type for assets.
pub struct AssetMarker;
/// Identifier for an asset (a building under renovation).
pub type AssetId = Id<AssetMarker>;
