//! The actor snapshot consumed by the authorization engine.
//!
//! A snapshot is resolved once per request by the session collaborator
//! and handed to the engine fully materialized: role rows are already
//! fetched, nothing here triggers I/O. The engine never mutates a
//! snapshot; it is a pure function over this data.
//!
//! Role and position names are kept as plain strings rather than enums
//! on purpose: the stored vocabulary is owned by external collaborators,
//! and an unknown string must degrade to "no capability granted" instead
//! of failing deserialization.

use serde::{Deserialize, Serialize};

use crate::id::{OrganizationId, ProjectId, UserId};

/// Account validation lifecycle state, owned by an external workflow.
/// The engine only ever asks "is this `Valid`?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    Registered,
    Pending,
    Valid,
    Declined,
}

impl ValidationStatus {
    /// Whether the account has passed validation.
    pub fn is_valid(self) -> bool {
        self == ValidationStatus::Valid
    }
}

impl Default for ValidationStatus {
    fn default() -> Self {
        ValidationStatus::Registered
    }
}

/// A country-level role assignment (jurisdiction-scoped).
///
/// One actor may hold multiple roles across multiple countries. Known
/// role names: `fund_manager`, `country_admin`, `portfolio_director`,
/// `data_protection_officer`, `investor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRole {
    pub user_id: UserId,
    pub country: String,
    pub role: String,
}

/// An organization-level position assignment.
///
/// Known positions: `lear`, `leaa`, `lsign`, `member`. Exactly one
/// `lear` per organization is enforced upstream, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRole {
    pub user_id: UserId,
    pub organization_id: OrganizationId,
    pub position: String,
}

/// A project-level position assignment.
///
/// Known positions: `pm`, `paco`, `plsign`, `tama`, `teme`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRole {
    pub user_id: UserId,
    pub project_id: ProjectId,
    pub position: String,
}

/// An authenticated actor, fully resolved for the current request.
///
/// Role vectors may contain duplicate rows as stored; consumers must be
/// duplicate-tolerant (mask derivation ORs, which is idempotent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: UserId,
    pub superuser: bool,
    pub platform_manager: bool,
    pub admin_nw_manager: bool,
    pub validation_status: ValidationStatus,
    pub country: String,
    pub country_roles: Vec<CountryRole>,
    pub organization_roles: Vec<OrganizationRole>,
    pub project_roles: Vec<ProjectRole>,
}

impl Actor {
    /// A minimal snapshot with no flags and no roles. Useful as a base
    /// when assembling snapshots in tests and fixtures.
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            superuser: false,
            platform_manager: false,
            admin_nw_manager: false,
            validation_status: ValidationStatus::default(),
            country: String::new(),
            country_roles: Vec::new(),
            organization_roles: Vec::new(),
            project_roles: Vec::new(),
        }
    }

    /// Attach a country role for this actor.
    pub fn with_country_role(mut self, country: impl Into<String>, role: impl Into<String>) -> Self {
        self.country_roles.push(CountryRole {
            user_id: self.id,
            country: country.into(),
            role: role.into(),
        });
        self
    }

    /// Attach an organization position for this actor.
    pub fn with_organization_role(
        mut self,
        organization_id: OrganizationId,
        position: impl Into<String>,
    ) -> Self {
        self.organization_roles.push(OrganizationRole {
            user_id: self.id,
            organization_id,
            position: position.into(),
        });
        self
    }

    /// Attach a project position for this actor.
    pub fn with_project_role(
        mut self,
        project_id: ProjectId,
        position: impl Into<String>,
    ) -> Self {
        self.project_roles.push(ProjectRole {
            user_id: self.id,
            project_id,
            position: position.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_status_is_valid() {
        assert!(ValidationStatus::Valid.is_valid());
        assert!(!ValidationStatus::Registered.is_valid());
        assert!(!ValidationStatus::Pending.is_valid());
        assert!(!ValidationStatus::Declined.is_valid());
    }

    #[test]
    fn validation_status_serde_names() {
        let json = serde_json::to_string(&ValidationStatus::Valid).unwrap();
        assert_eq!(json, "\"valid\"");
        let back: ValidationStatus = serde_json::from_str("\"declined\"").unwrap();
        assert_eq!(back, ValidationStatus::Declined);
    }

    #[test]
    fn builder_helpers_record_the_actor_id() {
        let org = OrganizationId::new();
        let actor = Actor::new(UserId::new())
            .with_country_role("Latvia", "country_admin")
            .with_organization_role(org, "lear");

        assert_eq!(actor.country_roles[0].user_id, actor.id);
        assert_eq!(actor.country_roles[0].country, "Latvia");
        assert_eq!(actor.organization_roles[0].organization_id, org);
    }

    #[test]
    fn snapshot_round_trips_through_serde() {
        let actor = Actor::new(UserId::new())
            .with_country_role("Bulgaria", "fund_manager")
            .with_project_role(crate::id::ProjectId::new(), "pm");

        let json = serde_json::to_string(&actor).unwrap();
        let back: Actor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, actor);
    }

    #[test]
    fn unknown_role_strings_still_deserialize() {
        // The stored vocabulary may grow ahead of this engine; snapshots
        // with unknown names must parse and simply grant nothing later.
        let actor = Actor::new(UserId::new()).with_country_role("Latvia", "mystery_role");
        let json = serde_json::to_string(&actor).unwrap();
        let back: Actor = serde_json::from_str(&json).unwrap();
        assert_eq!(back.country_roles[0].role, "mystery_role");
    }
}
