//! Primitive capability bits.
//!
//! Every authorization decision in the platform reduces to one question:
//! does the mask derived for an (actor, target, jurisdiction) triple
//! overlap the mask an action requires? This module defines the 20
//! primitive bits both masks are built from, and the `Action` wrapper
//! that names a required-bits constant.
//!
//! Declaration order is fixed and load-bearing: bit indices are part of
//! the deployed artifact's contract, so new bits are appended, never
//! inserted.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// One primitive grant contributed by some role relationship.
    ///
    /// | Bit | Source |
    /// |-----|--------|
    /// | [`SELF`](Self::SELF) | target UUID equals the actor's own id |
    /// | [`LOGGED`](Self::LOGGED) | always set for an authenticated actor |
    /// | [`LEAR`](Self::LEAR)..[`MEMBERS`](Self::MEMBERS) | organization positions on the target |
    /// | [`PM`](Self::PM)..[`TEME`](Self::TEME) | project positions on the target |
    /// | [`PD`](Self::PD)..[`CA`](Self::CA), [`INVESTOR`](Self::INVESTOR) | country roles in the jurisdiction |
    /// | [`VALID`](Self::VALID) | account validation status |
    /// | [`PFM`](Self::PFM), [`ANM`](Self::ANM), [`SUPERUSER`](Self::SUPERUSER) | platform-level flags |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Capability: u32 {
        /// The target is the actor themselves.
        const SELF = 1 << 0;
        /// Any authenticated actor.
        const LOGGED = 1 << 1;
        /// Legal entity appointed representative of the target organization.
        const LEAR = 1 << 2;
        /// Authorized signatory of the target organization.
        const LSIGNS = 1 << 3;
        /// Legal entity account administrator of the target organization.
        const LEAAS = 1 << 4;
        /// Plain member of the target organization.
        const MEMBERS = 1 << 5;
        /// Project manager of the target project.
        const PM = 1 << 6;
        /// Project administrative coordinator of the target project.
        const PACO = 1 << 7;
        /// Project-level signatory of the target project.
        const PLSIGN = 1 << 8;
        /// Technical assembly manager of the target project.
        const TAMA = 1 << 9;
        /// Technical measurement expert of the target project.
        const TEME = 1 << 10;
        /// Portfolio director for the jurisdiction.
        const PD = 1 << 11;
        /// Fund manager for the jurisdiction.
        const FM = 1 << 12;
        /// Data protection officer for the jurisdiction.
        const DPO = 1 << 13;
        /// Country administrator for the jurisdiction.
        const CA = 1 << 14;
        /// Account validation status is `Valid`.
        const VALID = 1 << 15;
        /// Platform fund manager flag on the account.
        const PFM = 1 << 16;
        /// Administrative network manager flag on the account.
        const ANM = 1 << 17;
        /// Investor for the jurisdiction.
        const INVESTOR = 1 << 18;
        /// Platform superuser flag on the account.
        const SUPERUSER = 1 << 19;
    }
}

impl Capability {
    /// Organization positions with legal standing: LEAR, LEAA, LSIGN.
    /// These are the positions that make an organization "the actor's
    /// own" for ownership-based visibility.
    pub const ORG_OFFICERS: Self = Self::LEAR.union(Self::LEAAS).union(Self::LSIGNS);

    /// Every organization position, plain members included.
    pub const ORG_ALL: Self = Self::ORG_OFFICERS.union(Self::MEMBERS);

    /// Project positions that run the project day to day.
    pub const PROJECT_LEADS: Self = Self::PM.union(Self::PACO);

    /// Every project position.
    pub const PROJECT_TEAM: Self = Self::PROJECT_LEADS
        .union(Self::PLSIGN)
        .union(Self::TAMA)
        .union(Self::TEME);

    /// Returns a human-readable list of the set bit names.
    pub fn names(self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.names();
        if names.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", names.join(" | "))
        }
    }
}

/// A named permission: the set of primitive bits any one of which is
/// sufficient to perform the operation.
///
/// Actions are compile-time constants composed with const `union`s, so a
/// composite declared in terms of a base action automatically widens
/// when the base does. See [`crate::catalogue`] for the full table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action(Capability);

impl Action {
    /// Declare an action requiring the given bits.
    pub const fn of(required: Capability) -> Self {
        Self(required)
    }

    /// Extend this action with extra raw bits.
    pub const fn with(self, extra: Capability) -> Self {
        Self(self.0.union(extra))
    }

    /// Union this action with another action.
    pub const fn or(self, other: Action) -> Self {
        Self(self.0.union(other.0))
    }

    /// The bits this action requires.
    pub const fn mask(self) -> Capability {
        self.0
    }

    /// Overlap test: holding any one required bit is sufficient. This is
    /// a strictly additive allow-list model; there is no deny bit and no
    /// priority between grants.
    pub fn allows(self, granted: Capability) -> bool {
        self.0.intersects(granted)
    }
}
