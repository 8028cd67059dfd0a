//! Entity-kind scoping descriptors.
//!
//! The three protected list/report kinds share one scoping algorithm;
//! what differs per kind is data, captured here: which column carries
//! the row's country and which predicates tie a row to the actor's
//! organizations. The builder in [`crate::builder`] walks these rules
//! instead of each kind owning a copy of the algorithm.

use crate::query::{Join, Query};

/// One way a row is owned by, or tied to, an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipRule {
    /// `column IN (actor's org IDs)`.
    UuidColumn(&'static str),
    /// `column && (actor's org IDs)` — array membership.
    ArrayColumn(&'static str),
    /// `column IN (actor's org IDs)` where `column` lives on a joined
    /// table.
    Joined {
        join: Join,
        column: &'static str,
    },
}

/// The per-kind scoping data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityDescriptor {
    pub table: &'static str,
    pub country_column: &'static str,
    pub ownership: &'static [OwnershipRule],
}

impl EntityDescriptor {
    /// A base query over this kind's table.
    pub fn base_query(&self) -> Query {
        Query::select(self.table)
    }
}

/// Assets are visible through their owning organization.
pub const ASSET: EntityDescriptor = EntityDescriptor {
    table: "assets",
    country_column: "assets.country",
    ownership: &[OwnershipRule::UuidColumn("assets.owner_id")],
};

/// Organizations are visible to their own officers.
pub const ORGANIZATION: EntityDescriptor = EntityDescriptor {
    table: "organizations",
    country_column: "organizations.country",
    ownership: &[OwnershipRule::UuidColumn("organizations.id")],
};

/// Projects are visible through the owning organization, consortium
/// membership, or by being the ESCo of the project's asset.
pub const PROJECT: EntityDescriptor = EntityDescriptor {
    table: "projects",
    country_column: "projects.country",
    ownership: &[
        OwnershipRule::UuidColumn("projects.owner"),
        OwnershipRule::ArrayColumn("projects.consortium_orgs"),
        OwnershipRule::Joined {
            join: Join {
                table: "assets",
                left: "projects.asset",
                right: "assets.id",
            },
            column: "assets.esco_id",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_queries_select_the_descriptor_table() {
        assert_eq!(ASSET.base_query().table(), "assets");
        assert_eq!(ORGANIZATION.base_query().table(), "organizations");
        assert_eq!(PROJECT.base_query().table(), "projects");
    }

    #[test]
    fn project_descriptor_carries_all_three_ownership_paths() {
        assert_eq!(PROJECT.ownership.len(), 3);
        assert!(matches!(
            PROJECT.ownership[2],
            OwnershipRule::Joined { column: "assets.esco_id", .. }
        ));
    }
}
