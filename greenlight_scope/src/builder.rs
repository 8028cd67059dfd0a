//! The row-level scope builder.
//!
//! The list/report analogue of the capability gate: instead of a single
//! yes/no it restricts a bulk query to the rows an actor may see,
//! reusing the same role vocabulary so the two stay semantically
//! consistent.
//!
//! Critical invariant: a `(query, false)` result means the actor may see
//! nothing. The caller must reject with an authorization error — the
//! returned query still looks unrestricted and must never run. Use
//! [`scope_or_deny`] to make that impossible to forget.

use std::collections::BTreeSet;

use greenlight_authz::{country_role_capability, position_capability, Capability};
use greenlight_core::{Actor, AuthzError, Result};
use uuid::Uuid;

use crate::descriptor::{EntityDescriptor, OwnershipRule};
use crate::query::{Predicate, Query};

/// Country roles that widen visibility to a whole jurisdiction.
const COUNTRY_SCOPING: Capability = Capability::FM.union(Capability::CA);

/// Restrict `query` to the rows of `descriptor`'s kind that `actor` may
/// see.
///
/// Returns the scoped query and whether the actor may see anything at
/// all. Superusers, platform managers, and admin network managers pass
/// unrestricted. Everyone else accumulates OR'd predicates: one for the
/// countries they administer or fund, plus the descriptor's ownership
/// predicates over the organizations where they hold a significant
/// position (`lear`, `leaa`, `lsign`).
pub fn scope(descriptor: &EntityDescriptor, query: Query, actor: &Actor) -> (Query, bool) {
    if actor.superuser || actor.admin_nw_manager || actor.platform_manager {
        return (query, true);
    }

    let mut query = query;
    let mut can_see_any = false;

    let countries = scoping_countries(actor);
    if !countries.is_empty() {
        query.or_where(Predicate::TextIn {
            column: descriptor.country_column,
            values: countries,
        });
        can_see_any = true;
    }

    let organizations = significant_organizations(actor);
    if !organizations.is_empty() {
        for rule in descriptor.ownership.iter().copied() {
            match rule {
                OwnershipRule::UuidColumn(column) => query.or_where(Predicate::UuidIn {
                    column,
                    values: organizations.clone(),
                }),
                OwnershipRule::ArrayColumn(column) => query.or_where(Predicate::ArrayOverlaps {
                    column,
                    values: organizations.clone(),
                }),
                OwnershipRule::Joined { join, column } => {
                    query.join(join);
                    query.or_where(Predicate::UuidIn {
                        column,
                        values: organizations.clone(),
                    });
                }
            }
        }
        can_see_any = true;
    }

    (query, can_see_any)
}

/// [`scope`], with the deny case made unskippable: when the actor
/// qualifies for no rows the base query is dropped and `Unauthorized`
/// comes back instead — never an empty result set, never an unrestricted
/// query.
pub fn scope_or_deny(descriptor: &EntityDescriptor, query: Query, actor: &Actor) -> Result<Query> {
    let (scoped, can_see_any) = scope(descriptor, query, actor);
    if !can_see_any {
        tracing::debug!(
            actor = %actor.id,
            table = descriptor.table,
            "list scoping denied: no qualifying roles"
        );
        return Err(AuthzError::Unauthorized);
    }
    Ok(scoped)
}

/// The deduplicated, ordered set of countries the actor administers or
/// funds. Rows for other users are ignored, matching the deriver's
/// country-role step.
fn scoping_countries(actor: &Actor) -> Vec<String> {
    let set: BTreeSet<&str> = actor
        .country_roles
        .iter()
        .filter(|role| role.user_id == actor.id)
        .filter(|role| country_role_capability(&role.role).intersects(COUNTRY_SCOPING))
        .map(|role| role.country.as_str())
        .collect();
    set.into_iter().map(String::from).collect()
}

/// The deduplicated, ordered set of organization IDs where the actor
/// holds a significant position.
fn significant_organizations(actor: &Actor) -> Vec<Uuid> {
    let set: BTreeSet<Uuid> = actor
        .organization_roles
        .iter()
        .filter(|role| position_capability(&role.position).intersects(Capability::ORG_OFFICERS))
        .map(|role| role.organization_id.uuid())
        .collect();
    set.into_iter().collect()
}
