//! The actor role deriver.
//!
//! Computes, for one (actor, target, jurisdiction) triple, the full
//! bitmask of capabilities the actor currently holds. This is a pure
//! function over the request's materialized snapshot: no I/O, no
//! caching, re-evaluated on every call.
//!
//! Every contribution ORs into the mask, so ordering is irrelevant and
//! duplicate role rows are harmless.

use greenlight_core::Actor;
use uuid::Uuid;

use crate::capability::Capability;
use crate::vocabulary::{country_role_capability, position_capability};

/// Derive the capability mask an actor holds against a target entity in
/// a jurisdiction.
///
/// Callers guarantee the actor is authenticated before invoking this;
/// the absent-actor case short-circuits in the gate and never reaches
/// here, which is why `LOGGED` is set unconditionally.
///
/// `Uuid::nil()` is a legal target for jurisdiction-only checks (global
/// settings, country-wide reports); `SELF` is then never set. An empty
/// jurisdiction matches no country role — comparison is exact string
/// equality, no wildcard.
pub fn derive_mask(actor: &Actor, target: Uuid, jurisdiction: &str) -> Capability {
    let mut mask = Capability::LOGGED;

    if actor.id.uuid() == target {
        mask |= Capability::SELF;
    }
    if actor.superuser {
        mask |= Capability::SUPERUSER;
    }
    if actor.platform_manager {
        mask |= Capability::PFM;
    }
    if actor.admin_nw_manager {
        mask |= Capability::ANM;
    }
    if actor.validation_status.is_valid() {
        mask |= Capability::VALID;
    }

    for role in &actor.project_roles {
        if role.project_id.uuid() == target {
            mask |= position_capability(&role.position);
        }
    }
    for role in &actor.organization_roles {
        if role.organization_id.uuid() == target {
            mask |= position_capability(&role.position);
        }
    }
    for role in &actor.country_roles {
        if role.country == jurisdiction && role.user_id == actor.id {
            mask |= country_role_capability(&role.role);
        }
    }

    tracing::trace!(entity = %target, jurisdiction, granted = %mask, "derived capability mask");
    mask
}
