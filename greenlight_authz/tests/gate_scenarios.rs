//! End-to-end gate scenarios across the deriver, vocabulary, and
//! catalogue.

use greenlight_authz::{catalogue, Capability, RequestContext};
use greenlight_core::{Actor, OrganizationId, UserId};
use uuid::Uuid;

#[test]
fn lear_may_update_but_not_validate_their_organization() {
    let org = OrganizationId::new();
    let other_org = OrganizationId::new();
    let ctx = RequestContext::authenticated(
        Actor::new(UserId::new()).with_organization_role(org, "lear"),
    );

    assert!(ctx.can(catalogue::UPDATE_ORGANIZATION, org.uuid(), ""));
    assert!(!ctx.can(catalogue::UPDATE_ORGANIZATION, other_org.uuid(), ""));
    assert!(!ctx.can(catalogue::VALIDATE_ORGANIZATION, org.uuid(), ""));
}

#[test]
fn country_admin_is_scoped_to_their_jurisdiction() {
    let ctx = RequestContext::authenticated(
        Actor::new(UserId::new()).with_country_role("Latvia", "country_admin"),
    );

    assert!(ctx.can(catalogue::GET_ASSET, Uuid::nil(), "Latvia"));
    assert!(!ctx.can(catalogue::GET_ASSET, Uuid::nil(), "Bulgaria"));
}

#[test]
fn absent_actor_is_denied_for_every_catalogue_entry() {
    let ctx = RequestContext::anonymous();
    for (name, action) in catalogue::CATALOGUE {
        assert!(
            !ctx.can(*action, Uuid::new_v4(), "Latvia"),
            "anonymous context passed {name}"
        );
    }
}

#[test]
fn bogus_position_neither_grants_nor_errors() {
    let org = OrganizationId::new();
    let ctx = RequestContext::authenticated(
        Actor::new(UserId::new()).with_organization_role(org, "bogus"),
    );

    assert!(!ctx.can(catalogue::UPDATE_ORGANIZATION, org.uuid(), ""));
    // LOGGED still applies: the row degraded, the actor did not.
    assert!(ctx.can(catalogue::GET_GLOBAL_SETTINGS, org.uuid(), ""));
}

#[test]
fn duplicate_role_rows_do_not_change_decisions() {
    let org = OrganizationId::new();
    let base = Actor::new(UserId::new()).with_organization_role(org, "lear");
    let mut duplicated = base.clone();
    duplicated
        .organization_roles
        .push(duplicated.organization_roles[0].clone());

    let a = RequestContext::authenticated(base);
    let b = RequestContext::authenticated(duplicated);
    for (_, action) in catalogue::CATALOGUE {
        assert_eq!(
            a.can(*action, org.uuid(), "Latvia"),
            b.can(*action, org.uuid(), "Latvia")
        );
    }
}

#[test]
fn granting_more_roles_is_monotone() {
    let org = OrganizationId::new();
    let small = Actor::new(UserId::new()).with_organization_role(org, "lsign");
    let big = small
        .clone()
        .with_country_role("Latvia", "fund_manager")
        .with_country_role("Latvia", "country_admin")
        .with_organization_role(org, "lear");

    let small_ctx = RequestContext::authenticated(small);
    let big_ctx = RequestContext::authenticated(big);
    for (name, action) in catalogue::CATALOGUE {
        if small_ctx.can(*action, org.uuid(), "Latvia") {
            assert!(
                big_ctx.can(*action, org.uuid(), "Latvia"),
                "adding roles revoked {name}"
            );
        }
    }
}

#[test]
fn self_grant_holds_regardless_of_other_roles() {
    let actor = Actor::new(UserId::new())
        .with_country_role("Bulgaria", "investor")
        .with_organization_role(OrganizationId::new(), "member");
    let id = actor.id.uuid();
    let ctx = RequestContext::authenticated(actor);

    for (name, action) in catalogue::CATALOGUE {
        if action.mask().contains(Capability::SELF) {
            assert!(ctx.can(*action, id, ""), "self grant failed for {name}");
        }
    }
}

#[test]
fn signatories_sign_through_either_seat() {
    let org = OrganizationId::new();
    let project = greenlight_core::ProjectId::new();

    let org_signer = RequestContext::authenticated(
        Actor::new(UserId::new()).with_organization_role(org, "lsign"),
    );
    let project_signer = RequestContext::authenticated(
        Actor::new(UserId::new()).with_project_role(project, "plsign"),
    );

    assert!(org_signer.can(catalogue::SIGN_CONTRACT, org.uuid(), ""));
    assert!(project_signer.can(catalogue::SIGN_CONTRACT, project.uuid(), ""));
    // Against the wrong target neither seat grants anything.
    assert!(!org_signer.can(catalogue::SIGN_CONTRACT, project.uuid(), ""));
}
