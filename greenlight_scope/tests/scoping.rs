//! End-to-end scoping scenarios per entity kind.

use greenlight_core::{Actor, AuthzError, OrganizationId, UserId};
use greenlight_scope::{scope, scope_or_deny, Param, ASSET, ORGANIZATION, PROJECT};

#[test]
fn superuser_sees_everything_unchanged() {
    let mut actor = Actor::new(UserId::new());
    actor.superuser = true;

    for descriptor in [&ASSET, &ORGANIZATION, &PROJECT] {
        let base = descriptor.base_query();
        let (scoped, ok) = scope(descriptor, base.clone(), &actor);
        assert!(ok);
        assert_eq!(scoped, base);
    }
}

#[test]
fn country_admin_sees_their_countries() {
    let actor = Actor::new(UserId::new())
        .with_country_role("Latvia", "country_admin")
        .with_country_role("Bulgaria", "fund_manager");

    let scoped = scope_or_deny(&ASSET, ASSET.base_query(), &actor).unwrap();
    let (sql, params) = scoped.to_sql();
    assert_eq!(
        sql,
        "SELECT assets.* FROM assets WHERE (assets.country IN ($1, $2))"
    );
    assert_eq!(
        params,
        vec![Param::Text("Bulgaria".into()), Param::Text("Latvia".into())]
    );
}

#[test]
fn organization_officer_sees_their_organization_rows() {
    let org = OrganizationId::new();
    let actor = Actor::new(UserId::new()).with_organization_role(org, "lear");

    let scoped = scope_or_deny(&ORGANIZATION, ORGANIZATION.base_query(), &actor).unwrap();
    let (sql, params) = scoped.to_sql();
    assert_eq!(
        sql,
        "SELECT organizations.* FROM organizations WHERE (organizations.id IN ($1))"
    );
    assert_eq!(params, vec![Param::Uuid(org.uuid())]);

    let scoped = scope_or_deny(&ASSET, ASSET.base_query(), &actor).unwrap();
    let (sql, _) = scoped.to_sql();
    assert_eq!(
        sql,
        "SELECT assets.* FROM assets WHERE (assets.owner_id IN ($1))"
    );
}

#[test]
fn project_scoping_covers_owner_consortium_and_esco() {
    let org = OrganizationId::new();
    let actor = Actor::new(UserId::new()).with_organization_role(org, "lsign");

    let scoped = scope_or_deny(&PROJECT, PROJECT.base_query(), &actor).unwrap();
    let (sql, params) = scoped.to_sql();
    assert_eq!(
        sql,
        "SELECT projects.* FROM projects \
         JOIN assets ON projects.asset = assets.id \
         WHERE (projects.owner IN ($1)) \
         OR (projects.consortium_orgs && ARRAY[$2]::uuid[]) \
         OR (assets.esco_id IN ($3))"
    );
    assert_eq!(params, vec![
        Param::Uuid(org.uuid()),
        Param::Uuid(org.uuid()),
        Param::Uuid(org.uuid()),
    ]);
}

#[test]
fn country_and_ownership_predicates_combine() {
    let org = OrganizationId::new();
    let actor = Actor::new(UserId::new())
        .with_country_role("Latvia", "country_admin")
        .with_organization_role(org, "leaa");

    let scoped = scope_or_deny(&ASSET, ASSET.base_query(), &actor).unwrap();
    let (sql, _) = scoped.to_sql();
    assert_eq!(
        sql,
        "SELECT assets.* FROM assets \
         WHERE (assets.country IN ($1)) OR (assets.owner_id IN ($2))"
    );
}

#[test]
fn duplicate_org_rows_produce_one_predicate_value() {
    let org = OrganizationId::new();
    let actor = Actor::new(UserId::new())
        .with_organization_role(org, "lear")
        .with_organization_role(org, "lsign");

    let scoped = scope_or_deny(&ORGANIZATION, ORGANIZATION.base_query(), &actor).unwrap();
    let (_, params) = scoped.to_sql();
    assert_eq!(params.len(), 1);
}

#[test]
fn no_qualifying_roles_is_unauthorized_not_empty() {
    // Member position, portfolio_director, and an unknown role all fail
    // to qualify; the base query must never reach the caller.
    let actor = Actor::new(UserId::new())
        .with_organization_role(OrganizationId::new(), "member")
        .with_country_role("Latvia", "portfolio_director")
        .with_country_role("Latvia", "mystery_role");

    for descriptor in [&ASSET, &ORGANIZATION, &PROJECT] {
        assert_eq!(
            scope_or_deny(descriptor, descriptor.base_query(), &actor),
            Err(AuthzError::Unauthorized)
        );
    }
}
