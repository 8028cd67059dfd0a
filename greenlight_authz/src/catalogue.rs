//! The action catalogue.
//!
//! A fixed, versioned table of named permissions. Every guarded
//! operation on the platform is one constant here: its mask is the set
//! of primitive bits any one of which permits the operation.
//!
//! The table is a DAG of const unions. Base groups are declared first;
//! composites reference previously declared actions, so widening a base
//! automatically propagates to everything defined in terms of it.
//! Changing a permission therefore requires a new build — no admin API
//! mutates this table at runtime.
//!
//! [`by_name`] supports the transport layer's dynamic lookup;
//! [`validate_catalogue`] runs at process start and fails fast on
//! programming errors (duplicate names, empty masks, bit reuse).

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::capability::{Action, Capability as C};

// ---------------------------------------------------------------------
// Base groups. Everything below composes from these.
// ---------------------------------------------------------------------

/// Platform staff: superuser, platform fund manager, admin network manager.
pub const ADMINS: Action = Action::of(C::SUPERUSER.union(C::PFM).union(C::ANM));

/// Platform staff plus the jurisdiction's country administrator.
pub const COUNTRY_ADMINS: Action = ADMINS.with(C::CA);

/// Country-level money roles: fund manager and portfolio director.
pub const FUNDERS: Action = Action::of(C::FM.union(C::PD));

// ---------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------

pub const GET_USER: Action = COUNTRY_ADMINS.with(C::SELF.union(C::DPO));
pub const LIST_USERS: Action = COUNTRY_ADMINS;
pub const UPDATE_USER: Action = ADMINS.with(C::SELF);
pub const DELETE_USER: Action = ADMINS.with(C::SELF);
pub const VALIDATE_USER: Action = COUNTRY_ADMINS;
pub const DECLINE_USER: Action = COUNTRY_ADMINS;
pub const GET_USER_ROLES: Action = COUNTRY_ADMINS.with(C::SELF);
pub const ASSIGN_COUNTRY_ROLE: Action = ADMINS;
pub const REVOKE_COUNTRY_ROLE: Action = ADMINS;
pub const CHANGE_PASSWORD: Action = Action::of(C::SELF);
pub const RESEND_ACTIVATION: Action = ADMINS.with(C::SELF);
pub const REPORT_USERS: Action = COUNTRY_ADMINS.with(C::PD);

// ---------------------------------------------------------------------
// Organizations
// ---------------------------------------------------------------------

pub const CREATE_ORGANIZATION: Action = Action::of(C::VALID);
pub const GET_ORGANIZATION: Action = COUNTRY_ADMINS.with(C::ORG_ALL.union(C::FM).union(C::PD));
pub const LIST_ORGANIZATIONS: Action = Action::of(C::VALID);
pub const UPDATE_ORGANIZATION: Action = ADMINS.with(C::LEAR.union(C::LEAAS));
pub const DELETE_ORGANIZATION: Action = ADMINS.with(C::LEAR);
pub const VALIDATE_ORGANIZATION: Action = COUNTRY_ADMINS;
pub const DECLINE_ORGANIZATION: Action = COUNTRY_ADMINS;
pub const ASSIGN_LEAR: Action = ADMINS.with(C::LEAR);
pub const ASSIGN_ORGANIZATION_ROLE: Action = ADMINS.with(C::LEAR.union(C::LEAAS));
pub const REVOKE_ORGANIZATION_ROLE: Action = ADMINS.with(C::LEAR.union(C::LEAAS));
pub const GET_ORGANIZATION_MEMBERS: Action = COUNTRY_ADMINS.with(C::ORG_ALL);
pub const REPORT_ORGANIZATIONS: Action = COUNTRY_ADMINS.or(FUNDERS);
pub const UPLOAD_ORGANIZATION_DOCUMENT: Action = ADMINS.with(C::ORG_OFFICERS);
pub const GET_ORGANIZATION_DOCUMENTS: Action = GET_ORGANIZATION;
pub const REQUEST_ORGANIZATION_MEMBERSHIP: Action = Action::of(C::VALID);
pub const APPROVE_ORGANIZATION_MEMBERSHIP: Action = ADMINS.with(C::LEAR.union(C::LEAAS));

// ---------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------

pub const CREATE_ASSET: Action = ADMINS.with(C::VALID);
pub const GET_ASSET: Action = COUNTRY_ADMINS.with(C::ORG_ALL.union(C::FM).union(C::PD));
pub const LIST_ASSETS: Action = Action::of(C::VALID);
pub const UPDATE_ASSET: Action = COUNTRY_ADMINS.with(C::ORG_OFFICERS);
pub const DELETE_ASSET: Action = ADMINS.with(C::LEAR);
pub const VALIDATE_ASSET: Action = COUNTRY_ADMINS;
pub const DECLINE_ASSET: Action = COUNTRY_ADMINS;
pub const REPORT_ASSETS: Action = COUNTRY_ADMINS.or(FUNDERS);
pub const UPLOAD_ASSET_DOCUMENT: Action = COUNTRY_ADMINS.with(C::ORG_OFFICERS);
pub const GET_ASSET_DOCUMENTS: Action = GET_ASSET.with(C::DPO);
pub const TRANSFER_ASSET_OWNERSHIP: Action = ADMINS.with(C::LEAR);
pub const CLAIM_ASSET_RESIDENCY: Action = Action::of(C::VALID);
pub const APPROVE_ASSET_RESIDENCY: Action = COUNTRY_ADMINS.with(C::LEAR.union(C::LEAAS));
pub const GET_ASSET_ENERGY_DATA: Action = GET_ASSET.with(C::PROJECT_TEAM);

// ---------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------

pub const CREATE_PROJECT: Action = COUNTRY_ADMINS.with(C::LEAR.union(C::LEAAS));
pub const GET_PROJECT: Action =
    COUNTRY_ADMINS.with(C::PROJECT_TEAM.union(C::ORG_OFFICERS).union(C::FM).union(C::PD));
pub const LIST_PROJECTS: Action = Action::of(C::VALID);
pub const UPDATE_PROJECT: Action = COUNTRY_ADMINS.with(C::PROJECT_LEADS);
pub const DELETE_PROJECT: Action = ADMINS.with(C::PM);
pub const VALIDATE_PROJECT: Action = COUNTRY_ADMINS;
pub const DECLINE_PROJECT: Action = COUNTRY_ADMINS;
pub const ASSIGN_PROJECT_ROLE: Action = COUNTRY_ADMINS.with(C::PM);
pub const REVOKE_PROJECT_ROLE: Action = COUNTRY_ADMINS.with(C::PM);
pub const REPORT_PROJECTS: Action = COUNTRY_ADMINS.or(FUNDERS);
pub const COMMENT_PROJECT: Action = GET_PROJECT;
pub const UPLOAD_PROJECT_DOCUMENT: Action = COUNTRY_ADMINS.with(C::PROJECT_TEAM);
pub const GET_PROJECT_DOCUMENTS: Action = GET_PROJECT;
pub const GET_WORK_PHASE: Action = GET_PROJECT;
pub const UPDATE_WORK_PHASE: Action = COUNTRY_ADMINS.with(C::PROJECT_LEADS.union(C::TAMA));
pub const REVIEW_WORK_PHASE: Action = COUNTRY_ADMINS.with(C::TAMA);
pub const APPROVE_WORK_PHASE: Action = COUNTRY_ADMINS;
pub const GET_MONITORING_PHASE: Action = GET_PROJECT;
pub const UPDATE_MONITORING_PHASE: Action = COUNTRY_ADMINS.with(C::PROJECT_LEADS.union(C::TEME));
pub const REVIEW_MONITORING_PHASE: Action = COUNTRY_ADMINS.with(C::TEME);
pub const APPROVE_MONITORING_PHASE: Action = COUNTRY_ADMINS;
pub const ADVANCE_PROJECT_PHASE: Action = ADMINS.with(C::PM);
pub const GET_PROJECT_MILESTONES: Action = GET_PROJECT;
pub const UPDATE_PROJECT_MILESTONES: Action = COUNTRY_ADMINS.with(C::PROJECT_LEADS);

// ---------------------------------------------------------------------
// Meetings
// ---------------------------------------------------------------------

pub const CREATE_MEETING: Action = COUNTRY_ADMINS.with(C::PROJECT_TEAM.union(C::ORG_OFFICERS));
pub const GET_MEETING: Action = GET_PROJECT;
pub const LIST_MEETINGS: Action = Action::of(C::VALID);
pub const UPDATE_MEETING: Action = COUNTRY_ADMINS.with(C::PROJECT_LEADS);
pub const DELETE_MEETING: Action = COUNTRY_ADMINS.with(C::PM);
pub const CONFIRM_MEETING: Action = COUNTRY_ADMINS.with(C::PROJECT_TEAM);

// ---------------------------------------------------------------------
// Contracts
// ---------------------------------------------------------------------

pub const GET_CONTRACT: Action =
    COUNTRY_ADMINS.with(C::PROJECT_TEAM.union(C::ORG_OFFICERS).union(C::FM));
pub const UPDATE_CONTRACT: Action = COUNTRY_ADMINS.with(C::PROJECT_LEADS);
pub const DOWNLOAD_CONTRACT: Action = GET_CONTRACT;
pub const SIGN_CONTRACT: Action = Action::of(C::PLSIGN.union(C::LSIGNS));
pub const REGENERATE_CONTRACT: Action = ADMINS.with(C::PM);
pub const GET_CONTRACT_ATTACHMENTS: Action = GET_CONTRACT;
pub const UPLOAD_CONTRACT_ATTACHMENT: Action =
    COUNTRY_ADMINS.with(C::PROJECT_LEADS.union(C::PLSIGN));
pub const APPROVE_CONTRACT: Action = COUNTRY_ADMINS.with(C::FM);
pub const TERMINATE_CONTRACT: Action = ADMINS.with(C::LEAR);
pub const GET_CONTRACT_HISTORY: Action = GET_CONTRACT;

// ---------------------------------------------------------------------
// Forfaiting fund
// ---------------------------------------------------------------------

pub const CREATE_FORFAITING_APPLICATION: Action = ADMINS.with(C::PM.union(C::LEAR));
pub const GET_FORFAITING_APPLICATION: Action =
    COUNTRY_ADMINS.with(C::FM.union(C::PM).union(C::LEAR).union(C::PLSIGN));
pub const LIST_FORFAITING_APPLICATIONS: Action = COUNTRY_ADMINS.with(C::FM);
pub const UPDATE_FORFAITING_APPLICATION: Action = ADMINS.with(C::FM.union(C::PM));
pub const REVIEW_FORFAITING_APPLICATION: Action = ADMINS.with(C::FM);
pub const ACCEPT_FORFAITING_APPLICATION: Action = ADMINS.with(C::FM);
pub const REJECT_FORFAITING_APPLICATION: Action = ADMINS.with(C::FM);
pub const CREATE_FORFAITING_PAYMENT: Action = ADMINS.with(C::FM);
pub const GET_FORFAITING_PAYMENT: Action = ADMINS.with(C::FM.union(C::PM).union(C::LEAR));
pub const UPDATE_FORFAITING_PAYMENT: Action = ADMINS.with(C::FM);
pub const DELETE_FORFAITING_PAYMENT: Action = ADMINS;
pub const GET_FUND_OVERVIEW: Action = ADMINS.or(FUNDERS);

// ---------------------------------------------------------------------
// Reports and portfolio
// ---------------------------------------------------------------------

pub const GET_COUNTRY_REPORT: Action = COUNTRY_ADMINS.or(FUNDERS);
pub const EXPORT_COUNTRY_REPORT: Action = COUNTRY_ADMINS.with(C::PD);
pub const GET_PORTFOLIO: Action = ADMINS.with(C::PD);
pub const EXPORT_PORTFOLIO: Action = ADMINS.with(C::PD);
pub const GET_ENERGY_SAVINGS_REPORT: Action = COUNTRY_ADMINS.or(FUNDERS).with(C::INVESTOR);
pub const GET_INVESTMENT_OVERVIEW: Action = ADMINS.or(FUNDERS).with(C::INVESTOR);
pub const GET_PUBLIC_STATISTICS: Action = Action::of(C::LOGGED);
pub const GET_KPI_DASHBOARD: Action = COUNTRY_ADMINS.or(FUNDERS);

// ---------------------------------------------------------------------
// Country and global settings
// ---------------------------------------------------------------------

pub const GET_GLOBAL_SETTINGS: Action = Action::of(C::LOGGED);
pub const UPDATE_GLOBAL_SETTINGS: Action = ADMINS;
pub const GET_COUNTRY_SETTINGS: Action = Action::of(C::LOGGED);
pub const UPDATE_COUNTRY_SETTINGS: Action = COUNTRY_ADMINS;
pub const GET_FEATURE_FLAGS: Action = ADMINS;
pub const UPDATE_FEATURE_FLAGS: Action = Action::of(C::SUPERUSER);

// ---------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------

pub const LIST_NOTIFICATIONS: Action = Action::of(C::SELF);
pub const MARK_NOTIFICATION_SEEN: Action = Action::of(C::SELF);
pub const DELETE_NOTIFICATION: Action = Action::of(C::SELF);
pub const BROADCAST_ANNOUNCEMENT: Action = COUNTRY_ADMINS;

// ---------------------------------------------------------------------
// Data protection
// ---------------------------------------------------------------------

pub const EXPORT_USER_DATA: Action = Action::of(C::SELF.union(C::DPO));
pub const ERASE_USER_DATA: Action = Action::of(C::SELF.union(C::DPO));
pub const GET_DATA_PROTECTION_REPORT: Action = ADMINS.with(C::DPO);
pub const GET_CONSENT_RECORDS: Action = Action::of(C::SELF.union(C::DPO));
pub const UPDATE_CONSENT: Action = Action::of(C::SELF);
pub const REVIEW_ERASURE_REQUEST: Action = ADMINS.with(C::DPO);

// ---------------------------------------------------------------------
// Platform administration
// ---------------------------------------------------------------------

pub const IMPERSONATE_USER: Action = Action::of(C::SUPERUSER);
pub const MANAGE_PLATFORM_USERS: Action = Action::of(C::SUPERUSER.union(C::PFM));
pub const MANAGE_NETWORK_ADMINS: Action = Action::of(C::SUPERUSER.union(C::ANM));
pub const GET_PLATFORM_OVERVIEW: Action = ADMINS;
pub const REBUILD_SEARCH_INDEX: Action = Action::of(C::SUPERUSER.union(C::ANM));
pub const MANAGE_MAINTENANCE_MODE: Action = Action::of(C::SUPERUSER.union(C::ANM));

// ---------------------------------------------------------------------
// Training and feedback
// ---------------------------------------------------------------------

pub const CREATE_FEEDBACK: Action = Action::of(C::LOGGED);
pub const GET_FEEDBACK: Action = ADMINS;
pub const LIST_TRAINING_MATERIALS: Action = Action::of(C::LOGGED);
pub const UPLOAD_TRAINING_MATERIAL: Action = COUNTRY_ADMINS;
pub const DELETE_TRAINING_MATERIAL: Action = COUNTRY_ADMINS;
pub const GET_ONBOARDING_GUIDE: Action = Action::of(C::LOGGED);

/// The full named catalogue, in declaration order. The transport layer
/// resolves permission names against this table; it is the versioned
/// artifact referred to by the deployment contract.
pub const CATALOGUE: &[(&str, Action)] = &[
    // users
    ("get_user", GET_USER),
    ("list_users", LIST_USERS),
    ("update_user", UPDATE_USER),
    ("delete_user", DELETE_USER),
    ("validate_user", VALIDATE_USER),
    ("decline_user", DECLINE_USER),
    ("get_user_roles", GET_USER_ROLES),
    ("assign_country_role", ASSIGN_COUNTRY_ROLE),
    ("revoke_country_role", REVOKE_COUNTRY_ROLE),
    ("change_password", CHANGE_PASSWORD),
    ("resend_activation", RESEND_ACTIVATION),
    ("report_users", REPORT_USERS),
    // organizations
    ("create_organization", CREATE_ORGANIZATION),
    ("get_organization", GET_ORGANIZATION),
    ("list_organizations", LIST_ORGANIZATIONS),
    ("update_organization", UPDATE_ORGANIZATION),
    ("delete_organization", DELETE_ORGANIZATION),
    ("validate_organization", VALIDATE_ORGANIZATION),
    ("decline_organization", DECLINE_ORGANIZATION),
    ("assign_lear", ASSIGN_LEAR),
    ("assign_organization_role", ASSIGN_ORGANIZATION_ROLE),
    ("revoke_organization_role", REVOKE_ORGANIZATION_ROLE),
    ("get_organization_members", GET_ORGANIZATION_MEMBERS),
    ("report_organizations", REPORT_ORGANIZATIONS),
    ("upload_organization_document", UPLOAD_ORGANIZATION_DOCUMENT),
    ("get_organization_documents", GET_ORGANIZATION_DOCUMENTS),
    (
        "request_organization_membership",
        REQUEST_ORGANIZATION_MEMBERSHIP,
    ),
    (
        "approve_organization_membership",
        APPROVE_ORGANIZATION_MEMBERSHIP,
    ),
    // assets
    ("create_asset", CREATE_ASSET),
    ("get_asset", GET_ASSET),
    ("list_assets", LIST_ASSETS),
    ("update_asset", UPDATE_ASSET),
    ("delete_asset", DELETE_ASSET),
    ("validate_asset", VALIDATE_ASSET),
    ("decline_asset", DECLINE_ASSET),
    ("report_assets", REPORT_ASSETS),
    ("upload_asset_document", UPLOAD_ASSET_DOCUMENT),
    ("get_asset_documents", GET_ASSET_DOCUMENTS),
    ("transfer_asset_ownership", TRANSFER_ASSET_OWNERSHIP),
    ("claim_asset_residency", CLAIM_ASSET_RESIDENCY),
    ("approve_asset_residency", APPROVE_ASSET_RESIDENCY),
    ("get_asset_energy_data", GET_ASSET_ENERGY_DATA),
    // projects
    ("create_project", CREATE_PROJECT),
    ("get_project", GET_PROJECT),
    ("list_projects", LIST_PROJECTS),
    ("update_project", UPDATE_PROJECT),
    ("delete_project", DELETE_PROJECT),
    ("validate_project", VALIDATE_PROJECT),
    ("decline_project", DECLINE_PROJECT),
    ("assign_project_role", ASSIGN_PROJECT_ROLE),
    ("revoke_project_role", REVOKE_PROJECT_ROLE),
    ("report_projects", REPORT_PROJECTS),
    ("comment_project", COMMENT_PROJECT),
    ("upload_project_document", UPLOAD_PROJECT_DOCUMENT),
    ("get_project_documents", GET_PROJECT_DOCUMENTS),
    ("get_work_phase", GET_WORK_PHASE),
    ("update_work_phase", UPDATE_WORK_PHASE),
    ("review_work_phase", REVIEW_WORK_PHASE),
    ("approve_work_phase", APPROVE_WORK_PHASE),
    ("get_monitoring_phase", GET_MONITORING_PHASE),
    ("update_monitoring_phase", UPDATE_MONITORING_PHASE),
    ("review_monitoring_phase", REVIEW_MONITORING_PHASE),
    ("approve_monitoring_phase", APPROVE_MONITORING_PHASE),
    ("advance_project_phase", ADVANCE_PROJECT_PHASE),
    ("get_project_milestones", GET_PROJECT_MILESTONES),
    ("update_project_milestones", UPDATE_PROJECT_MILESTONES),
    // meetings
    ("create_meeting", CREATE_MEETING),
    ("get_meeting", GET_MEETING),
    ("list_meetings", LIST_MEETINGS),
    ("update_meeting", UPDATE_MEETING),
    ("delete_meeting", DELETE_MEETING),
    ("confirm_meeting", CONFIRM_MEETING),
    // contracts
    ("get_contract", GET_CONTRACT),
    ("update_contract", UPDATE_CONTRACT),
    ("download_contract", DOWNLOAD_CONTRACT),
    ("sign_contract", SIGN_CONTRACT),
    ("regenerate_contract", REGENERATE_CONTRACT),
    ("get_contract_attachments", GET_CONTRACT_ATTACHMENTS),
    ("upload_contract_attachment", UPLOAD_CONTRACT_ATTACHMENT),
    ("approve_contract", APPROVE_CONTRACT),
    ("terminate_contract", TERMINATE_CONTRACT),
    ("get_contract_history", GET_CONTRACT_HISTORY),
    // forfaiting
    (
        "create_forfaiting_application",
        CREATE_FORFAITING_APPLICATION,
    ),
    ("get_forfaiting_application", GET_FORFAITING_APPLICATION),
    ("list_forfaiting_applications", LIST_FORFAITING_APPLICATIONS),
    (
        "update_forfaiting_application",
        UPDATE_FORFAITING_APPLICATION,
    ),
    (
        "review_forfaiting_application",
        REVIEW_FORFAITING_APPLICATION,
    ),
    (
        "accept_forfaiting_application",
        ACCEPT_FORFAITING_APPLICATION,
    ),
    (
        "reject_forfaiting_application",
        REJECT_FORFAITING_APPLICATION,
    ),
    ("create_forfaiting_payment", CREATE_FORFAITING_PAYMENT),
    ("get_forfaiting_payment", GET_FORFAITING_PAYMENT),
    ("update_forfaiting_payment", UPDATE_FORFAITING_PAYMENT),
    ("delete_forfaiting_payment", DELETE_FORFAITING_PAYMENT),
    ("get_fund_overview", GET_FUND_OVERVIEW),
    // reports and portfolio
    ("get_country_report", GET_COUNTRY_REPORT),
    ("export_country_report", EXPORT_COUNTRY_REPORT),
    ("get_portfolio", GET_PORTFOLIO),
    ("export_portfolio", EXPORT_PORTFOLIO),
    ("get_energy_savings_report", GET_ENERGY_SAVINGS_REPORT),
    ("get_investment_overview", GET_INVESTMENT_OVERVIEW),
    ("get_public_statistics", GET_PUBLIC_STATISTICS),
    ("get_kpi_dashboard", GET_KPI_DASHBOARD),
    // settings
    ("get_global_settings", GET_GLOBAL_SETTINGS),
    ("update_global_settings", UPDATE_GLOBAL_SETTINGS),
    ("get_country_settings", GET_COUNTRY_SETTINGS),
    ("update_country_settings", UPDATE_COUNTRY_SETTINGS),
    ("get_feature_flags", GET_FEATURE_FLAGS),
    ("update_feature_flags", UPDATE_FEATURE_FLAGS),
    // notifications
    ("list_notifications", LIST_NOTIFICATIONS),
    ("mark_notification_seen", MARK_NOTIFICATION_SEEN),
    ("delete_notification", DELETE_NOTIFICATION),
    ("broadcast_announcement", BROADCAST_ANNOUNCEMENT),
    // data protection
    ("export_user_data", EXPORT_USER_DATA),
    ("erase_user_data", ERASE_USER_DATA),
    ("get_data_protection_report", GET_DATA_PROTECTION_REPORT),
    ("get_consent_records", GET_CONSENT_RECORDS),
    ("update_consent", UPDATE_CONSENT),
    ("review_erasure_request", REVIEW_ERASURE_REQUEST),
    // platform administration
    ("impersonate_user", IMPERSONATE_USER),
    ("manage_platform_users", MANAGE_PLATFORM_USERS),
    ("manage_network_admins", MANAGE_NETWORK_ADMINS),
    ("get_platform_overview", GET_PLATFORM_OVERVIEW),
    ("rebuild_search_index", REBUILD_SEARCH_INDEX),
    ("manage_maintenance_mode", MANAGE_MAINTENANCE_MODE),
    // training and feedback
    ("create_feedback", CREATE_FEEDBACK),
    ("get_feedback", GET_FEEDBACK),
    ("list_training_materials", LIST_TRAINING_MATERIALS),
    ("upload_training_material", UPLOAD_TRAINING_MATERIAL),
    ("delete_training_material", DELETE_TRAINING_MATERIAL),
    ("get_onboarding_guide", GET_ONBOARDING_GUIDE),
];

lazy_static! {
    static ref BY_NAME: HashMap<&'static str, Action> = CATALOGUE.iter().copied().collect();
}

/// Look up a named action. `None` here is a programming error in the
/// caller (a misspelled permission name), not a per-request condition;
/// transport layers resolve names once during their own initialization.
pub fn by_name(name: &str) -> Option<Action> {
    BY_NAME.get(name).copied()
}

/// Startup-time invariant check over the catalogue.
///
/// Verifies that the primitive bit space holds exactly the 20 declared
/// bits with no index reused, that no action is empty (an empty mask
/// could never be granted and denotes a broken declaration), and that
/// catalogue names are unique. Call once during process initialization
/// and abort on `Err`.
pub fn validate_catalogue() -> greenlight_core::Result<()> {
    use greenlight_core::AuthzError;

    let primitive_bits = crate::capability::Capability::all().bits();
    if primitive_bits.count_ones() != 20 {
        return Err(AuthzError::InvalidCatalogue(format!(
            "expected 20 primitive bits, found {}",
            primitive_bits.count_ones()
        )));
    }

    let mut seen = std::collections::HashSet::new();
    for (name, action) in CATALOGUE {
        if !seen.insert(*name) {
            return Err(AuthzError::InvalidCatalogue(format!(
                "duplicate name: {name}"
            )));
        }
        if action.mask().is_empty() {
            return Err(AuthzError::InvalidCatalogue(format!(
                "action grants nothing: {name}"
            )));
        }
    }
    Ok(())
}
