//! The string→bit role vocabulary.
//!
//! Role assignments are stored as strings by external collaborators;
//! this module owns the two immutable lookup tables that translate them
//! into capability bits. The tables are built once at first use and
//! never mutated.
//!
//! Lookups are case-sensitive. An unknown string maps to the empty mask:
//! it neither grants nor errors. That fail-closed degradation is the
//! contract — the stored vocabulary may grow ahead of a deployed engine,
//! and a new role name must simply grant nothing until the engine is
//! rebuilt in lock-step.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::capability::Capability;

lazy_static! {
    /// Organization and project position names → bit.
    static ref POSITION_BITS: HashMap<&'static str, Capability> = {
        let mut m = HashMap::new();
        m.insert("lear", Capability::LEAR);
        m.insert("lsign", Capability::LSIGNS);
        m.insert("leaa", Capability::LEAAS);
        m.insert("member", Capability::MEMBERS);
        m.insert("pm", Capability::PM);
        m.insert("paco", Capability::PACO);
        m.insert("plsign", Capability::PLSIGN);
        m.insert("tama", Capability::TAMA);
        m.insert("teme", Capability::TEME);
        m
    };

    /// Country-level role names → bit.
    static ref COUNTRY_ROLE_BITS: HashMap<&'static str, Capability> = {
        let mut m = HashMap::new();
        m.insert("portfolio_director", Capability::PD);
        m.insert("fund_manager", Capability::FM);
        m.insert("data_protection_officer", Capability::DPO);
        m.insert("country_admin", Capability::CA);
        m.insert("investor", Capability::INVESTOR);
        m
    };
}

/// The bit granted by an organization or project position name.
/// Unknown names grant nothing.
pub fn position_capability(position: &str) -> Capability {
    POSITION_BITS
        .get(position)
        .copied()
        .unwrap_or(Capability::empty())
}

/// The bit granted by a country-level role name.
/// Unknown names grant nothing.
pub fn country_role_capability(role: &str) -> Capability {
    COUNTRY_ROLE_BITS
        .get(role)
        .copied()
        .unwrap_or(Capability::empty())
}
