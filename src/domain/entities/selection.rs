//! # Selection State
//!
//! The mutable configuration a single session builds up.
//!
//! A [`Selection`] holds resolved copies of the catalog entries the user has
//! picked. The engine is the only writer; it resolves ids against the
//! catalog before anything lands here, so the selection itself never fails
//! a lookup. Add-ons are keyed by id, which makes duplicates impossible by
//! construction; detail attributes hold at most one option each.

use crate::domain::catalog::{Addon, BasePackage, ContractTerm, DetailAttribute, DetailOption};
use crate::domain::value_objects::AddonId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The mutable selection state of one configurator session.
///
/// Created fresh per session, mutated exclusively through the engine's
/// selection operations, and discarded on reset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Selection {
    base: Option<BasePackage>,
    addons: BTreeMap<AddonId, Addon>,
    details: BTreeMap<DetailAttribute, DetailOption>,
    contract: Option<ContractTerm>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected base package, if any.
    #[inline]
    #[must_use]
    pub fn base(&self) -> Option<&BasePackage> {
        self.base.as_ref()
    }

    /// Returns the selected add-ons, keyed by id.
    #[inline]
    #[must_use]
    pub fn addons(&self) -> &BTreeMap<AddonId, Addon> {
        &self.addons
    }

    /// Returns the selected detail options, one per attribute.
    #[inline]
    #[must_use]
    pub fn details(&self) -> &BTreeMap<DetailAttribute, DetailOption> {
        &self.details
    }

    /// Returns the selected contract term, if any.
    #[inline]
    #[must_use]
    pub fn contract(&self) -> Option<&ContractTerm> {
        self.contract.as_ref()
    }

    /// Replaces the base package. Mutually exclusive selection group.
    pub fn set_base(&mut self, package: BasePackage) {
        self.base = Some(package);
    }

    /// Inserts an add-on. A no-op when the id is already present.
    pub fn insert_addon(&mut self, addon: Addon) {
        self.addons.entry(addon.id.clone()).or_insert(addon);
    }

    /// Removes an add-on. A no-op when the id is absent.
    pub fn remove_addon(&mut self, id: &AddonId) {
        self.addons.remove(id);
    }

    /// Returns true if the add-on is currently selected.
    #[must_use]
    pub fn has_addon(&self, id: &AddonId) -> bool {
        self.addons.contains_key(id)
    }

    /// Sets the option for a detail attribute. Last write wins.
    pub fn set_detail(&mut self, attribute: DetailAttribute, option: DetailOption) {
        self.details.insert(attribute, option);
    }

    /// Replaces the contract term. Mutually exclusive selection group.
    pub fn set_contract(&mut self, term: ContractTerm) {
        self.contract = Some(term);
    }

    /// Returns true once both mandatory selections are present.
    ///
    /// A quote record is only constructible from a ready selection.
    #[must_use]
    pub fn is_quote_ready(&self) -> bool {
        self.base.is_some() && self.contract.is_some()
    }

    /// Discards every selection, returning the session to its initial state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
