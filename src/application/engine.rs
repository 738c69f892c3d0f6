//! # Quote Engine
//!
//! Selection operations, wizard gating, and quote generation.
//!
//! One [`QuoteEngine`] serves exactly one browsing session: it owns the
//! selection state, recomputes the pricing snapshot eagerly after every
//! mutation, enforces the linear step progression, and produces immutable
//! [`QuoteRecord`]s. It holds no reference to any rendering surface; the UI
//! adapter drives it through the narrow operation interface and re-renders
//! from the returned snapshot.
//!
//! # Examples
//!
//! ```
//! use craft_quote::application::engine::QuoteEngine;
//! use craft_quote::domain::catalog::Catalog;
//! use craft_quote::domain::value_objects::{Money, PackageId, TermId};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::standard().unwrap());
//! let mut engine = QuoteEngine::new(catalog);
//!
//! engine.select_base(&PackageId::new("basic-website")).unwrap();
//! engine.select_contract(&TermId::new("monthly")).unwrap();
//! assert_eq!(engine.snapshot().total, Money::from_units(399));
//! ```

use crate::domain::catalog::{Catalog, DetailAttribute};
use crate::domain::entities::quote_record::QuoteRecord;
use crate::domain::entities::selection::Selection;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::services::pricing::{self, LineItem, PricingSnapshot};
use crate::domain::value_objects::{
    AddonId, OptionId, PackageId, RoundingMode, TermId, WizardStep,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Gating rule for advancing past the details step.
///
/// The step-3 completion predicate drifted across the source history, so it
/// is explicit and configurable rather than baked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetailsGating {
    /// Step 3 always passes (canonical rule set).
    #[default]
    Unconditional,
    /// Step 3 requires at least two detail attributes to be set.
    AtLeastTwo,
}

/// Minimum detail attributes under [`DetailsGating::AtLeastTwo`].
const STRICT_DETAILS_MIN: usize = 2;

/// Engine behaviour configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EngineConfig {
    /// Rounding mode for derived pricing fields.
    pub rounding: RoundingMode,
    /// Gating rule for the details step.
    pub details_gating: DetailsGating,
}

/// The interactive pricing configurator.
///
/// Single-threaded and synchronous: every mutating operation runs to
/// completion before the next one is observed, and every completed mutation
/// leaves a freshly consistent snapshot behind. Rejected operations leave
/// both the selection and the snapshot untouched.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    catalog: Arc<Catalog>,
    config: EngineConfig,
    selection: Selection,
    step: WizardStep,
    snapshot: PricingSnapshot,
}

impl QuoteEngine {
    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_config(catalog, EngineConfig::default())
    }

    /// Creates an engine with an explicit configuration.
    #[must_use]
    pub fn with_config(catalog: Arc<Catalog>, config: EngineConfig) -> Self {
        Self {
            catalog,
            config,
            selection: Selection::new(),
            step: WizardStep::default(),
            snapshot: PricingSnapshot::empty(),
        }
    }

    /// Returns the current wizard step.
    #[inline]
    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Returns the current selection state.
    #[inline]
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the pricing snapshot for the current selection.
    ///
    /// Recomputed eagerly on every mutation, so this is never stale.
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> &PricingSnapshot {
        &self.snapshot
    }

    /// Returns the `(label, price)` summary list for the current selection.
    #[must_use]
    pub fn selected_items(&self) -> Vec<LineItem> {
        pricing::line_items(&self.selection)
    }

    /// Selects the base package. Mutually exclusive selection group.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownCatalogEntry`] when the id does not
    /// resolve; the selection is left unchanged.
    pub fn select_base(&mut self, id: &PackageId) -> DomainResult<()> {
        let package = self
            .catalog
            .base_package(id)
            .ok_or_else(|| DomainError::unknown_entry("base package", id.as_str()))?
            .clone();
        debug!(package = %id, "base package selected");
        self.apply(|selection| selection.set_base(package))
    }

    /// Adds or removes an add-on. Idempotent in both directions.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownCatalogEntry`] when the id does not
    /// resolve; the selection is left unchanged.
    pub fn toggle_addon(&mut self, id: &AddonId, included: bool) -> DomainResult<()> {
        let addon = self
            .catalog
            .addon(id)
            .ok_or_else(|| DomainError::unknown_entry("add-on", id.as_str()))?
            .clone();
        debug!(addon = %id, included, "add-on toggled");
        self.apply(|selection| {
            if included {
                selection.insert_addon(addon);
            } else {
                selection.remove_addon(&addon.id);
            }
        })
    }

    /// Sets the option for a detail attribute. Last write wins.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownCatalogEntry`] when the option id is
    /// not valid for the attribute; the selection is left unchanged.
    pub fn set_detail(&mut self, attribute: DetailAttribute, id: &OptionId) -> DomainResult<()> {
        let option = self
            .catalog
            .detail_option(attribute, id)
            .ok_or_else(|| DomainError::unknown_entry(attribute.as_str(), id.as_str()))?
            .clone();
        debug!(attribute = %attribute, option = %id, "detail set");
        self.apply(|selection| selection.set_detail(attribute, option))
    }

    /// Selects the contract term. Mutually exclusive selection group.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownCatalogEntry`] when the id does not
    /// resolve; the selection is left unchanged.
    pub fn select_contract(&mut self, id: &TermId) -> DomainResult<()> {
        let term = self
            .catalog
            .contract_term(id)
            .ok_or_else(|| DomainError::unknown_entry("contract term", id.as_str()))?
            .clone();
        debug!(term = %id, "contract term selected");
        self.apply(|selection| selection.set_contract(term))
    }

    /// Moves forward one step if the current step's completion predicate
    /// holds. Navigation never mutates selection state.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidStepTransition`] when the predicate
    /// fails or the wizard is already on the final step.
    pub fn advance(&mut self) -> DomainResult<WizardStep> {
        self.check_step_complete()?;
        let next = self
            .step
            .next()
            .ok_or_else(|| DomainError::invalid_transition("already at the final step"))?;
        debug!(from = %self.step, to = %next, "advanced");
        self.step = next;
        Ok(next)
    }

    /// Moves back one step. Always succeeds except on the first step, and
    /// never touches selection state.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidStepTransition`] on the first step.
    pub fn retreat(&mut self) -> DomainResult<WizardStep> {
        let previous = self
            .step
            .previous()
            .ok_or_else(|| DomainError::invalid_transition("already at the first step"))?;
        debug!(from = %self.step, to = %previous, "retreated");
        self.step = previous;
        Ok(previous)
    }

    /// Produces an immutable quote record from the current selection.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::IncompleteSelection`] unless both a base
    /// package and a contract term are selected. The UI disables the
    /// triggering action proactively, but the invariant is guarded here
    /// regardless.
    pub fn generate_quote(&self) -> DomainResult<QuoteRecord> {
        let record = QuoteRecord::from_selection(&self.selection, self.snapshot.clone())?;
        debug!(quote = %record.id(), total = %self.snapshot.total, "quote generated");
        Ok(record)
    }

    /// Discards all selections and returns the wizard to step 1.
    pub fn reset(&mut self) {
        debug!("engine reset");
        self.selection.clear();
        self.snapshot = PricingSnapshot::empty();
        self.step = WizardStep::default();
    }

    /// Applies a selection mutation against a staged copy and commits both
    /// the mutated selection and its fresh snapshot together, so a rejected
    /// recomputation cannot leave the two out of sync.
    fn apply(&mut self, mutate: impl FnOnce(&mut Selection)) -> DomainResult<()> {
        let mut staged = self.selection.clone();
        mutate(&mut staged);
        let snapshot = pricing::compute_snapshot(&staged, self.config.rounding)?;
        self.selection = staged;
        self.snapshot = snapshot;
        Ok(())
    }

    fn check_step_complete(&self) -> DomainResult<()> {
        match self.step {
            WizardStep::ChooseBase => {
                if self.selection.base().is_none() {
                    return Err(DomainError::invalid_transition(
                        "a base package must be selected before advancing",
                    ));
                }
            }
            WizardStep::ChooseAddons => {}
            WizardStep::ChooseDetails => {
                if self.config.details_gating == DetailsGating::AtLeastTwo
                    && self.selection.details().len() < STRICT_DETAILS_MIN
                {
                    return Err(DomainError::invalid_transition(format!(
                        "at least {STRICT_DETAILS_MIN} detail attributes must be set before advancing"
                    )));
                }
            }
            WizardStep::ChooseContract => {}
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Money;

    fn engine() -> QuoteEngine {
        QuoteEngine::new(Arc::new(Catalog::standard().unwrap()))
    }

    mod selection_ops {
        use super::*;

        #[test]
        fn select_base_recomputes_snapshot() {
            let mut engine = engine();
            engine
                .select_base(&PackageId::new("professional-website"))
                .unwrap();
            assert_eq!(engine.snapshot().base, Money::from_units(599));
            assert_eq!(engine.snapshot().subtotal, Money::from_units(599));
        }

        #[test]
        fn unknown_base_fails_loudly_and_changes_nothing() {
            let mut engine = engine();
            let before = engine.snapshot().clone();
            let result = engine.select_base(&PackageId::new("platinum-website"));
            assert!(matches!(
                result,
                Err(DomainError::UnknownCatalogEntry { kind: "base package", .. })
            ));
            assert_eq!(engine.snapshot(), &before);
            assert!(engine.selection().base().is_none());
        }

        #[test]
        fn base_selection_is_mutually_exclusive() {
            let mut engine = engine();
            engine.select_base(&PackageId::new("basic-website")).unwrap();
            engine
                .select_base(&PackageId::new("premium-website"))
                .unwrap();
            assert_eq!(
                engine.selection().base().unwrap().id,
                PackageId::new("premium-website")
            );
            assert_eq!(engine.snapshot().base, Money::from_units(799));
        }

        #[test]
        fn toggle_addon_on_then_off_restores_prices() {
            let mut engine = engine();
            engine.select_base(&PackageId::new("basic-website")).unwrap();
            let before = engine.snapshot().clone();

            engine
                .toggle_addon(&AddonId::new("ai-integration"), true)
                .unwrap();
            assert_eq!(engine.snapshot().addons, Money::from_units(299));

            engine
                .toggle_addon(&AddonId::new("ai-integration"), false)
                .unwrap();
            assert_eq!(engine.snapshot(), &before);
            assert!(engine.selection().addons().is_empty());
        }

        #[test]
        fn toggle_addon_is_idempotent() {
            let mut engine = engine();
            let id = AddonId::new("booking-system");
            engine.toggle_addon(&id, true).unwrap();
            engine.toggle_addon(&id, true).unwrap();
            assert_eq!(engine.selection().addons().len(), 1);

            engine.toggle_addon(&id, false).unwrap();
            engine.toggle_addon(&id, false).unwrap();
            assert!(engine.selection().addons().is_empty());
        }

        #[test]
        fn unknown_addon_is_rejected() {
            let mut engine = engine();
            let result = engine.toggle_addon(&AddonId::new("time-travel"), true);
            assert!(result.unwrap_err().is_unknown_entry());
        }

        #[test]
        fn set_detail_last_write_wins() {
            let mut engine = engine();
            engine
                .set_detail(DetailAttribute::CompanySize, &OptionId::new("medium"))
                .unwrap();
            engine
                .set_detail(DetailAttribute::CompanySize, &OptionId::new("large"))
                .unwrap();
            assert_eq!(engine.selection().details().len(), 1);
            assert_eq!(
                engine.snapshot().modifier,
                rust_decimal::Decimal::new(125, 2)
            );
        }

        #[test]
        fn detail_option_must_match_attribute() {
            let mut engine = engine();
            // 'priority' lives under support, not company-size.
            let result =
                engine.set_detail(DetailAttribute::CompanySize, &OptionId::new("priority"));
            assert!(matches!(
                result,
                Err(DomainError::UnknownCatalogEntry { kind: "company-size", .. })
            ));
        }

        #[test]
        fn detail_changes_ripple_through_all_derived_fields() {
            let mut engine = engine();
            engine
                .select_base(&PackageId::new("professional-website"))
                .unwrap();
            engine.select_contract(&TermId::new("annual")).unwrap();
            let before = engine.snapshot().clone();

            engine
                .set_detail(DetailAttribute::CompanySize, &OptionId::new("medium"))
                .unwrap();
            let after = engine.snapshot();
            assert!(after.subtotal > before.subtotal);
            assert!(after.discount > before.discount);
            assert!(after.total > before.total);
            assert!(after.setup > before.setup);
        }
    }

    mod wizard {
        use super::*;

        #[test]
        fn advance_from_step_one_requires_base() {
            let mut engine = engine();
            assert!(matches!(
                engine.advance(),
                Err(DomainError::InvalidStepTransition(_))
            ));
            assert_eq!(engine.step(), WizardStep::ChooseBase);

            engine.select_base(&PackageId::new("basic-website")).unwrap();
            assert_eq!(engine.advance().unwrap(), WizardStep::ChooseAddons);
        }

        #[test]
        fn addons_and_details_steps_advance_freely() {
            let mut engine = engine();
            engine.select_base(&PackageId::new("basic-website")).unwrap();
            engine.advance().unwrap();
            assert_eq!(engine.advance().unwrap(), WizardStep::ChooseDetails);
            assert_eq!(engine.advance().unwrap(), WizardStep::ChooseContract);
        }

        #[test]
        fn final_step_rejects_forward_motion() {
            let mut engine = engine();
            engine.select_base(&PackageId::new("basic-website")).unwrap();
            for _ in 0..3 {
                engine.advance().unwrap();
            }
            assert!(engine.advance().is_err());
            assert_eq!(engine.step(), WizardStep::ChooseContract);
        }

        #[test]
        fn strict_gating_requires_two_details() {
            let config = EngineConfig {
                details_gating: DetailsGating::AtLeastTwo,
                ..EngineConfig::default()
            };
            let mut engine =
                QuoteEngine::with_config(Arc::new(Catalog::standard().unwrap()), config);
            engine.select_base(&PackageId::new("basic-website")).unwrap();
            engine.advance().unwrap();
            engine.advance().unwrap();
            assert_eq!(engine.step(), WizardStep::ChooseDetails);

            assert!(engine.advance().is_err());
            engine
                .set_detail(DetailAttribute::CompanySize, &OptionId::new("small"))
                .unwrap();
            assert!(engine.advance().is_err());
            engine
                .set_detail(DetailAttribute::Locations, &OptionId::new("single"))
                .unwrap();
            assert_eq!(engine.advance().unwrap(), WizardStep::ChooseContract);
        }

        #[test]
        fn retreat_never_touches_selections() {
            let mut engine = engine();
            engine.select_base(&PackageId::new("premium-website")).unwrap();
            engine
                .toggle_addon(&AddonId::new("multilingual"), true)
                .unwrap();
            for _ in 0..3 {
                engine.advance().unwrap();
            }
            let selection = engine.selection().clone();
            let snapshot = engine.snapshot().clone();

            for _ in 0..3 {
                engine.retreat().unwrap();
            }
            assert_eq!(engine.step(), WizardStep::ChooseBase);
            assert_eq!(engine.selection(), &selection);
            assert_eq!(engine.snapshot(), &snapshot);
        }

        #[test]
        fn retreat_from_first_step_is_rejected() {
            let mut engine = engine();
            assert!(matches!(
                engine.retreat(),
                Err(DomainError::InvalidStepTransition(_))
            ));
        }
    }

    mod quote_generation {
        use super::*;

        #[test]
        fn requires_base_and_contract() {
            let mut engine = engine();
            assert!(matches!(
                engine.generate_quote(),
                Err(DomainError::IncompleteSelection(_))
            ));

            engine.select_base(&PackageId::new("basic-website")).unwrap();
            assert!(matches!(
                engine.generate_quote(),
                Err(DomainError::IncompleteSelection(_))
            ));

            engine.select_contract(&TermId::new("monthly")).unwrap();
            assert!(engine.generate_quote().is_ok());
        }

        #[test]
        fn record_matches_live_snapshot() {
            let mut engine = engine();
            engine
                .select_base(&PackageId::new("professional-website"))
                .unwrap();
            engine.select_contract(&TermId::new("annual")).unwrap();

            let record = engine.generate_quote().unwrap();
            assert_eq!(record.prices(), engine.snapshot());
        }

        #[test]
        fn record_survives_later_mutation() {
            let mut engine = engine();
            engine.select_base(&PackageId::new("basic-website")).unwrap();
            engine.select_contract(&TermId::new("monthly")).unwrap();
            let record = engine.generate_quote().unwrap();

            engine.select_base(&PackageId::new("premium-website")).unwrap();
            assert_eq!(record.base().monthly_price, Money::from_units(399));
        }
    }

    mod reset {
        use super::*;

        #[test]
        fn reset_returns_to_initial_state() {
            let mut engine = engine();
            engine.select_base(&PackageId::new("premium-website")).unwrap();
            engine.advance().unwrap();
            engine.reset();

            assert_eq!(engine.step(), WizardStep::ChooseBase);
            assert_eq!(engine.snapshot(), &PricingSnapshot::empty());
            assert!(engine.selection().base().is_none());
        }
    }

    mod summary {
        use super::*;

        #[test]
        fn selected_items_reflect_selection() {
            let mut engine = engine();
            engine.select_base(&PackageId::new("basic-website")).unwrap();
            engine
                .toggle_addon(&AddonId::new("whatsapp-integration"), true)
                .unwrap();
            engine.select_contract(&TermId::new("biannual")).unwrap();

            let items = engine.selected_items();
            assert_eq!(items.len(), 3);
            let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
            assert_eq!(labels, vec!["Essential Website", "WhatsApp Business", "Two Years"]);
        }
    }
}
