//! # Wizard Step
//!
//! Linear step position of the pricing configurator.
//!
//! The configurator walks a fixed four-step chain with no branching and no
//! skipping. This module provides the [`WizardStep`] enum plus the
//! navigation helpers used by the engine's gating logic.
//!
//! # State Machine
//!
//! ```text
//! ChooseBase → ChooseAddons → ChooseDetails → ChooseContract
//!      ←             ←              ←
//! ```
//!
//! Forward motion is gated by the engine; backward motion is always free.
//!
//! # Examples
//!
//! ```
//! use craft_quote::domain::value_objects::WizardStep;
//!
//! let step = WizardStep::ChooseBase;
//! assert_eq!(step.next(), Some(WizardStep::ChooseAddons));
//! assert_eq!(step.previous(), None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position within the four-step pricing wizard.
///
/// Steps are numbered `1..=4`; the session always starts at
/// [`ChooseBase`](Self::ChooseBase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum WizardStep {
    /// Step 1: pick exactly one base package.
    #[default]
    ChooseBase = 1,

    /// Step 2: toggle optional add-on modules.
    ChooseAddons = 2,

    /// Step 3: set detail attributes (company size, locations, support).
    ChooseDetails = 3,

    /// Step 4: pick a contract term; quote generation unlocks here.
    ChooseContract = 4,
}

impl WizardStep {
    /// Total number of wizard steps.
    pub const TOTAL: u8 = 4;

    /// Returns the 1-based step number.
    #[inline]
    #[must_use]
    pub const fn number(&self) -> u8 {
        *self as u8
    }

    /// Returns the following step, or `None` from the final step.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::ChooseBase => Some(Self::ChooseAddons),
            Self::ChooseAddons => Some(Self::ChooseDetails),
            Self::ChooseDetails => Some(Self::ChooseContract),
            Self::ChooseContract => None,
        }
    }

    /// Returns the preceding step, or `None` from the first step.
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::ChooseBase => None,
            Self::ChooseAddons => Some(Self::ChooseBase),
            Self::ChooseDetails => Some(Self::ChooseAddons),
            Self::ChooseContract => Some(Self::ChooseDetails),
        }
    }

    /// Returns true for the first step.
    #[inline]
    #[must_use]
    pub const fn is_first(&self) -> bool {
        matches!(self, Self::ChooseBase)
    }

    /// Returns true for the final step.
    #[inline]
    #[must_use]
    pub const fn is_final(&self) -> bool {
        matches!(self, Self::ChooseContract)
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ChooseBase => "choose-base",
            Self::ChooseAddons => "choose-addons",
            Self::ChooseDetails => "choose-details",
            Self::ChooseContract => "choose-contract",
        };
        write!(f, "{s}")
    }
}

/// Error returned when converting an out-of-range number to a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidWizardStepError(
    /// The out-of-range step number.
    pub u8,
);

impl fmt::Display for InvalidWizardStepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "step number must be within [1, {}], got {}",
            WizardStep::TOTAL,
            self.0
        )
    }
}

impl std::error::Error for InvalidWizardStepError {}

impl TryFrom<u8> for WizardStep {
    type Error = InvalidWizardStepError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::ChooseBase),
            2 => Ok(Self::ChooseAddons),
            3 => Ok(Self::ChooseDetails),
            4 => Ok(Self::ChooseContract),
            _ => Err(InvalidWizardStepError(value)),
        }
    }
}
