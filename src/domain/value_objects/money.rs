//! # Money Value Object
//!
//! Non-negative currency amounts in whole display units.
//!
//! All catalog prices and derived pricing figures are monthly (or one-time)
//! amounts in whole euros; no fractional cents appear on the wire. Interim
//! arithmetic runs on [`rust_decimal::Decimal`] and is rounded exactly once
//! per derived field via [`RoundingMode`].
//!
//! # Examples
//!
//! ```
//! use craft_quote::domain::value_objects::{Money, RoundingMode};
//! use rust_decimal::Decimal;
//!
//! let subtotal = Money::from_units(898)
//!     .scaled(Decimal::new(110, 2), RoundingMode::HalfAwayFromZero)
//!     .unwrap();
//! assert_eq!(subtotal, Money::from_units(988));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rounding mode applied when deriving pricing fields.
///
/// The observed pricing rules are ambiguous between round-half-away-from-zero
/// and banker's rounding, so the mode is explicit and configurable rather
/// than baked in. [`HalfAwayFromZero`](Self::HalfAwayFromZero) is the default
/// and matches the canonical rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// Round halves away from zero (`987.5 -> 988`).
    #[default]
    HalfAwayFromZero,
    /// Banker's rounding: round halves to the nearest even unit.
    HalfEven,
}

impl RoundingMode {
    /// Maps this mode to the decimal rounding strategy.
    #[must_use]
    pub fn strategy(&self) -> RoundingStrategy {
        match self {
            Self::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HalfAwayFromZero => write!(f, "half-away-from-zero"),
            Self::HalfEven => write!(f, "half-even"),
        }
    }
}

/// A non-negative currency amount.
///
/// # Invariants
///
/// - Never negative
/// - Whole display units after rounding (constructors accept any
///   non-negative decimal; derived fields round before storing)
///
/// # Examples
///
/// ```
/// use craft_quote::domain::value_objects::Money;
///
/// let a = Money::from_units(599);
/// let b = Money::from_units(299);
/// assert_eq!(a.checked_add(b).unwrap(), Money::from_units(898));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a money amount from a decimal.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] if `amount` is negative.
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::invalid_amount(format!(
                "amount must not be negative, got {amount}"
            )));
        }
        Ok(Self(amount))
    }

    /// Creates a money amount from whole display units.
    #[must_use]
    pub fn from_units(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    /// The zero amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the inner decimal amount.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Adds two amounts.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] on decimal overflow.
    pub fn checked_add(self, rhs: Self) -> DomainResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or_else(|| DomainError::invalid_amount("overflow in addition"))
    }

    /// Subtracts an amount, rejecting negative results.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] if `rhs` exceeds `self`.
    pub fn checked_sub(self, rhs: Self) -> DomainResult<Self> {
        let result = self
            .0
            .checked_sub(rhs.0)
            .ok_or_else(|| DomainError::invalid_amount("underflow in subtraction"))?;
        Self::new(result)
    }

    /// Multiplies by a factor and rounds to whole units.
    ///
    /// Rounding happens exactly once, here, so callers never compound
    /// roundings across re-derivations.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] on overflow or if the factor
    /// would produce a negative amount.
    pub fn scaled(self, factor: Decimal, mode: RoundingMode) -> DomainResult<Self> {
        let product = self
            .0
            .checked_mul(factor)
            .ok_or_else(|| DomainError::invalid_amount("overflow in multiplication"))?;
        Self::new(product.round_dp_with_strategy(0, mode.strategy()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\u{20ac}", self.0)
    }
}
