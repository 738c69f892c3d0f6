//! # Rates and Surcharges
//!
//! Fractional modifiers applied to the recurring subtotal.
//!
//! Two distinct fraction types keep the pricing rules honest:
//!
//! - [`DiscountRate`]: a contract-term discount in `[0, 1]`, applied to the
//!   subtotal.
//! - [`Surcharge`]: a non-negative percentage markup carried by a detail
//!   option (company size, locations). Surcharges are never discounts, which
//!   is what keeps the combined price modifier at `>= 1`.
//!
//! # Examples
//!
//! ```
//! use craft_quote::domain::value_objects::{DiscountRate, Surcharge};
//! use rust_decimal::Decimal;
//!
//! let annual = DiscountRate::new(Decimal::new(10, 2)).unwrap();
//! assert_eq!(annual.get(), Decimal::new(10, 2));
//!
//! let medium_company = Surcharge::new(Decimal::new(10, 2)).unwrap();
//! assert_eq!(medium_company.factor(), Decimal::new(110, 2));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contract-term discount as a fraction in `[0, 1]`.
///
/// # Invariants
///
/// - `0 <= rate <= 1`, which together with one rounding per field gives
///   `0 <= discount <= subtotal` for every snapshot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DiscountRate(Decimal);

impl DiscountRate {
    /// Creates a discount rate.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRate`] if `rate` is outside `[0, 1]`.
    pub fn new(rate: Decimal) -> DomainResult<Self> {
        if rate.is_sign_negative() || rate > Decimal::ONE {
            return Err(DomainError::invalid_rate(format!(
                "discount rate must be within [0, 1], got {rate}"
            )));
        }
        Ok(Self(rate))
    }

    /// The zero discount (monthly contracts).
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the fraction.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Decimal {
        self.0
    }

    /// Returns true if this rate discounts nothing.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.0 * Decimal::ONE_HUNDRED).normalize())
    }
}

/// A non-negative percentage surcharge carried by a detail option.
///
/// A surcharge of `0.10` raises the affected amounts by ten percent via its
/// [`factor`](Self::factor) of `1.10`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Surcharge(Decimal);

impl Surcharge {
    /// Creates a surcharge.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRate`] if `value` is negative.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::invalid_rate(format!(
                "surcharge must not be negative, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// The neutral surcharge.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the fraction.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Decimal {
        self.0
    }

    /// Returns the multiplicative factor `1 + surcharge`.
    #[inline]
    #[must_use]
    pub fn factor(&self) -> Decimal {
        Decimal::ONE + self.0
    }
}

impl fmt::Display for Surcharge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}%", (self.0 * Decimal::ONE_HUNDRED).normalize())
    }
}
