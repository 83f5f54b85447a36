//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};

/// Floating-point percentage.
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
pub struct Percent(Decimal);

impl Percent {
    /// Zero [`Percent`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Percent`] by checking the provided values is
    /// not less than `0` and not greater than `100`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        (Decimal::ZERO..=Decimal::ONE_HUNDRED)
            .contains(&val)
            .then_some(Self(val))
    }

    /// Creates a new [`Percent`] from the provided whole number.
    ///
    /// [`None`] is returned if `val` is greater than `100`.
    #[must_use]
    pub fn whole(val: u8) -> Option<Self> {
        Self::new(Decimal::from(val))
    }

    /// Returns the inner [`Decimal`] value of this [`Percent`].
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Calculates this [`Percent`] of the provided `amount`, without any
    /// rounding.
    ///
    /// Saturates only if the result itself overflows.
    #[must_use]
    pub fn of(self, amount: Decimal) -> Decimal {
        (self.0 / Decimal::ONE_HUNDRED).saturating_mul(amount)
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let val = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(val).ok_or_else(|| {
            de::Error::custom(format!("`{val}` is not within `0..=100`"))
        })
    }
}
