//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::{prelude::ToPrimitive as _, Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::define_kind;

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] of the provided `amount` in the provided
    /// [`Currency`].
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        match amount.is_integer().then(|| amount.to_i128()).flatten() {
            Some(whole) => write!(f, "{whole}{currency}"),
            None => write!(f, "{}{currency}", amount.normalize()),
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 4 || !s.is_char_boundary(s.len() - 3) {
            return Err("too short");
        }

        let (amount, currency) = s.split_at(s.len() - 3);
        let amount = Decimal::from_str(amount).map_err(|_| "invalid amount")?;
        let currency =
            Currency::from_str(currency).map_err(|_| "invalid currency")?;

        Ok(Self { amount, currency })
    }
}

/// Rounds the provided `amount` to whole currency units, resolving midpoints
/// towards positive infinity (`floor(amount + 0.5)`).
///
/// Negative midpoints therefore round up: `-2.5` becomes `-2`.
#[must_use]
pub fn round_to_unit(amount: Decimal) -> Decimal {
    amount
        .saturating_add(Decimal::new(5, 1))
        .round_dp_with_strategy(0, RoundingStrategy::ToNegativeInfinity)
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "South Korean Won."]
        #[code = "KRW"]
        Krw,

        #[doc = "US Dollar."]
        #[code = "USD"]
        Usd,

        #[doc = "Japanese Yen."]
        #[code = "JPY"]
        Jpy,

        #[doc = "Chinese Yuan."]
        #[code = "CNY"]
        Cny,

        #[doc = "Euro."]
        #[code = "EUR"]
        Eur,
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::Krw
    }
}
