//! [`Query`] for quoting a booking.

use std::convert::Infallible;

use rust_decimal::Decimal;
use tracing as log;

#[cfg(doc)]
use crate::domain::booking::FeeSchedule;
use crate::{
    domain::booking::{PriceQuote, Stay},
    Service,
};

use super::Query;

/// [`Query`] computing a [`PriceQuote`] with the [`FeeSchedule`] of the
/// [`Service`].
#[derive(Clone, Copy, Debug)]
pub struct QuoteBooking {
    /// Price of a single night.
    pub price_per_night: Decimal,

    /// [`Stay`] to quote.
    pub stay: Stay,

    /// Number of nights to quote if the [`Stay`] has no dates selected.
    ///
    /// [`FeeSchedule::default_nights`] is used if [`None`].
    pub fallback_nights: Option<i64>,

    /// One-time cleaning fee.
    pub cleaning_fee: Decimal,
}

impl Query<QuoteBooking> for Service {
    type Ok = PriceQuote;
    type Err = Infallible;

    fn execute(&self, query: QuoteBooking) -> Result<Self::Ok, Self::Err> {
        let QuoteBooking {
            price_per_night,
            stay,
            fallback_nights,
            cleaning_fee,
        } = query;

        let fees = &self.config().fees;
        let nights = fees.nights(&stay, fallback_nights);
        if nights <= 0 {
            log::warn!("quoting a `Stay` of {nights} nights");
        }

        Ok(fees.quote(price_per_night, nights, cleaning_fee))
    }
}
