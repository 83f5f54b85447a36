//! Booking [`PriceQuote`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{money::round_to_unit, unit, Currency, DateTimeOf, Money, Percent};
use derive_more::{Display, Error};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

/// Default service fee charged on top of a stay subtotal.
pub const SERVICE_FEE_PERCENT: u8 = 10;

/// Default long-stay discount tiers as `(min_nights, percent)` pairs: two,
/// four and twelve whole weeks.
pub const LONG_STAY_DISCOUNTS: [(i64, u8); 3] = [(14, 5), (28, 10), (84, 20)];

/// Stay of a guest, as selected in a booking form.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stay {
    /// [`DateTime`] of the check-in, if selected.
    #[serde(with = "common::datetime::serde::rfc3339::option")]
    pub check_in: Option<CheckInDateTime>,

    /// [`DateTime`] of the check-out, if selected.
    #[serde(with = "common::datetime::serde::rfc3339::option")]
    pub check_out: Option<CheckOutDateTime>,
}

impl Stay {
    /// Returns the number of nights of this [`Stay`], if both of its dates
    /// are selected.
    ///
    /// Every started day counts as a whole night. Check-out dates preceding
    /// check-in ones are not rejected and produce a negative number.
    #[must_use]
    pub fn nights(&self) -> Option<i64> {
        let (check_in, check_out) = self.check_in.zip(self.check_out)?;
        let elapsed = check_out.since(&check_in);
        let days = elapsed.whole_days();
        Some(if elapsed > time::Duration::days(days) {
            days + 1
        } else {
            days
        })
    }
}

/// [`DateTime`] of a [`Stay`] check-in.
pub type CheckInDateTime = DateTimeOf<(Stay, unit::CheckIn)>;

/// [`DateTime`] of a [`Stay`] check-out.
pub type CheckOutDateTime = DateTimeOf<(Stay, unit::CheckOut)>;

/// Discount applied to stays of at least [`DiscountTier::min_nights`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DiscountTier {
    /// Minimal number of nights this [`DiscountTier`] applies from.
    pub min_nights: i64,

    /// Discount [`Percent`] of this [`DiscountTier`].
    pub percent: Percent,
}

/// Step function mapping a number of nights to a discount [`Percent`].
///
/// Tiers are sorted by their thresholds, so exactly one of them (or none)
/// applies to any number of nights.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DiscountTiers(Vec<DiscountTier>);

impl DiscountTiers {
    /// Creates new [`DiscountTiers`] out of the provided [`DiscountTier`]s in
    /// any order.
    ///
    /// # Errors
    ///
    /// - If two [`DiscountTier`]s share the same threshold.
    /// - If a longer stay would be discounted less than a shorter one.
    pub fn new(
        tiers: impl IntoIterator<Item = DiscountTier>,
    ) -> Result<Self, TiersError> {
        let mut tiers = tiers.into_iter().collect::<Vec<_>>();
        tiers.sort_by_key(|t| t.min_nights);

        for pair in tiers.windows(2) {
            let [lower, upper] = pair else { continue };
            if lower.min_nights == upper.min_nights {
                return Err(TiersError::DuplicateThreshold(upper.min_nights));
            }
            if upper.percent < lower.percent {
                return Err(TiersError::Decreasing(upper.min_nights));
            }
        }

        Ok(Self(tiers))
    }

    /// Returns the discount [`Percent`] for a stay of the provided `nights`.
    ///
    /// Stays shorter than the lowest threshold get [`Percent::ZERO`].
    #[must_use]
    pub fn percent_for(&self, nights: i64) -> Percent {
        self.0
            .iter()
            .rev()
            .find(|t| nights >= t.min_nights)
            .map_or(Percent::ZERO, |t| t.percent)
    }

    /// Returns the sorted [`DiscountTier`]s.
    #[must_use]
    pub fn as_slice(&self) -> &[DiscountTier] {
        &self.0
    }
}

impl Default for DiscountTiers {
    fn default() -> Self {
        Self(
            LONG_STAY_DISCOUNTS
                .into_iter()
                .map(|(min_nights, percent)| DiscountTier {
                    min_nights,
                    percent: Percent::whole(percent)
                        .expect("within `0..=100`"),
                })
                .collect(),
        )
    }
}

/// Error of constructing [`DiscountTiers`].
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum TiersError {
    /// Several tiers start at the same number of nights.
    #[display("several discount tiers start at {_0} nights")]
    DuplicateThreshold(#[error(not(source))] i64),

    /// Tier discounts less than a tier with a lower threshold.
    #[display("discount tier starting at {_0} nights discounts less than \
               a shorter one")]
    Decreasing(#[error(not(source))] i64),
}

/// Fees applied to every booking.
#[derive(Clone, Debug, SmartDefault)]
pub struct FeeSchedule {
    /// [`Currency`] all the prices are expressed in.
    pub currency: Currency,

    /// Service fee [`Percent`] of a stay subtotal.
    #[default(Percent::whole(SERVICE_FEE_PERCENT).expect("within `0..=100`"))]
    pub service_fee: Percent,

    /// Long-stay [`DiscountTiers`].
    pub long_stay_discounts: DiscountTiers,

    /// Number of nights assumed when a [`Stay`] has no dates selected and
    /// no other fallback is provided.
    #[default(1)]
    pub default_nights: i64,
}

impl FeeSchedule {
    /// Resolves the number of nights to quote: the ones of the [`Stay`], or
    /// the `fallback` ones, or [`FeeSchedule::default_nights`].
    #[must_use]
    pub fn nights(&self, stay: &Stay, fallback: Option<i64>) -> i64 {
        stay.nights().or(fallback).unwrap_or(self.default_nights)
    }

    /// Computes a [`PriceQuote`] of the provided number of `nights`.
    ///
    /// Negative prices or nights are not rejected. The long-stay discount
    /// and the service fee are rounded to whole currency units separately,
    /// before being summed into the total.
    #[must_use]
    pub fn quote(
        &self,
        price_per_night: Decimal,
        nights: i64,
        cleaning_fee: Decimal,
    ) -> PriceQuote {
        let subtotal = price_per_night.saturating_mul(Decimal::from(nights));
        let discount_percent = self.long_stay_discounts.percent_for(nights);
        let long_stay_discount = round_to_unit(discount_percent.of(subtotal));
        let service_fee = round_to_unit(self.service_fee.of(subtotal));
        let total = subtotal
            .saturating_add(cleaning_fee)
            .saturating_add(service_fee)
            .saturating_sub(long_stay_discount);

        let money = |amount| Money::new(amount, self.currency);
        PriceQuote {
            nights,
            price_per_night: money(price_per_night),
            subtotal: money(subtotal),
            discount_percent,
            long_stay_discount: money(long_stay_discount),
            cleaning_fee: money(cleaning_fee),
            service_fee_percent: self.service_fee,
            service_fee: money(service_fee),
            total: money(total),
        }
    }
}

/// Itemized price a guest pays for a stay.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// Number of nights quoted.
    pub nights: i64,

    /// Price of a single night.
    pub price_per_night: Money,

    /// Price of all the nights, before any fees and discounts.
    pub subtotal: Money,

    /// Long-stay discount [`Percent`] applied.
    pub discount_percent: Percent,

    /// Long-stay discount subtracted from the total.
    pub long_stay_discount: Money,

    /// Cleaning fee added to the total.
    pub cleaning_fee: Money,

    /// Service fee [`Percent`] applied.
    pub service_fee_percent: Percent,

    /// Service fee added to the total.
    pub service_fee: Money,

    /// Total price to be paid.
    pub total: Money,
}

#[cfg(test)]
mod spec {
    use common::{DateTime, Percent};
    use rust_decimal::Decimal;

    use super::{
        DiscountTier, DiscountTiers, FeeSchedule, Stay, TiersError,
    };

    fn decimal(n: i64) -> Decimal {
        Decimal::from(n)
    }

    fn percent(n: u8) -> Percent {
        Percent::whole(n).unwrap()
    }

    fn tier(min_nights: i64, p: u8) -> DiscountTier {
        DiscountTier {
            min_nights,
            percent: percent(p),
        }
    }

    fn stay(check_in: &str, check_out: &str) -> Stay {
        Stay {
            check_in: Some(DateTime::from_rfc3339(check_in).unwrap().coerce()),
            check_out: Some(
                DateTime::from_rfc3339(check_out).unwrap().coerce(),
            ),
        }
    }

    /// Schedule discounting 10% from 12 nights on.
    fn twelve_nights_schedule() -> FeeSchedule {
        FeeSchedule {
            long_stay_discounts: DiscountTiers::new([tier(12, 10)]).unwrap(),
            ..FeeSchedule::default()
        }
    }

    #[test]
    fn quotes_short_stay() {
        let quote =
            twelve_nights_schedule().quote(decimal(100), 10, decimal(20));

        assert_eq!(quote.nights, 10);
        assert_eq!(quote.subtotal.amount, decimal(1000));
        assert_eq!(quote.discount_percent, Percent::ZERO);
        assert_eq!(quote.long_stay_discount.amount, decimal(0));
        assert_eq!(quote.service_fee.amount, decimal(100));
        assert_eq!(quote.cleaning_fee.amount, decimal(20));
        assert_eq!(quote.total.amount, decimal(1120));
    }

    #[test]
    fn quotes_long_stay() {
        let quote =
            twelve_nights_schedule().quote(decimal(100), 14, decimal(20));

        assert_eq!(quote.subtotal.amount, decimal(1400));
        assert_eq!(quote.discount_percent, percent(10));
        assert_eq!(quote.long_stay_discount.amount, decimal(140));
        assert_eq!(quote.service_fee.amount, decimal(140));
        assert_eq!(quote.total.amount, decimal(1420));
    }

    #[test]
    fn rounds_components_before_summing() {
        let schedule = FeeSchedule {
            long_stay_discounts: DiscountTiers::new([tier(1, 5)]).unwrap(),
            ..FeeSchedule::default()
        };

        let quote = schedule.quote(decimal(333), 1, Decimal::ZERO);

        // 16.65 and 33.3 respectively.
        assert_eq!(quote.long_stay_discount.amount, decimal(17));
        assert_eq!(quote.service_fee.amount, decimal(33));
        assert_eq!(quote.total.amount, decimal(349));
        assert_ne!(quote.total.amount, decimal(350));
    }

    #[test]
    fn applies_default_weekly_tiers() {
        let tiers = DiscountTiers::default();

        for (nights, expected) in [
            (0, 0),
            (1, 0),
            (13, 0),
            (14, 5),
            (27, 5),
            (28, 10),
            (83, 10),
            (84, 20),
            (365, 20),
        ] {
            assert_eq!(tiers.percent_for(nights), percent(expected), "{nights}");
        }
    }

    #[test]
    fn uses_default_service_fee() {
        let quote = FeeSchedule::default().quote(decimal(50_000), 3, decimal(0));

        assert_eq!(quote.service_fee_percent, percent(10));
        assert_eq!(quote.service_fee.amount, decimal(15_000));
        assert_eq!(quote.total.amount, decimal(165_000));
    }

    #[test]
    fn builds_tiers_in_any_order() {
        let tiers = DiscountTiers::new([tier(28, 10), tier(14, 5)]).unwrap();

        assert_eq!(tiers.as_slice(), &[tier(14, 5), tier(28, 10)]);
        assert_eq!(DiscountTiers::new([]).unwrap().percent_for(100), Percent::ZERO);
    }

    #[test]
    fn rejects_invalid_tiers() {
        assert_eq!(
            DiscountTiers::new([tier(14, 5), tier(14, 10)]),
            Err(TiersError::DuplicateThreshold(14)),
        );
        assert_eq!(
            DiscountTiers::new([tier(14, 10), tier(28, 5)]),
            Err(TiersError::Decreasing(28)),
        );
    }

    #[test]
    fn counts_started_days_as_nights() {
        assert_eq!(
            stay("2026-10-01T00:00:00Z", "2026-10-04T00:00:00Z").nights(),
            Some(3),
        );
        assert_eq!(
            stay("2026-10-01T15:00:00Z", "2026-10-04T11:00:00Z").nights(),
            Some(3),
        );
        assert_eq!(
            stay("2026-10-01T11:00:00Z", "2026-10-04T11:00:00.001Z").nights(),
            Some(4),
        );
    }

    #[test]
    fn keeps_inverted_stays_negative() {
        let inverted = stay("2026-10-04T00:00:00Z", "2026-10-01T00:00:00Z");
        assert_eq!(inverted.nights(), Some(-3));

        let same = stay("2026-10-04T00:00:00Z", "2026-10-04T00:00:00Z");
        assert_eq!(same.nights(), Some(0));

        let schedule = FeeSchedule::default();
        let quote = schedule.quote(
            decimal(100),
            schedule.nights(&inverted, None),
            decimal(20),
        );
        assert_eq!(quote.subtotal.amount, decimal(-300));
        assert_eq!(quote.service_fee.amount, decimal(-30));
        assert_eq!(quote.total.amount, decimal(-310));
    }

    #[test]
    fn falls_back_without_dates() {
        let schedule = FeeSchedule {
            default_nights: 2,
            ..FeeSchedule::default()
        };
        let half = Stay {
            check_out: stay("2026-10-01T00:00:00Z", "2026-10-05T00:00:00Z")
                .check_out,
            ..Stay::default()
        };

        assert_eq!(half.nights(), None);
        assert_eq!(schedule.nights(&half, Some(7)), 7);
        assert_eq!(schedule.nights(&Stay::default(), None), 2);
        assert_eq!(
            schedule.nights(
                &stay("2026-10-01T00:00:00Z", "2026-10-05T00:00:00Z"),
                Some(7),
            ),
            4,
        );
    }

    #[test]
    fn prices_huge_amounts_exactly() {
        let huge: Decimal = "10000000000000000000000000000".parse().unwrap();

        let quote = FeeSchedule::default().quote(huge, 1, Decimal::ZERO);

        assert_eq!(
            quote.service_fee.amount,
            "1000000000000000000000000000".parse::<Decimal>().unwrap(),
        );
        assert_eq!(
            quote.total.amount,
            "11000000000000000000000000000".parse::<Decimal>().unwrap(),
        );
    }

    #[test]
    fn is_deterministic() {
        let schedule = FeeSchedule::default();

        assert_eq!(
            schedule.quote(decimal(77_777), 30, decimal(5_000)),
            schedule.quote(decimal(77_777), 30, decimal(5_000)),
        );
    }
}
