//! [`Config`]-related definitions.

use common::{Currency, Percent};
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::domain::booking::{
    self, DiscountTier, DiscountTiers, FeeSchedule, TiersError,
};
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Pricing configuration.
    #[serde(default)]
    pub pricing: Pricing,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Pricing configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Pricing {
    /// [`Currency`] all the prices are expressed in.
    pub currency: Currency,

    /// Service fee charged on top of a stay subtotal.
    #[default(Percent::whole(booking::SERVICE_FEE_PERCENT).unwrap_or_default())]
    pub service_fee_percent: Percent,

    /// Number of nights quoted when no dates are selected.
    #[default(1)]
    pub default_nights: i64,

    /// Long-stay discount tiers, in any order.
    #[default(DiscountTiers::default().as_slice().to_vec())]
    pub long_stay_discounts: Vec<DiscountTier>,
}

impl TryFrom<Pricing> for service::Config {
    type Error = TiersError;

    fn try_from(value: Pricing) -> Result<Self, Self::Error> {
        let Pricing {
            currency,
            service_fee_percent,
            default_nights,
            long_stay_discounts,
        } = value;

        Ok(Self {
            fees: FeeSchedule {
                currency,
                service_fee: service_fee_percent,
                long_stay_discounts: DiscountTiers::new(long_stay_discounts)?,
                default_nights,
            },
        })
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    Info,

    /// Designates hazardous situations.
    #[default]
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
