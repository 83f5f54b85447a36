//! [`Args`] definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use common::{datetime::ParseError, DateTime};
use rust_decimal::Decimal;

/// Listing validation and booking price calculator of the rental
/// marketplace.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// [`Cmd`] to run.
    #[command(subcommand)]
    pub cmd: Cmd,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Command to run.
#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Reports validation errors and publish gate checks of a listing draft.
    Validate {
        /// JSON file with the listing draft, or `-` for stdin.
        #[arg(value_name = "FILE")]
        draft: PathBuf,
    },

    /// Saves a listing draft and publishes it.
    Publish {
        /// JSON file with the listing draft, or `-` for stdin.
        #[arg(value_name = "FILE")]
        draft: PathBuf,
    },

    /// Takes a published listing down.
    Unpublish {
        /// JSON file with the listing, or `-` for stdin.
        #[arg(value_name = "FILE")]
        listing: PathBuf,
    },

    /// Quotes the price of a booking.
    Quote(Quote),
}

/// Arguments of the [`Cmd::Quote`].
#[derive(Clone, Debug, clap::Args)]
pub struct Quote {
    /// Price of a single night.
    #[arg(long, allow_negative_numbers = true)]
    pub price: Decimal,

    /// One-time cleaning fee.
    #[arg(long, default_value = "0")]
    pub cleaning_fee: Decimal,

    /// Check-in date (`YYYY-MM-DD` or RFC 3339).
    #[arg(long, value_parser = parse_date, requires = "check_out")]
    pub check_in: Option<DateTime>,

    /// Check-out date (`YYYY-MM-DD` or RFC 3339).
    #[arg(long, value_parser = parse_date, requires = "check_in")]
    pub check_out: Option<DateTime>,

    /// Number of nights to quote when no dates are given.
    #[arg(long, allow_negative_numbers = true)]
    pub nights: Option<i64>,
}

/// Parses a [`DateTime`] either from a calendar date (taken at midnight
/// UTC) or from an [RFC 3339] string.
///
/// [RFC 3339]: https://tools.ietf.org/html/rfc3339
fn parse_date(s: &str) -> Result<DateTime, ParseError> {
    DateTime::from_rfc3339(s)
        .or_else(|_| DateTime::from_rfc3339(&format!("{s}T00:00:00Z")))
}

#[cfg(test)]
mod spec {
    use clap::Parser as _;
    use common::DateTime;
    use rust_decimal::Decimal;

    use super::{Args, Cmd};

    #[test]
    fn parses_quote() {
        let args = Args::try_parse_from([
            "listing",
            "quote",
            "--price",
            "100",
            "--cleaning-fee",
            "20",
            "--check-in",
            "2026-10-01",
            "--check-out",
            "2026-10-15T11:00:00+09:00",
        ])
        .unwrap();

        assert_eq!(args.config, "config.toml");
        let Cmd::Quote(quote) = args.cmd else {
            panic!("expected `quote`, got: {:?}", args.cmd);
        };
        assert_eq!(quote.price, Decimal::from(100));
        assert_eq!(quote.cleaning_fee, Decimal::from(20));
        assert_eq!(
            quote.check_in,
            Some(DateTime::from_rfc3339("2026-10-01T00:00:00Z").unwrap()),
        );
        assert_eq!(
            quote.check_out,
            Some(DateTime::from_rfc3339("2026-10-15T02:00:00Z").unwrap()),
        );
        assert_eq!(quote.nights, None);
    }

    #[test]
    fn requires_both_dates() {
        assert!(Args::try_parse_from([
            "listing",
            "quote",
            "--price",
            "100",
            "--check-in",
            "2026-10-01",
        ])
        .is_err());
    }

    #[test]
    fn parses_validate() {
        let args = Args::try_parse_from([
            "listing",
            "--config",
            "prod.toml",
            "validate",
            "draft.json",
        ])
        .unwrap();

        assert_eq!(args.config, "prod.toml");
        assert!(
            matches!(args.cmd, Cmd::Validate { draft } if draft.ends_with("draft.json"))
        );
    }
}
