//! Application provides command line interface for interacting with the
//! [`Service`].

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod args;
pub mod config;
pub mod error;

use std::{fs, io, path::Path};

use common::Handler as _;
use serde::{de::DeserializeOwned, Serialize};
use service::{
    command::{PublishListing, SaveListingDraft, UnpublishListing},
    domain::{
        booking::Stay,
        listing::{Draft, Errors, PublishGate},
        Listing,
    },
    query::{CheckPublishGate, QuoteBooking, ValidateListing},
    Service,
};
use tracing as log;
// Used in binary.
use tracing_subscriber as _;

use self::{args::Cmd, error::InputError};

pub use self::{
    args::Args,
    config::Config,
    error::{AsError, Error},
};

/// Report of the [`Cmd::Validate`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Blocking [`Errors`] of the draft.
    pub errors: Errors,

    /// [`PublishGate`] checks of the draft.
    pub publish_gate: PublishGate,
}

/// Executes the provided [`Cmd`] with the [`Service`], writing its JSON
/// result into the `out`put.
///
/// # Errors
///
/// - If the input cannot be read or decoded.
/// - If the [`Cmd`] execution is rejected by the [`Service`].
/// - If the result cannot be written.
pub fn run(
    service: &Service,
    cmd: Cmd,
    out: impl io::Write,
) -> Result<(), Error> {
    match cmd {
        Cmd::Validate { draft } => {
            let draft = read_json::<Draft>(&draft)?;
            let errors = service
                .execute(ValidateListing { draft: &draft })
                .unwrap_or_else(|e| match e {});
            let publish_gate = service
                .execute(CheckPublishGate { draft: &draft })
                .unwrap_or_else(|e| match e {});
            write_json(
                out,
                &ValidationReport {
                    errors,
                    publish_gate,
                },
            )
        }
        Cmd::Publish { draft } => {
            let draft = read_json::<Draft>(&draft)?;
            let listing = service
                .execute(SaveListingDraft {
                    listing: None,
                    draft,
                })
                .map_err(AsError::into_error)?;
            let listing = service
                .execute(PublishListing { listing })
                .map_err(AsError::into_error)?;
            write_json(out, &listing)
        }
        Cmd::Unpublish { listing } => {
            let listing = read_json::<Listing>(&listing)?;
            let listing = service
                .execute(UnpublishListing { listing })
                .map_err(AsError::into_error)?;
            write_json(out, &listing)
        }
        Cmd::Quote(args::Quote {
            price,
            cleaning_fee,
            check_in,
            check_out,
            nights,
        }) => {
            let quote = service
                .execute(QuoteBooking {
                    price_per_night: price,
                    stay: Stay {
                        check_in: check_in.map(common::DateTime::coerce),
                        check_out: check_out.map(common::DateTime::coerce),
                    },
                    fallback_nights: nights,
                    cleaning_fee,
                })
                .unwrap_or_else(|e| match e {});
            write_json(out, &quote)
        }
    }
}

/// Reads a JSON document from the file at the provided `path`, or from
/// stdin if the `path` is `-`.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    let input = if path == Path::new("-") {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    }
    .map_err(|e| {
        log::error!("failed to read `{}`: {e}", path.display());
        InputError::Read
    })?;

    serde_json::from_str(&input).map_err(|e| {
        log::error!("failed to decode `{}`: {e}", path.display());
        InputError::Malformed.into()
    })
}

/// Writes the provided `value` into the `out`put as a pretty-printed JSON.
fn write_json(
    mut out: impl io::Write,
    value: &impl Serialize,
) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut out, value)
        .map_err(io::Error::from)
        .and_then(|()| writeln!(out))
        .map_err(|e| {
            log::error!("failed to write output: {e}");
            InputError::Write.into()
        })
}
