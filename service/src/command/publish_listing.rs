//! [`Command`] for publishing a [`Listing`].

use common::DateTime;
use derive_more::{Display, Error};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::listing::PublishGate;
use crate::{
    domain::{
        listing::{self, Failures, Status},
        Listing,
    },
    Service,
};

use super::Command;

/// [`Command`] for publishing a [`Listing`], making it visible to guests.
///
/// The [`PublishGate`] of the [`Listing`]'s draft must be fully passed.
#[derive(Clone, Debug)]
pub struct PublishListing {
    /// [`Listing`] to be published.
    pub listing: Listing,
}

impl Command<PublishListing> for Service {
    type Ok = Listing;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: PublishListing) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let PublishListing { mut listing } = cmd;

        if listing.status == Status::Active {
            return Ok(listing);
        }

        let gate = listing.draft.publish_gate();
        if !gate.can_publish() {
            return Err(tracerr::new!(E::PublishGateNotPassed(
                listing.id,
                gate.to_failures(),
            )));
        }

        let now = DateTime::now();
        listing.status = Status::Active;
        listing.updated_at = now.coerce();
        _ = listing.published_at.replace(now.coerce());
        log::info!("`Listing(id: {})` published", listing.id);

        Ok(listing)
    }
}

/// Error of [`PublishListing`] [`Command`] execution.
#[derive(Debug, Display, Error)]
pub enum ExecutionError {
    /// [`PublishGate`] of the [`Listing`] is not passed.
    #[display("`Listing(id: {_0})` cannot be published, failed checks: {_1}")]
    PublishGateNotPassed(
        #[error(not(source))] listing::Id,
        #[error(not(source))] Failures,
    ),
}
