//! [`Command`] for unpublishing a [`Listing`].

use common::DateTime;
use derive_more::{Display, Error};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        listing::{self, Status},
        Listing,
    },
    Service,
};

use super::Command;

/// [`Command`] for hiding a published [`Listing`] from guests.
#[derive(Clone, Debug)]
pub struct UnpublishListing {
    /// [`Listing`] to be unpublished.
    pub listing: Listing,
}

impl Command<UnpublishListing> for Service {
    type Ok = Listing;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: UnpublishListing) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UnpublishListing { mut listing } = cmd;

        if listing.status != Status::Active {
            return Err(tracerr::new!(E::NotActive(listing.id, listing.status)));
        }

        listing.status = Status::Inactive;
        listing.updated_at = DateTime::now().coerce();
        log::info!("`Listing(id: {})` unpublished", listing.id);

        Ok(listing)
    }
}

/// Error of [`UnpublishListing`] [`Command`] execution.
#[derive(Debug, Display, Error)]
pub enum ExecutionError {
    /// [`Listing`] is not published.
    #[display("`Listing(id: {_0})` is not active, but {_1}")]
    NotActive(
        #[error(not(source))] listing::Id,
        #[error(not(source))] Status,
    ),
}

#[cfg(test)]
mod spec {
    use common::Handler as _;

    use crate::{
        domain::{
            listing::{Draft, Status},
            Listing,
        },
        Config, Service,
    };

    use super::{ExecutionError, UnpublishListing};

    #[test]
    fn hides_active_listing() {
        let service = Service::new(Config::default());
        let mut listing = Listing::new(Draft::default());
        listing.status = Status::Active;

        let hidden = service.execute(UnpublishListing { listing }).unwrap();

        assert_eq!(hidden.status, Status::Inactive);
        assert!(!hidden.is_public());
    }

    #[test]
    fn rejects_draft_listing() {
        let service = Service::new(Config::default());
        let listing = Listing::new(Draft::default());

        let err = service
            .execute(UnpublishListing {
                listing: listing.clone(),
            })
            .unwrap_err();

        let ExecutionError::NotActive(id, status) = err.as_ref();
        assert_eq!(*id, listing.id);
        assert_eq!(*status, Status::Draft);
    }
}
