//! [`Command`] for saving a [`Draft`] of a [`Listing`].

use common::DateTime;
use derive_more::{Display, Error};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        listing::{Draft, Errors},
        Listing,
    },
    Service,
};

use super::Command;

/// [`Command`] for saving a [`Draft`] of a [`Listing`].
///
/// Only blocking validation is applied: the saved [`Listing`] keeps its
/// status, and a new one is always a draft.
#[derive(Clone, Debug)]
pub struct SaveListingDraft {
    /// Existing [`Listing`] to save the [`Draft`] into.
    ///
    /// A new [`Listing`] is created if [`None`].
    pub listing: Option<Listing>,

    /// [`Draft`] to be saved.
    pub draft: Draft,
}

impl Command<SaveListingDraft> for Service {
    type Ok = Listing;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: SaveListingDraft) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SaveListingDraft { listing, draft } = cmd;

        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(tracerr::new!(E::Invalid(errors)));
        }

        let Some(mut listing) = listing else {
            let listing = Listing::new(draft);
            log::info!("`Listing(id: {})` created", listing.id);
            return Ok(listing);
        };

        if listing.draft == draft {
            return Ok(listing);
        }

        listing.draft = draft;
        listing.updated_at = DateTime::now().coerce();
        log::info!("`Listing(id: {})` saved", listing.id);

        Ok(listing)
    }
}

/// Error of [`SaveListingDraft`] [`Command`] execution.
#[derive(Debug, Display, Error)]
pub enum ExecutionError {
    /// [`Draft`] has blocking validation [`Errors`].
    #[display("`Draft` is invalid: {_0}")]
    Invalid(#[error(not(source))] Errors),
}

#[cfg(test)]
mod spec {
    use std::collections::BTreeSet;

    use common::Handler as _;

    use crate::{
        domain::listing::{
            draft::{AccommodationType, Photo, PhotoCategory, UsageType},
            validation::{ErrorKind, Field},
            Draft, Status,
        },
        Config, Service,
    };

    use super::{ExecutionError, SaveListingDraft};

    fn saveable_draft() -> Draft {
        let mut draft = Draft {
            room_name: "Loft by the park".to_owned(),
            address: "3 Park Ln".to_owned(),
            accommodation_type: Some(AccommodationType::SharedHouse),
            usage_types: BTreeSet::from([UsageType::ShortTerm]),
            main_photos: vec![PhotoCategory {
                photos: vec![Photo::default()],
                ..PhotoCategory::default()
            }],
            ..Draft::default()
        };
        draft.space.rooms.room = 1;
        draft.space.capacity = 1;
        draft
    }

    #[test]
    fn creates_draft_listing() {
        let service = Service::new(Config::default());

        let listing = service
            .execute(SaveListingDraft {
                listing: None,
                draft: saveable_draft(),
            })
            .unwrap();

        assert_eq!(listing.status, Status::Draft);
        assert_eq!(listing.draft, saveable_draft());
        assert!(listing.published_at.is_none());
        assert!(!listing.is_public());
    }

    #[test]
    fn saves_without_introduction_and_price() {
        let service = Service::new(Config::default());
        let draft = saveable_draft();
        assert!(!draft.publish_gate().can_publish());

        assert!(service
            .execute(SaveListingDraft {
                listing: None,
                draft,
            })
            .is_ok());
    }

    #[test]
    fn updates_existing_listing() {
        let service = Service::new(Config::default());
        let listing = service
            .execute(SaveListingDraft {
                listing: None,
                draft: saveable_draft(),
            })
            .unwrap();

        let mut draft = saveable_draft();
        draft.room_name = "Loft by the lake".to_owned();
        let saved = service
            .execute(SaveListingDraft {
                listing: Some(listing.clone()),
                draft: draft.clone(),
            })
            .unwrap();

        assert_eq!(saved.id, listing.id);
        assert_eq!(saved.draft, draft);
        assert_eq!(saved.created_at, listing.created_at);
        assert!(saved.updated_at >= listing.updated_at);
    }

    #[test]
    fn rejects_invalid_draft() {
        let service = Service::new(Config::default());
        let draft = Draft {
            room_name: " ".to_owned(),
            ..saveable_draft()
        };

        let err = service
            .execute(SaveListingDraft {
                listing: None,
                draft,
            })
            .unwrap_err();

        let ExecutionError::Invalid(errors) = err.as_ref();
        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            vec![(Field::RoomName, ErrorKind::RoomNameRequired)],
        );
    }
}
